//! Tipos de erro para qsv-circuit

use qsv_gates::GateError;
use qsv_state::StateError;
use thiserror::Error;

/// Resultado customizado para operações de circuito
pub type CircuitResult<T> = Result<T, CircuitError>;

/// Erros de construção, importação e execução de circuitos.
///
/// Todos são detectados na fronteira (validação em `run`/`sample`/import),
/// nunca como corrupção de amplitudes a jusante. Todos são locais e
/// recuperáveis.
#[derive(Debug, Error)]
pub enum CircuitError {
    #[error("gate {gate}: qubit {qubit} out of range (circuit has {num_qubits} qubit(s))")]
    InvalidQubit {
        gate: &'static str,
        qubit: usize,
        num_qubits: usize,
    },

    #[error("gate {gate}: qubit {qubit} used more than once")]
    DuplicateQubit { gate: &'static str, qubit: usize },

    #[error("gate {gate}: expects {expected} qubit(s), got {got}")]
    WrongArity {
        gate: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("gate {gate}: requires exactly {expected} parameter(s), got {got}")]
    MissingParameter {
        gate: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("unsupported qubit count {0}: supported range is 1..=24")]
    UnsupportedQubitCount(usize),

    #[error("malformed circuit JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Gate(#[from] GateError),
}
