//! Tipos de erro para qsv-gates

use thiserror::Error;

/// Resultado customizado para resolução de gates
pub type GateResult<T> = Result<T, GateError>;

/// Erros de resolução de gate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("gate {gate} requires exactly {expected} parameter(s), got {got}")]
    MissingParameter {
        gate: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("gate {0} has no single-qubit matrix")]
    NotSingleQubit(&'static str),
}
