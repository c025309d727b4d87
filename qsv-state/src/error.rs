//! Tipos de erro para qsv-state

use thiserror::Error;

/// Resultado customizado para operações sobre o statevector
pub type StateResult<T> = Result<T, StateError>;

/// Erros de aplicação de gate e medição
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StateError {
    #[error("qubit {qubit} out of range: state has {num_qubits} qubit(s)")]
    InvalidQubit { qubit: usize, num_qubits: usize },

    #[error("qubit {qubit} used more than once in the same gate")]
    DuplicateQubit { qubit: usize },

    #[error("degenerate measurement on qubit {qubit}: outcome probability {probability}")]
    DegenerateMeasurement { qubit: usize, probability: f64 },

    #[error("amplitude vector has length {got}, expected {expected}")]
    DimensionMismatch { expected: usize, got: usize },
}
