//! # GateOperation — Operação Nomeada sobre Qubits
//!
//! Forma wire: `{ "name": "Rx", "qubits": [0], "params": [1.57] }`.
//! `params` é omitido quando vazio e aceito quando ausente.

use crate::error::{CircuitError, CircuitResult};
use qsv_gates::GateKind;
use serde::{Deserialize, Serialize};

/// Uma operação de gate: tipo + qubits + parâmetros angulares
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateOperation {
    /// Tipo do gate (nome wire em JSON)
    #[serde(rename = "name")]
    pub kind: GateKind,
    /// Índices de qubit, em ordem (controles antes de alvos)
    pub qubits: Vec<usize>,
    /// Ângulos, na ordem exigida pelo gate
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<f64>,
}

impl GateOperation {
    /// Cria operação
    pub fn new(kind: GateKind, qubits: Vec<usize>, params: Vec<f64>) -> Self {
        Self {
            kind,
            qubits,
            params,
        }
    }

    /// Valida aridade, contagem de parâmetros, faixa e unicidade dos
    /// qubits contra um circuito de `num_qubits` qubits.
    pub fn validate(&self, num_qubits: usize) -> CircuitResult<()> {
        let gate = self.kind.name();

        let expected = self.kind.arity();
        if self.qubits.len() != expected {
            return Err(CircuitError::WrongArity {
                gate,
                expected,
                got: self.qubits.len(),
            });
        }

        let expected = self.kind.param_count();
        if self.params.len() != expected {
            return Err(CircuitError::MissingParameter {
                gate,
                expected,
                got: self.params.len(),
            });
        }

        for (i, &qubit) in self.qubits.iter().enumerate() {
            if qubit >= num_qubits {
                return Err(CircuitError::InvalidQubit {
                    gate,
                    qubit,
                    num_qubits,
                });
            }
            if self.qubits[i + 1..].contains(&qubit) {
                return Err(CircuitError::DuplicateQubit { gate, qubit });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        let op = GateOperation::new(GateKind::Ccx, vec![0, 1, 2], vec![]);
        assert!(op.validate(3).is_ok());
    }

    #[test]
    fn test_validate_wrong_arity() {
        let op = GateOperation::new(GateKind::Cx, vec![0], vec![]);
        assert!(matches!(
            op.validate(2),
            Err(CircuitError::WrongArity {
                gate: "CX",
                expected: 2,
                got: 1
            })
        ));
    }

    #[test]
    fn test_validate_missing_parameter() {
        let op = GateOperation::new(GateKind::Rx, vec![0], vec![]);
        assert!(matches!(
            op.validate(1),
            Err(CircuitError::MissingParameter {
                gate: "Rx",
                expected: 1,
                got: 0
            })
        ));
    }

    #[test]
    fn test_validate_out_of_range() {
        let op = GateOperation::new(GateKind::H, vec![3], vec![]);
        assert!(matches!(
            op.validate(2),
            Err(CircuitError::InvalidQubit { qubit: 3, .. })
        ));
    }

    #[test]
    fn test_validate_duplicate_qubit() {
        let op = GateOperation::new(GateKind::Swap, vec![1, 1], vec![]);
        assert!(matches!(
            op.validate(2),
            Err(CircuitError::DuplicateQubit { qubit: 1, .. })
        ));
    }

    #[test]
    fn test_wire_form_omits_empty_params() {
        let op = GateOperation::new(GateKind::H, vec![0], vec![]);
        let json = serde_json::to_string(&op).unwrap();
        assert_eq!(json, r#"{"name":"H","qubits":[0]}"#);

        let back: GateOperation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, op);
    }

    #[test]
    fn test_wire_form_keeps_params() {
        let op = GateOperation::new(GateKind::Rz, vec![1], vec![0.5]);
        let json = serde_json::to_string(&op).unwrap();
        assert_eq!(json, r#"{"name":"Rz","qubits":[1],"params":[0.5]}"#);
    }
}
