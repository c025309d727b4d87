//! # GateKind — Vocabulário Fechado de Gates
//!
//! Cada operação de circuito referencia um `GateKind`. A variante é
//! fechada e casada exaustivamente: adicionar ou remover um gate é uma
//! mudança verificada em tempo de compilação, não um string aberto.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gate suportado (nomes do formato wire em `serde`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    /// Identidade
    I,
    /// Pauli-X (NOT quântico)
    X,
    /// Pauli-Y
    Y,
    /// Pauli-Z (phase flip)
    Z,
    /// Hadamard
    H,
    /// S (√Z)
    S,
    /// S† (S-dagger)
    Sdg,
    /// T (√S)
    T,
    /// T† (T-dagger)
    Tdg,
    /// √X
    #[serde(rename = "SX")]
    Sx,
    /// Rotação em X (1 parâmetro θ)
    Rx,
    /// Rotação em Y (1 parâmetro θ)
    Ry,
    /// Rotação em Z (1 parâmetro θ)
    Rz,
    /// Fase genérica (1 parâmetro φ)
    P,
    /// CNOT (Controlled-X)
    #[serde(rename = "CX")]
    Cx,
    /// Controlled-Z
    #[serde(rename = "CZ")]
    Cz,
    /// SWAP
    #[serde(rename = "SWAP")]
    Swap,
    /// Toffoli (CCX)
    #[serde(rename = "CCX")]
    Ccx,
    /// Medição registrada (sem colapso durante `run`)
    #[serde(rename = "MEASURE")]
    Measure,
}

impl GateKind {
    /// Quantos qubits o gate exige
    pub const fn arity(self) -> usize {
        match self {
            Self::Cx | Self::Cz | Self::Swap => 2,
            Self::Ccx => 3,
            _ => 1,
        }
    }

    /// Quantos parâmetros angulares o gate exige
    pub const fn param_count(self) -> usize {
        match self {
            Self::Rx | Self::Ry | Self::Rz | Self::P => 1,
            _ => 0,
        }
    }

    /// Nome wire do gate
    pub const fn name(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::H => "H",
            Self::S => "S",
            Self::Sdg => "Sdg",
            Self::T => "T",
            Self::Tdg => "Tdg",
            Self::Sx => "SX",
            Self::Rx => "Rx",
            Self::Ry => "Ry",
            Self::Rz => "Rz",
            Self::P => "P",
            Self::Cx => "CX",
            Self::Cz => "CZ",
            Self::Swap => "SWAP",
            Self::Ccx => "CCX",
            Self::Measure => "MEASURE",
        }
    }

    /// Resolve nome wire para `GateKind`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "I" => Some(Self::I),
            "X" => Some(Self::X),
            "Y" => Some(Self::Y),
            "Z" => Some(Self::Z),
            "H" => Some(Self::H),
            "S" => Some(Self::S),
            "Sdg" => Some(Self::Sdg),
            "T" => Some(Self::T),
            "Tdg" => Some(Self::Tdg),
            "SX" => Some(Self::Sx),
            "Rx" => Some(Self::Rx),
            "Ry" => Some(Self::Ry),
            "Rz" => Some(Self::Rz),
            "P" => Some(Self::P),
            "CX" => Some(Self::Cx),
            "CZ" => Some(Self::Cz),
            "SWAP" => Some(Self::Swap),
            "CCX" => Some(Self::Ccx),
            "MEASURE" => Some(Self::Measure),
            _ => None,
        }
    }

    /// Verifica se é uma operação de medição
    pub const fn is_measurement(self) -> bool {
        matches!(self, Self::Measure)
    }

    /// Verifica se exige parâmetro angular
    pub const fn is_parametrized(self) -> bool {
        self.param_count() > 0
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity() {
        assert_eq!(GateKind::H.arity(), 1);
        assert_eq!(GateKind::Rx.arity(), 1);
        assert_eq!(GateKind::Cx.arity(), 2);
        assert_eq!(GateKind::Swap.arity(), 2);
        assert_eq!(GateKind::Ccx.arity(), 3);
        assert_eq!(GateKind::Measure.arity(), 1);
    }

    #[test]
    fn test_param_count() {
        assert_eq!(GateKind::Rx.param_count(), 1);
        assert_eq!(GateKind::P.param_count(), 1);
        assert_eq!(GateKind::H.param_count(), 0);
        assert_eq!(GateKind::Ccx.param_count(), 0);
    }

    #[test]
    fn test_name_roundtrip() {
        let kinds = [
            GateKind::I,
            GateKind::X,
            GateKind::Y,
            GateKind::Z,
            GateKind::H,
            GateKind::S,
            GateKind::Sdg,
            GateKind::T,
            GateKind::Tdg,
            GateKind::Sx,
            GateKind::Rx,
            GateKind::Ry,
            GateKind::Rz,
            GateKind::P,
            GateKind::Cx,
            GateKind::Cz,
            GateKind::Swap,
            GateKind::Ccx,
            GateKind::Measure,
        ];
        for kind in kinds {
            assert_eq!(GateKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(GateKind::from_name("CSWAP"), None);
    }

    #[test]
    fn test_serde_wire_names() {
        assert_eq!(serde_json::to_string(&GateKind::Ccx).unwrap(), "\"CCX\"");
        assert_eq!(serde_json::to_string(&GateKind::Sx).unwrap(), "\"SX\"");
        assert_eq!(serde_json::to_string(&GateKind::Sdg).unwrap(), "\"Sdg\"");
        let back: GateKind = serde_json::from_str("\"MEASURE\"").unwrap();
        assert_eq!(back, GateKind::Measure);
    }
}
