//! # ⚛️ qsv-gates — Catálogo de Gates QSV
//!
//! Tabela fixa de matrizes unitárias (1, 2 e 3 qubits) + construtores de
//! rotação parametrizados. As tabelas são estáticas, somente-leitura,
//! construídas uma única vez (`once_cell::sync::Lazy`) — seguras para
//! leitura concorrente sem sincronização.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                  qsv-gates                      │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  GateKind (variante fechada, nomes wire)  │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  single: I X Y Z H S S† T T† √X + Rx Ry   │  │
//! │  │          Rz P                             │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  multi: CNOT CZ SWAP iSWAP √SWAP          │  │
//! │  │         TOFFOLI FREDKIN (referência)      │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! As matrizes densas de 2 e 3 qubits existem para referência e testes
//! cruzados; o motor de execução aplica CNOT/CZ/Toffoli por decomposição.
//!
//! ## Exemplo
//!
//! ```
//! use qsv_gates::{GateKind, single};
//! use qsv_core::prelude::*;
//!
//! assert_eq!(GateKind::Ccx.arity(), 3);
//! assert!(single::H.is_unitary(EPSILON));
//!
//! let m = single::single_matrix(GateKind::Rx, &[std::f64::consts::PI]).unwrap();
//! assert!(m.is_unitary(EPSILON));
//! ```

pub mod error;
pub mod kind;
pub mod multi;
pub mod single;

pub use error::{GateError, GateResult};
pub use kind::GateKind;
pub use single::{phase, rx, ry, rz, single_matrix};
