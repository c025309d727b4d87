//! # ⚛️ qsv-circuit — Modelo de Circuito QSV
//!
//! Constrói circuitos a partir do vocabulário fixo de gates, executa-os
//! contra um statevector novo e amostra estatísticas de medição por
//! Monte Carlo.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                  Circuit                        │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  operations: Vec<GateOperation>           │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  run()  → StateVector exato (cacheado)    │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  sample(shots) → contagens por bitstring  │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//!          │ resolve nomes/params
//!          ▼
//!       qsv-gates ──── matrizes ────► qsv-state (mutação in-place)
//! ```
//!
//! O fluxo de dados é unidirecional: Circuit emite operações → qsv-gates
//! resolve para matrizes → qsv-state muta amplitudes in-place.
//!
//! Cada shot de `sample` é independente (statevector próprio, RNG
//! derivado de seed); a feature `parallel` particiona os shots entre
//! workers rayon com merge comutativo das contagens.
//!
//! ## Exemplo
//!
//! ```
//! use qsv_circuit::Circuit;
//!
//! // Estado de Bell
//! let mut circuit = Circuit::new(2).unwrap();
//! circuit.h(0).cx(0, 1);
//!
//! let state = circuit.run().unwrap();
//! // (0.7071)|00⟩ + (0.7071)|11⟩
//! assert!((state.probability(0) - 0.5).abs() < 1e-9);
//! assert!((state.probability(3) - 0.5).abs() < 1e-9);
//!
//! let result = circuit.sample_seeded(1000, 42).unwrap();
//! assert_eq!(result.shots, 1000);
//! ```

pub mod circuit;
pub mod error;
mod executor;
pub mod operation;

pub use circuit::{Circuit, MAX_QUBITS, SampleResult};
pub use error::{CircuitError, CircuitResult};
pub use operation::GateOperation;
