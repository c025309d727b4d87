//! # ⚛️ qsv-state — Motor de Statevector QSV
//!
//! Mantém e transforma o vetor de 2^n amplitudes complexas de um sistema
//! de n qubits. Gates são aplicados in-place por aritmética de bitmask,
//! nunca por produto tensorial completo.
//!
//! ## Computational Complexity
//!
//! **Gate de 1 qubit — O(N), N = 2^n:**
//! - Pareia amplitudes que diferem apenas no bit do qubit alvo
//! - O(1) de espaço extra por aplicação
//!
//! **CNOT / SWAP — O(N):**
//! - Permutações puras, troca de amplitudes sem combinação linear
//!
//! **Medição — O(N):**
//! - Acumula probabilidades, sorteia, zera e reescala
//!
//! **Escalabilidade:**
//! - n ≤ 20: ✓ Excelente
//! - 20 < n ≤ 24: △ Monitorar memória (16M amplitudes)
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │               StateVector                       │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  amplitudes: Vec<Complex> (2^n)           │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  apply_single / apply_controlled          │  │
//! │  │  apply_cnot / apply_swap (permutações)    │  │
//! │  │  apply_two_qubit / apply_three_qubit      │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  measure / measure_all (RNG injetado)     │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! Todo sorteio passa por um `&mut impl rand::Rng` injetado: nenhum
//! gerador global, testes determinísticos, amostragem paralela segura.
//!
//! ## Exemplo
//!
//! ```
//! use qsv_state::StateVector;
//! use qsv_core::prelude::*;
//! use std::f64::consts::FRAC_1_SQRT_2;
//!
//! let h = Matrix2::from_reals([
//!     [FRAC_1_SQRT_2, FRAC_1_SQRT_2],
//!     [FRAC_1_SQRT_2, -FRAC_1_SQRT_2],
//! ]);
//!
//! let mut sv = StateVector::new(2);
//! sv.apply_single(&h, 0).unwrap();
//! sv.apply_cnot(0, 1).unwrap();
//! assert!(sv.is_normalized(EPSILON));
//! ```

pub mod error;
pub mod statevector;

pub use error::{StateError, StateResult};
pub use statevector::{BasisState, Measurement, Outcome, StateVector};
