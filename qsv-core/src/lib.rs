//! # ⚛️ qsv-core — Núcleo Numérico QSV
//!
//! Aritmética complexa e matrizes unitárias de dimensão fixa para
//! simulação de circuitos quânticos por statevector.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                  qsv-core                       │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Complex (f64 × f64, imutável)            │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Matrix<N> (N×N complexa, N = 2, 4, 8)    │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! Toda operação sobre `Complex` retorna um novo valor; igualdade é sempre
//! por epsilon (`EPSILON = 1e-10`), porque rotações e fases nunca produzem
//! igualdade bit a bit.
//!
//! ## Exemplo
//!
//! ```
//! use qsv_core::prelude::*;
//!
//! let z = Complex::from_polar(1.0, std::f64::consts::FRAC_PI_4);
//! assert!((z.abs() - 1.0).abs() < EPSILON);
//!
//! let h = Matrix2::from_elements([
//!     [Complex::new(std::f64::consts::FRAC_1_SQRT_2, 0.0), Complex::new(std::f64::consts::FRAC_1_SQRT_2, 0.0)],
//!     [Complex::new(std::f64::consts::FRAC_1_SQRT_2, 0.0), Complex::new(-std::f64::consts::FRAC_1_SQRT_2, 0.0)],
//! ]);
//! assert!(h.is_unitary(EPSILON));
//! ```

pub mod complex;
pub mod matrix;
pub mod prelude;

pub use complex::{Complex, EPSILON};
pub use matrix::{Matrix, Matrix2, Matrix4, Matrix8};
