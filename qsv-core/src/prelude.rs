//! Re-exportações dos itens mais usados

pub use crate::complex::{Complex, EPSILON};
pub use crate::matrix::{Matrix, Matrix2, Matrix4, Matrix8};
