//! # Gates de 1 Qubit — Tabela Fixa + Rotações
//!
//! Matrizes 2×2 construídas uma vez no primeiro acesso e nunca mais
//! modificadas. Construtores `rx`/`ry`/`rz`/`phase` produzem uma matriz
//! nova por chamada (dependem do ângulo).

use crate::error::{GateError, GateResult};
use crate::kind::GateKind;
use once_cell::sync::Lazy;
use qsv_core::prelude::*;
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};

/// Identidade
pub static I: Lazy<Matrix2> = Lazy::new(Matrix2::identity);

/// Pauli-X (NOT quântico)
pub static X: Lazy<Matrix2> = Lazy::new(|| Matrix2::from_reals([[0.0, 1.0], [1.0, 0.0]]));

/// Pauli-Y
pub static Y: Lazy<Matrix2> = Lazy::new(|| {
    Matrix2::from_elements([
        [Complex::ZERO, Complex::new(0.0, -1.0)],
        [Complex::I, Complex::ZERO],
    ])
});

/// Pauli-Z (phase flip)
pub static Z: Lazy<Matrix2> = Lazy::new(|| Matrix2::from_reals([[1.0, 0.0], [0.0, -1.0]]));

/// Hadamard (cria superposição)
pub static H: Lazy<Matrix2> = Lazy::new(|| {
    Matrix2::from_reals([
        [FRAC_1_SQRT_2, FRAC_1_SQRT_2],
        [FRAC_1_SQRT_2, -FRAC_1_SQRT_2],
    ])
});

/// S (√Z)
pub static S: Lazy<Matrix2> = Lazy::new(|| {
    Matrix2::from_elements([[Complex::ONE, Complex::ZERO], [Complex::ZERO, Complex::I]])
});

/// S† (S-dagger)
pub static SDG: Lazy<Matrix2> = Lazy::new(|| S.dagger());

/// T (√S)
pub static T: Lazy<Matrix2> = Lazy::new(|| {
    Matrix2::from_elements([
        [Complex::ONE, Complex::ZERO],
        [Complex::ZERO, Complex::from_polar(1.0, FRAC_PI_4)],
    ])
});

/// T† (T-dagger)
pub static TDG: Lazy<Matrix2> = Lazy::new(|| T.dagger());

/// √X
pub static SX: Lazy<Matrix2> = Lazy::new(|| {
    Matrix2::from_elements([
        [Complex::new(0.5, 0.5), Complex::new(0.5, -0.5)],
        [Complex::new(0.5, -0.5), Complex::new(0.5, 0.5)],
    ])
});

/// Rotação em X: `[[cos(θ/2), -i·sin(θ/2)], [-i·sin(θ/2), cos(θ/2)]]`
pub fn rx(theta: f64) -> Matrix2 {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    Matrix2::from_elements([
        [Complex::new(c, 0.0), Complex::new(0.0, -s)],
        [Complex::new(0.0, -s), Complex::new(c, 0.0)],
    ])
}

/// Rotação em Y: `[[cos(θ/2), -sin(θ/2)], [sin(θ/2), cos(θ/2)]]`
pub fn ry(theta: f64) -> Matrix2 {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    Matrix2::from_reals([[c, -s], [s, c]])
}

/// Rotação em Z: `[[e^{-iθ/2}, 0], [0, e^{iθ/2}]]`
pub fn rz(theta: f64) -> Matrix2 {
    let half = theta / 2.0;
    Matrix2::from_elements([
        [Complex::from_polar(1.0, -half), Complex::ZERO],
        [Complex::ZERO, Complex::from_polar(1.0, half)],
    ])
}

/// Fase genérica: `[[1, 0], [0, e^{iφ}]]`
pub fn phase(phi: f64) -> Matrix2 {
    Matrix2::from_elements([
        [Complex::ONE, Complex::ZERO],
        [Complex::ZERO, Complex::from_polar(1.0, phi)],
    ])
}

/// Resolve um `GateKind` de 1 qubit (+ parâmetros) para sua matriz 2×2.
///
/// Gates parametrizados exigem exatamente `param_count()` ângulos;
/// gates multi-qubit e `MEASURE` não têm matriz 2×2.
pub fn single_matrix(kind: GateKind, params: &[f64]) -> GateResult<Matrix2> {
    let check_params = |expected: usize| -> GateResult<()> {
        if params.len() != expected {
            return Err(GateError::MissingParameter {
                gate: kind.name(),
                expected,
                got: params.len(),
            });
        }
        Ok(())
    };

    match kind {
        GateKind::I => Ok(*I),
        GateKind::X => Ok(*X),
        GateKind::Y => Ok(*Y),
        GateKind::Z => Ok(*Z),
        GateKind::H => Ok(*H),
        GateKind::S => Ok(*S),
        GateKind::Sdg => Ok(*SDG),
        GateKind::T => Ok(*T),
        GateKind::Tdg => Ok(*TDG),
        GateKind::Sx => Ok(*SX),
        GateKind::Rx => {
            check_params(1)?;
            Ok(rx(params[0]))
        }
        GateKind::Ry => {
            check_params(1)?;
            Ok(ry(params[0]))
        }
        GateKind::Rz => {
            check_params(1)?;
            Ok(rz(params[0]))
        }
        GateKind::P => {
            check_params(1)?;
            Ok(phase(params[0]))
        }
        GateKind::Cx | GateKind::Cz | GateKind::Swap | GateKind::Ccx | GateKind::Measure => {
            Err(GateError::NotSingleQubit(kind.name()))
        }
    }
}
