//! # Gates de 2 e 3 Qubits — Matrizes Densas de Referência
//!
//! Expostas para testes cruzados e inspeção. O motor de execução nunca
//! multiplica por estas matrizes: CNOT e SWAP são permutações
//! especializadas, CZ e Toffoli são decompostos em sequências de gates de
//! 1 qubit + CNOT. Ambos os caminhos devem concordar em toda base
//! computacional.
//!
//! Convenção de índice: bit 0 do índice da matriz = primeiro qubit do
//! gate (alvo, para gates controlados); bits superiores = controles.

use once_cell::sync::Lazy;
use qsv_core::prelude::*;

/// CNOT (Controlled-X): bit 1 = controle, bit 0 = alvo
pub static CNOT: Lazy<Matrix4> = Lazy::new(|| {
    Matrix4::from_reals([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
        [0.0, 0.0, 1.0, 0.0],
    ])
});

/// Controlled-Z (diagonal, simétrica nos dois qubits)
pub static CZ: Lazy<Matrix4> = Lazy::new(|| {
    Matrix4::from_reals([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, -1.0],
    ])
});

/// SWAP
pub static SWAP: Lazy<Matrix4> = Lazy::new(|| {
    Matrix4::from_reals([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
});

/// iSWAP
pub static ISWAP: Lazy<Matrix4> = Lazy::new(|| {
    Matrix4::from_elements([
        [Complex::ONE, Complex::ZERO, Complex::ZERO, Complex::ZERO],
        [Complex::ZERO, Complex::ZERO, Complex::I, Complex::ZERO],
        [Complex::ZERO, Complex::I, Complex::ZERO, Complex::ZERO],
        [Complex::ZERO, Complex::ZERO, Complex::ZERO, Complex::ONE],
    ])
});

/// √SWAP
pub static SQSWAP: Lazy<Matrix4> = Lazy::new(|| {
    let p = Complex::new(0.5, 0.5);
    let m = Complex::new(0.5, -0.5);
    Matrix4::from_elements([
        [Complex::ONE, Complex::ZERO, Complex::ZERO, Complex::ZERO],
        [Complex::ZERO, p, m, Complex::ZERO],
        [Complex::ZERO, m, p, Complex::ZERO],
        [Complex::ZERO, Complex::ZERO, Complex::ZERO, Complex::ONE],
    ])
});

/// Permutação de base: identidade com as linhas `a` e `b` trocadas
fn permutation8(a: usize, b: usize) -> Matrix8 {
    let mut m = Matrix8::identity();
    m.elements.swap(a, b);
    m
}

/// Toffoli (CCX): bits 2 e 1 = controles, bit 0 = alvo — troca |110⟩ ↔ |111⟩
pub static TOFFOLI: Lazy<Matrix8> = Lazy::new(|| permutation8(6, 7));

/// Fredkin (CSWAP): bit 2 = controle — troca |101⟩ ↔ |110⟩
pub static FREDKIN: Lazy<Matrix8> = Lazy::new(|| permutation8(5, 6));
