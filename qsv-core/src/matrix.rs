//! # Matrix — Matriz Complexa Quadrada
//!
//! Matriz N×N de dimensão fixa (N = 2^k para gates de k qubits).
//! Deve ser unitária: invariante de implementação, verificado nos testes
//! via [`Matrix::is_unitary`], nunca em tempo de execução.

use crate::complex::Complex;

/// Matriz N×N complexa
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<const N: usize> {
    /// Elementos em ordem linha-coluna
    pub elements: [[Complex; N]; N],
}

/// Matriz 2×2 (gates de 1 qubit)
pub type Matrix2 = Matrix<2>;
/// Matriz 4×4 (gates de 2 qubits)
pub type Matrix4 = Matrix<4>;
/// Matriz 8×8 (gates de 3 qubits)
pub type Matrix8 = Matrix<8>;

impl<const N: usize> Matrix<N> {
    /// Cria matriz a partir dos elementos
    pub const fn from_elements(elements: [[Complex; N]; N]) -> Self {
        Self { elements }
    }

    /// Matriz identidade
    pub fn identity() -> Self {
        let mut elements = [[Complex::ZERO; N]; N];
        for (i, row) in elements.iter_mut().enumerate() {
            row[i] = Complex::ONE;
        }
        Self { elements }
    }

    /// Cria matriz puramente real
    pub fn from_reals(rows: [[f64; N]; N]) -> Self {
        let mut elements = [[Complex::ZERO; N]; N];
        for i in 0..N {
            for j in 0..N {
                elements[i][j] = Complex::new(rows[i][j], 0.0);
            }
        }
        Self { elements }
    }

    /// Aplica a matriz a um vetor coluna
    pub fn apply(&self, state: [Complex; N]) -> [Complex; N] {
        let mut out = [Complex::ZERO; N];
        for i in 0..N {
            let mut acc = Complex::ZERO;
            for j in 0..N {
                acc = acc.add(self.elements[i][j].mul(state[j]));
            }
            out[i] = acc;
        }
        out
    }

    /// Multiplicação de matrizes (`self · other`)
    pub fn mul(&self, other: &Self) -> Self {
        let mut elements = [[Complex::ZERO; N]; N];
        for i in 0..N {
            for j in 0..N {
                let mut acc = Complex::ZERO;
                for k in 0..N {
                    acc = acc.add(self.elements[i][k].mul(other.elements[k][j]));
                }
                elements[i][j] = acc;
            }
        }
        Self { elements }
    }

    /// Transposta conjugada (dagger)
    pub fn dagger(&self) -> Self {
        let mut elements = [[Complex::ZERO; N]; N];
        for i in 0..N {
            for j in 0..N {
                elements[i][j] = self.elements[j][i].conj();
            }
        }
        Self { elements }
    }

    /// Igualdade por epsilon, elemento a elemento
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        for i in 0..N {
            for j in 0..N {
                if !self.elements[i][j].approx_eq(other.elements[i][j], epsilon) {
                    return false;
                }
            }
        }
        true
    }

    /// Verifica se é unitária: `M · M† ≈ I`
    pub fn is_unitary(&self, epsilon: f64) -> bool {
        self.mul(&self.dagger()).approx_eq(&Self::identity(), epsilon)
    }
}
