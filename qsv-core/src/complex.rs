//! # Complex — Número Complexo Imutável
//!
//! Valor 2D para amplitudes de probabilidade. Toda operação retorna um
//! novo valor; nada é modificado in-place.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerância padrão para comparações de ponto flutuante
pub const EPSILON: f64 = 1e-10;

/// Número complexo (parte real + parte imaginária)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    /// Cria número complexo
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Zero complexo
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// Um complexo
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    /// Unidade imaginária
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    /// Constrói a partir de forma polar: `magnitude · (cos φ, sin φ)`
    pub fn from_polar(magnitude: f64, phase: f64) -> Self {
        Self {
            re: magnitude * phase.cos(),
            im: magnitude * phase.sin(),
        }
    }

    /// Adição
    pub fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }

    /// Subtração
    pub fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }

    /// Multiplicação
    pub fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }

    /// Multiplicação por escalar
    pub fn scale(self, s: f64) -> Self {
        Self {
            re: self.re * s,
            im: self.im * s,
        }
    }

    /// Conjugado
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Módulo ao quadrado
    pub fn norm_sq(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Módulo
    pub fn abs(self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// Fase (argumento)
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Normaliza para módulo 1. Módulo zero retorna zero (caso definido,
    /// não erro — nunca divide por zero).
    pub fn normalize(self) -> Self {
        let mag = self.abs();
        if mag == 0.0 {
            return Self::ZERO;
        }
        self.scale(1.0 / mag)
    }

    /// Igualdade por epsilon em ambas as componentes
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        (self.re - other.re).abs() < epsilon && (self.im - other.im).abs() < epsilon
    }

    /// Converte para `num_complex::Complex64`
    pub fn to_num(self) -> num_complex::Complex64 {
        num_complex::Complex64::new(self.re, self.im)
    }

    /// Cria a partir de `num_complex::Complex64`
    pub fn from_num(z: num_complex::Complex64) -> Self {
        Self { re: z.re, im: z.im }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im == 0.0 {
            return write!(f, "{:.4}", self.re);
        }
        if self.re == 0.0 {
            return write!(f, "{:.4}i", self.im);
        }
        let sign = if self.im >= 0.0 { '+' } else { '-' };
        write!(f, "{:.4} {} {:.4}i", self.re, sign, self.im.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_arithmetic() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, 4.0);

        let sum = a.add(b);
        assert_eq!(sum.re, 4.0);
        assert_eq!(sum.im, 6.0);

        let diff = b.sub(a);
        assert_eq!(diff.re, 2.0);
        assert_eq!(diff.im, 2.0);

        let product = a.mul(b);
        assert_eq!(product.re, -5.0); // 1*3 - 2*4
        assert_eq!(product.im, 10.0); // 1*4 + 2*3
    }

    #[test]
    fn test_conjugate_and_norm() {
        let z = Complex::new(3.0, -4.0);
        assert_eq!(z.conj().im, 4.0);
        assert_eq!(z.norm_sq(), 25.0);
        assert_eq!(z.abs(), 5.0);
    }

    #[test]
    fn test_from_polar() {
        let z = Complex::from_polar(2.0, std::f64::consts::FRAC_PI_2);
        assert!(z.approx_eq(Complex::new(0.0, 2.0), EPSILON));
        assert!((z.arg() - std::f64::consts::FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        assert_eq!(Complex::ZERO.normalize(), Complex::ZERO);
    }

    #[test]
    fn test_normalize_unit() {
        let z = Complex::new(3.0, 4.0).normalize();
        assert!((z.abs() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_num_complex_roundtrip() {
        let z = Complex::new(0.5, -0.25);
        let back = Complex::from_num(z.to_num());
        assert!(z.approx_eq(back, EPSILON));
    }

    #[test]
    fn test_display() {
        assert_eq!(Complex::new(1.0, 0.0).to_string(), "1.0000");
        assert_eq!(Complex::new(0.0, -1.0).to_string(), "-1.0000i");
        assert_eq!(Complex::new(1.0, -1.0).to_string(), "1.0000 - 1.0000i");
    }
}
