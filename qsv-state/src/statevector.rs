//! # StateVector — Vetor de Amplitudes 2^n
//!
//! Estado quântico completo de `n` qubits: 2^n amplitudes complexas
//! indexadas pelo inteiro de base. O bit `q` do índice é o valor clássico
//! do qubit `q` (qubit 0 = bit menos significativo).
//!
//! ## Aplicação de gates por bitmask
//!
//! Um gate de 1 qubit age como identidade em todos os bits exceto `q`:
//! basta parear as amplitudes que diferem apenas no bit `q` e aplicar a
//! matriz 2×2 a cada par. Custo O(N) por gate, O(1) de espaço extra —
//! nunca se materializa o produto tensorial N×N.
//!
//! Invariante: soma dos módulos ao quadrado ≈ 1 entre gates (cada gate é
//! unitário, logo preserva a norma).

use crate::error::{StateError, StateResult};
use qsv_core::prelude::*;
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Resultado de medição de 1 qubit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    /// Valor medido (0 ou 1)
    pub result: u8,
    /// Probabilidade do valor medido
    pub probability: f64,
}

/// Resultado de medição de todos os qubits
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    /// Bitstring MSB-primeiro, zero-padded (qubit 0 = caractere mais à direita)
    pub bitstring: String,
    /// Probabilidade do índice de base escolhido
    pub probability: f64,
}

/// Linha de visualização: amplitude + rótulo de base + probabilidade
#[derive(Debug, Clone, Serialize)]
pub struct BasisState {
    pub amplitude: Complex,
    pub basis: String,
    pub probability: f64,
}

/// Vetor de estado de `num_qubits` qubits
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex>,
}

impl StateVector {
    /// Cria estado |0…0⟩: amplitude 1 no índice 0
    pub fn new(num_qubits: usize) -> Self {
        let size = 1usize << num_qubits;
        let mut amplitudes = vec![Complex::ZERO; size];
        amplitudes[0] = Complex::ONE;
        Self {
            num_qubits,
            amplitudes,
        }
    }

    /// Cria a partir de amplitudes arbitrárias (comprimento deve ser 2^n)
    pub fn from_amplitudes(num_qubits: usize, amplitudes: Vec<Complex>) -> StateResult<Self> {
        let expected = 1usize << num_qubits;
        if amplitudes.len() != expected {
            return Err(StateError::DimensionMismatch {
                expected,
                got: amplitudes.len(),
            });
        }
        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Número de qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Dimensão do espaço de base (2^n)
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Amplitudes em ordem de índice de base
    pub fn amplitudes(&self) -> &[Complex] {
        &self.amplitudes
    }

    /// Amplitude do índice de base `index`.
    ///
    /// # Panics
    ///
    /// Se `index >= dimension()`.
    pub fn amplitude(&self, index: usize) -> Complex {
        self.amplitudes[index]
    }

    /// Probabilidade do índice de base `index`.
    ///
    /// # Panics
    ///
    /// Se `index >= dimension()`.
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes[index].norm_sq()
    }

    /// Todas as probabilidades
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sq()).collect()
    }

    /// Norma do vetor (√ da soma dos módulos ao quadrado)
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sq())
            .sum::<f64>()
            .sqrt()
    }

    /// Verifica normalização
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() < epsilon
    }

    fn check_qubit(&self, qubit: usize) -> StateResult<()> {
        if qubit >= self.num_qubits {
            return Err(StateError::InvalidQubit {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    fn check_distinct(qubits: &[usize]) -> StateResult<()> {
        for (i, &q) in qubits.iter().enumerate() {
            if qubits[i + 1..].contains(&q) {
                return Err(StateError::DuplicateQubit { qubit: q });
            }
        }
        Ok(())
    }

    // =========================================================================
    // Aplicação de gates
    // =========================================================================

    /// Aplica gate 2×2 ao qubit `qubit`, in-place
    pub fn apply_single(&mut self, gate: &Matrix2, qubit: usize) -> StateResult<()> {
        self.check_qubit(qubit)?;
        let mask = 1usize << qubit;
        let [[g00, g01], [g10, g11]] = gate.elements;

        for i0 in 0..self.dimension() {
            if i0 & mask == 0 {
                let i1 = i0 | mask;
                let a0 = self.amplitudes[i0];
                let a1 = self.amplitudes[i1];
                self.amplitudes[i0] = g00.mul(a0).add(g01.mul(a1));
                self.amplitudes[i1] = g10.mul(a0).add(g11.mul(a1));
            }
        }
        Ok(())
    }

    /// Aplica gate 2×2 ao `target` apenas onde o bit de `control` é 1
    pub fn apply_controlled(
        &mut self,
        gate: &Matrix2,
        control: usize,
        target: usize,
    ) -> StateResult<()> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        Self::check_distinct(&[control, target])?;
        let cmask = 1usize << control;
        let tmask = 1usize << target;
        let [[g00, g01], [g10, g11]] = gate.elements;

        for i0 in 0..self.dimension() {
            if i0 & cmask != 0 && i0 & tmask == 0 {
                let i1 = i0 | tmask;
                let a0 = self.amplitudes[i0];
                let a1 = self.amplitudes[i1];
                self.amplitudes[i0] = g00.mul(a0).add(g01.mul(a1));
                self.amplitudes[i1] = g10.mul(a0).add(g11.mul(a1));
            }
        }
        Ok(())
    }

    /// CNOT especializado: permutação pura, troca amplitudes em vez de
    /// combiná-las linearmente
    pub fn apply_cnot(&mut self, control: usize, target: usize) -> StateResult<()> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        Self::check_distinct(&[control, target])?;
        let cmask = 1usize << control;
        let tmask = 1usize << target;

        for i in 0..self.dimension() {
            if i & cmask != 0 && i & tmask == 0 {
                let j = i | tmask;
                self.amplitudes.swap(i, j);
            }
        }
        Ok(())
    }

    /// SWAP: troca amplitudes cujos bits `q1` e `q2` diferem, visitando
    /// cada par exatamente uma vez (guarda `i < j`)
    pub fn apply_swap(&mut self, q1: usize, q2: usize) -> StateResult<()> {
        self.check_qubit(q1)?;
        self.check_qubit(q2)?;
        Self::check_distinct(&[q1, q2])?;
        let mask = (1usize << q1) | (1usize << q2);

        for i in 0..self.dimension() {
            let b1 = (i >> q1) & 1;
            let b2 = (i >> q2) & 1;
            if b1 != b2 {
                let j = i ^ mask;
                if i < j {
                    self.amplitudes.swap(i, j);
                }
            }
        }
        Ok(())
    }

    /// Aplica matriz 4×4 densa aos qubits (`q0`, `q1`).
    ///
    /// O bit 0 do índice do gate vem de `q0`, o bit 1 de `q1`. Caminho de
    /// referência para validar as especializações e decomposições.
    pub fn apply_two_qubit(&mut self, gate: &Matrix4, q0: usize, q1: usize) -> StateResult<()> {
        self.check_qubit(q0)?;
        self.check_qubit(q1)?;
        Self::check_distinct(&[q0, q1])?;
        let m0 = 1usize << q0;
        let m1 = 1usize << q1;

        for i in 0..self.dimension() {
            if i & m0 == 0 && i & m1 == 0 {
                let idx = [i, i | m0, i | m1, i | m0 | m1];
                let input = idx.map(|k| self.amplitudes[k]);
                let output = gate.apply(input);
                for (k, &pos) in idx.iter().enumerate() {
                    self.amplitudes[pos] = output[k];
                }
            }
        }
        Ok(())
    }

    /// Aplica matriz 8×8 densa aos qubits (`q0`, `q1`, `q2`).
    ///
    /// Bit k do índice do gate vem de `qk`. Para o Toffoli de referência,
    /// `q0` é o alvo e `q1`/`q2` os controles.
    pub fn apply_three_qubit(
        &mut self,
        gate: &Matrix8,
        q0: usize,
        q1: usize,
        q2: usize,
    ) -> StateResult<()> {
        self.check_qubit(q0)?;
        self.check_qubit(q1)?;
        self.check_qubit(q2)?;
        Self::check_distinct(&[q0, q1, q2])?;
        let masks = [1usize << q0, 1usize << q1, 1usize << q2];
        let free = masks[0] | masks[1] | masks[2];

        for i in 0..self.dimension() {
            if i & free == 0 {
                let mut idx = [0usize; 8];
                for (k, slot) in idx.iter_mut().enumerate() {
                    let mut pos = i;
                    for (b, &mask) in masks.iter().enumerate() {
                        if k & (1 << b) != 0 {
                            pos |= mask;
                        }
                    }
                    *slot = pos;
                }
                let input = idx.map(|k| self.amplitudes[k]);
                let output = gate.apply(input);
                for (k, &pos) in idx.iter().enumerate() {
                    self.amplitudes[pos] = output[k];
                }
            }
        }
        Ok(())
    }

    // =========================================================================
    // Medição (colapso probabilístico)
    // =========================================================================

    /// Mede um qubit e colapsa o estado.
    ///
    /// Sorteia o resultado pela probabilidade acumulada do bit 0, zera as
    /// amplitudes inconsistentes e reescala as sobreviventes por `1/√p`.
    /// Probabilidade nula do resultado escolhido é erro explícito, nunca
    /// propagação de NaN.
    pub fn measure(&mut self, qubit: usize, rng: &mut impl Rng) -> StateResult<Measurement> {
        self.check_qubit(qubit)?;
        let mask = 1usize << qubit;

        let prob0: f64 = self
            .amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask == 0)
            .map(|(_, a)| a.norm_sq())
            .sum();

        let r: f64 = rng.r#gen();
        let (result, probability) = if r < prob0 {
            (0u8, prob0)
        } else {
            (1u8, 1.0 - prob0)
        };

        if probability <= 0.0 {
            return Err(StateError::DegenerateMeasurement { qubit, probability });
        }

        let scale = 1.0 / probability.sqrt();
        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            if ((i >> qubit) & 1) as u8 != result {
                *amp = Complex::ZERO;
            } else {
                *amp = amp.scale(scale);
            }
        }

        Ok(Measurement {
            result,
            probability,
        })
    }

    /// Mede todos os qubits e colapsa para um único estado de base.
    ///
    /// Caminha a distribuição cumulativa em ordem de índice; se o
    /// arredondamento deixar a soma aquém de `r`, cai no último índice
    /// (terminação garantida).
    pub fn measure_all(&mut self, rng: &mut impl Rng) -> Outcome {
        let r: f64 = rng.r#gen();
        let mut cumulative = 0.0;
        let mut selected = self.dimension() - 1;

        for (i, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sq();
            if r < cumulative {
                selected = i;
                break;
            }
        }

        let probability = self.probability(selected);
        let bitstring = self.basis_label(selected);

        for (i, amp) in self.amplitudes.iter_mut().enumerate() {
            *amp = if i == selected {
                Complex::ONE
            } else {
                Complex::ZERO
            };
        }

        Outcome {
            bitstring,
            probability,
        }
    }

    // =========================================================================
    // Visualização
    // =========================================================================

    /// Bitstring do índice de base, MSB primeiro, zero-padded
    pub fn basis_label(&self, index: usize) -> String {
        format!("{:0width$b}", index, width = self.num_qubits)
    }

    /// Estado como lista de {amplitude, rótulo de base, probabilidade}
    pub fn to_array(&self) -> Vec<BasisState> {
        self.amplitudes
            .iter()
            .enumerate()
            .map(|(i, &amplitude)| BasisState {
                amplitude,
                basis: format!("|{}⟩", self.basis_label(i)),
                probability: amplitude.norm_sq(),
            })
            .collect()
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            if amp.norm_sq() > 1e-10 {
                if !first {
                    write!(f, " + ")?;
                }
                write!(f, "({})|{}⟩", amp, self.basis_label(i))?;
                first = false;
            }
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
