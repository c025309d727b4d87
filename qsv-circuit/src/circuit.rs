//! # Circuit — Construção Fluente e Replay
//!
//! Lista ordenada de operações sobre um número fixo de qubits. Os métodos
//! de construção mutam a lista e devolvem `&mut Self` para encadeamento;
//! nenhuma validação acontece no append — `run`, `sample` e `from_json`
//! validam o programa inteiro antes de tocar em qualquer amplitude.
//!
//! `run()` sempre aloca um StateVector novo e faz replay de todas as
//! operações; nunca muta um estado devolvido anteriormente. O estado
//! cacheado é consultivo (visualização) e é invalidado por `reset()` ou
//! por qualquer append.

use crate::error::{CircuitError, CircuitResult};
use crate::executor;
use crate::operation::GateOperation;
use qsv_gates::GateKind;
use qsv_state::StateVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Limite de qubits: 2^24 amplitudes ≈ 256 MiB de estado
pub const MAX_QUBITS: usize = 24;

/// Contagens de medição agregadas por bitstring
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleResult {
    /// Bitstring → número de shots que a produziram
    pub counts: BTreeMap<String, u64>,
    /// Total de shots executados
    pub shots: usize,
}

/// Circuito quântico: operações ordenadas sobre `num_qubits` qubits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circuit {
    num_qubits: usize,
    operations: Vec<GateOperation>,
    /// Estado do último `run()` (consultivo, nunca serializado)
    #[serde(skip)]
    cached: Option<StateVector>,
}

impl Circuit {
    /// Cria circuito vazio
    pub fn new(num_qubits: usize) -> CircuitResult<Self> {
        if num_qubits == 0 || num_qubits > MAX_QUBITS {
            return Err(CircuitError::UnsupportedQubitCount(num_qubits));
        }
        Ok(Self {
            num_qubits,
            operations: Vec::new(),
            cached: None,
        })
    }

    /// Número de qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Operações em ordem de inserção
    pub fn operations(&self) -> &[GateOperation] {
        &self.operations
    }

    /// Estado do último `run()`, se houver
    pub fn state(&self) -> Option<&StateVector> {
        self.cached.as_ref()
    }

    /// Descarta operações e cache
    pub fn reset(&mut self) -> &mut Self {
        self.operations.clear();
        self.cached = None;
        self
    }

    fn push(&mut self, kind: GateKind, qubits: Vec<usize>, params: Vec<f64>) -> &mut Self {
        self.operations.push(GateOperation::new(kind, qubits, params));
        self.cached = None;
        self
    }

    // =========================================================================
    // Gates de 1 qubit
    // =========================================================================

    /// Hadamard
    pub fn h(&mut self, qubit: usize) -> &mut Self {
        self.push(GateKind::H, vec![qubit], vec![])
    }

    /// Pauli-X
    pub fn x(&mut self, qubit: usize) -> &mut Self {
        self.push(GateKind::X, vec![qubit], vec![])
    }

    /// Pauli-Y
    pub fn y(&mut self, qubit: usize) -> &mut Self {
        self.push(GateKind::Y, vec![qubit], vec![])
    }

    /// Pauli-Z
    pub fn z(&mut self, qubit: usize) -> &mut Self {
        self.push(GateKind::Z, vec![qubit], vec![])
    }

    /// S (√Z)
    pub fn s(&mut self, qubit: usize) -> &mut Self {
        self.push(GateKind::S, vec![qubit], vec![])
    }

    /// S†
    pub fn sdg(&mut self, qubit: usize) -> &mut Self {
        self.push(GateKind::Sdg, vec![qubit], vec![])
    }

    /// T (√S)
    pub fn t(&mut self, qubit: usize) -> &mut Self {
        self.push(GateKind::T, vec![qubit], vec![])
    }

    /// T†
    pub fn tdg(&mut self, qubit: usize) -> &mut Self {
        self.push(GateKind::Tdg, vec![qubit], vec![])
    }

    /// √X
    pub fn sx(&mut self, qubit: usize) -> &mut Self {
        self.push(GateKind::Sx, vec![qubit], vec![])
    }

    // =========================================================================
    // Rotações
    // =========================================================================

    /// Rotação em X
    pub fn rx(&mut self, theta: f64, qubit: usize) -> &mut Self {
        self.push(GateKind::Rx, vec![qubit], vec![theta])
    }

    /// Rotação em Y
    pub fn ry(&mut self, theta: f64, qubit: usize) -> &mut Self {
        self.push(GateKind::Ry, vec![qubit], vec![theta])
    }

    /// Rotação em Z
    pub fn rz(&mut self, theta: f64, qubit: usize) -> &mut Self {
        self.push(GateKind::Rz, vec![qubit], vec![theta])
    }

    /// Fase genérica
    pub fn p(&mut self, phi: f64, qubit: usize) -> &mut Self {
        self.push(GateKind::P, vec![qubit], vec![phi])
    }

    // =========================================================================
    // Gates de 2 e 3 qubits
    // =========================================================================

    /// CNOT (Controlled-X)
    pub fn cx(&mut self, control: usize, target: usize) -> &mut Self {
        self.push(GateKind::Cx, vec![control, target], vec![])
    }

    /// Alias de `cx`
    pub fn cnot(&mut self, control: usize, target: usize) -> &mut Self {
        self.cx(control, target)
    }

    /// Controlled-Z
    pub fn cz(&mut self, control: usize, target: usize) -> &mut Self {
        self.push(GateKind::Cz, vec![control, target], vec![])
    }

    /// SWAP
    pub fn swap(&mut self, qubit1: usize, qubit2: usize) -> &mut Self {
        self.push(GateKind::Swap, vec![qubit1, qubit2], vec![])
    }

    /// Toffoli (CCX)
    pub fn ccx(&mut self, control1: usize, control2: usize, target: usize) -> &mut Self {
        self.push(GateKind::Ccx, vec![control1, control2, target], vec![])
    }

    /// Alias de `ccx`
    pub fn toffoli(&mut self, control1: usize, control2: usize, target: usize) -> &mut Self {
        self.ccx(control1, control2, target)
    }

    // =========================================================================
    // Medição
    // =========================================================================

    /// Registra medição de um qubit (sem colapso durante `run`)
    pub fn measure(&mut self, qubit: usize) -> &mut Self {
        self.push(GateKind::Measure, vec![qubit], vec![])
    }

    /// Registra medição de todos os qubits
    pub fn measure_all(&mut self) -> &mut Self {
        for qubit in 0..self.num_qubits {
            self.measure(qubit);
        }
        self
    }

    // =========================================================================
    // Execução
    // =========================================================================

    /// Valida todas as operações contra o número de qubits
    pub fn validate(&self) -> CircuitResult<()> {
        for op in &self.operations {
            op.validate(self.num_qubits)?;
        }
        Ok(())
    }

    /// Executa o circuito e devolve o statevector final exato.
    ///
    /// Operações `MEASURE` são puladas: o resultado é o estado superposto
    /// completo. O estado devolvido também fica cacheado para consulta
    /// via [`Circuit::state`].
    pub fn run(&mut self) -> CircuitResult<StateVector> {
        self.validate()?;
        let state = executor::execute(self)?;
        self.cached = Some(state.clone());
        Ok(state)
    }

    /// Amostra o circuito `shots` vezes com seed de entropia do sistema
    pub fn sample(&self, shots: usize) -> CircuitResult<SampleResult> {
        self.sample_seeded(shots, rand::random())
    }

    /// Amostra o circuito `shots` vezes, deterministicamente a partir de
    /// `seed`. Cada shot executa o circuito do zero sobre um StateVector
    /// próprio e mede todos os qubits uma vez — shots são independentes.
    pub fn sample_seeded(&self, shots: usize, seed: u64) -> CircuitResult<SampleResult> {
        self.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut counts = BTreeMap::new();

        for _ in 0..shots {
            let mut state = executor::execute(self)?;
            let outcome = state.measure_all(&mut rng);
            *counts.entry(outcome.bitstring).or_insert(0u64) += 1;
        }

        Ok(SampleResult { counts, shots })
    }

    /// Amostra em paralelo: shots particionados entre os workers do pool
    /// rayon, cada worker com seu próprio `StdRng` derivado do seed base.
    /// Mapas de contagem privados, merge comutativo no final — nenhum
    /// estado mutável compartilhado.
    #[cfg(feature = "parallel")]
    pub fn sample_parallel(&self, shots: usize, seed: u64) -> CircuitResult<SampleResult> {
        use rayon::prelude::*;

        self.validate()?;
        let workers = rayon::current_num_threads().max(1);
        let chunk = shots.div_ceil(workers);

        let counts = (0..workers)
            .into_par_iter()
            .map(|w| {
                let begin = w * chunk;
                let end = ((w + 1) * chunk).min(shots);
                let mut rng =
                    StdRng::seed_from_u64(seed ^ (w as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
                let mut local: BTreeMap<String, u64> = BTreeMap::new();

                for _ in begin..end {
                    let mut state = executor::execute(self)?;
                    let outcome = state.measure_all(&mut rng);
                    *local.entry(outcome.bitstring).or_insert(0) += 1;
                }
                Ok(local)
            })
            .try_reduce(BTreeMap::new, |mut acc, local| {
                for (bitstring, count) in local {
                    *acc.entry(bitstring).or_insert(0) += count;
                }
                Ok(acc)
            })?;

        Ok(SampleResult { counts, shots })
    }

    /// Executa o circuito e mede todos os qubits com um RNG fornecido
    /// (um shot explícito, útil para testes determinísticos)
    pub fn run_and_measure(&self, rng: &mut impl Rng) -> CircuitResult<qsv_state::Outcome> {
        self.validate()?;
        let mut state = executor::execute(self)?;
        Ok(state.measure_all(rng))
    }

    // =========================================================================
    // Serialização
    // =========================================================================

    /// Exporta `{numQubits, operations}` como JSON
    pub fn to_json(&self) -> CircuitResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Importa circuito de JSON, validando número de qubits, aridade,
    /// parâmetros e faixa de cada operação antes de aceitar
    pub fn from_json(json: &str) -> CircuitResult<Self> {
        let circuit: Self = serde_json::from_str(json)?;
        if circuit.num_qubits == 0 || circuit.num_qubits > MAX_QUBITS {
            return Err(CircuitError::UnsupportedQubitCount(circuit.num_qubits));
        }
        circuit.validate()?;
        Ok(circuit)
    }

    // =========================================================================
    // Visualização
    // =========================================================================

    /// Diagrama ASCII do circuito (conveniência de debug)
    pub fn draw(&self) -> String {
        let mut lines: Vec<String> = (0..self.num_qubits).map(|q| format!("q{q}: ")).collect();

        for op in &self.operations {
            let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
            for line in &mut lines {
                let pad = width - line.chars().count();
                line.push_str(&"─".repeat(pad));
            }

            if op.qubits.len() == 1 {
                let label = if op.kind.is_measurement() {
                    "M"
                } else {
                    op.kind.name()
                };
                let cell = format!("[{label}]");
                let cell_width = cell.chars().count();
                for (q, line) in lines.iter_mut().enumerate() {
                    if q == op.qubits[0] {
                        line.push_str(&cell);
                    } else {
                        line.push_str(&"─".repeat(cell_width));
                    }
                }
            } else {
                let min = *op.qubits.iter().min().unwrap_or(&0);
                let max = *op.qubits.iter().max().unwrap_or(&0);
                let target = *op.qubits.last().unwrap_or(&0);
                for (q, line) in lines.iter_mut().enumerate() {
                    let glyph = if op.qubits.contains(&q) {
                        match op.kind {
                            GateKind::Swap => '×',
                            GateKind::Cz => '●',
                            _ if q == target => '⊕',
                            _ => '●',
                        }
                    } else if q > min && q < max {
                        '│'
                    } else {
                        '─'
                    };
                    line.push(glyph);
                }
            }
        }

        lines.join("\n")
    }
}
