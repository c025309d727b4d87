//! # Executor — Replay de Operações sobre um StateVector
//!
//! Resolve cada operação para uma matriz ou rotina especializada e a
//! aplica in-place. `MEASURE` é pulado: a simulação por statevector
//! reporta o estado exato, sem colapso intermediário (modo estado-exato;
//! o colapso acontece apenas em `sample`, uma vez por shot).

use crate::circuit::Circuit;
use crate::error::CircuitResult;
use crate::operation::GateOperation;
use qsv_gates::{GateKind, single};
use qsv_state::StateVector;

/// Executa o circuito inteiro contra um StateVector recém-alocado.
///
/// Pré-condição: operações já validadas (`Circuit::validate`).
pub(crate) fn execute(circuit: &Circuit) -> CircuitResult<StateVector> {
    let mut state = StateVector::new(circuit.num_qubits());
    for op in circuit.operations() {
        apply_operation(&mut state, op)?;
    }
    Ok(state)
}

/// Aplica uma operação validada ao estado
pub(crate) fn apply_operation(state: &mut StateVector, op: &GateOperation) -> CircuitResult<()> {
    match op.kind {
        // Registrada mas não simulada durante run()
        GateKind::Measure => Ok(()),
        GateKind::Cx => {
            state.apply_cnot(op.qubits[0], op.qubits[1])?;
            Ok(())
        }
        GateKind::Cz => apply_cz(state, op.qubits[0], op.qubits[1]),
        GateKind::Swap => {
            state.apply_swap(op.qubits[0], op.qubits[1])?;
            Ok(())
        }
        GateKind::Ccx => apply_toffoli(state, op.qubits[0], op.qubits[1], op.qubits[2]),
        kind => {
            let matrix = single::single_matrix(kind, &op.params)?;
            state.apply_single(&matrix, op.qubits[0])?;
            Ok(())
        }
    }
}

/// CZ decomposto: H(alvo) · CNOT(controle, alvo) · H(alvo)
fn apply_cz(state: &mut StateVector, control: usize, target: usize) -> CircuitResult<()> {
    state.apply_single(&single::H, target)?;
    state.apply_cnot(control, target)?;
    state.apply_single(&single::H, target)?;
    Ok(())
}

/// Toffoli decomposto na sequência canônica de 15 gates.
///
/// Equivale bit a bit à matriz 8×8 densa (`qsv_gates::multi::TOFFOLI`)
/// em toda base computacional — propriedade coberta pelos testes.
fn apply_toffoli(state: &mut StateVector, c1: usize, c2: usize, t: usize) -> CircuitResult<()> {
    state.apply_single(&single::H, t)?;
    state.apply_cnot(c2, t)?;
    state.apply_single(&single::TDG, t)?;
    state.apply_cnot(c1, t)?;
    state.apply_single(&single::T, t)?;
    state.apply_cnot(c2, t)?;
    state.apply_single(&single::TDG, t)?;
    state.apply_cnot(c1, t)?;
    state.apply_single(&single::T, c2)?;
    state.apply_single(&single::T, t)?;
    state.apply_single(&single::H, t)?;
    state.apply_cnot(c1, c2)?;
    state.apply_single(&single::T, c1)?;
    state.apply_single(&single::TDG, c2)?;
    state.apply_cnot(c1, c2)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qsv_core::prelude::*;
    use qsv_gates::multi;

    fn basis_state(num_qubits: usize, index: usize) -> StateVector {
        let mut sv = StateVector::new(num_qubits);
        for q in 0..num_qubits {
            if index & (1 << q) != 0 {
                sv.apply_single(&single::X, q).unwrap();
            }
        }
        sv
    }

    #[test]
    fn test_cz_decomposition_matches_dense() {
        // H·CNOT·H == CZ densa em toda base de 2 qubits
        for input in 0..4 {
            let mut decomposed = basis_state(2, input);
            let mut dense = basis_state(2, input);

            apply_cz(&mut decomposed, 0, 1).unwrap();
            dense.apply_two_qubit(&multi::CZ, 1, 0).unwrap();

            for i in 0..4 {
                assert!(
                    decomposed.amplitude(i).approx_eq(dense.amplitude(i), 1e-9),
                    "CZ divergiu no input {input}, índice {i}"
                );
            }
        }
    }

    #[test]
    fn test_toffoli_decomposition_matches_dense() {
        // Sequência de 15 gates == matriz 8×8 em toda base de 3 qubits
        for input in 0..8 {
            let mut decomposed = basis_state(3, input);
            let mut dense = basis_state(3, input);

            apply_toffoli(&mut decomposed, 0, 1, 2).unwrap();
            // gate bit0 = alvo (qubit 2), bits 1-2 = controles
            dense.apply_three_qubit(&multi::TOFFOLI, 2, 0, 1).unwrap();

            for i in 0..8 {
                assert!(
                    decomposed.amplitude(i).approx_eq(dense.amplitude(i), 1e-9),
                    "Toffoli divergiu no input {input}, índice {i}"
                );
            }
        }
    }

    #[test]
    fn test_toffoli_decomposition_on_superposition() {
        let mut decomposed = StateVector::new(3);
        let mut dense = StateVector::new(3);
        for sv in [&mut decomposed, &mut dense] {
            sv.apply_single(&single::H, 0).unwrap();
            sv.apply_single(&single::H, 1).unwrap();
        }

        apply_toffoli(&mut decomposed, 0, 1, 2).unwrap();
        dense.apply_three_qubit(&multi::TOFFOLI, 2, 0, 1).unwrap();

        for i in 0..8 {
            assert!(decomposed.amplitude(i).approx_eq(dense.amplitude(i), 1e-9));
        }
    }
}
