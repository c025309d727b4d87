//! # StateVector Benchmarks
//!
//! Measures in-place gate application across qubit counts. Every routine
//! touches all 2^n amplitudes, so times should scale linearly with the
//! state dimension.
//!
//! Run: `cargo bench --bench state_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qsv_gates::{multi, single};
use qsv_state::StateVector;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Benchmark single-qubit gate application scaling
fn bench_apply_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_single");

    for num_qubits in [4usize, 8, 12, 16] {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            &num_qubits,
            |b, &n| {
                let mut sv = StateVector::new(n);
                b.iter(|| {
                    sv.apply_single(&single::H, black_box(0)).unwrap();
                })
            },
        );
    }

    group.finish();
}

/// Benchmark the specialized two-qubit routines against the dense path
fn bench_two_qubit(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_qubit");
    let n = 12;

    group.bench_function("cnot_specialized", |b| {
        let mut sv = StateVector::new(n);
        sv.apply_single(&single::H, 0).unwrap();
        b.iter(|| {
            sv.apply_cnot(black_box(0), black_box(1)).unwrap();
        })
    });

    group.bench_function("cnot_dense", |b| {
        let mut sv = StateVector::new(n);
        sv.apply_single(&single::H, 0).unwrap();
        b.iter(|| {
            sv.apply_two_qubit(&multi::CNOT, black_box(1), black_box(0))
                .unwrap();
        })
    });

    group.bench_function("swap_specialized", |b| {
        let mut sv = StateVector::new(n);
        sv.apply_single(&single::H, 0).unwrap();
        b.iter(|| {
            sv.apply_swap(black_box(0), black_box(11)).unwrap();
        })
    });

    group.finish();
}

/// Benchmark measurement primitives
fn bench_measurement(c: &mut Criterion) {
    let mut group = c.benchmark_group("measurement");
    let n = 12;

    group.bench_function("probabilities", |b| {
        let mut sv = StateVector::new(n);
        for q in 0..n {
            sv.apply_single(&single::H, q).unwrap();
        }
        b.iter(|| black_box(sv.probabilities()))
    });

    group.bench_function("measure_all", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| {
            let mut sv = StateVector::new(n);
            for q in 0..n {
                sv.apply_single(&single::H, q).unwrap();
            }
            black_box(sv.measure_all(&mut rng))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_apply_single,
    bench_two_qubit,
    bench_measurement
);
criterion_main!(benches);
