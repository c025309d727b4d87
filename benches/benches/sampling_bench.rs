//! # Circuit Benchmarks
//!
//! Measures full-circuit execution and Monte Carlo sampling throughput
//! on a GHZ preparation circuit of varying width.
//!
//! Run: `cargo bench --bench sampling_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qsv_circuit::Circuit;

fn ghz(num_qubits: usize) -> Circuit {
    let mut circuit = Circuit::new(num_qubits).unwrap();
    circuit.h(0);
    for q in 1..num_qubits {
        circuit.cx(q - 1, q);
    }
    circuit
}

/// Benchmark exact execution scaling
fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("circuit_run");

    for num_qubits in [4usize, 8, 12, 16] {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            &num_qubits,
            |b, &n| {
                let mut circuit = ghz(n);
                b.iter(|| {
                    black_box(circuit.run().unwrap());
                })
            },
        );
    }

    group.finish();
}

/// Benchmark sampling throughput (shots dominate for small circuits)
fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("circuit_sample");
    group.sample_size(20);

    for shots in [100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(shots), &shots, |b, &shots| {
            let circuit = ghz(4);
            b.iter(|| black_box(circuit.sample_seeded(shots, 42).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark JSON serialization of a deep circuit
fn bench_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("circuit_json");

    let mut circuit = ghz(8);
    for q in 0..8 {
        circuit.rz(0.1 * q as f64, q);
    }
    let json = circuit.to_json().unwrap();

    group.bench_function("to_json", |b| b.iter(|| black_box(circuit.to_json().unwrap())));
    group.bench_function("from_json", |b| {
        b.iter(|| black_box(Circuit::from_json(&json).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_run, bench_sample, bench_json);
criterion_main!(benches);
