//! # Gate Benchmarks
//!
//! Measures matrix construction and resolution costs: static tables vs
//! parametrized rotations, plus matrix algebra on the fixed 2x2/4x4/8x8 sizes.
//!
//! Run: `cargo bench --bench gate_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qsv_gates::{GateKind, multi, single};

/// Benchmark static gate table access
fn bench_gate_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_tables");

    group.bench_function("hadamard", |b| b.iter(|| black_box(*single::H)));

    group.bench_function("toffoli_dense", |b| b.iter(|| black_box(*multi::TOFFOLI)));

    group.finish();
}

/// Benchmark parametrized gate construction
fn bench_parametrized(c: &mut Criterion) {
    let mut group = c.benchmark_group("parametrized_gates");

    group.bench_function("rx", |b| b.iter(|| black_box(single::rx(0.7))));

    group.bench_function("rz", |b| b.iter(|| black_box(single::rz(0.7))));

    group.bench_function("phase", |b| b.iter(|| black_box(single::phase(0.7))));

    group.finish();
}

/// Benchmark name-based resolution as used by the circuit executor
fn bench_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_resolution");

    for kind in [GateKind::H, GateKind::Sx, GateKind::Rx] {
        let params: &[f64] = if kind.is_parametrized() { &[0.7] } else { &[] };
        group.bench_with_input(BenchmarkId::from_parameter(kind.name()), &kind, |b, &k| {
            b.iter(|| black_box(single::single_matrix(k, params)))
        });
    }

    group.finish();
}

/// Benchmark matrix algebra used by unitarity checks
fn bench_matrix_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_algebra");

    let h = *single::H;
    group.bench_function("mul_2x2", |b| b.iter(|| black_box(h.mul(&h))));
    group.bench_function("dagger_2x2", |b| b.iter(|| black_box(h.dagger())));
    group.bench_function("is_unitary_8x8", |b| {
        b.iter(|| black_box(multi::TOFFOLI.is_unitary(1e-10)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_gate_tables,
    bench_parametrized,
    bench_resolution,
    bench_matrix_algebra
);
criterion_main!(benches);
