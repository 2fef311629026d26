//! Criterion benchmarks for series_core.
//!
//! Benchmarks cover:
//! - Convergence runs per series at fixed tolerances
//! - Fixed-length evaluation at increasing term counts

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use series_core::experiment::run_iterative;
use series_core::series::{Leibniz, Machin, Nilakantha, SeriesKind};
use series_core::solvers::{sum_first_n, ConvergenceConfig};

/// Benchmark the convergence driver for each series.
fn bench_convergence(c: &mut Criterion) {
    let mut group = c.benchmark_group("convergence");
    group.sample_size(20); // Leibniz at 1e-6 needs two million terms

    for tolerance in [1e-4, 1e-6] {
        let config = ConvergenceConfig::new(tolerance).unwrap();
        for kind in SeriesKind::ALL {
            group.bench_with_input(
                BenchmarkId::new(kind.name(), format!("{:e}", tolerance)),
                &config,
                |b, config| b.iter(|| run_iterative(black_box(kind), black_box(config))),
            );
        }
    }

    group.finish();
}

/// Benchmark fixed-length evaluation.
fn bench_sum_first_n(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_first_n");

    for n in [10, 100, 10_000] {
        group.bench_with_input(BenchmarkId::new("Leibniz", n), &n, |b, &n| {
            b.iter(|| sum_first_n(&Leibniz, black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("Nilakantha", n), &n, |b, &n| {
            b.iter(|| sum_first_n(&Nilakantha, black_box(n)))
        });
    }

    let machin = Machin::new();
    for n in [5, 10, 20] {
        group.bench_with_input(BenchmarkId::new("Machin", n), &n, |b, &n| {
            b.iter(|| sum_first_n(&machin, black_box(n)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_convergence, bench_sum_first_n);
criterion_main!(benches);
