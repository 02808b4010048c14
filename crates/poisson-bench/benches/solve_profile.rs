//! Criterion benchmarks for complete solves on the reference profiles.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use poisson_bench::{centre_source, cube_for, reference_config, stress_config};
use poisson_solver::solve;

fn bench_reference(c: &mut Criterion) {
    let mut group = c.benchmark_group("reference_solve");
    for n in [5, 33, 65] {
        for threads in [1, 2, 4] {
            let config = reference_config(n, threads);
            let cube = cube_for(&config).unwrap();
            let source = centre_source(&cube).unwrap();
            group.bench_with_input(BenchmarkId::new(format!("{threads}t"), n), &n, |b, _| {
                b.iter(|| black_box(solve(&config, black_box(&source)).unwrap()));
            });
        }
    }
    group.finish();
}

fn bench_stress(c: &mut Criterion) {
    let mut group = c.benchmark_group("stress_solve");
    group.sample_size(10);
    for threads in [1, 8] {
        let config = stress_config(threads);
        let cube = cube_for(&config).unwrap();
        let source = centre_source(&cube).unwrap();
        group.bench_function(format!("{threads}t"), |b| {
            b.iter(|| black_box(solve(&config, &source).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reference, bench_stress);
criterion_main!(benches);
