use std::sync::atomic::AtomicUsize;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quad_integrals::{integrate_adaptive, integrate_adaptive_parallel, simpson_rule};

fn oscillatory(x: f64) -> f64 {
    (10.0 * x).sin() * (-x).exp()
}

fn bench_simpson_rule(c: &mut Criterion) {
    c.bench_function("simpson_rule", |b| {
        b.iter(|| simpson_rule(oscillatory, black_box(0.0), black_box(1.0)))
    });
}

fn bench_adaptive(c: &mut Criterion) {
    let mut group = c.benchmark_group("adaptive");
    for tolerance in [1e-4, 1e-8, 1e-12] {
        group.bench_with_input(
            BenchmarkId::new("serial", tolerance),
            &tolerance,
            |b, &tolerance| {
                b.iter(|| {
                    let mut calls = 0;
                    integrate_adaptive(
                        Some(oscillatory),
                        0.0,
                        5.0,
                        black_box(tolerance),
                        &mut calls,
                    )
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("parallel", tolerance),
            &tolerance,
            |b, &tolerance| {
                b.iter(|| {
                    let calls = AtomicUsize::new(0);
                    integrate_adaptive_parallel(
                        Some(oscillatory),
                        0.0,
                        5.0,
                        black_box(tolerance),
                        &calls,
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_simpson_rule, bench_adaptive);
criterion_main!(benches);
