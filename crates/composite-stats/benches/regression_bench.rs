//! Benchmarks for the regression primitives

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_distr::Normal;

fn noisy_series(n: usize, outlier_share: f64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let noise = Normal::new(0.0, 30.0).unwrap();
    let x: Vec<f64> = (0..n).map(|i| 730_000.0 + i as f64 * 8.0).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| {
            let base = 0.05 * (xi - 730_000.0) + 500.0 + noise.sample(&mut rng);
            if rng.gen_bool(outlier_share) {
                base + 3000.0
            } else {
                base
            }
        })
        .collect();
    (x, y)
}

fn bench_fits(c: &mut Criterion) {
    let mut group = c.benchmark_group("regression");
    for &n in &[8usize, 32, 128] {
        let (x, y) = noisy_series(n, 0.1);
        group.bench_with_input(BenchmarkId::new("ols", n), &n, |b, _| {
            b.iter(|| composite_stats::ols_fit(black_box(&x), black_box(&y)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("robust", n), &n, |b, _| {
            b.iter(|| composite_stats::robust_fit(black_box(&x), black_box(&y)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fits);
criterion_main!(benches);
