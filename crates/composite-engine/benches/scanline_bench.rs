//! Scanline throughput benchmarks

use composite_core::{CompositeConfig, Method, Observation, Window};
use composite_engine::{Compositor, ScanlineBuffer};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_distr::Normal;

fn build_scanline(columns: usize, scenes: usize) -> ScanlineBuffer {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let noise = Normal::new(0.0, 40.0).unwrap();
    let mut scanline = ScanlineBuffer::new(columns, scenes);
    for col in 0..columns {
        for k in 0..scenes {
            let base = 350.0 + noise.sample(&mut rng) as f32;
            scanline
                .push(
                    col,
                    Observation::new(
                        100 + k as i32 * 6,
                        [base * 0.6, base, base * 0.85, base * 8.0],
                    ),
                )
                .unwrap();
        }
    }
    scanline
}

fn bench_scanline(c: &mut Criterion) {
    let window = Window::new(100, 220).unwrap();
    let scanline = build_scanline(256, 20);
    let mut out = vec![[0.0f32; 4]; 256];

    let mut group = c.benchmark_group("scanline");
    for method in [
        Method::Fitted { weighted: false },
        Method::Fitted { weighted: true },
        Method::ShadowHotAverage,
        Method::Median,
    ] {
        let compositor = Compositor::new(CompositeConfig::new(method)).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(method.name()),
            &method,
            |b, _| {
                b.iter(|| {
                    compositor
                        .composite_scanline(black_box(&scanline), window, &mut out, None)
                        .unwrap()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_scanline);
criterion_main!(benches);
