//! Criterion benches for the circle and ellipse fitters.
//! Focus sizes: n in {8, 64, 512, 4096} noisy samples.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use gridfit::fit::{fit_circle, fit_ellipse};
use gridfit::sample::{sample_circle, sample_ellipse, CircleSampleCfg, EllipseSampleCfg, ReplayToken};
use nalgebra::Vector2;

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");
    for &n in &[8usize, 64, 512, 4096] {
        let circle_cfg = CircleSampleCfg {
            center: Vector2::new(10.0, 10.0),
            radius: 6.0,
            count: n,
            noise: 0.2,
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::new("fit_circle", n), &n, |b, _| {
            b.iter_batched(
                || sample_circle(circle_cfg, ReplayToken { seed: 43, index: n as u64 }),
                |pts| {
                    let _res = fit_circle(&pts);
                },
                BatchSize::SmallInput,
            )
        });

        let ellipse_cfg = EllipseSampleCfg {
            center: Vector2::new(10.0, 10.0),
            a: 7.0,
            b: 3.0,
            angle: 0.6,
            count: n,
            noise: 0.2,
        };
        group.bench_with_input(BenchmarkId::new("fit_ellipse", n), &n, |b, _| {
            b.iter_batched(
                || sample_ellipse(ellipse_cfg, ReplayToken { seed: 44, index: n as u64 }),
                |pts| {
                    let _res = fit_ellipse(&pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fit);
criterion_main!(benches);
