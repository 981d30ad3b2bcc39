//! Criterion benchmarks for the dual hull and envelope reconstruction.
//! Focus sizes: n in {2, 10, 100, 1000, 10000}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use envelope::api::{
    compute_envelope, draw_lines, lower_hull, upper_envelope, EnvelopeCfg, LineSampler,
    LinesReplay, RandomLinesCfg, View,
};

fn dual_cfg(count: usize) -> RandomLinesCfg {
    RandomLinesCfg {
        count,
        sampler: LineSampler::Dual {
            slope: (-10.0, 10.0),
            intercept: (-100.0, 100.0),
        },
    }
}

fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("envelope");
    let view = View::new(-50.0, 50.0).unwrap();
    for &n in &[2usize, 10, 100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("lower_hull", n), &n, |b, &n| {
            b.iter_batched(
                || draw_lines(dual_cfg(n), LinesReplay { seed: 43, index: 0 }).unwrap(),
                |lines| {
                    let _hull = lower_hull(&lines).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("upper_envelope", n), &n, |b, &n| {
            let lines = draw_lines(dual_cfg(n), LinesReplay { seed: 44, index: 0 }).unwrap();
            let hull = lower_hull(&lines).unwrap();
            b.iter(|| {
                let _env = upper_envelope(&lines, &hull, view, EnvelopeCfg::default()).unwrap();
            })
        });

        group.bench_with_input(BenchmarkId::new("clicks_end_to_end", n), &n, |b, &n| {
            let cfg = RandomLinesCfg {
                count: n,
                ..RandomLinesCfg::default()
            };
            let clicks = View::new(0.0, 1000.0).unwrap();
            b.iter_batched(
                || draw_lines(cfg, LinesReplay { seed: 45, index: 0 }).unwrap(),
                |lines| {
                    let _env = compute_envelope(&lines, clicks, EnvelopeCfg::default()).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_envelope);
criterion_main!(benches);
