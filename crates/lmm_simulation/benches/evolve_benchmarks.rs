//! Criterion benchmarks for curve evolution.
//!
//! Measures single-step evolution across curve sizes and one-step sampling
//! throughput to characterise scaling behaviour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lmm_core::Curve;
use lmm_simulation::evolve::{advance, advance_futures};
use lmm_simulation::mc::{CurveSampler, QuoteConvention, SimulationConfig};
use lmm_simulation::rng::CurveRng;

/// Quarterly curve with `n` buckets and an upward-sloping term structure.
fn generate_curve(n: usize) -> Curve<f64> {
    let times: Vec<f64> = (1..=n).map(|j| j as f64 * 0.25).collect();
    let values: Vec<f64> = times.iter().map(|t| 0.02 + 0.002 * t).collect();
    let vols: Vec<f64> = times.iter().map(|t| 0.01 + 0.001 * t.sqrt()).collect();
    Curve::new(times, values, vols).unwrap()
}

/// Benchmark one evolution step in both quoting conventions.
fn bench_single_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_step");

    for size in [40, 120, 400] {
        let curve = generate_curve(size);

        group.bench_with_input(BenchmarkId::new("advance_futures", size), &curve, |b, curve| {
            let mut rng = CurveRng::from_seed(42);
            b.iter(|| {
                let mut evolved = curve.clone();
                advance_futures(black_box(1.0), &mut evolved, 0.3, &mut rng).unwrap();
                evolved
            });
        });

        group.bench_with_input(BenchmarkId::new("advance", size), &curve, |b, curve| {
            let mut rng = CurveRng::from_seed(42);
            b.iter(|| {
                let mut evolved = curve.clone();
                advance(black_box(1.0), &mut evolved, 0.3, &mut rng).unwrap();
                evolved
            });
        });

        group.bench_with_input(BenchmarkId::new("par_coupon", size), &curve, |b, curve| {
            b.iter(|| black_box(curve).par_coupon().unwrap());
        });
    }

    group.finish();
}

/// Benchmark one-step sampling, sequential vs thread pool.
fn bench_sampler(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampler");
    group.sample_size(20);

    let curve = generate_curve(120);
    for (label, threshold) in [("sequential", usize::MAX), ("parallel", 1)] {
        let config = SimulationConfig::builder()
            .n_paths(10_000)
            .alpha(0.3)
            .convention(QuoteConvention::Forward)
            .seed(42)
            .parallel_threshold(threshold)
            .build()
            .unwrap();
        let sampler = CurveSampler::new(config).unwrap();

        group.bench_function(label, |b| {
            b.iter(|| sampler.sample(black_box(2.0), &curve).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_step, bench_sampler);
criterion_main!(benches);
