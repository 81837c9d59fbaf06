//! LMS benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (100 to 10K rows)
//! - Subsample size (trial budget grows with `k`)
//! - Contamination level (5% to 45% outliers)
//! - Dimensions (1 to 5 features)
//! - Sequential vs parallel trial scoring (with the `parallel` feature)
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lms_rs::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a noisy hyperplane with a fraction of gross outliers.
fn generate_contaminated_data(
    size: usize,
    n_features: usize,
    contamination: f64,
    seed: u64,
) -> Dataset<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.2).unwrap();
    let x_dist = Uniform::new(-10.0, 10.0).unwrap();
    let outlier_dist = Uniform::new(50.0, 150.0).unwrap();

    let coefficients: Vec<f64> = (0..n_features).map(|j| 1.0 + j as f64 * 0.5).collect();

    let mut features = Vec::with_capacity(size * n_features);
    let mut targets = Vec::with_capacity(size);
    for _ in 0..size {
        let row: Vec<f64> = (0..n_features).map(|_| x_dist.sample(&mut rng)).collect();
        let mut y = 2.0
            + row
                .iter()
                .zip(&coefficients)
                .map(|(x, b)| x * b)
                .sum::<f64>()
            + noise_dist.sample(&mut rng);
        if rng.random::<f64>() < contamination {
            y += outlier_dist.sample(&mut rng);
        }
        features.extend(row);
        targets.push(y);
    }

    Dataset::new(features, targets, n_features).unwrap()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(10);

    for size in [100, 1_000, 10_000] {
        let data = generate_contaminated_data(size, 1, 0.1, 42);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let mut lms = Lms::new().subsample_size(2).build().unwrap();
                black_box(lms.fit(black_box(data)).unwrap().intercept())
            })
        });
    }
    group.finish();
}

fn bench_subsample_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("subsample_size");
    group.sample_size(10);
    let data = generate_contaminated_data(1_000, 3, 0.1, 42);

    for k in [4, 5, 6, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, &k| {
            b.iter(|| {
                let mut lms = Lms::new().subsample_size(k).build().unwrap();
                black_box(lms.fit(black_box(&data)).unwrap().intercept())
            })
        });
    }
    group.finish();
}

fn bench_contamination(c: &mut Criterion) {
    let mut group = c.benchmark_group("contamination");
    group.sample_size(10);

    for pct in [5, 25, 45] {
        let data = generate_contaminated_data(1_000, 1, pct as f64 / 100.0, 7);
        group.bench_with_input(BenchmarkId::from_parameter(pct), &data, |b, data| {
            b.iter(|| {
                let mut lms = Lms::new().subsample_size(2).build().unwrap();
                black_box(lms.fit(black_box(data)).unwrap().n_outliers())
            })
        });
    }
    group.finish();
}

fn bench_dimensions(c: &mut Criterion) {
    let mut group = c.benchmark_group("dimensions");
    group.sample_size(10);

    for d in [1, 3, 5] {
        let data = generate_contaminated_data(1_000, d, 0.1, 11);
        group.bench_with_input(BenchmarkId::from_parameter(d), &data, |b, data| {
            b.iter(|| {
                let mut lms = Lms::new().subsample_size(d + 1).build().unwrap();
                black_box(lms.fit(black_box(data)).unwrap().intercept())
            })
        });
    }
    group.finish();
}

fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel");
    group.sample_size(10);
    let data = generate_contaminated_data(5_000, 2, 0.2, 3);

    for parallel in [false, true] {
        group.bench_with_input(
            BenchmarkId::from_parameter(parallel),
            &parallel,
            |b, &parallel| {
                b.iter(|| {
                    let mut lms = Lms::new().parallel(parallel).build().unwrap();
                    black_box(lms.fit(black_box(&data)).unwrap().intercept())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_subsample_size,
    bench_contamination,
    bench_dimensions,
    bench_parallel,
);
criterion_main!(benches);
