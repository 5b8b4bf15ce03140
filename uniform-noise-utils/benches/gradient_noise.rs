#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use uniform_noise_utils::noise::GradientNoise;

/// Sample a `side x side` grid at a fixed non-integer step.
fn sample_grid_2d(noise: &GradientNoise, side: u32) -> f32 {
    let mut acc = 0.0;
    for i in 0..side {
        for j in 0..side {
            acc += noise.sample_2d(i as f32 * 0.137, j as f32 * 0.137);
        }
    }
    acc
}

fn bench_sample_2d(c: &mut Criterion) {
    let noise = GradientNoise::new(1337);

    c.bench_function("gradient_noise_2d_single", |b| {
        b.iter(|| black_box(noise.sample_2d(black_box(12.34), black_box(-5.67))));
    });

    c.bench_function("gradient_noise_2d_grid_64", |b| {
        b.iter(|| black_box(sample_grid_2d(&noise, 64)));
    });
}

fn bench_sample_3d(c: &mut Criterion) {
    let noise = GradientNoise::new(1337);

    c.bench_function("gradient_noise_3d_single", |b| {
        b.iter(|| {
            black_box(noise.sample_3d(black_box(12.34), black_box(-5.67), black_box(0.89)))
        });
    });
}

fn bench_fbm(c: &mut Criterion) {
    let noise = GradientNoise::new(1337);

    let mut group = c.benchmark_group("gradient_noise_fbm_2d");
    for octaves in [1u32, 4, 8] {
        group.bench_with_input(
            BenchmarkId::from_parameter(octaves),
            &octaves,
            |b, &octaves| {
                b.iter(|| {
                    black_box(noise.fbm_2d(black_box(12.34), black_box(-5.67), octaves, 0.5))
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_sample_2d, bench_sample_3d, bench_fbm);
criterion_main!(benches);
