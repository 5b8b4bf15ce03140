//! Distribution tests.
//!
//! Samples dense coordinate grids and checks that corrected noise is close to
//! uniform over `[0, 1]`, and far closer than the raw noise it came from.

use std::thread;

use uniform_noise::histogram::{Histogram, ks_statistic_uniform};
use uniform_noise::{Correction, NoiseSettings, UniformNoise};

const SEED: i32 = 1337;
const BINS: usize = 10;

/// A `side x side` grid of 2D coordinates with a non-integer step.
fn grid_2d(side: u32, step: f64, offset: f64) -> impl Iterator<Item = (f64, f64)> {
    (0..side).flat_map(move |i| {
        (0..side).map(move |j| {
            (
                f64::from(i) * step + offset,
                f64::from(j) * step + offset,
            )
        })
    })
}

/// A `32 x 32 x 8` grid of 3D coordinates.
fn grid_3d() -> impl Iterator<Item = (f64, f64, f64)> {
    (0..32u32).flat_map(|i| {
        (0..32u32).flat_map(move |j| {
            (0..8u32).map(move |k| {
                (
                    f64::from(i) * 0.211 + 0.03,
                    f64::from(j) * 0.211 + 0.07,
                    f64::from(k) * 0.211 + 0.11,
                )
            })
        })
    })
}

struct Report {
    chi_square: f64,
    max_deviation: f64,
    ks: f32,
}

fn report(mut samples: Vec<f32>) -> Report {
    let mut histogram = Histogram::new(BINS);
    histogram.extend(samples.iter().copied());
    Report {
        chi_square: histogram.chi_square_uniform(),
        max_deviation: histogram.max_relative_deviation(),
        ks: ks_statistic_uniform(&mut samples),
    }
}

#[test]
fn octave_2d_noise_is_uniform() {
    let noise = UniformNoise::new(SEED);
    let samples: Vec<f32> = grid_2d(96, 0.137, 0.05)
        .map(|(x, y)| noise.noise_octaves_2d(x, y, 4, 0.5))
        .collect();
    let report = report(samples);

    assert!(report.chi_square < 40.0, "chi-square {}", report.chi_square);
    assert!(report.max_deviation < 0.15, "bin deviation {}", report.max_deviation);
    assert!(report.ks < 0.03, "KS statistic {}", report.ks);
}

#[test]
fn single_2d_noise_is_uniform() {
    let noise = UniformNoise::new(SEED);
    let samples: Vec<f32> = grid_2d(96, 0.137, 0.05)
        .map(|(x, y)| noise.noise_2d(x, y))
        .collect();
    let report = report(samples);

    assert!(report.chi_square < 80.0, "chi-square {}", report.chi_square);
    assert!(report.max_deviation < 0.2, "bin deviation {}", report.max_deviation);
    assert!(report.ks < 0.03, "KS statistic {}", report.ks);
}

#[test]
fn single_and_octave_3d_noise_are_uniform() {
    let noise = UniformNoise::new(SEED);
    let single: Vec<f32> = grid_3d().map(|(x, y, z)| noise.noise_3d(x, y, z)).collect();
    let octaves: Vec<f32> = grid_3d()
        .map(|(x, y, z)| noise.noise_octaves_3d(x, y, z, 4, 0.5))
        .collect();

    for (name, samples) in [("single", single), ("octaves", octaves)] {
        let report = report(samples);
        assert!(report.chi_square < 60.0, "{name} chi-square {}", report.chi_square);
        assert!(report.max_deviation < 0.2, "{name} bin deviation {}", report.max_deviation);
        assert!(report.ks < 0.05, "{name} KS statistic {}", report.ks);
    }
}

#[test]
fn correction_flattens_raw_noise() {
    let noise = UniformNoise::new(SEED);
    let raw: Vec<f32> = grid_2d(96, 0.137, 0.05)
        .map(|(x, y)| ((noise.raw_2d(x, y) + 1.0) / 2.0).clamp(0.0, 1.0))
        .collect();
    let corrected: Vec<f32> = grid_2d(96, 0.137, 0.05)
        .map(|(x, y)| noise.noise_2d(x, y))
        .collect();

    let raw = report(raw);
    let corrected = report(corrected);
    assert!(raw.chi_square > 1000.0, "raw chi-square {}", raw.chi_square);
    assert!(
        corrected.chi_square * 50.0 < raw.chi_square,
        "corrected {} vs raw {}",
        corrected.chi_square,
        raw.chi_square
    );
}

#[test]
fn table_curve_beats_bias_corrected_curve() {
    let noise = UniformNoise::new(SEED);
    let sample = |correction| -> Vec<f32> {
        grid_2d(96, 0.137, 0.05)
            .map(|(x, y)| noise.corrected_2d(x, y, correction))
            .collect()
    };

    let table = report(sample(Correction::Single2D));
    let bias = report(sample(Correction::BiasCorrected2D));
    assert!(
        table.chi_square < bias.chi_square,
        "table {} vs bias-corrected {}",
        table.chi_square,
        bias.chi_square
    );
}

#[test]
fn every_evaluator_stays_in_range() {
    let seeds = [0, 1, -1, 42, i32::MAX, i32::MIN, 0x5EED];
    for seed in seeds {
        let noise = UniformNoise::new(seed);
        for (x, y) in grid_2d(24, 7.31, -80.0) {
            let z = x - y;
            for v in [
                noise.noise_2d(x, y),
                noise.noise_3d(x, y, z),
                noise.noise_octaves_2d(x, y, 4, 0.5),
                noise.noise_octaves_3d(x, y, z, 4, 0.5),
                noise.noise_octaves_2d(x, y, 8, 0.9),
                noise.noise_octaves_3d(x, y, z, 3, 1.5),
                noise.corrected_2d(x, y, Correction::BiasCorrected2D),
            ] {
                assert!(
                    (0.0..=1.0).contains(&v),
                    "seed {seed} at ({x}, {y}, {z}) gave {v}"
                );
            }
        }
    }
}

#[test]
fn coordinates_beyond_i32_stay_in_range() {
    let noise = UniformNoise::new(42);
    let coords = [3.0e9, -3.0e9, 1.0e10, -1.0e10, 5.0e12, 1.0e20];
    for &x in &coords {
        for y in [x + 0.5, 0.25, -x] {
            let z = 0.75;
            for v in [
                noise.noise_2d(x, y),
                noise.noise_3d(x, y, z),
                noise.noise_octaves_2d(x, y, 4, 0.5),
                noise.noise_octaves_3d(x, y, z, 4, 0.5),
                noise.corrected_2d(x, y, Correction::BiasCorrected2D),
            ] {
                assert!((0.0..=1.0).contains(&v), "({x}, {y}, {z}) gave {v}");
            }
        }
    }

    let sampler = NoiseSettings {
        seed: Some(1),
        ..NoiseSettings::default()
    }
    .build()
    .expect("default settings are valid");
    for &x in &[1.5e9, -1.5e9, 5.4e8, 3.0e9] {
        let v2 = sampler.sample_2d(x, x);
        let v3 = sampler.sample_3d(x, x + 0.5, -x);
        assert!((0.0..=1.0).contains(&v2), "2D sample at {x} gave {v2}");
        assert!((0.0..=1.0).contains(&v3), "3D sample at {x} gave {v3}");
    }
}

#[test]
fn large_octave_counts_stay_in_range() {
    let noise = UniformNoise::new(42);
    for octaves in [33, 128, 129, 200, 10_000] {
        for (x, y, z) in [(0.0, 0.0, 0.0), (0.3, 0.7, -1.9), (-12.5, 4.25, 99.1)] {
            for v in [
                noise.noise_octaves_2d(x, y, octaves, 0.5),
                noise.noise_octaves_3d(x, y, z, octaves, 0.5),
                noise.noise_octaves_2d(x, y, octaves, 1.5),
                noise.noise_octaves_3d(x, y, z, octaves, -2.0),
            ] {
                assert!(
                    (0.0..=1.0).contains(&v),
                    "{octaves} octaves at ({x}, {y}, {z}) gave {v}"
                );
            }
        }
    }

    // Octaves past `f32` resolution leave the result unchanged.
    assert_eq!(
        noise.noise_octaves_2d(0.3, 0.7, 200, 0.5).to_bits(),
        noise.noise_octaves_2d(0.3, 0.7, 64, 0.5).to_bits()
    );
}

#[test]
fn seeds_decorrelate_output() {
    let a = UniformNoise::new(100);
    let b = UniformNoise::new(101);
    let points: Vec<(f64, f64)> = grid_2d(20, 0.77, 0.1).collect();
    let differing = points
        .iter()
        .filter(|&&(x, y)| (a.noise_2d(x, y) - b.noise_2d(x, y)).abs() > 1e-6)
        .count();
    assert!(
        differing * 10 > points.len() * 9,
        "only {differing} of {} points differ between seeds",
        points.len()
    );
}

#[test]
fn shared_sampler_is_deterministic_across_threads() {
    let noise = UniformNoise::new(SEED);
    let points: Vec<(f64, f64)> = grid_2d(32, 0.31, 0.2).collect();
    let expected: Vec<u32> = points
        .iter()
        .map(|&(x, y)| noise.noise_octaves_2d(x, y, 4, 0.5).to_bits())
        .collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    points
                        .iter()
                        .map(|&(x, y)| noise.noise_octaves_2d(x, y, 4, 0.5).to_bits())
                        .collect::<Vec<u32>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("sampling thread panicked"), expected);
        }
    });
}
