//! Process-wide seed and free sampling functions.
//!
//! For callers that want one ambient seed instead of passing a
//! [`UniformNoise`] around. The seed lives in an atomic: a sample taken while
//! another thread calls [`set_seed`] sees either the old or the new seed, never
//! a mix of both. Prefer an owned [`UniformNoise`] when the seed must not
//! change under a running computation.

use std::sync::LazyLock;
use std::sync::atomic::{AtomicI32, Ordering};

use num_traits::AsPrimitive;

use crate::sampler::{UniformNoise, default_seed};

static SEED: LazyLock<AtomicI32> = LazyLock::new(|| AtomicI32::new(default_seed()));

/// Replace the process-wide seed for all subsequent calls.
pub fn set_seed(seed: i32) {
    tracing::trace!(seed, "setting global noise seed");
    SEED.store(seed, Ordering::Relaxed);
}

/// The current process-wide seed.
#[must_use]
pub fn seed() -> i32 {
    SEED.load(Ordering::Relaxed)
}

/// A sampler snapshot of the current process-wide seed.
#[must_use]
pub fn sampler() -> UniformNoise {
    UniformNoise::new(seed())
}

/// [`UniformNoise::noise_2d`] with the process-wide seed.
#[must_use]
pub fn noise_2d<T: AsPrimitive<f32>>(x: T, y: T) -> f32 {
    sampler().noise_2d(x, y)
}

/// [`UniformNoise::noise_3d`] with the process-wide seed.
#[must_use]
pub fn noise_3d<T: AsPrimitive<f32>>(x: T, y: T, z: T) -> f32 {
    sampler().noise_3d(x, y, z)
}

/// [`UniformNoise::noise_octaves_2d`] with the process-wide seed.
#[must_use]
pub fn noise_octaves_2d<T: AsPrimitive<f32>>(x: T, y: T, octaves: u32, persistence: T) -> f32 {
    sampler().noise_octaves_2d(x, y, octaves, persistence)
}

/// [`UniformNoise::noise_octaves_3d`] with the process-wide seed.
#[must_use]
pub fn noise_octaves_3d<T: AsPrimitive<f32>>(
    x: T,
    y: T,
    z: T,
    octaves: u32,
    persistence: T,
) -> f32 {
    sampler().noise_octaves_3d(x, y, z, octaves, persistence)
}
