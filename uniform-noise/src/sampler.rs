//! Seeded uniform noise.
//!
//! [`UniformNoise`] owns its seed, so a shared instance can be sampled from any
//! number of threads while re-seeding requires exclusive access. Coordinates
//! may be given as any primitive number; they are narrowed to `f32` first, so
//! `f64` and `f32` inputs of the same value give the same result.

use std::sync::LazyLock;

use glam::{Vec2, Vec3};
use num_traits::AsPrimitive;
use uniform_noise_utils::noise::GradientNoise;

use crate::distribution::Correction;

/// Seed used by [`UniformNoise::default`], drawn once per process.
static DEFAULT_SEED: LazyLock<i32> = LazyLock::new(rand::random);

/// The seed every default-constructed instance starts from.
#[must_use]
pub fn default_seed() -> i32 {
    *DEFAULT_SEED
}

/// Gradient noise flattened to an approximately uniform distribution over `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformNoise {
    noise: GradientNoise,
}

impl Default for UniformNoise {
    fn default() -> Self {
        Self::new(default_seed())
    }
}

impl UniformNoise {
    /// Create a sampler with a fixed seed.
    #[must_use]
    pub const fn new(seed: i32) -> Self {
        Self {
            noise: GradientNoise::new(seed),
        }
    }

    /// Create a sampler with a freshly drawn random seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The current seed.
    #[must_use]
    pub const fn seed(&self) -> i32 {
        self.noise.seed()
    }

    /// Replace the seed for all subsequent samples.
    pub fn set_seed(&mut self, seed: i32) {
        tracing::trace!(old = self.seed(), new = seed, "reseeding uniform noise");
        self.noise = GradientNoise::new(seed);
    }

    /// The underlying raw gradient noise generator.
    #[must_use]
    pub const fn gradient_noise(&self) -> &GradientNoise {
        &self.noise
    }

    /// Single-octave 2D uniform noise in `[0, 1]`.
    #[must_use]
    pub fn noise_2d<T: AsPrimitive<f32>>(&self, x: T, y: T) -> f32 {
        Correction::Single2D.apply(self.raw_2d(x, y))
    }

    /// Single-octave 3D uniform noise in `[0, 1]`.
    #[must_use]
    pub fn noise_3d<T: AsPrimitive<f32>>(&self, x: T, y: T, z: T) -> f32 {
        Correction::Single3D.apply(self.raw_3d(x, y, z))
    }

    /// Multi-octave 2D uniform noise in `[0, 1]`.
    ///
    /// The correction curve was fitted on `octaves = 4`, `persistence = 0.5`;
    /// other parameters still land in `[0, 1]` but drift from uniform.
    #[must_use]
    pub fn noise_octaves_2d<T: AsPrimitive<f32>>(
        &self,
        x: T,
        y: T,
        octaves: u32,
        persistence: T,
    ) -> f32 {
        Correction::Octaves2D.apply(self.raw_octaves_2d(x, y, octaves, persistence))
    }

    /// Multi-octave 3D uniform noise in `[0, 1]`. See [`Self::noise_octaves_2d`].
    #[must_use]
    pub fn noise_octaves_3d<T: AsPrimitive<f32>>(
        &self,
        x: T,
        y: T,
        z: T,
        octaves: u32,
        persistence: T,
    ) -> f32 {
        Correction::Octaves3D.apply(self.raw_octaves_3d(x, y, z, octaves, persistence))
    }

    /// [`Self::noise_2d`] at a vector position.
    #[must_use]
    pub fn noise_vec2(&self, pos: Vec2) -> f32 {
        Correction::Single2D.apply(self.noise.sample_vec2(pos))
    }

    /// [`Self::noise_3d`] at a vector position.
    #[must_use]
    pub fn noise_vec3(&self, pos: Vec3) -> f32 {
        Correction::Single3D.apply(self.noise.sample_vec3(pos))
    }

    /// Single-octave 2D noise flattened with an explicit curve.
    #[must_use]
    pub fn corrected_2d<T: AsPrimitive<f32>>(&self, x: T, y: T, correction: Correction) -> f32 {
        correction.apply(self.raw_2d(x, y))
    }

    /// Single-octave 3D noise flattened with an explicit curve.
    #[must_use]
    pub fn corrected_3d<T: AsPrimitive<f32>>(
        &self,
        x: T,
        y: T,
        z: T,
        correction: Correction,
    ) -> f32 {
        correction.apply(self.raw_3d(x, y, z))
    }

    /// Uncorrected single-octave 2D noise, nominally in `[-1, 1]`.
    #[must_use]
    pub fn raw_2d<T: AsPrimitive<f32>>(&self, x: T, y: T) -> f32 {
        self.noise.sample_2d(x.as_(), y.as_())
    }

    /// Uncorrected single-octave 3D noise, nominally in `[-1, 1]`.
    #[must_use]
    pub fn raw_3d<T: AsPrimitive<f32>>(&self, x: T, y: T, z: T) -> f32 {
        self.noise.sample_3d(x.as_(), y.as_(), z.as_())
    }

    /// Uncorrected octave sum in 2D.
    #[must_use]
    pub fn raw_octaves_2d<T: AsPrimitive<f32>>(
        &self,
        x: T,
        y: T,
        octaves: u32,
        persistence: T,
    ) -> f32 {
        self.noise
            .fbm_2d(x.as_(), y.as_(), octaves, persistence.as_())
    }

    /// Uncorrected octave sum in 3D.
    #[must_use]
    pub fn raw_octaves_3d<T: AsPrimitive<f32>>(
        &self,
        x: T,
        y: T,
        z: T,
        octaves: u32,
        persistence: T,
    ) -> f32 {
        self.noise
            .fbm_3d(x.as_(), y.as_(), z.as_(), octaves, persistence.as_())
    }
}
