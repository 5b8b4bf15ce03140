//! Perlin-style gradient noise distributed uniformly over `[0, 1]`.
//!
//! Raw gradient noise clusters around its mean. This crate samples it through
//! [`uniform_noise_utils::noise::GradientNoise`] and flattens the result with a
//! polynomial approximation of the noise CDF, so every output bin is about
//! equally likely.
//!
//! # Key Types
//!
//! - [`UniformNoise`] - Seeded sampler for single- and multi-octave noise
//! - [`Correction`] - The fitted CDF curves
//! - [`NoiseSettings`] / [`OctaveSampler`] - Serializable configuration and the sampler it builds
//! - [`global`] - Free functions over a process-wide seed
//! - [`histogram`] - Uniformity diagnostics
//!
//! ```
//! use uniform_noise::UniformNoise;
//!
//! let noise = UniformNoise::new(42);
//! let v = noise.noise_octaves_2d(12.5, 3.25, 4, 0.5);
//! assert!((0.0..=1.0).contains(&v));
//! ```

pub mod distribution;
pub mod error;
pub mod global;
pub mod histogram;
pub mod sampler;
pub mod settings;

pub use distribution::{CdfCurve, Correction};
pub use error::NoiseError;
pub use sampler::{UniformNoise, default_seed};
pub use settings::{NoiseSettings, OctaveParams, OctaveSampler};
