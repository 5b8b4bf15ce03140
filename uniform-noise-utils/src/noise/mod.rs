//! Gradient noise primitives.
//!
//! - [`GradientNoise`] - Seeded 2D/3D gradient noise over a hashed integer lattice
//! - [`GradientNoise::fbm_2d`] / [`GradientNoise::fbm_3d`] - Octave summation on top of it
//!
//! Output here is raw: roughly bell-shaped around zero. Flattening it to a
//! uniform distribution happens one layer up.

mod gradient_noise;
mod gradients;
mod octave_noise;

pub use gradient_noise::GradientNoise;
pub use octave_noise::LACUNARITY;
