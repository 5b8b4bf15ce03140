//! Noise primitives for the uniform noise workspace.
//!
//! - [`math`] - Floor, interpolation and easing helpers in `f32`
//! - [`noise`] - Seeded gradient noise and its octave summation

pub mod math;
pub mod noise;
