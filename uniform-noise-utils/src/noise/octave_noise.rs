//! Fractal (fBm) summation of [`GradientNoise`] octaves.
//!
//! Each pass doubles the frequency and multiplies the amplitude by the
//! persistence. The sum is returned as is: its spread depends on the octave
//! parameters, and flattening it is left to the caller.
//!
//! Summation stops early once the amplitude reaches zero or a scaled
//! coordinate or amplitude leaves the finite `f32` range, so finite input
//! never produces NaN whatever the octave count.

use crate::noise::GradientNoise;

/// Frequency growth per octave.
pub const LACUNARITY: f32 = 2.0;

impl GradientNoise {
    /// Sum `octaves` passes of 2D noise.
    ///
    /// Starts at frequency 1 and amplitude 1. Zero octaves yield `0.0`. Any
    /// persistence is accepted; values of 1 or more let later octaves dominate.
    #[must_use]
    pub fn fbm_2d(&self, x: f32, y: f32, octaves: u32, persistence: f32) -> f32 {
        let mut value: f32 = 0.0;
        let mut frequency: f32 = 1.0;
        let mut amplitude: f32 = 1.0;

        for _ in 0..octaves {
            let (sx, sy) = (x * frequency, y * frequency);
            if !contributes(amplitude, &[sx, sy]) {
                break;
            }
            value += self.sample_2d(sx, sy) * amplitude;
            if !value.is_finite() {
                break;
            }
            amplitude *= persistence;
            frequency *= LACUNARITY;
        }

        value
    }

    /// Sum `octaves` passes of 3D noise. See [`Self::fbm_2d`].
    #[must_use]
    pub fn fbm_3d(&self, x: f32, y: f32, z: f32, octaves: u32, persistence: f32) -> f32 {
        let mut value: f32 = 0.0;
        let mut frequency: f32 = 1.0;
        let mut amplitude: f32 = 1.0;

        for _ in 0..octaves {
            let (sx, sy, sz) = (x * frequency, y * frequency, z * frequency);
            if !contributes(amplitude, &[sx, sy, sz]) {
                break;
            }
            value += self.sample_3d(sx, sy, sz) * amplitude;
            if !value.is_finite() {
                break;
            }
            amplitude *= persistence;
            frequency *= LACUNARITY;
        }

        value
    }
}

/// Whether another octave can still add a finite, non-zero term.
#[inline]
fn contributes(amplitude: f32, scaled: &[f32]) -> bool {
    amplitude != 0.0 && amplitude.is_finite() && scaled.iter().all(|c| c.is_finite())
}
