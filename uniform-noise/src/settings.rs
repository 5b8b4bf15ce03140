//! Serializable noise configuration and the sampler built from it.
//!
//! Embedding applications can keep a [`NoiseSettings`] in their own config
//! files; every field has a default, so an empty table is valid.
//!
//! ```
//! use uniform_noise::{Correction, NoiseSettings};
//!
//! let settings = NoiseSettings {
//!     seed: Some(7),
//!     ..NoiseSettings::default()
//! };
//! let sampler = settings.build().unwrap();
//! let v = sampler.sample_2d(0.5, 0.5);
//! assert!((0.0..=1.0).contains(&v));
//! assert_eq!(sampler.correction_2d(), Correction::Octaves2D);
//! ```

use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

use crate::distribution::Correction;
use crate::error::NoiseError;
use crate::sampler::UniformNoise;

/// Highest supported octave count.
///
/// At the fitted persistence the next octave has amplitude `2^-32`, far below
/// `f32` resolution next to the first octave, so further passes only cost time.
/// Lattice indices wrap, so large scaled coordinates are not the limit.
pub const MAX_OCTAVES: u32 = 32;

/// Octave count the octave correction curves were fitted on.
pub const FITTED_OCTAVES: u32 = 4;
/// Persistence the octave correction curves were fitted on.
pub const FITTED_PERSISTENCE: f32 = 0.5;

/// Octave count and per-octave amplitude falloff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OctaveParams {
    /// Number of summed passes.
    pub octaves: u32,
    /// Amplitude multiplier applied after each pass.
    pub persistence: f32,
}

impl Default for OctaveParams {
    fn default() -> Self {
        Self {
            octaves: FITTED_OCTAVES,
            persistence: FITTED_PERSISTENCE,
        }
    }
}

impl OctaveParams {
    /// Validate a signed octave count and a persistence.
    pub fn new(octaves: i64, persistence: f32) -> Result<Self, NoiseError> {
        let octaves = u32::try_from(octaves).map_err(|_| {
            if octaves < 0 {
                NoiseError::NegativeOctaves(octaves)
            } else {
                NoiseError::TooManyOctaves(u32::MAX)
            }
        })?;
        let params = Self {
            octaves,
            persistence,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the parameters are usable.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.octaves > MAX_OCTAVES {
            return Err(NoiseError::TooManyOctaves(self.octaves));
        }
        if !self.persistence.is_finite() {
            return Err(NoiseError::NonFinitePersistence(self.persistence));
        }
        Ok(())
    }

    /// Whether these are the parameters the octave curves were fitted on.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_fitted(&self) -> bool {
        self.octaves == FITTED_OCTAVES && self.persistence == FITTED_PERSISTENCE
    }
}

/// Full configuration for an [`OctaveSampler`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseSettings {
    /// Fixed seed. `None` uses the process default seed.
    pub seed: Option<i32>,
    /// Octave parameters, flattened into the settings table.
    #[serde(flatten)]
    pub octaves: OctaveParams,
    /// Curve for 2D samples. `None` picks the canonical curve for the octave count.
    pub correction_2d: Option<Correction>,
    /// Curve for 3D samples. `None` picks the canonical curve for the octave count.
    pub correction_3d: Option<Correction>,
}

impl NoiseSettings {
    /// Validate the settings and build a sampler from them.
    pub fn build(&self) -> Result<OctaveSampler, NoiseError> {
        self.octaves.validate()?;

        let noise = self.seed.map_or_else(UniformNoise::default, UniformNoise::new);
        let params = self.octaves;
        let correction_2d = self
            .correction_2d
            .unwrap_or_else(|| Correction::for_octaves_2d(params.octaves));
        let correction_3d = self
            .correction_3d
            .unwrap_or_else(|| Correction::for_octaves_3d(params.octaves));

        tracing::debug!(
            seed = noise.seed(),
            octaves = params.octaves,
            persistence = params.persistence,
            %correction_2d,
            %correction_3d,
            "built octave noise sampler"
        );

        let uses_octave_fit = correction_2d.is_octave_fit() || correction_3d.is_octave_fit();
        if uses_octave_fit && !params.is_fitted() {
            tracing::warn!(
                octaves = params.octaves,
                persistence = params.persistence,
                "octave correction was fitted for {FITTED_OCTAVES} octaves at persistence \
                 {FITTED_PERSISTENCE}; output will be less uniform"
            );
        }

        Ok(OctaveSampler {
            noise,
            params,
            correction_2d,
            correction_3d,
        })
    }
}

/// A [`UniformNoise`] bound to fixed octave parameters and correction curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OctaveSampler {
    noise: UniformNoise,
    params: OctaveParams,
    correction_2d: Correction,
    correction_3d: Correction,
}

impl OctaveSampler {
    /// Corrected 2D sample in `[0, 1]`.
    #[must_use]
    pub fn sample_2d<T: AsPrimitive<f32>>(&self, x: T, y: T) -> f32 {
        let raw = self
            .noise
            .gradient_noise()
            .fbm_2d(x.as_(), y.as_(), self.params.octaves, self.params.persistence);
        self.correction_2d.apply(raw)
    }

    /// Corrected 3D sample in `[0, 1]`.
    #[must_use]
    pub fn sample_3d<T: AsPrimitive<f32>>(&self, x: T, y: T, z: T) -> f32 {
        let raw = self.noise.gradient_noise().fbm_3d(
            x.as_(),
            y.as_(),
            z.as_(),
            self.params.octaves,
            self.params.persistence,
        );
        self.correction_3d.apply(raw)
    }

    /// The seeded noise this sampler draws from.
    #[must_use]
    pub const fn noise(&self) -> &UniformNoise {
        &self.noise
    }

    /// The octave parameters in use.
    #[must_use]
    pub const fn params(&self) -> OctaveParams {
        self.params
    }

    /// The curve applied to 2D samples.
    #[must_use]
    pub const fn correction_2d(&self) -> Correction {
        self.correction_2d
    }

    /// The curve applied to 3D samples.
    #[must_use]
    pub const fn correction_3d(&self) -> Correction {
        self.correction_3d
    }

    /// The settings that rebuild this sampler.
    #[must_use]
    pub const fn settings(&self) -> NoiseSettings {
        NoiseSettings {
            seed: Some(self.noise.seed()),
            octaves: self.params,
            correction_2d: Some(self.correction_2d),
            correction_3d: Some(self.correction_3d),
        }
    }
}
