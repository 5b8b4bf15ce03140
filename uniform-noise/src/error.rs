//! Errors raised while validating noise configuration.
//!
//! Evaluation itself never fails; only caller-supplied parameters are checked.

use thiserror::Error;

/// An error that can occur while building a noise configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoiseError {
    /// A signed octave count was below zero.
    #[error("Octave count must not be negative, got {0}")]
    NegativeOctaves(i64),
    /// More octaves than [`crate::settings::MAX_OCTAVES`].
    #[error("At most {max} octaves are supported, got {0}", max = crate::settings::MAX_OCTAVES)]
    TooManyOctaves(u32),
    /// Persistence was NaN or infinite.
    #[error("Persistence must be finite, got {0}")]
    NonFinitePersistence(f32),
    /// A correction curve name did not match any known curve.
    #[error("Unknown correction curve: {0}")]
    UnknownCorrection(String),
}
