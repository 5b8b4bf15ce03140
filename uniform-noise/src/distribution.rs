//! Flattening of raw gradient noise into an approximately uniform `[0, 1]` value.
//!
//! Raw gradient noise is roughly bell-shaped. Each curve here is a fifth-degree
//! polynomial fitted to the empirical CDF of one noise configuration, evaluated
//! only inside the input range it was fitted on and hard-clamped outside it.
//!
//! # Curves
//!
//! - [`Correction::Single2D`] / [`Correction::Single3D`] - one octave
//! - [`Correction::Octaves2D`] / [`Correction::Octaves3D`] - 4 octaves, persistence 0.5
//! - [`Correction::BiasCorrected2D`] - alternate one-octave 2D fit, rescaled to hit
//!   the `(-1, 0)` and `(1, 1)` endpoints, no input clamp

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NoiseError;

/// A fitted CDF approximation: `clamp((poly(x) + bias) * scale, 0, 1)`.
///
/// Inputs at or below `lower` map to exactly `0.0`, at or above `upper` to
/// exactly `1.0`. The polynomial is not trustworthy outside that range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CdfCurve {
    /// Lower end of the fitted input range.
    pub lower: f32,
    /// Upper end of the fitted input range.
    pub upper: f32,
    /// Polynomial coefficients, highest degree first (`c5..c0`).
    pub coefficients: [f32; 6],
    /// Added to the polynomial before scaling.
    pub bias: f32,
    /// Multiplies the biased polynomial.
    pub scale: f32,
}

impl CdfCurve {
    const fn fitted(lower: f32, upper: f32, coefficients: [f32; 6]) -> Self {
        Self {
            lower,
            upper,
            coefficients,
            bias: 0.0,
            scale: 1.0,
        }
    }

    /// Horner evaluation of the bare polynomial, without bounds or bias.
    #[inline]
    #[must_use]
    pub fn polynomial(&self, x: f32) -> f32 {
        self.coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Map a raw noise value into `[0, 1]`.
    ///
    /// Infinities clamp like any other out-of-domain value. NaN is treated as
    /// `0.0`, the noise mean, so the output is never NaN.
    #[inline]
    #[must_use]
    pub fn apply(&self, x: f32) -> f32 {
        let x = if x.is_nan() { 0.0 } else { x };
        if x <= self.lower {
            return 0.0;
        }
        if x >= self.upper {
            return 1.0;
        }
        ((self.polynomial(x) + self.bias) * self.scale).clamp(0.0, 1.0)
    }
}

#[allow(clippy::unreadable_literal)]
static SINGLE_2D: CdfCurve = CdfCurve::fitted(
    -0.73,
    0.751,
    [1.0616674, -4.779669e-2, -1.5704816, 2.3737413e-2, 1.2176103, 4.9882874e-1],
);

#[allow(clippy::unreadable_literal)]
static SINGLE_3D: CdfCurve = CdfCurve::fitted(
    -0.662,
    0.66,
    [2.0015578, 2.8363844e-3, -2.4018942, -9.9932467e-4, 1.4237269, 5.0005216e-1],
);

// Fitted on [-0.9, 0.9].
#[allow(clippy::unreadable_literal)]
static OCTAVES_2D: CdfCurve = CdfCurve::fitted(
    -0.897,
    0.891,
    [5.5801775e-1, 3.4876526e-3, -1.102035, -2.1366362e-3, 1.083566, 5.0009794e-1],
);

// Fitted on [-0.8, 0.8].
#[allow(clippy::unreadable_literal)]
static OCTAVES_3D: CdfCurve = CdfCurve::fitted(
    -0.796,
    0.793,
    [9.8832232e-1, 2.1932919e-3, -1.6058296, -1.3540642e-3, 1.2490637, 5.0019288e-1],
);

#[allow(clippy::unreadable_literal, clippy::excessive_precision)]
static BIAS_CORRECTED_2D: CdfCurve = CdfCurve {
    lower: f32::NEG_INFINITY,
    upper: f32::INFINITY,
    coefficients: [0.745671, 0.00309887, -1.53841, -0.00343488, 1.29551, 0.500516],
    bias: 0.002591009999999949,
    scale: 0.99448854448,
};

/// Selects one of the fitted CDF curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Correction {
    /// Single-octave 2D noise.
    #[serde(rename = "single_2d")]
    Single2D,
    /// Single-octave 3D noise.
    #[serde(rename = "single_3d")]
    Single3D,
    /// 2D noise summed over 4 octaves at persistence 0.5.
    #[serde(rename = "octaves_2d")]
    Octaves2D,
    /// 3D noise summed over 4 octaves at persistence 0.5.
    #[serde(rename = "octaves_3d")]
    Octaves3D,
    /// Alternate single-octave 2D fit with an endpoint bias correction.
    ///
    /// Measurably less uniform than [`Correction::Single2D`]; kept for output
    /// compatibility with data generated through it.
    #[serde(rename = "bias_corrected_2d")]
    BiasCorrected2D,
}

impl Correction {
    /// Every curve, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Single2D,
        Self::Single3D,
        Self::Octaves2D,
        Self::Octaves3D,
        Self::BiasCorrected2D,
    ];

    /// The curve's coefficients and bounds.
    #[must_use]
    pub const fn curve(self) -> &'static CdfCurve {
        match self {
            Self::Single2D => &SINGLE_2D,
            Self::Single3D => &SINGLE_3D,
            Self::Octaves2D => &OCTAVES_2D,
            Self::Octaves3D => &OCTAVES_3D,
            Self::BiasCorrected2D => &BIAS_CORRECTED_2D,
        }
    }

    /// Map a raw noise value into `[0, 1]` with this curve.
    #[inline]
    #[must_use]
    pub fn apply(self, raw: f32) -> f32 {
        self.curve().apply(raw)
    }

    /// Whether the curve was fitted on 4-octave, 0.5-persistence sums.
    #[must_use]
    pub const fn is_octave_fit(self) -> bool {
        matches!(self, Self::Octaves2D | Self::Octaves3D)
    }

    /// Whether the curve expects 3D noise.
    #[must_use]
    pub const fn is_3d(self) -> bool {
        matches!(self, Self::Single3D | Self::Octaves3D)
    }

    /// The canonical 2D curve for a given octave count.
    #[must_use]
    pub const fn for_octaves_2d(octaves: u32) -> Self {
        if octaves <= 1 {
            Self::Single2D
        } else {
            Self::Octaves2D
        }
    }

    /// The canonical 3D curve for a given octave count.
    #[must_use]
    pub const fn for_octaves_3d(octaves: u32) -> Self {
        if octaves <= 1 {
            Self::Single3D
        } else {
            Self::Octaves3D
        }
    }

    /// The name used by `Display`, `FromStr` and serde.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Single2D => "single_2d",
            Self::Single3D => "single_3d",
            Self::Octaves2D => "octaves_2d",
            Self::Octaves3D => "octaves_3d",
            Self::BiasCorrected2D => "bias_corrected_2d",
        }
    }
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Correction {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| NoiseError::UnknownCorrection(s.to_owned()))
    }
}
