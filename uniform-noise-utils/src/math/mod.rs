//! Scalar helpers shared by the noise engine.
//!
//! Everything here produces `f32` and is written so the operation order is
//! fixed; the noise output is expected to be bit-identical across runs.

/// Number of distinct lattice cells per axis; cell indices wrap at this period.
const LATTICE_PERIOD: f64 = 4_294_967_296.0;

/// Split a coordinate into its lattice cell and the offset inside that cell.
///
/// Truncates non-negative inputs and truncates-then-subtracts-one for negative
/// inputs. This differs from [`f32::floor`] at exact negative integers:
/// `-1.0` lands in cell `-2` at offset `1.0` instead of cell `-1` at offset
/// `0.0`, which the quintic weights map to the same interpolated value.
///
/// The floor is taken in `f64`, which holds every `f32` integer exactly, so
/// the offset stays in `[0, 1]` for any finite input. The cell index wraps
/// into `i32` the same way the corner hashes do.
#[inline]
#[must_use]
pub fn lattice_floor(f: f32) -> (i32, f32) {
    let wide = f64::from(f);
    let truncated = wide.trunc();
    let floor = if f >= 0.0 {
        truncated
    } else {
        truncated - 1.0
    };
    let offset = (wide - floor) as f32;
    let cell = floor.rem_euclid(LATTICE_PERIOD) as u32 as i32;
    (cell, offset)
}

/// Quintic ease curve `6t^5 - 15t^4 + 10t^3`.
///
/// Both the first and second derivative vanish at 0 and 1, so lattice cell
/// boundaries stay invisible in the interpolated field.
#[inline]
#[must_use]
pub fn smoothstep(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation, `a + alpha * (b - a)`.
#[inline]
#[must_use]
pub fn lerp(alpha: f32, a: f32, b: f32) -> f32 {
    a + alpha * (b - a)
}

/// Bilinear interpolation, X first.
#[inline]
#[must_use]
pub fn lerp2(a1: f32, a2: f32, x00: f32, x10: f32, x01: f32, x11: f32) -> f32 {
    lerp(a2, lerp(a1, x00, x10), lerp(a1, x01, x11))
}

/// Trilinear interpolation, X then Y then Z.
#[inline]
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn lerp3(
    a1: f32,
    a2: f32,
    a3: f32,
    x000: f32,
    x100: f32,
    x010: f32,
    x110: f32,
    x001: f32,
    x101: f32,
    x011: f32,
    x111: f32,
) -> f32 {
    lerp(
        a3,
        lerp2(a1, a2, x000, x100, x010, x110),
        lerp2(a1, a2, x001, x101, x011, x111),
    )
}
