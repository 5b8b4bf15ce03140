//! Hash-based gradient noise over the integer lattice.
//!
//! Instead of a shuffled permutation table, each lattice corner is hashed from
//! its prime-scaled coordinates and the seed, and the hash picks a gradient from
//! a fixed table. The seed therefore costs nothing to change: there is no table
//! to rebuild.

use glam::{Vec2, Vec3};

use crate::math::{lattice_floor, lerp2, lerp3, smoothstep};
use crate::noise::gradients::{GRADIENTS_2D, GRADIENTS_3D};

/// Large odd primes that decorrelate the axes before hashing.
#[allow(clippy::unreadable_literal)]
const PRIME_X: i32 = 501125321;
#[allow(clippy::unreadable_literal)]
const PRIME_Y: i32 = 1136930381;
#[allow(clippy::unreadable_literal)]
const PRIME_Z: i32 = 1720413743;

/// Odd multiplier that spreads the combined corner bits.
const HASH_MULTIPLIER: i32 = 0x27d4_eb2d;

/// Scales 2D output to roughly `[-1, 1]`.
#[allow(clippy::excessive_precision, clippy::unreadable_literal)]
const NORMALIZE_2D: f32 = 1.4247691104677813;
/// Scales 3D output to roughly `[-1, 1]`.
#[allow(clippy::excessive_precision, clippy::unreadable_literal)]
const NORMALIZE_3D: f32 = 0.964921414852142333984375;

/// Gradient noise generator bound to one seed.
///
/// Cheap to copy and free of interior state; two instances with the same seed
/// produce bit-identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GradientNoise {
    seed: i32,
}

impl GradientNoise {
    /// Create a generator for the given seed. Every `i32` is a valid seed.
    #[must_use]
    pub const fn new(seed: i32) -> Self {
        Self { seed }
    }

    /// The seed mixed into every corner hash.
    #[must_use]
    pub const fn seed(&self) -> i32 {
        self.seed
    }

    /// Sample 2D gradient noise.
    ///
    /// Returns a value nominally in `[-1, 1]`. The bound is a property of the
    /// normalisation constant, not a guarantee. Exactly `0.0` on lattice points.
    #[must_use]
    pub fn sample_2d(&self, x: f32, y: f32) -> f32 {
        let (x0, xd0) = lattice_floor(x);
        let (y0, yd0) = lattice_floor(y);

        let xd1 = xd0 - 1.0;
        let yd1 = yd0 - 1.0;

        let xs = smoothstep(xd0);
        let ys = smoothstep(yd0);

        let x0 = x0.wrapping_mul(PRIME_X);
        let y0 = y0.wrapping_mul(PRIME_Y);
        let x1 = x0.wrapping_add(PRIME_X);
        let y1 = y0.wrapping_add(PRIME_Y);

        let d00 = self.grad_coord_2d(x0, y0, xd0, yd0);
        let d10 = self.grad_coord_2d(x1, y0, xd1, yd0);
        let d01 = self.grad_coord_2d(x0, y1, xd0, yd1);
        let d11 = self.grad_coord_2d(x1, y1, xd1, yd1);

        lerp2(xs, ys, d00, d10, d01, d11) * NORMALIZE_2D
    }

    /// Sample 3D gradient noise.
    ///
    /// Returns a value nominally in `[-1, 1]`. Exactly `0.0` on lattice points.
    #[must_use]
    #[allow(clippy::many_single_char_names, clippy::similar_names)]
    pub fn sample_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let (x0, xd0) = lattice_floor(x);
        let (y0, yd0) = lattice_floor(y);
        let (z0, zd0) = lattice_floor(z);

        let xd1 = xd0 - 1.0;
        let yd1 = yd0 - 1.0;
        let zd1 = zd0 - 1.0;

        let xs = smoothstep(xd0);
        let ys = smoothstep(yd0);
        let zs = smoothstep(zd0);

        let x0 = x0.wrapping_mul(PRIME_X);
        let y0 = y0.wrapping_mul(PRIME_Y);
        let z0 = z0.wrapping_mul(PRIME_Z);
        let x1 = x0.wrapping_add(PRIME_X);
        let y1 = y0.wrapping_add(PRIME_Y);
        let z1 = z0.wrapping_add(PRIME_Z);

        let d000 = self.grad_coord_3d(x0, y0, z0, xd0, yd0, zd0);
        let d100 = self.grad_coord_3d(x1, y0, z0, xd1, yd0, zd0);
        let d010 = self.grad_coord_3d(x0, y1, z0, xd0, yd1, zd0);
        let d110 = self.grad_coord_3d(x1, y1, z0, xd1, yd1, zd0);
        let d001 = self.grad_coord_3d(x0, y0, z1, xd0, yd0, zd1);
        let d101 = self.grad_coord_3d(x1, y0, z1, xd1, yd0, zd1);
        let d011 = self.grad_coord_3d(x0, y1, z1, xd0, yd1, zd1);
        let d111 = self.grad_coord_3d(x1, y1, z1, xd1, yd1, zd1);

        lerp3(
            xs, ys, zs, d000, d100, d010, d110, d001, d101, d011, d111,
        ) * NORMALIZE_3D
    }

    /// [`Self::sample_2d`] at a vector position.
    #[inline]
    #[must_use]
    pub fn sample_vec2(&self, pos: Vec2) -> f32 {
        self.sample_2d(pos.x, pos.y)
    }

    /// [`Self::sample_3d`] at a vector position.
    #[inline]
    #[must_use]
    pub fn sample_vec3(&self, pos: Vec3) -> f32 {
        self.sample_3d(pos.x, pos.y, pos.z)
    }

    /// Dot product of the hashed corner gradient with the corner offset.
    #[inline]
    fn grad_coord_2d(&self, x_primed: i32, y_primed: i32, xd: f32, yd: f32) -> f32 {
        let mut hash = self.hash_2d(x_primed, y_primed);
        hash ^= hash >> 15;
        let index = (hash & (127 << 1)) as usize;

        xd * GRADIENTS_2D[index] + yd * GRADIENTS_2D[index | 1]
    }

    #[inline]
    #[allow(clippy::too_many_arguments)]
    fn grad_coord_3d(
        &self,
        x_primed: i32,
        y_primed: i32,
        z_primed: i32,
        xd: f32,
        yd: f32,
        zd: f32,
    ) -> f32 {
        let mut hash = self.hash_3d(x_primed, y_primed, z_primed);
        hash ^= hash >> 15;
        let index = (hash & (63 << 2)) as usize;

        xd * GRADIENTS_3D[index] + yd * GRADIENTS_3D[index | 1] + zd * GRADIENTS_3D[index | 2]
    }

    #[inline]
    const fn hash_2d(&self, x_primed: i32, y_primed: i32) -> i32 {
        (self.seed ^ x_primed ^ y_primed).wrapping_mul(HASH_MULTIPLIER)
    }

    #[inline]
    const fn hash_3d(&self, x_primed: i32, y_primed: i32, z_primed: i32) -> i32 {
        (self.seed ^ x_primed ^ y_primed ^ z_primed).wrapping_mul(HASH_MULTIPLIER)
    }
}
