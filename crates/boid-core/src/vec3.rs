//! 3-component vector type used for agent positions, velocities, and
//! steering outputs.
//!
//! All distance comparisons in the behavior crates go through
//! [`length_squared`][Vec3::length_squared] — the square root is taken only
//! when an actual magnitude is needed.  A zero-length vector means
//! "undefined / at rest"; operations that require a direction return `None`
//! for it rather than producing NaN.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 3D vector (or point — the crates use one type for both).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    /// Fallback direction substituted when a computation needs a direction
    /// but the input is degenerate (e.g. two exactly coincident agents).
    pub const UNIT_X: Vec3 = Vec3 { x: 1.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Exact zero test.  Matches the "undefined / at rest" sentinel; callers
    /// that care about near-zero use `length_squared()` against a tolerance.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Unit vector in this direction, or `None` for a zero vector.
    pub fn unit(self) -> Option<Vec3> {
        let len_sq = self.length_squared();
        if len_sq > 0.0 { Some(self / len_sq.sqrt()) } else { None }
    }

    /// This direction rescaled to `length`, or `None` for a zero vector.
    pub fn with_length(self, length: f64) -> Option<Vec3> {
        self.unit().map(|u| u * length)
    }

    /// Unsigned angle to `other` in `[0, π]`, or `None` when either vector
    /// is zero (the angle is undefined).
    pub fn angle_to(self, other: Vec3) -> Option<f64> {
        let denom_sq = self.length_squared() * other.length_squared();
        if denom_sq == 0.0 {
            return None;
        }
        let cos = (self.dot(other) / denom_sq.sqrt()).clamp(-1.0, 1.0);
        Some(cos.acos())
    }

    /// Rotate about `axis` by `angle` radians (Rodrigues' formula).
    ///
    /// The axis need not be unit length.  A degenerate (zero) axis leaves the
    /// vector unchanged — rotation about nothing is a no-op, not an error.
    pub fn rotated_about(self, axis: Vec3, angle: f64) -> Vec3 {
        let Some(k) = axis.unit() else {
            return self;
        };
        let (sin, cos) = angle.sin_cos();
        self * cos + k.cross(self) * sin + k * (k.dot(self) * (1.0 - cos))
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec3) {
        *self = *self - rhs;
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, s: f64) -> Vec3 {
        Vec3::new(self.x * s, self.y * s, self.z * s)
    }
}

impl MulAssign<f64> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, s: f64) {
        *self = *self * s;
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn div(self, s: f64) -> Vec3 {
        Vec3::new(self.x / s, self.y / s, self.z / s)
    }
}

impl DivAssign<f64> for Vec3 {
    #[inline]
    fn div_assign(&mut self, s: f64) {
        *self = *self / s;
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6}, {:.6})", self.x, self.y, self.z)
    }
}
