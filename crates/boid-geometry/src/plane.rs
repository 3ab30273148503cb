//! Infinite oriented plane: the workhorse of the reflection and sliding
//! behaviors.

use boid_core::Vec3;

/// An infinite plane through `origin` with unit `normal`.
///
/// Constructors unitize the normal and refuse degenerate input, so every
/// `Plane` in existence has a well-defined orientation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    origin: Vec3,
    normal: Vec3,
}

impl Plane {
    /// Plane through `origin` oriented by `normal` (any length).
    /// `None` when the normal is zero.
    pub fn new(origin: Vec3, normal: Vec3) -> Option<Plane> {
        normal.unit().map(|normal| Plane { origin, normal })
    }

    /// Plane through `origin` spanned by two direction vectors.
    /// `None` when the directions are parallel or zero.
    pub fn from_span(origin: Vec3, x: Vec3, y: Vec3) -> Option<Plane> {
        Plane::new(origin, x.cross(y))
    }

    #[inline]
    pub fn origin(self) -> Vec3 {
        self.origin
    }

    #[inline]
    pub fn normal(self) -> Vec3 {
        self.normal
    }

    /// Distance from the plane along the normal; negative on the back side.
    #[inline]
    pub fn signed_distance(self, point: Vec3) -> f64 {
        (point - self.origin).dot(self.normal)
    }

    /// Orthogonal projection of `point` onto the plane.
    #[inline]
    pub fn closest_point(self, point: Vec3) -> Vec3 {
        point - self.normal * self.signed_distance(point)
    }

    /// Planar projection of a *direction*: strips the normal component.
    /// The result is zero when `direction` is parallel to the normal.
    #[inline]
    pub fn project_direction(self, direction: Vec3) -> Vec3 {
        direction - self.normal * direction.dot(self.normal)
    }

    /// Reflection of `point` through the plane.
    #[inline]
    pub fn mirror_point(self, point: Vec3) -> Vec3 {
        point - self.normal * (2.0 * self.signed_distance(point))
    }

    /// Intersection of the segment `start..end` with the plane, if any.
    ///
    /// A segment lying in (or parallel to) the plane yields `None` — the
    /// reflection solver treats grazing motion as a miss.
    pub fn intersect_segment(self, start: Vec3, end: Vec3) -> Option<Vec3> {
        let direction = end - start;
        let denom = direction.dot(self.normal);
        if denom == 0.0 {
            return None;
        }
        let t = (self.origin - start).dot(self.normal) / denom;
        (0.0..=1.0).contains(&t).then(|| start + direction * t)
    }

    /// Rotate `point` about the plane's normal axis through its origin.
    #[inline]
    pub fn rotate_about_normal(self, point: Vec3, angle: f64) -> Vec3 {
        self.origin + (point - self.origin).rotated_about(self.normal, angle)
    }
}
