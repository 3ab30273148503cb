//! The geometry kernel's contract.
//!
//! Curves, meshes, and boundary-representation solids are owned by an
//! external geometry kernel; the steering behaviors only ever need two
//! queries against them — closest point and path intersection — so that is
//! the whole interface.  Implementations are borrowed for the duration of
//! one behavior call and never retained.

use boid_core::Vec3;

/// Closest-point result on a curve.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurveContact {
    /// Closest point on the curve.
    pub point: Vec3,

    /// Curve tangent at that point (unit length by convention).
    pub tangent: Vec3,

    /// `true` when the closest parameter lies inside the curve's domain
    /// rather than clamped to an endpoint.
    pub interior: bool,
}

/// Closest-point or intersection result on a surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceContact {
    /// Contact point on the surface.
    pub point: Vec3,

    /// Outward surface normal at that point (unit length by convention).
    pub normal: Vec3,

    /// `true` when the contact lies inside a face's parameter domain
    /// rather than on a trim/edge clamp.  Meshes always report `true`.
    pub interior: bool,
}

/// Closest-point query against a curve.
pub trait CurveQuery {
    /// Closest point on the curve to `query`, or `None` when the curve is
    /// invalid/empty.
    fn closest_point(&self, query: Vec3) -> Option<CurveContact>;
}

/// Closest-point and path-intersection queries against a mesh or solid.
pub trait SurfaceQuery {
    /// Closest point on the surface to `query`.
    ///
    /// `max_distance` is a search cutoff hint; implementations may return
    /// `None` for contacts beyond it.  Pass `f64::INFINITY` for no cutoff.
    fn closest_point(&self, query: Vec3, max_distance: f64) -> Option<SurfaceContact>;

    /// First intersection of the segment `start..end` with the surface.
    ///
    /// `tolerance` is proportional to the path length (models can be
    /// arbitrary scale); implementations treat it as their intersection
    /// tolerance, not a search radius.
    fn intersect_segment(&self, start: Vec3, end: Vec3, tolerance: f64) -> Option<SurfaceContact>;
}
