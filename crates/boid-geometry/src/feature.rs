//! Tagged variant over the surface representations a behavior can steer
//! against.

use boid_core::Vec3;

use crate::{CurveQuery, Plane, SurfaceQuery};

/// One piece of environment geometry, borrowed for a single behavior call.
///
/// Points and infinite planes are concrete values; curves, meshes, and
/// solids are handles into the external geometry kernel.  Behaviors dispatch
/// with an explicit `match`, and each behavior documents which variants it
/// supports — unsupported variants are skipped, not errors.
///
/// `Mesh` and `Solid` share the [`SurfaceQuery`] contract but remain
/// distinct variants: some behaviors only honor a solid's contact when it is
/// interior to a face, while mesh contacts always count.
pub enum Feature<'a> {
    /// A bare point.
    Point(Vec3),

    /// An infinite oriented plane.
    Plane(Plane),

    /// A curve owned by the geometry kernel.
    Curve(&'a dyn CurveQuery),

    /// A polygon mesh owned by the geometry kernel.
    Mesh(&'a dyn SurfaceQuery),

    /// A boundary-representation solid owned by the geometry kernel.
    Solid(&'a dyn SurfaceQuery),
}
