//! Nearest-feature behaviors: steer onto, along, or around the closest
//! qualifying piece of environment geometry.
//!
//! All three behaviors share one scanning pattern: dispatch on each
//! [`Feature`] variant to derive a candidate, filter its squared distance
//! *strictly* against the domain (`min² < d² < max²`, `max ≤ 0` unbounded),
//! and keep a streaming minimum where the first feature to reach a given
//! distance wins — a later feature at an equal distance never replaces it.

use boid_core::{Domain, Vec3};
use boid_geometry::{Feature, Plane};

/// Strict domain filter shared by stick/slide/revolve.
#[inline]
fn qualifies(d2: f64, domain: Domain, best_sq: f64) -> bool {
    d2 < best_sq && d2 > domain.min_sq() && (d2 < domain.max_sq() || domain.is_unbounded())
}

/// Search cutoff hint for surface closest-point queries: the domain max, or
/// no cutoff when unbounded.
#[inline]
fn search_cutoff(domain: Domain) -> f64 {
    if domain.is_unbounded() { f64::INFINITY } else { domain.max }
}

/// Vector from the agent straight onto the closest qualifying feature.
///
/// Candidate per variant: a point is itself; a plane contributes its
/// *origin* (inherited convention — not the closest point on the plane);
/// curve/mesh/solid contribute their closest point.  `None` when nothing
/// qualifies.
pub fn stick(point: Vec3, features: &[Feature<'_>], domain: Domain) -> Option<Vec3> {
    let mut best_sq = f64::MAX;
    let mut best = None;

    for feature in features {
        let candidate = match feature {
            Feature::Point(p) => Some(*p),
            Feature::Plane(plane) => Some(plane.origin()),
            Feature::Curve(curve) => curve.closest_point(point).map(|c| c.point),
            Feature::Mesh(mesh) => mesh.closest_point(point, f64::INFINITY).map(|c| c.point),
            Feature::Solid(solid) => solid.closest_point(point, f64::INFINITY).map(|c| c.point),
        };
        let Some(target) = candidate else { continue };

        let v = target - point;
        let d2 = v.length_squared();
        if qualifies(d2, domain, best_sq) {
            best_sq = d2;
            best = Some(v);
        }
    }
    best
}

/// Project the agent's velocity onto the closest qualifying feature's local
/// plane, scaled by `multiplier`.
///
/// Curves are special: the slide vector is the tangent (or its reverse,
/// whichever is closer by angle to the velocity) rescaled to the velocity's
/// magnitude, and only an interior closest point counts.  Solids likewise
/// require an interior contact; meshes and planes always contribute.
/// Point features cannot be slid along and are skipped.
pub fn slide(
    point: Vec3,
    velocity: Vec3,
    features: &[Feature<'_>],
    domain: Domain,
    multiplier: f64,
) -> Option<Vec3> {
    let mut best_sq = f64::MAX;
    let mut best = None;

    for feature in features {
        let candidate = match feature {
            Feature::Point(_) => None,
            Feature::Plane(plane) => Some((plane.origin(), plane.project_direction(velocity))),
            Feature::Curve(curve) => curve
                .closest_point(point)
                .filter(|c| c.interior)
                .and_then(|c| along_curve(c.tangent, velocity).map(|v| (c.point, v))),
            Feature::Mesh(mesh) => mesh
                .closest_point(point, search_cutoff(domain))
                .and_then(|c| tangent_slide(c.point, c.normal, velocity)),
            Feature::Solid(solid) => solid
                .closest_point(point, search_cutoff(domain))
                .filter(|c| c.interior)
                .and_then(|c| tangent_slide(c.point, c.normal, velocity)),
        };
        let Some((target, slide_vector)) = candidate else { continue };

        let d2 = (target - point).length_squared();
        if qualifies(d2, domain, best_sq) {
            best_sq = d2;
            best = Some(slide_vector);
        }
    }
    best.map(|v| v * multiplier)
}

/// Tangent-or-reverse choice for sliding along a curve, preserving the
/// velocity's magnitude.  `None` when either direction is degenerate.
fn along_curve(tangent: Vec3, velocity: Vec3) -> Option<Vec3> {
    let forward = tangent.with_length(velocity.length())?;
    let reverse = -forward;
    let closer_forward = match (forward.angle_to(velocity), reverse.angle_to(velocity)) {
        (Some(a), Some(b)) => a < b,
        _ => false,
    };
    Some(if closer_forward { forward } else { reverse })
}

/// Velocity projected onto the tangent plane at a surface contact.
fn tangent_slide(contact: Vec3, normal: Vec3, velocity: Vec3) -> Option<(Vec3, Vec3)> {
    Plane::new(contact, normal).map(|plane| (contact, plane.project_direction(velocity)))
}

/// Revolve the agent one `angle` step around the closest qualifying feature.
///
/// The rotation plane per variant: a point feature spans (agent − point,
/// velocity); a curve uses its tangent as the rotation axis; mesh/solid
/// span (contact − agent, surface normal).  Plane features are not
/// supported and are skipped.  A degenerate span (parallel axes) discards
/// the candidate.  Output is the delta from the agent's position to its
/// rotated image.
pub fn revolve(
    point: Vec3,
    velocity: Vec3,
    features: &[Feature<'_>],
    angle: f64,
    domain: Domain,
) -> Option<Vec3> {
    let mut best_sq = f64::MAX;
    let mut best = None;

    for feature in features {
        let rotation_plane = match feature {
            Feature::Point(p) => Plane::from_span(*p, point - *p, velocity),
            Feature::Plane(_) => None,
            Feature::Curve(curve) => curve
                .closest_point(point)
                .and_then(|c| Plane::new(c.point, c.tangent)),
            Feature::Mesh(mesh) => mesh
                .closest_point(point, search_cutoff(domain))
                .and_then(|c| Plane::from_span(c.point, c.point - point, c.normal)),
            Feature::Solid(solid) => solid
                .closest_point(point, search_cutoff(domain))
                .and_then(|c| Plane::from_span(c.point, c.point - point, c.normal)),
        };
        let Some(plane) = rotation_plane else { continue };

        let d2 = (plane.origin() - point).length_squared();
        if qualifies(d2, domain, best_sq) {
            best_sq = d2;
            best = Some(plane.rotate_about_normal(point, angle) - point);
        }
    }
    best
}
