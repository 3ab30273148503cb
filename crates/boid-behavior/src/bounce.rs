//! Reflection solver: one straight-line simulation step with bounce
//! response against environment geometry.
//!
//! Two terminal states only — either no surface qualifies and the agent
//! moves by its unmodified velocity, or it collides with the *nearest*
//! qualifying surface and comes off it mirrored and slowed.  There is no
//! multi-bounce chaining within one call.

use boid_core::Vec3;
use boid_geometry::{Feature, Plane};

/// Fraction of the path length used as the intersection tolerance for
/// kernel-side surface queries.  Proportional, not absolute: models can be
/// arbitrary scale.
const PATH_TOLERANCE_FRACTION: f64 = 1e-6;

/// Plane intersections test a path extended by 10% so a hit exactly at the
/// travel endpoint is not lost to rounding.  The travel-budget check below
/// still rejects anything beyond the unextended path.
const PATH_EXTENSION: f64 = 1.1;

/// Result of one reflection step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BounceOutcome {
    /// Where the agent ends this step.
    pub position: Vec3,

    /// Its velocity going into the next step.
    pub velocity: Vec3,

    /// `false` means unobstructed straight-line motion.
    pub bounced: bool,
}

/// Optional tracing hooks for the reflection scan.
///
/// All methods have no-op defaults; implement only what you need.  Replaces
/// the in-band debug-string accumulation of earlier revisions of this
/// behavior.
pub trait BounceTrace {
    /// A path/surface intersection was found, before qualification.
    fn on_hit(&mut self, _feature: usize, _point: Vec3, _distance_sq: f64) {}

    /// A hit was dropped: beyond this step's travel budget, farther than the
    /// best hit so far, or its mirror construction degenerated.
    fn on_discarded(&mut self, _feature: usize) {}

    /// The final outcome for this call.
    fn on_outcome(&mut self, _outcome: &BounceOutcome) {}
}

/// A [`BounceTrace`] that does nothing.
pub struct NoopTrace;

impl BounceTrace for NoopTrace {}

/// One reflection step without tracing.
pub fn bounce(point: Vec3, velocity: Vec3, features: &[Feature<'_>], slowdown: f64) -> BounceOutcome {
    bounce_traced(point, velocity, features, slowdown, &mut NoopTrace)
}

/// One reflection step.
///
/// For every surface feature, find the nearest intersection of the intended
/// path; reject hits beyond the velocity's own length.  At the qualifying
/// hit nearest the agent, build a mirror plane oriented by the velocity's
/// in-plane component, reflect the agent's current position through it, and
/// come off the wall along the reflected direction:
///
/// - new velocity = reflected direction × |velocity| × `slowdown`
/// - new position = hit + reflected direction × (|velocity| − |hit − point|) × `slowdown`
///
/// so the agent spends its remaining travel budget moving away from the
/// impact.  A degenerate mirror (velocity dead-on along the surface normal)
/// discards that candidate rather than erroring.  Point and curve features
/// have no surface to bounce off and are skipped.
pub fn bounce_traced(
    point: Vec3,
    velocity: Vec3,
    features: &[Feature<'_>],
    slowdown: f64,
    trace: &mut dyn BounceTrace,
) -> BounceOutcome {
    let speed_sq = velocity.length_squared();
    let speed = speed_sq.sqrt();
    let tolerance = speed * PATH_TOLERANCE_FRACTION;

    let mut best_sq = f64::MAX;
    let mut best = None;

    for (index, feature) in features.iter().enumerate() {
        let contact = match feature {
            Feature::Plane(plane) => plane
                .intersect_segment(point, point + velocity * PATH_EXTENSION)
                .map(|hit| (hit, plane.normal())),
            Feature::Mesh(mesh) => mesh
                .intersect_segment(point, point + velocity, tolerance)
                .map(|c| (c.point, c.normal)),
            Feature::Solid(solid) => solid
                .intersect_segment(point, point + velocity, tolerance)
                .map(|c| (c.point, c.normal)),
            Feature::Point(_) | Feature::Curve(_) => None,
        };
        let Some((hit, normal)) = contact else { continue };

        let travel_sq = (hit - point).length_squared();
        trace.on_hit(index, hit, travel_sq);
        if travel_sq > speed_sq || travel_sq >= best_sq {
            trace.on_discarded(index);
            continue;
        }

        let Some(response) = reflect_at(point, velocity, hit, normal, speed, slowdown) else {
            trace.on_discarded(index);
            continue;
        };
        best_sq = travel_sq;
        best = Some(response);
    }

    let outcome = match best {
        Some((position, velocity)) => BounceOutcome { position, velocity, bounced: true },
        None => BounceOutcome { position: point + velocity, velocity, bounced: false },
    };
    trace.on_outcome(&outcome);
    outcome
}

/// Mirror response at one hit: `(new position, new velocity)`, or `None`
/// when the mirror plane is degenerate.
fn reflect_at(
    point: Vec3,
    velocity: Vec3,
    hit: Vec3,
    normal: Vec3,
    speed: f64,
    slowdown: f64,
) -> Option<(Vec3, Vec3)> {
    let hit_plane = Plane::new(hit, normal)?;
    // Mirror plane: at the hit point, oriented by the velocity's component
    // within the surface.  Zero for a dead-on hit → no valid mirror.
    let mirror = Plane::new(hit, hit_plane.project_direction(velocity))?;

    let direction = (mirror.mirror_point(point) - hit).unit()?;
    let remaining = (speed - (hit - point).length()) * slowdown;
    Some((hit + direction * remaining, direction * (speed * slowdown)))
}
