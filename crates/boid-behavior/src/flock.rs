//! Neighbor aggregation behaviors: steering derived from the flock itself.
//!
//! All five behaviors here filter with *inclusive* distance bounds (the
//! nearest-feature behaviors in [`surface`][crate::surface] are strict —
//! see the crate docs).

use boid_core::{Domain, Vec3, clamp_index, clamped};
use boid_geometry::fit_plane;

/// Steer each agent toward the center of its nearest flock members.
///
/// Per agent: vectors to all flock members inside the (inclusive,
/// unbounded-sentinel) distance domain are stable-sorted by squared length;
/// a leading zero-length vector is the agent itself and is dropped; the
/// closest `count` survivors are averaged.  The divisor is the requested
/// `count`, **not** the survivor count, so a sparse neighborhood steers
/// proportionally less.
///
/// `count < 0` (or beyond the flock) means "all members".  Empty inputs
/// yield an empty output.
pub fn adhere(points: &[Vec3], flock: &[Vec3], domains: &[Domain], counts: &[i32]) -> Vec<Vec3> {
    if points.is_empty() || flock.is_empty() || domains.is_empty() || counts.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(points.len());
    for (i, &point) in points.iter().enumerate() {
        let mut count = clamped(counts, i);
        if count < 0 || count as usize > flock.len() - 1 {
            count = flock.len() as i32;
        }

        let mut vector = Vec3::ZERO;
        if count > 0 {
            let domain = clamped(domains, i);
            let mut neighbors: Vec<Vec3> = flock
                .iter()
                .map(|&member| member - point)
                .filter(|v| domain.contains_sq(v.length_squared()))
                .collect();

            if !neighbors.is_empty() {
                neighbors.sort_by(|a, b| a.length_squared().total_cmp(&b.length_squared()));
                if neighbors[0].is_zero() {
                    neighbors.remove(0); // self-exclusion
                }
                neighbors.truncate(count as usize);

                for v in &neighbors {
                    vector += *v;
                }
                vector /= f64::from(count);
            }
        }
        out.push(vector);
    }
    out
}

/// Steer each agent away from flock members inside the search domain.
///
/// Directions run agent-minus-neighbor and every contribution is rescaled to
/// the domain's upper bound, so a barely-too-close neighbor repulses as hard
/// as a touching one.  An exactly coincident neighbor has no direction; it
/// contributes a unit X vector at full strength instead (maximal repulsion
/// for an exact collision).
///
/// Quirks reproduced from the authored content: the domain max here is
/// *not* an unbounded sentinel (it doubles as the desired separation
/// distance), and the average divides by the survivor count *before*
/// self-exclusion.
pub fn repulse(points: &[Vec3], flock: &[Vec3], domains: &[Domain], multipliers: &[f64]) -> Vec<Vec3> {
    if points.is_empty() || flock.is_empty() || domains.is_empty() || multipliers.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(points.len());
    for (i, &point) in points.iter().enumerate() {
        let domain = clamped(domains, i);
        let (min_sq, max_sq) = (domain.min_sq(), domain.max_sq());

        let mut neighbors: Vec<Vec3> = flock
            .iter()
            .map(|&member| point - member)
            .filter(|v| {
                let d2 = v.length_squared();
                d2 >= min_sq && d2 <= max_sq
            })
            .collect();
        let divisor = neighbors.len();

        let mut vector = Vec3::ZERO;
        if divisor > 0 {
            neighbors.sort_by(|a, b| a.length_squared().total_cmp(&b.length_squared()));
            if neighbors[0].is_zero() {
                neighbors.remove(0); // self-exclusion
            }
            for v in &neighbors {
                vector += v.with_length(domain.max).unwrap_or(Vec3::UNIT_X * domain.max);
            }
            vector /= divisor as f64;
        }
        out.push(vector * clamped(multipliers, i));
    }
    out
}

/// Mean flock velocity scaled by `multiplier`, or `None` for an empty flock.
///
/// No distance filtering: alignment reads the whole reference population.
pub fn align(flock_vectors: &[Vec3], multiplier: f64) -> Option<Vec3> {
    if flock_vectors.is_empty() {
        return None;
    }
    let sum = flock_vectors.iter().fold(Vec3::ZERO, |acc, &v| acc + v);
    Some(sum / flock_vectors.len() as f64 * multiplier)
}

/// Steer each agent toward the least-squares plane through the whole flock.
///
/// A flock with no unique fit plane (too few members, coincident, or
/// collinear) produces no output — the anomaly is absorbed, not raised.
pub fn planarize(points: &[Vec3], flock: &[Vec3], multipliers: &[f64]) -> Vec<Vec3> {
    if points.is_empty() || flock.is_empty() || multipliers.is_empty() {
        return Vec::new();
    }
    let Ok(plane) = fit_plane(flock) else {
        return Vec::new();
    };

    points
        .iter()
        .enumerate()
        .map(|(i, &point)| (plane.closest_point(point) - point) * clamped(multipliers, i))
        .collect()
}

/// Flock members visible to one agent: parallel positions, velocities, and
/// original flock indices.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Visible {
    pub points: Vec<Vec3>,
    pub vectors: Vec<Vec3>,
    pub indices: Vec<usize>,
}

/// Filter the flock by distance *and* view angle from the agent's heading.
///
/// Iterates to the longer of the two flock lists with clamped indices, so
/// mismatched lists broadcast their last element.  The distance filter is
/// inclusive with a `max == 0` pass-everything sentinel; the angle filter is
/// *strict* on both bounds with a `max <= 0` sentinel.  An undefined view
/// angle (zero heading or a coincident member) fails any bounded angle
/// filter.
pub fn visibility(
    point: Vec3,
    heading: Vec3,
    flock: &[Vec3],
    flock_vectors: &[Vec3],
    distances: Domain,
    angles: Domain,
) -> Visible {
    if flock.is_empty() || flock_vectors.is_empty() {
        return Visible::default();
    }

    let (min_sq, max_sq) = (distances.min_sq(), distances.max_sq());
    let mut visible = Visible::default();

    for i in 0..flock.len().max(flock_vectors.len()) {
        let fi = clamp_index(flock.len(), i);
        let vi = clamp_index(flock_vectors.len(), i);

        let direction = flock[fi] - point;
        let d2 = direction.length_squared();
        if (d2 >= min_sq && d2 <= max_sq) || max_sq == 0.0 {
            let in_view = angles.max <= 0.0
                || matches!(heading.angle_to(direction),
                            Some(a) if a > angles.min && a < angles.max);
            if in_view {
                visible.points.push(flock[fi]);
                visible.vectors.push(flock_vectors[vi]);
                visible.indices.push(fi);
            }
        }
    }
    visible
}
