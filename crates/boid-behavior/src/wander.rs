//! Stochastic steering: seeded random vectors and bounded-angle heading
//! deviation.
//!
//! All randomness flows through [`SteerRng`] from explicit seeds — the same
//! seeds always reproduce the same vectors.  Both behaviors use the
//! double-randomization seeding policy authored content depends on (see
//! `boid_core::rng`).

use std::f64::consts::PI;

use boid_core::{Domain, SteerRng, Vec3, clamped};

/// Axis candidates whose cross product with the heading is shorter than
/// this are re-drawn.
const AXIS_EPSILON: f64 = 1e-12;

/// Generate `count` random vectors from one seed.
///
/// Components are uniform in (−1, 1); with `unit` each vector is rescaled
/// to length 1 before the per-index multiplier is applied.  An empty
/// multiplier list yields no output.
pub fn random_vector(count: usize, unit: bool, seed: u64, multipliers: &[f64]) -> Vec<Vec3> {
    if multipliers.is_empty() {
        return Vec::new();
    }

    let mut rng = SteerRng::double_seeded(seed);
    (0..count)
        .map(|i| {
            let mut v = rng.vector();
            if unit {
                v = v.unit().unwrap_or(v);
            }
            v * clamped(multipliers, i)
        })
        .collect()
}

/// Deviate each heading by a random angle within its domain, preserving
/// magnitude.
///
/// Output length is the longest of the three input lists; shorter lists
/// broadcast their last element.  A single seed spawns one generator that
/// derives a fresh seed per agent; multiple seeds are derived individually.
///
/// Per agent: a zero heading is replaced by a random unit vector and its
/// angle domain widened to (0, π) — there is no direction to deviate from,
/// so any direction is fair.  The rotation axis is the cross product of the
/// heading with a random candidate, re-drawn while degenerate (candidate
/// parallel to the heading).
pub fn random_wander(vectors: &[Vec3], angle_domains: &[Domain], seeds: &[u64]) -> Vec<Vec3> {
    if vectors.is_empty() || angle_domains.is_empty() || seeds.is_empty() {
        return Vec::new();
    }

    let len = vectors.len().max(angle_domains.len()).max(seeds.len());

    let agent_seeds: Vec<u64> = if seeds.len() == 1 {
        let mut rng = SteerRng::seeded(seeds[0]);
        (0..len).map(|_| rng.next_seed()).collect()
    } else {
        (0..len)
            .map(|i| SteerRng::seeded(clamped(seeds, i)).next_seed())
            .collect()
    };

    (0..len)
        .map(|i| {
            let mut rng = SteerRng::seeded(agent_seeds[i]);
            let mut heading = clamped(vectors, i);
            let mut domain = clamped(angle_domains, i);

            if heading.is_zero() {
                domain = Domain::new(0.0, PI);
                heading = rng.half_vector().unit().unwrap_or(Vec3::UNIT_X);
            }
            let heading_unit = heading.unit().unwrap_or(Vec3::UNIT_X);

            let axis = loop {
                let candidate = rng.half_vector().unit().unwrap_or(heading_unit);
                let axis = heading_unit.cross(candidate);
                if axis.length_squared() > AXIS_EPSILON {
                    break axis;
                }
            };

            heading.rotated_about(axis, rng.in_range(domain.min, domain.max))
        })
        .collect()
}
