//! Clamp vector magnitudes into a per-agent length domain.

use boid_core::{Domain, Vec3, clamped};

/// Rescale each vector so its length lies within its domain.
///
/// Output length is the longer of the two input lists; shorter lists
/// broadcast their last element.  Below the minimum rescales up; above the
/// maximum rescales down.  Unlike the distance domains, the unbounded
/// sentinel here is a *negative* maximum — a maximum of exactly zero clamps
/// to zero.  Exact zero vectors have no direction to rescale and pass
/// through untouched.
pub fn trim(vectors: &[Vec3], domains: &[Domain]) -> Vec<Vec3> {
    if vectors.is_empty() || domains.is_empty() {
        return Vec::new();
    }

    (0..vectors.len().max(domains.len()))
        .map(|i| {
            let mut v = clamped(vectors, i);
            let domain = clamped(domains, i);

            if v.length_squared() < domain.min_sq() && !v.is_zero() {
                v *= domain.min / v.length();
            }
            if v.length_squared() > domain.max_sq() && domain.max >= 0.0 && !v.is_zero() {
                v *= domain.max / v.length();
            }
            v
        })
        .collect()
}
