//! Seeded, reproducible randomness for the stochastic behaviors.
//!
//! # Determinism strategy
//!
//! Every random draw in the library flows through a `SteerRng` built from an
//! explicit caller-supplied seed — there is no global or thread-local source,
//! so the stochastic behaviors stay isolated from everything else and a run
//! is reproducible from its seeds alone.
//!
//! The stochastic behaviors use "double randomization": the visible seed is
//! first used to draw one throwaway value that becomes the *actual* generator
//! seed.  Authored content depends on the resulting sequences, so both the
//! single-stage and two-stage constructors are exposed and the policy choice
//! lives at the behavior call site.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Vec3;

/// A deterministic RNG owned by one behavior invocation.
///
/// Wraps `SmallRng`; cheap to construct per call, never shared.
pub struct SteerRng(SmallRng);

impl SteerRng {
    /// Seed directly from `seed` (single-stage).
    pub fn seeded(seed: u64) -> Self {
        SteerRng(SmallRng::seed_from_u64(seed))
    }

    /// Two-stage seeding: `seed` bootstraps a generator whose first draw
    /// becomes the real seed.
    pub fn double_seeded(seed: u64) -> Self {
        SteerRng::seeded(SteerRng::seeded(seed).next_seed())
    }

    /// Draw a derived seed, e.g. to spawn one generator per agent.
    #[inline]
    pub fn next_seed(&mut self) -> u64 {
        self.0.r#gen()
    }

    /// Uniform in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen()
    }

    /// Uniform in `[min, max)`.  Endpoints are taken as given; `min == max`
    /// always yields `min`.
    #[inline]
    pub fn in_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.unit() * (max - min)
    }

    /// Vector with each component uniform in `(-1, 1)`.
    pub fn vector(&mut self) -> Vec3 {
        Vec3::new(
            2.0 * (self.unit() - 0.5),
            2.0 * (self.unit() - 0.5),
            2.0 * (self.unit() - 0.5),
        )
    }

    /// Vector with each component uniform in `(-0.5, 0.5)` — the half-width
    /// draw the wander behavior uses for axis candidates.
    pub fn half_vector(&mut self) -> Vec3 {
        Vec3::new(self.unit() - 0.5, self.unit() - 0.5, self.unit() - 0.5)
    }
}
