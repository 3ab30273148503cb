//! Interval type constraining which neighbors or features qualify.
//!
//! A `Domain` stores *linear* endpoints (lengths or radians); distance
//! filtering happens on squared lengths, so the endpoints are squared at the
//! comparison site via [`min_sq`][Domain::min_sq] / [`max_sq`][Domain::max_sq].
//!
//! `max <= 0` is the "unbounded above" sentinel inherited from the authored
//! content this library replaces.  `min > max` is permitted and simply yields
//! an empty admissible range.
//!
//! The behavior crates are deliberately inconsistent about bound strictness:
//! the neighbor aggregators filter with inclusive bounds while the
//! nearest-feature behaviors filter strictly.  Each call site writes its own
//! comparison against `min_sq()`/`max_sq()` so the divergence stays visible.

/// An ordered `(min, max)` interval.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    #[inline]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The `(0, 0)` domain — unbounded above, nothing excluded below.
    #[inline]
    pub const fn unbounded() -> Self {
        Self { min: 0.0, max: 0.0 }
    }

    /// `true` when the upper bound is the "no upper limit" sentinel.
    #[inline]
    pub fn is_unbounded(self) -> bool {
        self.max <= 0.0
    }

    /// Lower endpoint squared, for comparison against squared lengths.
    #[inline]
    pub fn min_sq(self) -> f64 {
        self.min * self.min
    }

    /// Upper endpoint squared.  Note that squaring folds a negative sentinel
    /// into a positive number — check [`is_unbounded`][Self::is_unbounded]
    /// first where the sentinel matters.
    #[inline]
    pub fn max_sq(self) -> f64 {
        self.max * self.max
    }

    /// Inclusive containment of a squared length, honoring the unbounded
    /// sentinel.  This is the aggregator convention (Adhere).
    #[inline]
    pub fn contains_sq(self, len_sq: f64) -> bool {
        len_sq >= self.min_sq() && (len_sq <= self.max_sq() || self.is_unbounded())
    }

    /// Linear interpolation across the interval: `min + t * (max - min)`.
    #[inline]
    pub fn lerp(self, t: f64) -> f64 {
        self.min + t * (self.max - self.min)
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
