//! `boid-behavior` — per-agent steering behaviors for the `rust_boid`
//! library.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`flock`]   | neighbor aggregation: adhere, repulse, align, planarize, visibility |
//! | [`surface`] | nearest-feature following: stick, slide, revolve              |
//! | [`bounce`]  | reflection against environment geometry + `BounceTrace` hook  |
//! | [`wander`]  | seeded stochastic steering: random_vector, random_wander      |
//! | [`trim`]    | magnitude clamping                                            |
//!
//! # Conventions
//!
//! Every behavior is a pure function of its inputs: one invocation per agent
//! per tick, no shared state, no I/O.  The external simulation driver owns
//! ordering and parallelism; calls for different agents can safely run
//! concurrently.
//!
//! Per-agent parameter lists broadcast by clamping — index `i` past the end
//! of a list resolves to its last element (see `boid_core::params`).  Empty
//! required inputs short-circuit to an empty or `None` output; degenerate
//! geometry is absorbed locally (skip the candidate, substitute a unit
//! vector).  No behavior returns an error.
//!
//! Distance-domain filtering is *inclusive* in the aggregators ([`flock`])
//! and *strict* in the nearest-feature behaviors ([`surface`]).  The
//! divergence is inherited from the authored content this library replaces
//! and is reproduced per behavior, not harmonized.

pub mod bounce;
pub mod flock;
pub mod surface;
pub mod trim;
pub mod wander;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bounce::{BounceOutcome, BounceTrace, NoopTrace, bounce, bounce_traced};
pub use flock::{Visible, adhere, align, planarize, repulse, visibility};
pub use surface::{revolve, slide, stick};
pub use trim::trim;
pub use wander::{random_vector, random_wander};
