//! `boid-core` — foundational types for the `rust_boid` steering library.
//!
//! This crate is a dependency of every other `boid-*` crate.  It intentionally
//! has no `boid-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`vec3`]   | `Vec3` — 3-component vector math                        |
//! | [`domain`] | `Domain` — (min, max) interval with unbounded sentinel  |
//! | [`rng`]    | `SteerRng` — seeded, reproducible randomness            |
//! | [`params`] | last-element broadcast lookup for per-agent parameters  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod domain;
pub mod params;
pub mod rng;
pub mod vec3;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use domain::Domain;
pub use params::{clamp_index, clamped};
pub use rng::SteerRng;
pub use vec3::Vec3;
