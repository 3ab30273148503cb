//! `boid-geometry` — plane math and the geometry kernel interface for the
//! `rust_boid` steering library.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`plane`]   | `Plane` — origin + unit normal, projection/mirror/intersection |
//! | [`fit`]     | least-squares plane fit to a point set                         |
//! | [`query`]   | `CurveQuery`/`SurfaceQuery` — the external kernel's contract   |
//! | [`feature`] | `Feature` — tagged variant over the surface representations    |
//! | [`error`]   | `GeometryError`, `GeometryResult<T>`                           |
//!
//! # Design notes
//!
//! Points, infinite planes, and plane-fitting are cheap enough to implement
//! here; curves, meshes, and boundary-representation solids stay behind the
//! [`query`] traits so any geometry kernel can be plugged in.  The behavior
//! crate dispatches on [`Feature`] with an explicit `match` — there is no
//! downcasting anywhere.

pub mod error;
pub mod feature;
pub mod fit;
pub mod plane;
pub mod query;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GeometryError, GeometryResult};
pub use feature::Feature;
pub use fit::fit_plane;
pub use plane::Plane;
pub use query::{CurveContact, CurveQuery, SurfaceContact, SurfaceQuery};
