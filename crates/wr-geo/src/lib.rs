//! `wr-geo` — foundational geometry for the `walkroute` workspace.
//!
//! This crate is a dependency of every other `wr-*` crate.  It has no `wr-*`
//! dependencies and only `thiserror` externally, plus optional `serde`.
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`point`]   | `GeoPoint`, coordinate bounds, flat-earth scale factors   |
//! | [`segment`] | `GeoSegment` — a named straight edge between two points   |
//! | [`error`]   | `GeoError`, `GeoResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod point;
pub mod segment;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GeoError, GeoResult};
pub use point::GeoPoint;
pub use segment::GeoSegment;
