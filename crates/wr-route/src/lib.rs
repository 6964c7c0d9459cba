//! `wr-route` — immutable geographic features and routes.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`feature`] | `GeoFeature` — a connected run of same-named segments      |
//! | [`route`]   | `Route` — connected segments grouped into features         |
//! | [`error`]   | `RouteError`, `RouteResult<T>`                             |
//!
//! # Growth model
//!
//! Both types are values.  `add_segment` borrows `self` and returns a new
//! value; a rejected append leaves the original untouched, so callers can
//! simply report the error and keep going with what they had.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod feature;
pub mod route;


pub use error::{RouteError, RouteResult};
pub use feature::GeoFeature;
pub use route::Route;

/// Absolute tolerance (km) for comparing a cached length with the sum of its
/// segment lengths.
pub const LENGTH_TOLERANCE_KM: f64 = 1e-6;
