//! Geometry error type.

use thiserror::Error;

/// Errors produced by `wr-geo`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoError {
    /// Latitude or longitude (millionths of a degree) outside the valid range.
    #[error("coordinate out of range: lat {lat}, lon {lon} (millionths of a degree)")]
    OutOfRange { lat: i32, lon: i32 },
}

/// Shorthand result type for `wr-geo`.
pub type GeoResult<T> = Result<T, GeoError>;
