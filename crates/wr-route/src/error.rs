//! Route-building error type.

use thiserror::Error;

use wr_geo::GeoPoint;

/// Errors produced by `wr-route`.
///
/// Both variants are recoverable: the value that rejected the segment is
/// unchanged and the caller may retry with a different one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("segment '{segment}' cannot extend feature '{feature}'")]
    NameMismatch { feature: String, segment: String },

    #[error("segment starts at {start} but the chain ends at {end}")]
    Disconnected { end: GeoPoint, start: GeoPoint },
}

pub type RouteResult<T> = Result<T, RouteError>;
