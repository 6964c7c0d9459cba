//! Fixed-precision geographic coordinate and flat-earth arithmetic.
//!
//! `GeoPoint` stores latitude and longitude as `i32` millionths of a degree.
//! Equality, ordering and hashing work on those integers only, so two points
//! are equal exactly when they name the same grid location.
//!
//! Distances and headings use a fixed linear km-per-degree scale on each axis
//! rather than great-circle math.  The constants below are calibrated for a
//! small region (around 32.8° N); results far from it are only approximate.

use std::fmt;

use crate::{GeoError, GeoResult};

/// Millionths of a degree per degree.
const MICRO: f64 = 1_000_000.0;

/// A geographic coordinate in millionths of a degree.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGeoPoint"))]
pub struct GeoPoint {
    lat: i32,
    lon: i32,
}

/// Unchecked wire form; deserialization goes through [`GeoPoint::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGeoPoint {
    lat: i32,
    lon: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = GeoError;

    fn try_from(raw: RawGeoPoint) -> GeoResult<Self> {
        GeoPoint::new(raw.lat, raw.lon)
    }
}

impl GeoPoint {
    pub const MIN_LATITUDE: i32 = -90 * 1_000_000;
    pub const MAX_LATITUDE: i32 = 90 * 1_000_000;
    pub const MIN_LONGITUDE: i32 = -180 * 1_000_000;
    pub const MAX_LONGITUDE: i32 = 180 * 1_000_000;

    /// Kilometres spanned by one degree of latitude in the modelled region.
    pub const KM_PER_DEGREE_LATITUDE: f64 = 110.901;
    /// Kilometres spanned by one degree of longitude in the modelled region.
    pub const KM_PER_DEGREE_LONGITUDE: f64 = 93.681;

    /// Construct a point from latitude/longitude in millionths of a degree.
    ///
    /// # Errors
    /// [`GeoError::OutOfRange`] if `lat` is outside `[-90e6, 90e6]` or `lon`
    /// is outside `[-180e6, 180e6]`.
    pub fn new(lat: i32, lon: i32) -> GeoResult<Self> {
        if !(Self::MIN_LATITUDE..=Self::MAX_LATITUDE).contains(&lat)
            || !(Self::MIN_LONGITUDE..=Self::MAX_LONGITUDE).contains(&lon)
        {
            return Err(GeoError::OutOfRange { lat, lon });
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in millionths of a degree.
    #[inline]
    pub fn lat(self) -> i32 {
        self.lat
    }

    /// Longitude in millionths of a degree.
    #[inline]
    pub fn lon(self) -> i32 {
        self.lon
    }

    #[inline]
    pub fn lat_degrees(self) -> f64 {
        self.lat as f64 / MICRO
    }

    #[inline]
    pub fn lon_degrees(self) -> f64 {
        self.lon as f64 / MICRO
    }

    /// Displacement to `other` in kilometres as `(north, east)`.
    #[inline]
    fn offset_km(self, other: GeoPoint) -> (f64, f64) {
        // i64 so that extreme pairs (e.g. -180e6 → 180e6) cannot overflow.
        let d_lat = (other.lat as i64 - self.lat as i64) as f64 / MICRO;
        let d_lon = (other.lon as i64 - self.lon as i64) as f64 / MICRO;
        (
            d_lat * Self::KM_PER_DEGREE_LATITUDE,
            d_lon * Self::KM_PER_DEGREE_LONGITUDE,
        )
    }

    /// Flat-earth distance to `other` in kilometres.  Symmetric; zero for
    /// identical points.
    pub fn distance_to(self, other: GeoPoint) -> f64 {
        let (north, east) = self.offset_km(other);
        north.hypot(east)
    }

    /// Compass heading to `other` in degrees, in `[0, 360)`.
    ///
    /// 0 is north, 90 east, 180 south, 270 west.  The heading between two
    /// identical points is meaningless (this returns 0); callers special-case
    /// that (see [`GeoSegment::heading`](crate::GeoSegment::heading)).
    pub fn heading_to(self, other: GeoPoint) -> f64 {
        let (north, east) = self.offset_km(other);
        let h = east.atan2(north).to_degrees();
        if h < 0.0 {
            // -0.0 and tiny negatives could round up to 360.0.
            let wrapped = h + 360.0;
            if wrapped >= 360.0 { 0.0 } else { wrapped }
        } else {
            h
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}°, {:.6}°)", self.lat_degrees(), self.lon_degrees())
    }
}
