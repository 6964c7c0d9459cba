//! Named straight-line segment between two points.

use std::fmt;

use crate::GeoPoint;

/// An immutable straight edge from `p1` to `p2` carrying a street name.
///
/// Identity is `(name, p1, p2)`.  Length and heading are derived on demand
/// and take no part in equality or hashing.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoSegment {
    name: String,
    p1: GeoPoint,
    p2: GeoPoint,
}

impl GeoSegment {
    pub fn new(name: impl Into<String>, p1: GeoPoint, p2: GeoPoint) -> Self {
        Self { name: name.into(), p1, p2 }
    }

    /// The same street traversed in the opposite direction.
    pub fn reverse(&self) -> GeoSegment {
        GeoSegment {
            name: self.name.clone(),
            p1: self.p2,
            p2: self.p1,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn p1(&self) -> GeoPoint {
        self.p1
    }

    #[inline]
    pub fn p2(&self) -> GeoPoint {
        self.p2
    }

    /// `true` when both endpoints coincide.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }

    /// Length in kilometres.
    pub fn length(&self) -> f64 {
        self.p1.distance_to(self.p2)
    }

    /// Compass heading from `p1` to `p2` in `[0, 360)`; 0 for a zero-length
    /// segment.
    pub fn heading(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        self.p1.heading_to(self.p2)
    }
}

impl fmt::Display for GeoSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoSegment: {} [{}, {}]", self.name, self.p1, self.p2)
    }
}
