//! Routes: a connected chain of segments grouped into named features.
//!
//! # Representation
//!
//! A `Route` keeps the flat segment list alongside the feature list.  The
//! features partition the segments in order, and adjacent features always
//! differ in name: appending a segment named like the trailing feature grows
//! that feature instead of starting a new one.
//!
//! Appends copy both vectors.  Routes picked by hand stay short, so the
//! linear copy is not worth a persistent sequence.

use std::fmt;
use std::hash::{Hash, Hasher};

use wr_geo::{GeoPoint, GeoSegment};

use crate::{GeoFeature, LENGTH_TOLERANCE_KM, RouteError, RouteResult};

/// An immutable, non-empty path from an origin to a destination.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Route {
    segments: Vec<GeoSegment>,
    features: Vec<GeoFeature>,
    /// Cached sum of segment lengths in kilometres.
    length: f64,
}

impl Route {
    /// A route consisting of `gs` alone, wrapped in a single feature.
    pub fn new(gs: GeoSegment) -> Self {
        let length = gs.length();
        let feature = GeoFeature::new(gs.clone());
        Self { segments: vec![gs], features: vec![feature], length }
    }

    /// Build a route by appending `segments` in order.
    ///
    /// Returns `None` for an empty iterator.
    ///
    /// # Errors
    /// The first [`RouteError`] raised by [`add_segment`](Self::add_segment).
    pub fn from_segments<I>(segments: I) -> RouteResult<Option<Route>>
    where
        I: IntoIterator<Item = GeoSegment>,
    {
        let mut iter = segments.into_iter();
        let Some(first) = iter.next() else {
            return Ok(None);
        };
        iter.try_fold(Route::new(first), |route, gs| route.add_segment(gs))
            .map(Some)
    }

    /// Return a new route with `gs` appended at the end.
    ///
    /// If `gs` carries the trailing feature's name it extends that feature;
    /// otherwise it opens a new one.
    ///
    /// # Errors
    /// [`RouteError::Disconnected`] if `gs` does not start at [`end`](Self::end).
    pub fn add_segment(&self, gs: GeoSegment) -> RouteResult<Route> {
        if gs.p1() != self.end() {
            log::debug!("rejected '{}': starts at {} but route ends at {}", gs.name(), gs.p1(), self.end());
            return Err(RouteError::Disconnected { end: self.end(), start: gs.p1() });
        }

        let length = self.length + gs.length();

        let mut features = self.features.clone();
        let tail = features.len() - 1;
        if features[tail].name() == gs.name() {
            // Name and connectivity already hold, so this cannot fail.
            features[tail] = features[tail].add_segment(gs.clone())?;
            log::debug!(
                "extended feature '{}' to {} segments",
                gs.name(),
                features[tail].segment_count()
            );
        } else {
            log::debug!("started feature #{} '{}'", features.len(), gs.name());
            features.push(GeoFeature::new(gs.clone()));
        }

        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(gs);

        let grown = Route { segments, features, length };
        debug_assert_eq!(grown.check_consistency(), Ok(()));
        Ok(grown)
    }

    // ── Derived properties ────────────────────────────────────────────────

    #[inline]
    fn first(&self) -> &GeoSegment {
        // Non-empty by construction.
        &self.segments[0]
    }

    #[inline]
    fn last(&self) -> &GeoSegment {
        &self.segments[self.segments.len() - 1]
    }

    pub fn start(&self) -> GeoPoint {
        self.first().p1()
    }

    pub fn end(&self) -> GeoPoint {
        self.last().p2()
    }

    pub fn start_heading(&self) -> f64 {
        self.first().heading()
    }

    pub fn end_heading(&self) -> f64 {
        self.last().heading()
    }

    /// Total length in kilometres.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Features in travel order.  Each call starts a fresh traversal.
    pub fn features(&self) -> std::slice::Iter<'_, GeoFeature> {
        self.features.iter()
    }

    /// Segments in travel order.  Each call starts a fresh traversal.
    pub fn segments(&self) -> std::slice::Iter<'_, GeoSegment> {
        self.segments.iter()
    }

    /// Re-validate every representation invariant, returning a description of
    /// the first violation.  O(n); intended for tests and debug assertions.
    pub fn check_consistency(&self) -> Result<(), String> {
        if self.segments.is_empty() || self.features.is_empty() {
            return Err("route has no segments".into());
        }
        if let Some(i) = self.segments.windows(2).position(|w| w[0].p2() != w[1].p1()) {
            return Err(format!("segments {i} and {} are not connected", i + 1));
        }
        for (i, pair) in self.features.windows(2).enumerate() {
            if pair[0].end() != pair[1].start() {
                return Err(format!("features {i} and {} are not connected", i + 1));
            }
            if pair[0].name() == pair[1].name() {
                return Err(format!("features {i} and {} share name '{}'", i + 1, pair[0].name()));
            }
        }
        for (i, feature) in self.features.iter().enumerate() {
            feature
                .check_consistency()
                .map_err(|e| format!("feature {i}: {e}"))?;
        }
        if !self.features.iter().flat_map(GeoFeature::segments).eq(self.segments.iter()) {
            return Err("feature segments do not reproduce the route's segments".into());
        }
        let sum: f64 = self.segments.iter().map(GeoSegment::length).sum();
        if (sum - self.length).abs() >= LENGTH_TOLERANCE_KM {
            return Err(format!("cached length {} != segment sum {sum}", self.length));
        }
        Ok(())
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.features == other.features
    }
}

impl Eq for Route {}

impl Hash for Route {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.features.hash(state);
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Route{{start={}, end={}, length={:.3}, segments={}}}",
            self.start(),
            self.end(),
            self.length,
            self.segments.len()
        )
    }
}
