//! A geographic feature: a maximal run of connected, same-named segments.

use std::fmt;
use std::hash::{Hash, Hasher};

use wr_geo::{GeoPoint, GeoSegment};

use crate::{LENGTH_TOLERANCE_KM, RouteError, RouteResult};

/// An immutable, non-empty chain of segments sharing one name.
///
/// Invariants (established by construction, checked by
/// [`check_consistency`](Self::check_consistency)):
///
/// - every segment carries the feature's name;
/// - `segments[i].p2() == segments[i + 1].p1()` for each adjacent pair;
/// - `length` equals the sum of segment lengths.
///
/// Equality and hashing look only at the segment sequence, so two features
/// covering the same ground with a different decomposition are distinct.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeoFeature {
    segments: Vec<GeoSegment>,
    /// Cached sum of segment lengths in kilometres.
    length: f64,
}

impl GeoFeature {
    /// A one-segment feature named after `gs`.
    pub fn new(gs: GeoSegment) -> Self {
        let length = gs.length();
        Self { segments: vec![gs], length }
    }

    /// Return a new feature with `gs` appended at the end.
    ///
    /// # Errors
    /// - [`RouteError::NameMismatch`] if `gs` has a different name.
    /// - [`RouteError::Disconnected`] if `gs` does not start at [`end`](Self::end).
    pub fn add_segment(&self, gs: GeoSegment) -> RouteResult<GeoFeature> {
        if gs.name() != self.name() {
            log::debug!("rejected '{}' on feature '{}': name mismatch", gs.name(), self.name());
            return Err(RouteError::NameMismatch {
                feature: self.name().to_owned(),
                segment: gs.name().to_owned(),
            });
        }
        if gs.p1() != self.end() {
            log::debug!("rejected '{}' on feature '{}': not connected", gs.name(), self.name());
            return Err(RouteError::Disconnected { end: self.end(), start: gs.p1() });
        }

        let length = self.length + gs.length();
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(gs);

        let grown = GeoFeature { segments, length };
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

    pub fn name(&self) -> &str {
        self.first().name()
    }

    pub fn start(&self) -> GeoPoint {
        self.first().p1()
    }

    pub fn end(&self) -> GeoPoint {
        self.last().p2()
    }

    /// Heading of the first segment.
    pub fn start_heading(&self) -> f64 {
        self.first().heading()
    }

    /// Heading of the last segment.
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

    /// Segments in travel order.  Each call starts a fresh traversal.
    pub fn segments(&self) -> std::slice::Iter<'_, GeoSegment> {
        self.segments.iter()
    }

    /// Re-validate every representation invariant, returning a description of
    /// the first violation.  O(n); intended for tests and debug assertions.
    pub fn check_consistency(&self) -> Result<(), String> {
        if self.segments.is_empty() {
            return Err("feature has no segments".into());
        }
        let name = self.name();
        if let Some(gs) = self.segments.iter().find(|gs| gs.name() != name) {
            return Err(format!("segment '{}' in feature '{name}'", gs.name()));
        }
        if let Some(i) = self.segments.windows(2).position(|w| w[0].p2() != w[1].p1()) {
            return Err(format!("segments {i} and {} are not connected", i + 1));
        }
        let sum: f64 = self.segments.iter().map(GeoSegment::length).sum();
        if (sum - self.length).abs() >= LENGTH_TOLERANCE_KM {
            return Err(format!("cached length {} != segment sum {sum}", self.length));
        }
        Ok(())
    }
}

impl PartialEq for GeoFeature {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for GeoFeature {}

impl Hash for GeoFeature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.segments.hash(state);
    }
}

impl<'a> IntoIterator for &'a GeoFeature {
    type Item = &'a GeoSegment;
    type IntoIter = std::slice::Iter<'a, GeoSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments()
    }
}

impl fmt::Display for GeoFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GeoFeature{{name='{}', length={:.3}, segments={}}}",
            self.name(),
            self.length,
            self.segments.len()
        )
    }
}
