//! Turn-by-turn text directions.
//!
//! Every line has the shape
//!
//! ```text
//! <turn phrase> onto <feature name> and <mode phrase>.\n
//! ```
//!
//! The turn is classified from the heading the traveller arrives with to the
//! feature's start heading.  When formatting a whole route, the heading fed
//! into feature `i` is the end heading of feature `i − 1`.

use wr_route::{GeoFeature, Route};

use crate::{TravelMode, Turn, classify_turn};

/// A single formatted direction, with the values it was built from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Instruction {
    pub turn: Turn,
    pub feature_name: String,
    /// Feature length in kilometres.
    pub length_km: f64,
    /// The newline-terminated line.
    pub text: String,
}

/// Formats routes for one travel mode.  Stateless; cheap to copy.
///
/// Serialize-only: build one from a validated [`DirectionsConfig`](crate::DirectionsConfig).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RouteFormatter {
    /// `"... and walk for N minutes."`, N rounded to the nearest minute
    /// (halves away from zero); "minute" when N is 1.
    Walking { minutes_per_km: f64 },
    /// `"... and go D.D kilometers."` with `decimals` places.
    Driving { decimals: usize },
}

impl Default for RouteFormatter {
    fn default() -> Self {
        Self::walking()
    }
}

impl RouteFormatter {
    /// Default walking pace.
    pub const WALKING_MINUTES_PER_KM: f64 = 20.0;

    pub const fn walking() -> Self {
        RouteFormatter::Walking { minutes_per_km: Self::WALKING_MINUTES_PER_KM }
    }

    pub const fn driving() -> Self {
        RouteFormatter::Driving { decimals: 1 }
    }

    pub fn mode(&self) -> TravelMode {
        match self {
            RouteFormatter::Walking { .. } => TravelMode::Walking,
            RouteFormatter::Driving { .. } => TravelMode::Driving,
        }
    }

    /// Whole minutes to walk `length_km` at `minutes_per_km`.
    pub fn walking_minutes(length_km: f64, minutes_per_km: f64) -> u64 {
        (length_km * minutes_per_km).round() as u64
    }

    /// The mode-specific tail of a line, e.g. `"walk for 45 minutes"`.
    fn travel_phrase(&self, length_km: f64) -> String {
        match *self {
            RouteFormatter::Walking { minutes_per_km } => {
                let minutes = Self::walking_minutes(length_km, minutes_per_km);
                let unit = if minutes == 1 { "minute" } else { "minutes" };
                format!("walk for {minutes} {unit}")
            }
            RouteFormatter::Driving { decimals } => {
                format!("go {length_km:.decimals$} kilometers")
            }
        }
    }

    /// Build the instruction for entering `feature` while travelling at
    /// `incoming_heading` (degrees, `[0, 360)`).
    pub fn instruction(&self, feature: &GeoFeature, incoming_heading: f64) -> Instruction {
        let turn = classify_turn(incoming_heading, feature.start_heading());
        let text = format!(
            "{} onto {} and {}.\n",
            turn.phrase(),
            feature.name(),
            self.travel_phrase(feature.length())
        );
        log::trace!("{incoming_heading:.1}° -> {:.1}°: {}", feature.start_heading(), text.trim_end());
        Instruction {
            turn,
            feature_name: feature.name().to_owned(),
            length_km: feature.length(),
            text,
        }
    }

    /// One newline-terminated direction line for `feature`.
    pub fn format_feature_line(&self, feature: &GeoFeature, incoming_heading: f64) -> String {
        self.instruction(feature, incoming_heading).text
    }

    /// Instructions for every feature of `route`, in order.
    ///
    /// `initial_heading` is the traveller's heading before the first feature;
    /// each later feature is entered with the previous feature's end heading.
    pub fn instructions(&self, route: &Route, initial_heading: f64) -> Vec<Instruction> {
        let mut heading = initial_heading;
        route
            .features()
            .map(|feature| {
                let ins = self.instruction(feature, heading);
                heading = feature.end_heading();
                ins
            })
            .collect()
    }

    /// All direction lines for `route`, concatenated.
    pub fn format_route(&self, route: &Route, initial_heading: f64) -> String {
        self.instructions(route, initial_heading)
            .into_iter()
            .map(|ins| ins.text)
            .collect()
    }

    /// Like [`format_route`](Self::format_route), entering the first feature
    /// along the route's own start heading (so the first line continues
    /// straight).
    pub fn format_route_from_start(&self, route: &Route) -> String {
        self.format_route(route, route.start_heading())
    }
}
