//! Heading-change classification.
//!
//! # Buckets
//!
//! The signed change `Δ = to − from` is folded into `[-180, 180)`; positive
//! is clockwise (a right turn).  A reversal of exactly 180° folds to −180
//! and therefore reads as a left turn.
//!
//! | `|Δ|`         | Turn                |
//! |---------------|---------------------|
//! | `< 1°`        | continue straight   |
//! | `[1°, 45°)`   | slight left/right   |
//! | `[45°, 120°)` | left/right          |
//! | `≥ 120°`      | sharp left/right    |

use std::fmt;

/// Largest `|Δ|` (exclusive) still treated as going straight.
pub const STRAIGHT_LIMIT_DEG: f64 = 1.0;
/// Largest `|Δ|` (exclusive) treated as a slight turn.
pub const SLIGHT_LIMIT_DEG: f64 = 45.0;
/// Largest `|Δ|` (exclusive) treated as a plain turn; beyond is sharp.
pub const TURN_LIMIT_DEG: f64 = 120.0;

/// Direction change when entering a feature.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Turn {
    Straight,
    SlightLeft,
    SlightRight,
    Left,
    Right,
    SharpLeft,
    SharpRight,
}

impl Turn {
    /// Sentence-initial phrase used in direction lines.
    pub fn phrase(self) -> &'static str {
        match self {
            Turn::Straight    => "Continue straight",
            Turn::SlightLeft  => "Turn slight left",
            Turn::SlightRight => "Turn slight right",
            Turn::Left        => "Turn left",
            Turn::Right       => "Turn right",
            Turn::SharpLeft   => "Turn sharp left",
            Turn::SharpRight  => "Turn sharp right",
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

/// Signed heading change from `from` to `to`, in `[-180, 180)` degrees.
pub fn heading_delta(from: f64, to: f64) -> f64 {
    // rem_euclid may round up to exactly 360.0; the fold below maps that to 0.
    let d = (to - from).rem_euclid(360.0);
    if d >= 180.0 { d - 360.0 } else { d }
}

/// Classify the turn made when changing heading from `from` to `to`.
pub fn classify_turn(from: f64, to: f64) -> Turn {
    let delta = heading_delta(from, to);
    let right = delta > 0.0;
    match delta.abs() {
        a if a < STRAIGHT_LIMIT_DEG => Turn::Straight,
        a if a < SLIGHT_LIMIT_DEG   => if right { Turn::SlightRight } else { Turn::SlightLeft },
        a if a < TURN_LIMIT_DEG     => if right { Turn::Right } else { Turn::Left },
        _                           => if right { Turn::SharpRight } else { Turn::SharpLeft },
    }
}
