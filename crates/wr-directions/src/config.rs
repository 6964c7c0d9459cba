//! Travel mode selection and formatter configuration.
//!
//! The application picks a [`TravelMode`] once (CLI flag, JSON file) and
//! turns the config into a [`RouteFormatter`] via
//! [`DirectionsConfig::formatter`].

use std::fmt;
use std::str::FromStr;

use crate::{DirectionsError, DirectionsResult, RouteFormatter};

/// How the traveller moves along the route.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TravelMode {
    /// On foot; durations in whole minutes.
    #[default]
    Walking,
    /// By car; distances in kilometres.
    Driving,
}

impl TravelMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Walking => "walking",
            TravelMode::Driving => "driving",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = DirectionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "walking" | "walk" => Ok(TravelMode::Walking),
            "driving" | "drive" => Ok(TravelMode::Driving),
            _ => Err(DirectionsError::UnknownMode(s.to_owned())),
        }
    }
}

/// Settings for producing directions.
///
/// Typically loaded from a JSON file by the application and turned into a
/// formatter once.  Missing fields fall back to [`Default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DirectionsConfig {
    pub mode: TravelMode,

    /// Walking pace.  Default: 20 minutes per kilometre.
    pub walking_minutes_per_km: f64,

    /// Decimal places for driving distances, at most
    /// [`MAX_DRIVING_DECIMALS`](Self::MAX_DRIVING_DECIMALS).  Default: 1.
    pub driving_decimals: usize,
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            mode: TravelMode::Walking,
            walking_minutes_per_km: RouteFormatter::WALKING_MINUTES_PER_KM,
            driving_decimals: 1,
        }
    }
}

impl DirectionsConfig {
    /// Most decimal places accepted for driving distances.
    pub const MAX_DRIVING_DECIMALS: usize = 6;

    /// Check that the configured rates and precision are usable.
    pub fn validate(&self) -> DirectionsResult<()> {
        let pace = self.walking_minutes_per_km;
        if !pace.is_finite() || pace <= 0.0 {
            return Err(DirectionsError::InvalidSpeed(pace));
        }
        if self.driving_decimals > Self::MAX_DRIVING_DECIMALS {
            return Err(DirectionsError::InvalidDecimals(self.driving_decimals));
        }
        Ok(())
    }

    /// Validate and build the formatter for the configured mode.
    pub fn formatter(&self) -> DirectionsResult<RouteFormatter> {
        self.validate()?;
        Ok(match self.mode {
            TravelMode::Walking => RouteFormatter::Walking {
                minutes_per_km: self.walking_minutes_per_km,
            },
            TravelMode::Driving => RouteFormatter::Driving {
                decimals: self.driving_decimals,
            },
        })
    }

    /// Parse a config from JSON; absent fields take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> DirectionsResult<Self> {
        let config: DirectionsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
