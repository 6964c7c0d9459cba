//! `wr-directions` — turn classification and turn-by-turn text directions.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`turn`]      | `Turn`, `heading_delta`, `classify_turn`                  |
//! | [`formatter`] | `RouteFormatter` (walking / driving), `Instruction`       |
//! | [`config`]    | `TravelMode`, `DirectionsConfig`                          |
//! | [`error`]     | `DirectionsError`, `DirectionsResult<T>`                  |
//!
//! # Output layout
//!
//! One line per feature of the route, each terminated by `'\n'`:
//!
//! ```text
//! Turn slight right onto Hankin Road and walk for 2 minutes.
//! Turn left onto Hagalil and walk for 27 minutes.
//! Turn sharp left onto Hanita and go 1.4 kilometers.
//! ```
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize`; enables JSON config.      |

pub mod config;
pub mod error;
pub mod formatter;
pub mod turn;

#[cfg(test)]
mod tests;

pub use config::{DirectionsConfig, TravelMode};
pub use error::{DirectionsError, DirectionsResult};
pub use formatter::{Instruction, RouteFormatter};
pub use turn::{Turn, classify_turn, heading_delta};
