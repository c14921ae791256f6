//! `lift-core` — foundational types for the lift building simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CarId`, `Floor`                                      |
//! | [`time`]        | `Tick`, `Millis`, `SimClock`                          |
//! | [`rng`]         | `CarRng` (per-car), `SimRng` (global)                 |
//! | [`config`]      | `SimConfig`, `Bounds` and the per-parameter limits    |
//! | [`error`]       | `ConfigError`, `ConfigResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Bounds, SimConfig};
pub use error::{ConfigError, ConfigResult};
pub use ids::{CarId, Floor};
pub use rng::{CarRng, SimRng};
pub use time::{Millis, SimClock, Tick};
