//! `lift-sim` — tick loop orchestrator for the lift building simulator.
//!
//! # Three-phase tick loop
//!
//! ```text
//! every tick_period_ms of virtual real time:
//!   ① Motion    — each car steps: pull a destination when stopped, move
//!                 toward its target, or count down its boarding wait.
//!                 Cars at a stop let their riders off.
//!   ② Loading   — each car at rest takes eligible waiting passengers from
//!                 its floor, up to capacity.
//!   ③ Arrivals  — unanswered directed calls are retried; when the spawn
//!                 interval has elapsed, groups appear and one hall call
//!                 per group goes through the Dispatcher.
//! ```
//!
//! # Cargo features
//!
//! | Feature | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Serialize/Deserialize on config, ids and hall calls.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimConfig;
//! use lift_dispatch::NearestCarDispatcher;
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), NearestCarDispatcher).build()?;
//! sim.run_for_ms(60_000, &mut NoopObserver)?;
//! println!("{} delivered", sim.stats().delivered);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod spawner;
pub mod stats;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use spawner::{GroupArrival, Spawner, generate_group};
pub use stats::SimStats;
