//! `lift-car` — a single elevator car and what it carries.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                  |
//! |-------------------|-----------------------------------------------------------|
//! | [`person`]        | `Person`: one passenger, waiting or riding                |
//! | [`destinations`]  | `DestinationQueue`: sorted, duplicate-free floor set      |
//! | [`status`]        | `Status`, `Direction`                                     |
//! | [`calibration`]   | `Calibration`: per-tick kinematic rates and wait length   |
//! | [`elevator`]      | `Elevator`: motion state machine and occupants            |
//! | [`error`]         | `CarError`, `CarResult<T>`                                |
//!
//! # Motion model
//!
//! The car position is a real-valued floor coordinate.  Each tick a moving
//! car accelerates until it passes the halfway point between where it set off
//! and its target, then decelerates (never below a minimum crawl speed) and
//! snaps onto the target floor once it reaches it.  It then waits with doors
//! open for the boarding duration before it may pick its next destination.
//!
//! ```text
//!   Stopped ──pull──▶ Up / Down ──reach target──▶ Waiting ──deadline──▶ Stopped
//!      └──────────pull (target is this floor)───────▲
//! ```

pub mod calibration;
pub mod destinations;
pub mod elevator;
pub mod error;
pub mod person;
pub mod status;


pub use calibration::Calibration;
pub use destinations::DestinationQueue;
pub use elevator::{CAPACITY, Elevator};
pub use error::{CarError, CarResult};
pub use person::Person;
pub use status::{Direction, Status};
