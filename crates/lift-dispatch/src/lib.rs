//! `lift-dispatch` — the building side of the simulation.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                     |
//! |-----------------|--------------------------------------------------------------|
//! | [`registry`]    | `FloorRegistry`: per-floor queues of waiting passengers      |
//! | [`dispatcher`]  | `Dispatcher` trait, `HallCall`, `NearestCarDispatcher`       |
//! | [`loading`]     | `load_car`: move eligible passengers from a floor to a car   |
//! | [`error`]       | `DispatchError`, `DispatchResult<T>`                         |
//!
//! Dispatch is a pure selection over read-only cars; applying the chosen
//! stop, and everything else that mutates a car, is left to the caller.

pub mod dispatcher;
pub mod error;
pub mod loading;
pub mod registry;

#[cfg(test)]
mod tests;

pub use dispatcher::{Dispatcher, HallCall, NearestCarDispatcher};
pub use error::{DispatchError, DispatchResult};
pub use loading::{Boarding, load_car};
pub use registry::FloorRegistry;
