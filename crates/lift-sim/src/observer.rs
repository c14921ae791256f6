//! Simulation observer trait for progress reporting and data collection.

use lift_core::Tick;

use crate::{GroupArrival, SimStats};

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress logger
///
/// ```rust,ignore
/// struct ProgressLogger { interval: u64 }
///
/// impl SimObserver for ProgressLogger {
///     fn on_tick_end(&mut self, tick: Tick, stats: &SimStats) {
///         if tick.0 % self.interval == 0 {
///             log::info!("{tick}: {} delivered", stats.delivered);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each processed tick.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per group the arrival process creates, before its hall
    /// call is placed.
    fn on_group_spawned(&mut self, _tick: Tick, _group: &GroupArrival) {}

    /// Called at the end of each processed tick.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &SimStats) {}

    /// Called once when a bounded run ([`Sim::run_for_ms`][crate::Sim::run_for_ms])
    /// completes.
    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &SimStats) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
