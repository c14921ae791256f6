//! Simulation time model.
//!
//! # Design
//!
//! The simulation is driven by a fixed-period clock.  Two quantities are
//! tracked side by side:
//!
//! - `Tick`: how many updates have been processed.
//! - `Millis`: *real* time elapsed on the virtual clock, i.e. the sum of the
//!   tick periods of all processed ticks.  The tick period may change at
//!   runtime, so this is accumulated rather than derived from the tick count.
//!
//! All deadlines (boarding waits, spawn intervals) are `Millis` stamps on this
//! clock.  Pausing the simulation stops the clock, so a paused run never
//! "misses" a deadline.  Simulated time is real time multiplied by the time
//! scale; the scale only affects how durations are converted into deadlines.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Millis ────────────────────────────────────────────────────────────────────

/// A point on the virtual real-time axis, in milliseconds since start.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    /// Milliseconds from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Re-express a pending deadline after the time scale changed by `ratio`
    /// (new scale / old scale).
    ///
    /// The remaining real time shrinks by `ratio`: at twice the speed, half as
    /// much real time is left.  A deadline already in the past stays at `now`.
    pub fn rescaled(self, now: Millis, ratio: f64) -> Millis {
        let remaining = self.since(now) as f64;
        if ratio <= 0.0 || !ratio.is_finite() {
            return now;
        }
        now + (remaining / ratio).round() as u64
    }
}

impl std::ops::Add<u64> for Millis {
    type Output = Millis;
    #[inline]
    fn add(self, rhs: u64) -> Millis {
        Millis(self.0 + rhs)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The fixed-period driver clock.
///
/// `SimClock` is cheap to copy and holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Real milliseconds between two ticks.
    pub tick_period_ms: u32,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
    /// Real time elapsed on the virtual clock.
    pub now: Millis,
}

impl SimClock {
    pub fn new(tick_period_ms: u32) -> Self {
        Self {
            tick_period_ms,
            current_tick: Tick::ZERO,
            now: Millis::ZERO,
        }
    }

    /// Advance the clock by one tick period.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
        self.now = self.now + self.tick_period_ms as u64;
    }

    /// Elapsed real seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.now.0 as f64 / 1000.0
    }

    /// How many ticks span `ms` real milliseconds? (rounds up)
    #[inline]
    pub fn ticks_for_ms(&self, ms: u64) -> u64 {
        ms.div_ceil(self.tick_period_ms.max(1) as u64)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1}s)", self.current_tick, self.elapsed_secs())
    }
}
