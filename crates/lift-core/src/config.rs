//! Simulation configuration and the limits each tunable parameter must obey.
//!
//! Every runtime-adjustable value has a [`Bounds`] constant holding its
//! minimum, maximum and default.  Views read these to lay out their controls;
//! the simulation's setters check against them and refuse anything outside.

use crate::{ConfigError, ConfigResult};

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Inclusive range plus default for one tunable parameter.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds<T> {
    pub name:    &'static str,
    pub min:     T,
    pub max:     T,
    pub default: T,
}

impl<T: Copy + PartialOrd + Into<f64>> Bounds<T> {
    /// Return `value` unchanged if it lies within `[min, max]`.
    pub fn check(&self, value: T) -> ConfigResult<T> {
        if !value.into().is_finite() {
            return Err(ConfigError::NotFinite { name: self.name });
        }
        if value < self.min || value > self.max {
            return Err(ConfigError::OutOfRange {
                name:  self.name,
                value: value.into(),
                min:   self.min.into(),
                max:   self.max.into(),
            });
        }
        Ok(value)
    }

    pub fn contains(&self, value: T) -> bool {
        self.check(value).is_ok()
    }
}

/// Real milliseconds between two updates.
pub const TICK_PERIOD_MS: Bounds<u32> = Bounds {
    name: "tick_period_ms",
    min: 1,
    max: 500,
    default: 20,
};

/// Simulated milliseconds between two arrival-process runs.  Spawning is
/// disabled by setting the interval to `None` rather than to a sentinel.
pub const SPAWN_INTERVAL_MS: Bounds<u32> = Bounds {
    name: "spawn_interval_ms",
    min: 1,
    max: 500,
    default: 1,
};

/// Probability of generating each additional group per arrival run.
pub const SPAWN_PROBABILITY: Bounds<f64> = Bounds {
    name: "spawn_probability",
    min: 0.0,
    max: 0.99,
    default: 0.05,
};

/// Probability of adding each additional member to a group.
pub const GROUP_MEMBER_PROBABILITY: Bounds<f64> = Bounds {
    name: "group_member_probability",
    min: 0.0,
    max: 0.99,
    default: 0.5,
};

/// Simulated milliseconds a car keeps its doors open at a stop.
pub const BOARDING_WAIT_MS: Bounds<u32> = Bounds {
    name: "boarding_wait_ms",
    min: 0,
    max: 30_000,
    default: 3_000,
};

/// Fastest time scale is `2^MAX_TIME_SCALE_FACTOR`, slowest the reciprocal.
pub const MAX_TIME_SCALE_FACTOR: i32 = 5;

/// Ratio of simulated time to real time.
pub const TIME_SCALE: Bounds<f64> = Bounds {
    name: "time_scale",
    min: 1.0 / (1 << MAX_TIME_SCALE_FACTOR) as f64,
    max: (1 << MAX_TIME_SCALE_FACTOR) as f64,
    default: 1.0,
};

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built from `Default` and tweaked, or loaded from a JSON file by
/// the application crate (with the `serde` feature).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of floors, ground floor included.
    pub floors: u32,

    /// Number of elevator cars.
    pub elevators: u32,

    /// Real milliseconds per tick.
    pub tick_period_ms: u32,

    /// Simulated seconds per real second.
    pub time_scale: f64,

    /// Simulated milliseconds between arrival runs; `None` disables arrivals.
    pub spawn_interval_ms: Option<u32>,

    pub spawn_probability: f64,

    pub group_member_probability: f64,

    /// Simulated milliseconds a car waits with its doors open.
    pub boarding_wait_ms: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            floors:                   10,
            elevators:                4,
            tick_period_ms:           TICK_PERIOD_MS.default,
            time_scale:               TIME_SCALE.default,
            spawn_interval_ms:        Some(SPAWN_INTERVAL_MS.default),
            spawn_probability:        SPAWN_PROBABILITY.default,
            group_member_probability: GROUP_MEMBER_PROBABILITY.default,
            boarding_wait_ms:         BOARDING_WAIT_MS.default,
            seed:                     42,
        }
    }
}

impl SimConfig {
    /// Check every field against its limits.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.floors < 2 {
            return Err(ConfigError::TooFewFloors(self.floors));
        }
        if self.elevators == 0 {
            return Err(ConfigError::NoElevators);
        }
        TICK_PERIOD_MS.check(self.tick_period_ms)?;
        TIME_SCALE.check(self.time_scale)?;
        if let Some(interval) = self.spawn_interval_ms {
            SPAWN_INTERVAL_MS.check(interval)?;
        }
        SPAWN_PROBABILITY.check(self.spawn_probability)?;
        GROUP_MEMBER_PROBABILITY.check(self.group_member_probability)?;
        BOARDING_WAIT_MS.check(self.boarding_wait_ms)?;
        Ok(())
    }

    /// Simulated seconds covered by one tick.
    #[inline]
    pub fn sim_secs_per_tick(&self) -> f64 {
        self.tick_period_ms as f64 / 1000.0 * self.time_scale
    }

    /// Convert a simulated duration into real milliseconds at the current scale.
    #[inline]
    pub fn real_ms(&self, sim_ms: u32) -> u64 {
        (sim_ms as f64 / self.time_scale).round() as u64
    }
}
