//! Per-tick kinematic rates derived from the clock configuration.
//!
//! Cars are specified in simulated units: they accelerate at
//! [`ACCELERATION`] floors/s² and never crawl slower than [`MIN_SPEED`]
//! floors/s.  The tick loop works in floors per tick, so with
//! `dt` = simulated seconds per tick:
//!
//! ```text
//! acceleration_per_tick = ACCELERATION * dt²
//! min_speed_per_tick    = MIN_SPEED    * dt
//! ```
//!
//! Halving the tick period quadruples the tick count needed to cover the same
//! distance under constant acceleration, which is exactly offset by the `dt²`
//! factor, so floors travelled per real second do not depend on the tick
//! period.  Doubling the time scale doubles `dt`, making the car cover the same
//! simulated trip in half the real time.

use lift_core::SimConfig;

/// Simulated acceleration, floors/s².
pub const ACCELERATION: f64 = 1.0;

/// Simulated anti-stall speed floor, floors/s.
pub const MIN_SPEED: f64 = 0.1;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Calibration {
    /// Simulated seconds per tick.
    pub secs_per_tick: f64,
    /// Simulated seconds per real second.
    pub time_scale: f64,
    /// Floors per tick².
    pub acceleration: f64,
    /// Floors per tick.
    pub min_speed: f64,
    /// Real milliseconds a car waits at a stop.
    pub wait_ms: u64,
}

impl Calibration {
    pub fn from_config(config: &SimConfig) -> Self {
        let dt = config.sim_secs_per_tick();
        Self {
            secs_per_tick: dt,
            time_scale:    config.time_scale,
            acceleration:  ACCELERATION * dt * dt,
            min_speed:     MIN_SPEED * dt,
            wait_ms:       config.real_ms(config.boarding_wait_ms),
        }
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}
