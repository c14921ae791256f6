//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CarId, Floor};

    #[test]
    fn index_roundtrip() {
        let id = CarId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(CarId::try_from(3usize).unwrap(), id);
    }

    #[test]
    fn floor_position_and_ordering() {
        assert_eq!(Floor(7).position(), 7.0);
        assert!(Floor::GROUND < Floor(1));
    }

    #[test]
    fn display() {
        assert_eq!(CarId(2).to_string(), "CarId(2)");
        assert_eq!(Floor(9).to_string(), "Floor(9)");
    }
}

#[cfg(test)]
mod time {
    use crate::{Millis, SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.to_string(), "T10");
    }

    #[test]
    fn clock_accumulates_tick_periods() {
        let mut clock = SimClock::new(20);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.now, Millis(40));

        // A period change only affects ticks processed afterwards.
        clock.tick_period_ms = 5;
        clock.advance();
        assert_eq!(clock.now, Millis(45));
        assert!((clock.elapsed_secs() - 0.045).abs() < 1e-12);
    }

    #[test]
    fn ticks_for_ms_rounds_up() {
        let clock = SimClock::new(20);
        assert_eq!(clock.ticks_for_ms(3_000), 150);
        assert_eq!(clock.ticks_for_ms(3_001), 151);
    }

    #[test]
    fn rescaled_deadline_divides_remaining_time() {
        let now = Millis(1_000);
        let deadline = Millis(4_000);
        // Twice as fast: 3 s left becomes 1.5 s.
        assert_eq!(deadline.rescaled(now, 2.0), Millis(2_500));
        // Half as fast: 3 s left becomes 6 s.
        assert_eq!(deadline.rescaled(now, 0.5), Millis(7_000));
    }

    #[test]
    fn rescaled_past_deadline_stays_due() {
        assert_eq!(Millis(10).rescaled(Millis(50), 2.0), Millis(50));
    }
}

#[cfg(test)]
mod rng {
    use crate::{CarId, CarRng, SimRng};

    #[test]
    fn car_rngs_are_reproducible() {
        let mut a = CarRng::new(42, CarId(1));
        let mut b = CarRng::new(42, CarId(1));
        let xs: Vec<bool> = (0..32).map(|_| a.gen_bool(0.5)).collect();
        let ys: Vec<bool> = (0..32).map(|_| b.gen_bool(0.5)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn different_cars_get_different_streams() {
        let mut a = CarRng::new(42, CarId(0));
        let mut b = CarRng::new(42, CarId(1));
        let xs: Vec<bool> = (0..64).map(|_| a.gen_bool(0.5)).collect();
        let ys: Vec<bool> = (0..64).map(|_| b.gen_bool(0.5)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn sim_rng_range_and_probability_edges() {
        let mut rng = SimRng::new(7);
        for _ in 0..100 {
            let f: u32 = rng.gen_range(1..10);
            assert!((1..10).contains(&f));
            assert!(!rng.gen_bool(0.0));
            assert!(rng.gen_bool(1.0));
        }
    }
}

#[cfg(test)]
mod config {
    use crate::config::{BOARDING_WAIT_MS, SPAWN_PROBABILITY, TICK_PERIOD_MS, TIME_SCALE};
    use crate::{ConfigError, SimConfig};

    #[test]
    fn default_config_is_valid() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.floors, 10);
        assert_eq!(cfg.elevators, 4);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn bounds_refuse_out_of_range() {
        assert!(TICK_PERIOD_MS.check(0).is_err());
        assert!(TICK_PERIOD_MS.check(501).is_err());
        assert_eq!(TICK_PERIOD_MS.check(500), Ok(500));
        assert!(BOARDING_WAIT_MS.contains(0));
        assert!(!SPAWN_PROBABILITY.contains(1.0));
        assert!(!SPAWN_PROBABILITY.contains(-0.1));
    }

    #[test]
    fn bounds_refuse_non_finite() {
        assert_eq!(
            TIME_SCALE.check(f64::NAN),
            Err(ConfigError::NotFinite { name: "time_scale" })
        );
        assert!(TIME_SCALE.check(f64::INFINITY).is_err());
    }

    #[test]
    fn time_scale_limits_are_powers_of_two() {
        assert_eq!(TIME_SCALE.min, 1.0 / 32.0);
        assert_eq!(TIME_SCALE.max, 32.0);
    }

    #[test]
    fn validate_rejects_degenerate_buildings() {
        let cfg = SimConfig { floors: 1, ..SimConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::TooFewFloors(1)));
        let cfg = SimConfig { elevators: 0, ..SimConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::NoElevators));
    }

    #[test]
    fn validate_rejects_bad_probability() {
        let cfg = SimConfig { spawn_probability: 1.5, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::OutOfRange { name: "spawn_probability", .. })));
    }

    #[test]
    fn disabled_spawning_is_valid() {
        let cfg = SimConfig { spawn_interval_ms: None, ..SimConfig::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn sim_time_conversions() {
        let cfg = SimConfig { tick_period_ms: 20, time_scale: 2.0, ..SimConfig::default() };
        assert!((cfg.sim_secs_per_tick() - 0.04).abs() < 1e-12);
        assert_eq!(cfg.real_ms(3_000), 1_500);
    }
}
