//! Fluent builder for constructing a [`Sim`].

use lift_car::{Calibration, Elevator};
use lift_core::{CarId, CarRng, Floor, SimClock, SimConfig};
use lift_dispatch::{Dispatcher, FloorRegistry};

use crate::{Sim, SimError, SimResult, SimStats, Spawner};

/// Fluent builder for [`Sim<D>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: building size, clock, arrival parameters, seed
/// - `D: Dispatcher`: the call-assignment heuristic (e.g.
///   [`lift_dispatch::NearestCarDispatcher`])
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                    |
/// |-------------------------|----------------------------|
/// | `.initial_floors(v)`    | every car at the ground    |
/// | `.paused()`             | the clock starts running   |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default(), NearestCarDispatcher)
///     .initial_floors(vec![Floor(0), Floor(3), Floor(6), Floor(9)])
///     .build()?;
/// sim.run_ticks(500, &mut NoopObserver)?;
/// ```
pub struct SimBuilder<D: Dispatcher> {
    config:     SimConfig,
    dispatcher: D,
    floors:     Option<Vec<Floor>>,
    running:    bool,
}

impl<D: Dispatcher> SimBuilder<D> {
    pub fn new(config: SimConfig, dispatcher: D) -> Self {
        Self {
            config,
            dispatcher,
            floors:  None,
            running: true,
        }
    }

    /// Park each car at the given floor instead of the ground floor.
    ///
    /// Must have one entry per car.
    pub fn initial_floors(mut self, floors: Vec<Floor>) -> Self {
        self.floors = Some(floors);
        self
    }

    /// Build the simulation with its clock paused; call
    /// [`Sim::start`][crate::Sim::start] to run it.
    pub fn paused(mut self) -> Self {
        self.running = false;
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<D>> {
        self.config.validate()?;
        let car_count = self.config.elevators as usize;
        let registry = FloorRegistry::new(self.config.floors);

        let floors = match self.floors {
            Some(f) => {
                if f.len() != car_count {
                    return Err(SimError::CarCountMismatch {
                        expected: car_count,
                        got:      f.len(),
                        what:     "initial floors",
                    });
                }
                for &floor in &f {
                    registry.check(floor)?;
                }
                f
            }
            None => vec![Floor::GROUND; car_count],
        };

        let calibration = Calibration::from_config(&self.config);
        let cars: Vec<Elevator> = floors
            .iter()
            .enumerate()
            .map(|(i, &floor)| Elevator::parked_at(CarId(i as u32), floor, calibration))
            .collect();
        let car_rngs = (0..car_count)
            .map(|i| CarRng::new(self.config.seed, CarId(i as u32)))
            .collect();

        let clock = SimClock::new(self.config.tick_period_ms);
        let spawner = Spawner::new(&self.config, clock.now);

        Ok(Sim {
            config:        self.config,
            clock,
            cars,
            car_rngs,
            floors:        registry,
            spawner,
            dispatcher:    self.dispatcher,
            pending_calls: Vec::new(),
            stats:         SimStats::default(),
            running:       self.running,
        })
    }
}
