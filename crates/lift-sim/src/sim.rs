//! The `Sim` struct and its tick loop.

use log::{debug, info, warn};

use lift_car::{Calibration, Direction, Elevator, Person};
use lift_core::config::{
    BOARDING_WAIT_MS, GROUP_MEMBER_PROBABILITY, SPAWN_INTERVAL_MS, SPAWN_PROBABILITY,
    TICK_PERIOD_MS, TIME_SCALE,
};
use lift_core::{CarId, CarRng, ConfigResult, Floor, Millis, SimClock, SimConfig, Tick};
use lift_dispatch::{Dispatcher, FloorRegistry, HallCall, load_car};

use crate::{SimError, SimObserver, SimResult, SimStats, Spawner};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<D>` owns all simulation state and drives a three-phase tick:
///
/// 1. **Motion**: every car steps its state machine (pick a destination,
///    move, or count down its boarding wait) and lets passengers off.
/// 2. **Loading**: every car at rest takes eligible passengers from its
///    floor.  This is the only phase that moves people between the floor
///    registry and the cars.
/// 3. **Arrivals**: earlier unanswered hall calls are retried, then the
///    arrival process runs if its interval has elapsed and places one hall
///    call per new group through the dispatcher.
///
/// All mutation happens inside [`Sim::tick`] or the setters, so a view
/// polling the read accessors between ticks never sees a half-applied tick.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<D: Dispatcher> {
    pub(crate) config: SimConfig,

    pub(crate) clock: SimClock,

    pub(crate) cars: Vec<Elevator>,

    /// Per-car tie-break RNGs, indexed like `cars`.
    pub(crate) car_rngs: Vec<CarRng>,

    pub(crate) floors: FloorRegistry,

    pub(crate) spawner: Spawner,

    pub(crate) dispatcher: D,

    /// Directed calls no car could take yet; retried every tick.
    pub(crate) pending_calls: Vec<HallCall>,

    pub(crate) stats: SimStats,

    pub(crate) running: bool,
}

impl<D: Dispatcher> Sim<D> {
    // ── Read accessors ────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    #[inline]
    pub fn now(&self) -> Millis {
        self.clock.now
    }

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn cars(&self) -> &[Elevator] {
        &self.cars
    }

    pub fn car(&self, id: CarId) -> Option<&Elevator> {
        self.cars.get(id.index())
    }

    pub fn floors(&self) -> &FloorRegistry {
        &self.floors
    }

    /// Passengers waiting at `floor`, oldest first; empty for unknown floors.
    pub fn waiting_at(&self, floor: Floor) -> impl Iterator<Item = &Person> {
        self.floors.waiting(floor).into_iter().flatten()
    }

    pub fn waiting_count(&self, floor: Floor) -> usize {
        self.floors.waiting_count(floor)
    }

    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    pub fn pending_calls(&self) -> &[HallCall] {
        &self.pending_calls
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    // ── Clock control ─────────────────────────────────────────────────────

    pub fn start(&mut self) {
        if !self.running {
            info!("simulation started at {}", self.clock);
            self.running = true;
        }
    }

    /// Freeze the clock.  Deadlines are on the virtual clock, so nothing
    /// expires while paused.
    pub fn pause(&mut self) {
        if self.running {
            info!("simulation paused at {}", self.clock);
            self.running = false;
        }
    }

    // ── Hall calls ────────────────────────────────────────────────────────

    /// Ask for any car to visit `floor`.
    ///
    /// An undirected call always finds a car.
    pub fn request_elevator(&mut self, floor: Floor) -> SimResult<Option<CarId>> {
        self.place_call(HallCall::new(floor))
    }

    /// Ask for a car to visit `floor` and then travel `direction`.
    ///
    /// Returns `None` if no car currently qualifies; the call is kept and
    /// retried on every following tick until one does.
    pub fn request_elevator_toward(
        &mut self,
        floor:     Floor,
        direction: Direction,
    ) -> SimResult<Option<CarId>> {
        self.place_call(HallCall::toward(floor, direction))
    }

    fn place_call(&mut self, call: HallCall) -> SimResult<Option<CarId>> {
        self.floors.check(call.floor)?;
        let assigned = self.dispatch(call);
        if assigned.is_none() {
            self.stats.unanswered_calls += 1;
            if !self.pending_calls.contains(&call) {
                debug!("{} ({:?}) unanswered, will retry", call.floor, call.direction);
                self.pending_calls.push(call);
            }
        }
        Ok(assigned)
    }

    /// Select a car and queue the stop on it.
    fn dispatch(&mut self, call: HallCall) -> Option<CarId> {
        let id = self.dispatcher.select(&self.cars, call)?;
        let car = self.cars.get_mut(id.index())?;
        car.request(call.floor);
        Some(id)
    }

    fn retry_pending_calls(&mut self) {
        if self.pending_calls.is_empty() {
            return;
        }
        let calls = std::mem::take(&mut self.pending_calls);
        for call in calls {
            if self.dispatch(call).is_none() {
                self.pending_calls.push(call);
            }
        }
    }

    // ── Bounded setters ───────────────────────────────────────────────────

    /// Change the real length of a tick.  Cars keep their real-world speed.
    pub fn set_tick_period_ms(&mut self, ms: u32) -> SimResult<()> {
        let ms = refuse_out_of_range(TICK_PERIOD_MS.check(ms))?;
        self.config.tick_period_ms = ms;
        self.clock.tick_period_ms = ms;
        self.recalibrate_cars();
        Ok(())
    }

    /// Change the ratio of simulated to real time.
    ///
    /// Car rates are re-derived and every pending deadline (boarding waits,
    /// the next arrival run) has its remaining real time divided by the
    /// ratio of new to old scale.
    pub fn set_time_scale(&mut self, scale: f64) -> SimResult<()> {
        let scale = refuse_out_of_range(TIME_SCALE.check(scale))?;
        let ratio = scale / self.config.time_scale;
        self.config.time_scale = scale;
        self.spawner.rescale(self.clock.now, ratio);
        self.recalibrate_cars();
        Ok(())
    }

    /// Change the simulated time between arrival runs; `None` disables
    /// arrivals.  The next run is rescheduled one new interval from now.
    pub fn set_spawn_interval_ms(&mut self, interval: Option<u32>) -> SimResult<()> {
        if let Some(ms) = interval {
            refuse_out_of_range(SPAWN_INTERVAL_MS.check(ms))?;
        }
        self.config.spawn_interval_ms = interval;
        self.spawner.reschedule(&self.config, self.clock.now);
        Ok(())
    }

    pub fn set_spawn_probability(&mut self, p: f64) -> SimResult<()> {
        self.config.spawn_probability = refuse_out_of_range(SPAWN_PROBABILITY.check(p))?;
        Ok(())
    }

    pub fn set_group_member_probability(&mut self, p: f64) -> SimResult<()> {
        self.config.group_member_probability =
            refuse_out_of_range(GROUP_MEMBER_PROBABILITY.check(p))?;
        Ok(())
    }

    /// Change how long cars wait at a stop.  Waits already under way keep
    /// their deadline.
    pub fn set_boarding_wait_ms(&mut self, ms: u32) -> SimResult<()> {
        self.config.boarding_wait_ms = refuse_out_of_range(BOARDING_WAIT_MS.check(ms))?;
        self.recalibrate_cars();
        Ok(())
    }

    fn recalibrate_cars(&mut self) {
        let calibration = Calibration::from_config(&self.config);
        let now = self.clock.now;
        for car in &mut self.cars {
            car.recalibrate(calibration, now);
        }
        info!(
            "recalibrated: {} ms ticks at ×{} ({:.6} floors/tick², wait {} ms)",
            self.config.tick_period_ms,
            self.config.time_scale,
            calibration.acceleration,
            calibration.wait_ms,
        );
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Process one tick.  Does nothing while paused.
    ///
    /// A car invariant violation aborts the tick with [`SimError::Car`].
    pub fn tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        if !self.running {
            return Ok(());
        }
        let now = self.clock.now;
        let tick = self.clock.current_tick;
        observer.on_tick_start(tick);

        // ── Phase 1: motion ───────────────────────────────────────────────
        for (car, rng) in self.cars.iter_mut().zip(self.car_rngs.iter_mut()) {
            let delivered = car.step(now, rng)?;
            self.stats.delivered += delivered.len() as u64;
        }

        // ── Phase 2: loading ──────────────────────────────────────────────
        for car in self.cars.iter_mut() {
            let boarding = load_car(car, &mut self.floors, now)?;
            self.stats.record_boarding(boarding);
        }

        // ── Phase 3: arrivals and hall calls ──────────────────────────────
        self.retry_pending_calls();
        let groups = self.spawner.run(&self.config, now, &mut self.floors)?;
        for group in groups {
            observer.on_group_spawned(tick, &group);
            self.stats.spawned += group.size as u64;
            let call = HallCall {
                floor:     group.origin,
                direction: Direction::between(group.origin, group.destination),
            };
            self.place_call(call)?;
        }

        observer.on_tick_end(tick, &self.stats);
        self.clock.advance();
        Ok(())
    }

    /// Run up to `n` ticks; stops early if paused.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            if !self.running {
                break;
            }
            self.tick(observer)?;
        }
        Ok(())
    }

    /// Run until `ms` more real milliseconds have elapsed on the virtual
    /// clock (or the simulation is paused), then report the end.
    pub fn run_for_ms<O: SimObserver>(&mut self, ms: u64, observer: &mut O) -> SimResult<()> {
        let end = self.clock.now + ms;
        while self.running && self.clock.now < end {
            self.tick(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick, &self.stats);
        Ok(())
    }
}

/// Map a bounds check failure to a `SimError`, logging the refusal.
fn refuse_out_of_range<T>(checked: ConfigResult<T>) -> SimResult<T> {
    checked.map_err(|e| {
        warn!("setting refused: {e}");
        SimError::Config(e)
    })
}
