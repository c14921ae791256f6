//! The arrival process: passengers appearing on floors in groups.
//!
//! # Model
//!
//! Floor 0 is the building's only entrance.  Every group either enters there
//! and heads for a uniformly random upper floor, or starts on a uniformly
//! random upper floor and heads down to leave (50/50).
//!
//! Each run keeps creating groups while a draw succeeds with
//! `spawn_probability`; each group gets one member, then one more per
//! successful draw with `group_member_probability`.  Runs happen once per
//! spawn interval, measured in simulated time.

use log::trace;

use lift_car::Person;
use lift_core::{Floor, Millis, SimConfig, SimRng};
use lift_dispatch::{DispatchResult, FloorRegistry};

/// One batch of passengers sharing an origin and a destination.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GroupArrival {
    pub origin:      Floor,
    pub destination: Floor,
    pub size:        usize,
}

/// Stochastic passenger generator with its own deadline on the virtual clock.
pub struct Spawner {
    rng: SimRng,
    /// Next real-time run; `None` while spawning is disabled.
    next_run: Option<Millis>,
    spawned: u64,
}

impl Spawner {
    /// A spawner whose first run is one interval after `now`.
    pub fn new(config: &SimConfig, now: Millis) -> Self {
        let mut spawner = Self {
            rng:      SimRng::new(config.seed),
            next_run: None,
            spawned:  0,
        };
        spawner.reschedule(config, now);
        spawner
    }

    /// Total persons created so far.
    #[inline]
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    #[inline]
    pub fn next_run(&self) -> Option<Millis> {
        self.next_run
    }

    pub fn is_enabled(&self) -> bool {
        self.next_run.is_some()
    }

    /// Restart the interval from `now`, e.g. after the interval changed.
    pub fn reschedule(&mut self, config: &SimConfig, now: Millis) {
        self.next_run = config
            .spawn_interval_ms
            .map(|interval| now + config.real_ms(interval).max(1));
    }

    /// Rewrite the pending deadline after the time scale changed by `ratio`.
    pub fn rescale(&mut self, now: Millis, ratio: f64) {
        self.next_run = self.next_run.map(|deadline| deadline.rescaled(now, ratio));
    }

    /// Run the arrival process if its deadline has passed.
    ///
    /// New passengers are appended to `registry`; the caller places the hall
    /// calls for the returned groups.
    pub fn run(
        &mut self,
        config:   &SimConfig,
        now:      Millis,
        registry: &mut FloorRegistry,
    ) -> DispatchResult<Vec<GroupArrival>> {
        match self.next_run {
            Some(deadline) if now >= deadline => {}
            _ => return Ok(Vec::new()),
        }
        self.reschedule(config, now);
        self.spawn(config, now, registry)
    }

    /// One arrival run, regardless of the deadline.
    pub fn spawn(
        &mut self,
        config:   &SimConfig,
        now:      Millis,
        registry: &mut FloorRegistry,
    ) -> DispatchResult<Vec<GroupArrival>> {
        let mut groups = Vec::new();
        while self.rng.gen_bool(config.spawn_probability) {
            let group = generate_group(&mut self.rng, config.floors, config.group_member_probability);
            for _ in 0..group.size {
                registry.push(Person::new(group.origin, group.destination, now))?;
            }
            self.spawned += group.size as u64;
            trace!("{} × {} → {}", group.size, group.origin, group.destination);
            groups.push(group);
        }
        Ok(groups)
    }
}

/// Draw one group: origin, destination, and member count.
///
/// `floors` must be at least 2 so an upper floor exists.
pub fn generate_group(rng: &mut SimRng, floors: u32, member_probability: f64) -> GroupArrival {
    let upper = Floor(rng.gen_range(1..floors.max(2)));
    let (origin, destination) = if rng.gen_bool(0.5) {
        (upper, Floor::GROUND)
    } else {
        (Floor::GROUND, upper)
    };
    let mut size = 1;
    while rng.gen_bool(member_probability) {
        size += 1;
    }
    GroupArrival { origin, destination, size }
}
