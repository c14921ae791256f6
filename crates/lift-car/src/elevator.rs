//! The `Elevator` car: continuous-position motion state machine.

use log::debug;

use lift_core::{CarId, CarRng, Floor, Millis};

use crate::{Calibration, CarError, CarResult, DestinationQueue, Direction, Person, Status};

/// Maximum number of occupants per car.
pub const CAPACITY: usize = 12;

/// One elevator car.
///
/// Cars are created once when the simulation is built and live for its whole
/// run.  The tick loop drives motion through [`Elevator::step`], the
/// dispatcher adds stops through [`Elevator::request`], and the loading step
/// moves passengers in through [`Elevator::board`].
#[derive(Debug, Clone)]
pub struct Elevator {
    id: CarId,

    /// Floor coordinate of the car; integral whenever the car is at rest.
    position: f64,

    /// Floors per tick, always `>= 0`; the direction lives in `status`.
    speed: f64,

    status: Status,

    /// The floor currently being travelled to (or served, while waiting).
    target: Option<Floor>,

    /// Past this coordinate the car decelerates toward `target`.
    halfway: f64,

    occupants: Vec<Person>,

    destinations: DestinationQueue,

    /// Set exactly while `status == Waiting`.
    wait_deadline: Option<Millis>,

    calibration: Calibration,
}

impl Elevator {
    /// A stopped, empty car at the ground floor.
    pub fn new(id: CarId, calibration: Calibration) -> Self {
        Self::parked_at(id, Floor::GROUND, calibration)
    }

    /// A stopped, empty car at `floor`.
    pub fn parked_at(id: CarId, floor: Floor, calibration: Calibration) -> Self {
        Self {
            id,
            position: floor.position(),
            speed: 0.0,
            status: Status::Stopped,
            target: None,
            halfway: floor.position(),
            occupants: Vec::with_capacity(CAPACITY),
            destinations: DestinationQueue::new(),
            wait_deadline: None,
            calibration,
        }
    }

    // ── Read accessors ────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> CarId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn target(&self) -> Option<Floor> {
        self.target
    }

    pub fn occupants(&self) -> &[Person] {
        &self.occupants
    }

    pub fn destinations(&self) -> &DestinationQueue {
        &self.destinations
    }

    #[inline]
    pub fn destination_count(&self) -> usize {
        self.destinations.len()
    }

    #[inline]
    pub fn wait_deadline(&self) -> Option<Millis> {
        self.wait_deadline
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    #[inline]
    pub fn has_room(&self) -> bool {
        self.occupants.len() < CAPACITY
    }

    /// `true` while the car has zero speed: stopped, doors open, or just
    /// committed to a direction and not yet under way.
    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.speed == 0.0
    }

    /// The direction the car is committed to.
    ///
    /// Moving cars report their motion.  A waiting car reports the side of
    /// its lowest queued stop, so passengers boarding now are filtered by
    /// where it goes next.  A stopped car, or a waiting one with nothing
    /// queued, has no direction.
    pub fn direction(&self) -> Option<Direction> {
        match self.status {
            Status::Up => Some(Direction::Up),
            Status::Down => Some(Direction::Down),
            Status::Stopped => None,
            Status::Waiting => self.destinations.min().map(|next| {
                if next.position() > self.position {
                    Direction::Up
                } else {
                    Direction::Down
                }
            }),
        }
    }

    /// Integer floor used for boarding logic: rounded down while rising,
    /// up while falling, nearest at rest.
    pub fn current_floor(&self) -> Floor {
        let f = match self.status {
            Status::Up => self.position.floor(),
            Status::Down => self.position.ceil(),
            Status::Stopped | Status::Waiting => self.position.round(),
        };
        Floor(f.max(0.0) as u32)
    }

    // ── Write entry points ────────────────────────────────────────────────

    /// Queue `floor` as a stop.
    ///
    /// Returns `false` if it was already queued, is the floor currently being
    /// travelled to, or is the floor the car is waiting at with doors open.
    pub fn request(&mut self, floor: Floor) -> bool {
        let served_now = self.target == Some(floor)
            && (self.status.is_moving() || self.status == Status::Waiting);
        if served_now {
            return false;
        }
        let added = self.destinations.insert(floor);
        if added {
            debug!("{}: queued {} ({} pending)", self.id, floor, self.destinations.len());
        }
        added
    }

    /// Take `person` aboard and queue their destination.
    pub fn board(&mut self, person: Person) -> CarResult<()> {
        if !self.has_room() {
            return Err(CarError::Full(self.id));
        }
        let destination = person.destination();
        self.occupants.push(person);
        self.request(destination);
        Ok(())
    }

    /// Remove and return every occupant whose destination is the current
    /// floor.  Only a waiting car lets anyone off.
    pub fn alight(&mut self) -> Vec<Person> {
        if self.status != Status::Waiting || self.occupants.is_empty() {
            return Vec::new();
        }
        let here = self.current_floor();
        let (leaving, staying): (Vec<Person>, Vec<Person>) = self
            .occupants
            .drain(..)
            .partition(|p| p.destination() == here);
        self.occupants = staying;
        leaving
    }

    /// Swap in new rates after the tick period or time scale changed.
    ///
    /// The current speed is converted to the new tick length so the car keeps
    /// its real-world velocity, and a pending wait deadline has its remaining
    /// time divided by the time-scale ratio.
    pub fn recalibrate(&mut self, calibration: Calibration, now: Millis) {
        let old = self.calibration;
        if old.secs_per_tick > 0.0 {
            self.speed *= calibration.secs_per_tick / old.secs_per_tick;
        }
        if let Some(deadline) = self.wait_deadline {
            let ratio = calibration.time_scale / old.time_scale;
            self.wait_deadline = Some(deadline.rescaled(now, ratio));
        }
        self.calibration = calibration;
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance the car by one tick.
    ///
    /// - `Stopped`: pick the next destination, if any is queued.
    /// - `Waiting`: let passengers off; close the doors once the deadline
    ///   has passed.
    /// - `Up` / `Down`: take any closer stop along the way, then move.
    ///
    /// Returns the passengers that alighted this tick.
    pub fn step(&mut self, now: Millis, rng: &mut CarRng) -> CarResult<Vec<Person>> {
        match self.status {
            Status::Stopped => {
                if !self.destinations.is_empty() {
                    self.pull_next_destination(now, rng)?;
                }
                Ok(Vec::new())
            }
            Status::Waiting => {
                let delivered = self.alight();
                if self.wait_deadline.is_none_or(|deadline| now >= deadline) {
                    self.wait_deadline = None;
                    self.target = None;
                    self.status = Status::Stopped;
                    debug!("{}: doors closed at {}", self.id, self.current_floor());
                }
                Ok(delivered)
            }
            Status::Up => {
                self.retarget(Direction::Up);
                self.advance(Direction::Up, now)?;
                Ok(Vec::new())
            }
            Status::Down => {
                self.retarget(Direction::Down);
                self.advance(Direction::Down, now)?;
                Ok(Vec::new())
            }
        }
    }

    /// Choose the next stop from the queue.  Only called while `Stopped`.
    ///
    /// Everything above → go up to the lowest; everything below → go down to
    /// the highest; stops on both sides → coin flip between the two extremes;
    /// the only match is this floor → open the doors right here.
    fn pull_next_destination(&mut self, now: Millis, rng: &mut CarRng) -> CarResult<()> {
        let stuck = CarError::NoNextDestination { car: self.id, position: self.position };
        let (Some(lowest), Some(highest)) = (self.destinations.min(), self.destinations.max())
        else {
            return Err(stuck);
        };
        let here = self.position;

        let (status, take_lowest) = if lowest.position() > here {
            (Status::Up, true)
        } else if highest.position() < here {
            (Status::Down, false)
        } else if lowest.position() < here && highest.position() > here {
            if rng.gen_bool(0.5) {
                (Status::Down, true)
            } else {
                (Status::Up, false)
            }
        } else if lowest.position() == here {
            (Status::Waiting, true)
        } else if highest.position() == here {
            (Status::Waiting, false)
        } else {
            return Err(stuck);
        };

        let next = if take_lowest {
            self.destinations.pop_min()
        } else {
            self.destinations.pop_max()
        };
        let next = next.ok_or(stuck)?;

        self.target = Some(next);
        self.halfway = (next.position() + here) / 2.0;
        self.status = status;
        if status == Status::Waiting {
            self.open_doors(now);
        }
        debug!("{}: {} toward {} from {:.2}", self.id, status, next, here);
        Ok(())
    }

    /// While moving, divert to a queued stop that lies between the car and
    /// its target; the old target goes back into the queue.
    fn retarget(&mut self, direction: Direction) {
        let Some(target) = self.target else { return };
        let here = self.position;
        // Nearest queued stop strictly between the car and its target.
        let queued = self.destinations.as_slice();
        let closer = match direction {
            Direction::Up => queued
                .iter()
                .copied()
                .find(|f| f.position() > here && *f < target),
            Direction::Down => queued
                .iter()
                .rev()
                .copied()
                .find(|f| f.position() < here && *f > target),
        };
        if let Some(next) = closer {
            self.destinations.remove(next);
            self.destinations.insert(target);
            self.target = Some(next);
            self.halfway = (next.position() + here) / 2.0;
            debug!("{}: retargeted {} → {}", self.id, target, next);
        }
    }

    /// One tick of motion in `direction`.
    fn advance(&mut self, direction: Direction, now: Millis) -> CarResult<()> {
        let target = self.target.ok_or(CarError::NoTarget(self.id))?;
        let goal = target.position();
        let sign = direction.sign();

        // Distances measured along the direction of travel.
        let to_goal = (goal - self.position) * sign;
        if to_goal <= 0.0 {
            self.position = goal;
            self.speed = 0.0;
            self.status = Status::Waiting;
            self.open_doors(now);
            debug!("{}: arrived at {}", self.id, target);
            return Ok(());
        }

        let to_halfway = (self.halfway - self.position) * sign;
        let Calibration { acceleration, min_speed, .. } = self.calibration;
        if to_halfway > 0.0 {
            self.speed += acceleration;
        } else {
            self.speed = (self.speed - acceleration).max(min_speed);
        }
        self.position += sign * self.speed;
        Ok(())
    }

    fn open_doors(&mut self, now: Millis) {
        self.speed = 0.0;
        self.wait_deadline = Some(now + self.calibration.wait_ms);
    }
}
