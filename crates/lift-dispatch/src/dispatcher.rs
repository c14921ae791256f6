//! Hall-call assignment: which car answers a call from a floor.
//!
//! # Pluggability
//!
//! The simulation calls dispatch through the [`Dispatcher`] trait, so an
//! application can swap in a different heuristic (zoning, destination
//! control) without touching the tick loop.  [`NearestCarDispatcher`] is the
//! default.

use log::debug;

use lift_car::{Direction, Elevator};
use lift_core::{CarId, Floor};

// ── HallCall ──────────────────────────────────────────────────────────────────

/// A request for a car to visit `floor`, optionally to travel `direction`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HallCall {
    pub floor:     Floor,
    pub direction: Option<Direction>,
}

impl HallCall {
    pub fn new(floor: Floor) -> Self {
        Self { floor, direction: None }
    }

    pub fn toward(floor: Floor, direction: Direction) -> Self {
        Self { floor, direction: Some(direction) }
    }
}

// ── Dispatcher trait ──────────────────────────────────────────────────────────

/// Pluggable car-selection heuristic.
///
/// Implementations must not mutate anything: they only pick.  Returning
/// `None` leaves the call unanswered; the caller decides whether to retry.
pub trait Dispatcher {
    fn select(&self, cars: &[Elevator], call: HallCall) -> Option<CarId>;
}

// ── NearestCarDispatcher ──────────────────────────────────────────────────────

/// Nearest idle car, or a nearer car already heading toward the call.
///
/// 1. Candidates are idle cars (no direction) and cars moving toward the
///    floor: rising and below it, or falling and above it.  A directed call
///    only accepts moving cars travelling its way.
/// 2. The nearest idle car answers, unless a moving candidate is strictly
///    nearer.  Distance ties go to the earlier car.
/// 3. With no candidate, an undirected call goes to the car with the fewest
///    queued stops; a directed call goes unanswered.
#[derive(Copy, Clone, Debug, Default)]
pub struct NearestCarDispatcher;

impl Dispatcher for NearestCarDispatcher {
    fn select(&self, cars: &[Elevator], call: HallCall) -> Option<CarId> {
        let idle = nearest(cars.iter().filter(|c| c.direction().is_none()), call.floor);
        let moving = nearest(
            cars.iter().filter(|c| heading_toward(c, call.floor, call.direction)),
            call.floor,
        );

        let chosen = match (idle, moving) {
            (Some(i), Some(m)) if distance(m, call.floor) < distance(i, call.floor) => Some(m),
            (Some(i), _) => Some(i),
            (None, Some(m)) => Some(m),
            (None, None) if call.direction.is_none() => least_busy(cars),
            (None, None) => None,
        };

        match chosen {
            Some(car) => debug!(
                "{} ({:?}) → {} at {:.2}, {} queued",
                call.floor, call.direction, car.id(), car.position(), car.destination_count()
            ),
            None => debug!("{} ({:?}) → no candidate", call.floor, call.direction),
        }
        chosen.map(Elevator::id)
    }
}

fn distance(car: &Elevator, floor: Floor) -> f64 {
    (car.position() - floor.position()).abs()
}

/// Nearest car to `floor`; the first one wins a tie.
fn nearest<'a>(cars: impl Iterator<Item = &'a Elevator>, floor: Floor) -> Option<&'a Elevator> {
    cars.min_by(|a, b| distance(a, floor).total_cmp(&distance(b, floor)))
}

/// `car` is travelling toward `floor`, in `wanted` direction if one is given.
fn heading_toward(car: &Elevator, floor: Floor, wanted: Option<Direction>) -> bool {
    let Some(dir) = car.direction() else { return false };
    if wanted.is_some_and(|w| w != dir) {
        return false;
    }
    match dir {
        Direction::Up => car.position() < floor.position(),
        Direction::Down => car.position() > floor.position(),
    }
}

/// Fewest queued stops; the first one wins a tie.
fn least_busy(cars: &[Elevator]) -> Option<&Elevator> {
    cars.iter().min_by_key(|c| c.destination_count())
}
