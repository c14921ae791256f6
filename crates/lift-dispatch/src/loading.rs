//! Moving waiting passengers into a car that is at rest on their floor.

use lift_car::Elevator;
use lift_core::Millis;

use crate::{DispatchResult, FloorRegistry};

/// What one loading pass did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Boarding {
    /// Passengers that boarded.
    pub count: usize,
    /// Sum of their real waiting times, spawn to boarding.
    pub waited_ms: u64,
}

/// Board eligible passengers from the car's floor, in arrival order.
///
/// A passenger is eligible while the car has room and either the car has no
/// direction yet or the passenger's destination lies the way the car is
/// going.  The car's direction is re-read after every boarding: a waiting
/// car with nothing queued takes its direction from the first passenger.
///
/// Cars with nonzero speed are left alone.  A car that has just committed
/// to a direction is still at speed zero and takes passengers going its way.
pub fn load_car(
    car:      &mut Elevator,
    registry: &mut FloorRegistry,
    now:      Millis,
) -> DispatchResult<Boarding> {
    let mut boarding = Boarding::default();
    if !car.is_at_rest() {
        return Ok(boarding);
    }

    let floor = car.current_floor();
    let queue = registry.queue_mut(floor)?;
    let mut i = 0;
    while i < queue.len() && car.has_room() {
        let eligible = match car.direction() {
            None => true,
            Some(dir) => queue[i].heads(floor, dir),
        };
        if !eligible {
            i += 1;
            continue;
        }
        if let Some(person) = queue.remove(i) {
            boarding.count += 1;
            boarding.waited_ms += person.age_ms(now);
            car.board(person)?;
        }
    }
    Ok(boarding)
}
