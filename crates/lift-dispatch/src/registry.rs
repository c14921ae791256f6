//! `FloorRegistry`: who is waiting where.

use std::collections::VecDeque;

use lift_car::Person;
use lift_core::Floor;

use crate::{DispatchError, DispatchResult};

/// One FIFO queue of waiting passengers per floor.
///
/// The arrival process appends; the loading step removes.  Queue order is
/// arrival order, which is also boarding priority.
#[derive(Debug, Clone, Default)]
pub struct FloorRegistry {
    floors: Vec<VecDeque<Person>>,
}

impl FloorRegistry {
    pub fn new(floor_count: u32) -> Self {
        Self {
            floors: (0..floor_count).map(|_| VecDeque::new()).collect(),
        }
    }

    #[inline]
    pub fn floor_count(&self) -> u32 {
        self.floors.len() as u32
    }

    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        floor.index() < self.floors.len()
    }

    /// `Ok(floor)` if it exists in this building.
    pub fn check(&self, floor: Floor) -> DispatchResult<Floor> {
        if self.contains(floor) {
            Ok(floor)
        } else {
            Err(DispatchError::UnknownFloor { floor, floors: self.floor_count() })
        }
    }

    /// Passengers waiting at `floor`, in arrival order.
    pub fn waiting(&self, floor: Floor) -> DispatchResult<&VecDeque<Person>> {
        let floor = self.check(floor)?;
        Ok(&self.floors[floor.index()])
    }

    /// Number of passengers waiting at `floor`; zero for unknown floors.
    pub fn waiting_count(&self, floor: Floor) -> usize {
        self.floors.get(floor.index()).map_or(0, VecDeque::len)
    }

    pub fn total_waiting(&self) -> usize {
        self.floors.iter().map(VecDeque::len).sum()
    }

    /// Enqueue `person` at their origin floor.
    pub fn push(&mut self, person: Person) -> DispatchResult<()> {
        let origin = self.check(person.origin())?;
        self.floors[origin.index()].push_back(person);
        Ok(())
    }

    pub(crate) fn queue_mut(&mut self, floor: Floor) -> DispatchResult<&mut VecDeque<Person>> {
        let floor = self.check(floor)?;
        Ok(&mut self.floors[floor.index()])
    }
}
