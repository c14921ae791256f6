//! A single passenger.

use lift_core::{Floor, Millis};

use crate::Direction;

/// One passenger, created by the arrival process.
///
/// A `Person` is owned by whichever queue currently holds it: the floor
/// registry while waiting, a car's occupant list while riding.  It is dropped
/// when it alights at its destination.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    origin:      Floor,
    destination: Floor,
    created_at:  Millis,
}

impl Person {
    pub fn new(origin: Floor, destination: Floor, created_at: Millis) -> Self {
        Self { origin, destination, created_at }
    }

    #[inline]
    pub fn origin(&self) -> Floor {
        self.origin
    }

    #[inline]
    pub fn destination(&self) -> Floor {
        self.destination
    }

    /// Rebind the destination.  Only meaningful before boarding: once on a
    /// car the destination has already been queued.
    pub fn set_destination(&mut self, destination: Floor) {
        self.destination = destination;
    }

    #[inline]
    pub fn created_at(&self) -> Millis {
        self.created_at
    }

    /// Real milliseconds since this person appeared.
    #[inline]
    pub fn age_ms(&self, now: Millis) -> u64 {
        now.since(self.created_at)
    }

    /// Whether riding from `from` in `direction` brings this person closer to
    /// their destination.
    pub fn heads(&self, from: Floor, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.destination > from,
            Direction::Down => self.destination < from,
        }
    }
}
