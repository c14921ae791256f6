//! `DestinationQueue`: the floors a car still intends to visit.
//!
//! Stored as an ascending `Vec<Floor>` with no duplicates.  A car rarely has
//! more than a dozen stops queued, so binary search plus `Vec::insert` beats a
//! tree in both speed and memory, and keeps `min`/`max` O(1).

use lift_core::Floor;

/// Ascending, duplicate-free set of target floors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationQueue {
    floors: Vec<Floor>,
}

impl DestinationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `floor` at its sorted position.
    ///
    /// Returns `false` (and leaves the queue untouched) if it is already queued.
    pub fn insert(&mut self, floor: Floor) -> bool {
        match self.floors.binary_search(&floor) {
            Ok(_) => false,
            Err(at) => {
                self.floors.insert(at, floor);
                true
            }
        }
    }

    /// Remove `floor` if present.
    pub fn remove(&mut self, floor: Floor) -> bool {
        match self.floors.binary_search(&floor) {
            Ok(at) => {
                self.floors.remove(at);
                true
            }
            Err(_) => false,
        }
    }

    #[inline]
    pub fn min(&self) -> Option<Floor> {
        self.floors.first().copied()
    }

    #[inline]
    pub fn max(&self) -> Option<Floor> {
        self.floors.last().copied()
    }

    pub fn pop_min(&mut self) -> Option<Floor> {
        if self.floors.is_empty() {
            None
        } else {
            Some(self.floors.remove(0))
        }
    }

    pub fn pop_max(&mut self) -> Option<Floor> {
        self.floors.pop()
    }

    pub fn contains(&self, floor: Floor) -> bool {
        self.floors.binary_search(&floor).is_ok()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.floors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    /// Queued floors in ascending order.
    pub fn as_slice(&self) -> &[Floor] {
        &self.floors
    }

    pub fn iter(&self) -> impl Iterator<Item = Floor> + '_ {
        self.floors.iter().copied()
    }
}
