//! Car status and travel direction.

use std::fmt;

use lift_core::Floor;

/// What a car is doing right now.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Doors closed, not moving, no destination selected.
    #[default]
    Stopped,
    Up,
    Down,
    /// Doors open at a floor; a wait deadline is pending.
    Waiting,
}

impl Status {
    /// The direction of motion, if the car is moving.
    pub fn motion(self) -> Option<Direction> {
        match self {
            Status::Up => Some(Direction::Up),
            Status::Down => Some(Direction::Down),
            Status::Stopped | Status::Waiting => None,
        }
    }

    pub fn is_moving(self) -> bool {
        self.motion().is_some()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Stopped => "stopped",
            Status::Up => "up",
            Status::Down => "down",
            Status::Waiting => "waiting",
        })
    }
}

/// Travel direction of a car or a hall call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction of travel from `from` to `to`; `None` when they coincide.
    pub fn between(from: Floor, to: Floor) -> Option<Direction> {
        match from.cmp(&to) {
            std::cmp::Ordering::Less => Some(Direction::Up),
            std::cmp::Ordering::Greater => Some(Direction::Down),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// `+1.0` going up, `-1.0` going down.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Up => 1.0,
            Direction::Down => -1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
        })
    }
}
