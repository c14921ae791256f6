use lift_core::CarId;
use thiserror::Error;

/// Modelling-invariant violations.  Any of these means the state machine is
/// inconsistent; the tick that hit it must fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarError {
    #[error("{car}: no next destination at position {position} (queue empty or inconsistent)")]
    NoNextDestination { car: CarId, position: f64 },

    #[error("{0}: is moving without a target floor")]
    NoTarget(CarId),

    #[error("{0}: boarding refused, already at capacity")]
    Full(CarId),
}

pub type CarResult<T> = Result<T, CarError>;
