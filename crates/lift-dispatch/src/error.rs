use lift_car::CarError;
use lift_core::Floor;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error("{floor} is outside the building ({floors} floors)")]
    UnknownFloor { floor: Floor, floors: u32 },

    #[error("car invariant violated: {0}")]
    Car(#[from] CarError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
