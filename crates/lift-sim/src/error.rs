use lift_car::CarError;
use lift_core::ConfigError;
use lift_dispatch::DispatchError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{what} length {got} does not match car count {expected}")]
    CarCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("car invariant violated: {0}")]
    Car(#[from] CarError),
}

pub type SimResult<T> = Result<T, SimError>;
