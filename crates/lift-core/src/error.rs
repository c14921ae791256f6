//! Configuration error type.
//!
//! Sub-crates define their own error enums and wrap `ConfigError` as one
//! variant via `#[from]`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        name:  &'static str,
        value: f64,
        min:   f64,
        max:   f64,
    },

    #[error("{name} must be a finite number")]
    NotFinite { name: &'static str },

    #[error("building needs at least 2 floors, got {0}")]
    TooFewFloors(u32),

    #[error("building needs at least one elevator")]
    NoElevators,
}

/// Shorthand result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;
