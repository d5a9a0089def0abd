//! Result and Error types for pictools-spots

// pictools modules
use pictools_grid::Axis;

/// Type alias for Result<T, spots::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `pictools-spots` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("grid error")]
    GridError(#[from] pictools_grid::Error),

    #[error("failed to serialise results")]
    JsonError(#[from] serde_json::Error),

    #[error("axis order {0:?} must list every axis exactly once")]
    InvalidAxisOrder([Axis; 3]),

    #[error("threshold level {0} is not a number")]
    UndefinedLevel(f64),
}
