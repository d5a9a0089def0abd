//! Result and Error types for pictools-grid

use crate::shape::Shape;

/// Type alias for Result<T, grid::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `pictools-grid` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("inconsistent data length for a {shape} grid (expected {expected}, found {found})")]
    UnexpectedLength {
        shape: Shape,
        expected: usize,
        found: usize,
    },

    #[error("cell {cell:?} lies outside of a {shape} grid")]
    CellOutOfBounds { cell: [usize; 3], shape: Shape },

    #[error("footprint is not symmetric, offset {0:?} has no opposite")]
    AsymmetricFootprint([isize; 3]),

    #[error("unable to derive threshold levels")]
    LevelError(#[from] pictools_utils::Error),
}
