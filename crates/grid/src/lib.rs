//! Grid, mask, and connectivity types
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod field;
mod footprint;
mod mask;
mod periodicity;
mod shape;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use field::Field;

#[doc(inline)]
pub use footprint::Footprint;

#[doc(inline)]
pub use mask::Mask;

#[doc(inline)]
pub use periodicity::Periodicity;

#[doc(inline)]
pub use shape::{Axis, Shape};
