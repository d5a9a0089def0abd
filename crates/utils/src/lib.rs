//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! For example, consistent scientific formatting of threshold levels or
//! finding the range of a scalar field are useful everywhere.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod error;
mod slice_ext;
mod value_ext;

// Flatten
pub use error::{Error, Result};
pub use slice_ext::SliceExt;
pub use value_ext::ValueExt;
