//! Connected-component labelling with periodic boundaries
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod doubler;
mod equivalence;
mod error;
mod finder;
mod labeler;
mod regions;
mod renumber;
mod seam;
mod spots;
mod tiling;

#[doc(inline)]
pub use finder::{count_periodic_components, label_periodic_components, SpotCounter, SpotFinder};

#[doc(inline)]
pub use spots::Spots;

#[doc(inline)]
pub use tiling::Tiling;

#[doc(inline)]
pub use regions::{RegionCount, RegionCurve, RegionSweep, Transition};

#[doc(inline)]
pub use error::{Error, Result};
