//! `pictools` is a small toolkit for post-processing particle-in-cell
//! simulation grids, centred on connected-component labelling with periodic
//! boundaries
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use pictools_grid as grid;

#[doc(inline)]
pub use pictools_utils as utils;

#[cfg(feature = "spots")]
#[cfg_attr(docsrs, doc(cfg(feature = "spots")))]
#[doc(inline)]
pub use pictools_spots as spots;
