//! Periodic connected-component labelling pipeline
//!
//! Doubling, base labelling, and seam merging are shared by both variants.
//! The full variant then renumbers and trims, the count-only variant just
//! counts the surviving classes.

// crate modules
use crate::doubler::Padded;
use crate::equivalence::Equivalence;
use crate::error::{Error, Result};
use crate::labeler::label_grid;
use crate::renumber::renumber;
use crate::seam::merge_seams;
use crate::spots::Spots;

// pictools modules
use pictools_grid::{Axis, Footprint, Mask, Periodicity};

// external crates
use log::debug;

/// Label the connected spots of a mask with periodic boundaries
///
/// Convenience wrapper around [SpotFinder::label()] with the default axis
/// order. See [Spots] for the result.
///
/// ```rust
/// # use pictools_grid::{Footprint, Mask, Periodicity, Shape};
/// # use pictools_spots::label_periodic_components;
/// let mask = Mask::filled(Shape::new(4, 4, 4), false);
/// let spots = label_periodic_components(&mask, Periodicity::all(), &Footprint::full());
///
/// assert_eq!(spots.count(), 0);
/// assert!(spots.labels().iter().all(|l| *l == 0));
/// ```
pub fn label_periodic_components(
    mask: &Mask,
    periodicity: Periodicity,
    footprint: &Footprint,
) -> Spots {
    SpotFinder::new(periodicity, *footprint).label(mask)
}

/// Count the connected spots of a mask with periodic boundaries
///
/// Always equal to the count from [label_periodic_components()], but skips
/// building the final label array. For many masks in a row, hold on to a
/// [SpotCounter] instead so the working buffers are reused.
///
/// ```rust
/// # use pictools_grid::{Footprint, Mask, Periodicity, Shape};
/// # use pictools_spots::count_periodic_components;
/// let shape = Shape::new(6, 1, 1);
/// let mask = Mask::new(shape, vec![true, false, true, false, false, true]).unwrap();
///
/// // The last cell wraps onto the first
/// let footprint = Footprint::full();
/// assert_eq!(count_periodic_components(&mask, Periodicity::none(), &footprint), 3);
/// assert_eq!(count_periodic_components(&mask, Periodicity::all(), &footprint), 2);
/// ```
pub fn count_periodic_components(
    mask: &Mask,
    periodicity: Periodicity,
    footprint: &Footprint,
) -> usize {
    SpotFinder::new(periodicity, *footprint).count(mask)
}

/// Configuration for periodic spot labelling
///
/// Holds the periodicity, the connectivity footprint, and the order in which
/// periodic seams are merged. The order only decides which provisional label
/// represents a class while merging, never the final partition or numbering.
///
/// ```rust
/// # use pictools_grid::{Axis, Footprint, Mask, Periodicity, Shape};
/// # use pictools_spots::SpotFinder;
/// let finder = SpotFinder::new(Periodicity::all(), Footprint::faces())
///     .axis_order([Axis::Z, Axis::X, Axis::Y])
///     .unwrap();
///
/// let mask = Mask::from_fn(Shape::new(5, 5, 5), |i, j, _| i == 0 || j == 4);
/// assert_eq!(finder.count(&mask), 1);
/// assert_eq!(finder.label(&mask).count(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpotFinder {
    periodicity: Periodicity,
    footprint: Footprint,
    order: [Axis; 3],
}

impl SpotFinder {
    /// New finder merging seams in x, y, z order
    pub fn new(periodicity: Periodicity, footprint: Footprint) -> Self {
        Self {
            periodicity,
            footprint,
            order: Axis::ALL,
        }
    }

    /// Change the order in which periodic seams are merged
    ///
    /// Every axis must appear exactly once.
    pub fn axis_order(mut self, order: [Axis; 3]) -> Result<Self> {
        if !Axis::ALL.iter().all(|axis| order.contains(axis)) {
            return Err(Error::InvalidAxisOrder(order));
        }
        self.order = order;
        Ok(self)
    }

    /// Periodic boundary flags
    pub fn periodicity(&self) -> Periodicity {
        self.periodicity
    }

    /// Connectivity footprint
    pub fn footprint(&self) -> &Footprint {
        &self.footprint
    }

    /// Label every spot in `mask`
    pub fn label(&self, mask: &Mask) -> Spots {
        let mut scratch = Scratch::default();
        self.merge(mask, &mut scratch);
        let spots = renumber(&scratch.labels, &scratch.padded, &mut scratch.table);
        debug!("labelled {} spots on a {} grid", spots.count(), mask.shape());
        spots
    }

    /// Count the spots in `mask` without building a label array
    pub fn count(&self, mask: &Mask) -> usize {
        self.counter().count(mask)
    }

    /// Reusable counter for repeated counting with this configuration
    pub fn counter(&self) -> SpotCounter {
        SpotCounter {
            finder: *self,
            scratch: Scratch::default(),
        }
    }

    /// Double, label, and merge seams, leaving the results in `scratch`
    fn merge(&self, mask: &Mask, scratch: &mut Scratch) {
        let periodic = self.periodicity.effective(mask.shape());
        scratch.padded.fill(mask, periodic);

        let count = label_grid(
            scratch.padded.data(),
            scratch.padded.shape(),
            &self.footprint.backward_offsets(),
            &mut scratch.labels,
            &mut scratch.table,
        );
        debug!(
            "{count} provisional labels on a padded {} grid",
            scratch.padded.shape()
        );

        scratch.table.reset(count);
        merge_seams(&scratch.labels, &scratch.padded, &self.order, &mut scratch.table);
    }
}

/// Working buffers shared by every stage of the pipeline
#[derive(Debug, Clone, Default)]
struct Scratch {
    padded: Padded,
    labels: Vec<u32>,
    table: Equivalence,
}

/// Count-only spot labelling that keeps its buffers between calls
///
/// Sweeping a field over many threshold levels counts spots on lots of
/// masks with the same shape, and the padded copy, label array, and
/// equivalence table can all be reused from one mask to the next.
///
/// ```rust
/// # use pictools_grid::{Field, Footprint, Periodicity, Shape};
/// # use pictools_spots::SpotFinder;
/// let field = Field::from_fn(Shape::new(8, 8, 1), |i, j, _| ((i * j) % 5) as f64);
/// let mut counter = SpotFinder::new(Periodicity::all(), Footprint::full()).counter();
///
/// let counts: Vec<usize> = [0.5, 1.5, 2.5, 3.5]
///     .iter()
///     .map(|level| counter.count(&field.above(*level)))
///     .collect();
/// assert_eq!(counts.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct SpotCounter {
    finder: SpotFinder,
    scratch: Scratch,
}

impl SpotCounter {
    /// Number of spots in `mask`
    pub fn count(&mut self, mask: &Mask) -> usize {
        self.finder.merge(mask, &mut self.scratch);
        self.scratch.table.classes()
    }

    /// Configuration used by this counter
    pub fn finder(&self) -> &SpotFinder {
        &self.finder
    }
}
