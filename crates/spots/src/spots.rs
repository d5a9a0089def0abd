//! Module for labelled spot data

// crate modules
use crate::tiling::Tiling;

// pictools modules
use pictools_grid::Shape;

// external crates
use log::debug;

/// Per-spot totals gathered while renumbering
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Summary {
    /// Number of cells
    pub size: usize,
    /// Sum of unwrapped cell coordinates
    pub sum: [i64; 3],
    /// Copies needed along each axis
    pub tiling: [Tiling; 3],
}

/// Connected spots of a mask, labelled with periodic boundaries respected
///
/// Every foreground cell carries a label in `1..=count()` and background
/// cells are `0`. Labels are dense and deterministic: the same mask,
/// periodicity, and footprint always give the same labels.
///
/// A spot cut by a periodic boundary keeps a single label on both sides.
/// [Spots::tiling()] says how many periodic copies of the domain are needed
/// to see each spot whole.
///
/// ```rust
/// # use pictools_grid::{Footprint, Mask, Periodicity, Shape};
/// # use pictools_spots::{label_periodic_components, Tiling};
/// let shape = Shape::new(4, 4, 4);
/// let mask = Mask::from_cells(shape, &[[0, 2, 2], [3, 2, 2]]).unwrap();
///
/// // Index 0 and index 3 touch across the periodic x boundary
/// let spots = label_periodic_components(
///     &mask,
///     Periodicity::new(true, false, false),
///     &Footprint::full(),
/// );
///
/// assert_eq!(spots.count(), 1);
/// assert_eq!(spots.label_at(0, 2, 2), Some(1));
/// assert_eq!(spots.label_at(3, 2, 2), Some(1));
/// assert_eq!(spots.tiling(1), Some([Tiling::Finite(2), Tiling::Finite(1), Tiling::Finite(1)]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Spots {
    shape: Shape,
    periodic: [bool; 3],
    labels: Vec<u32>,
    summaries: Vec<Summary>,
}

impl Spots {
    pub(crate) fn new(
        shape: Shape,
        periodic: [bool; 3],
        labels: Vec<u32>,
        summaries: Vec<Summary>,
    ) -> Self {
        Self {
            shape,
            periodic,
            labels,
            summaries,
        }
    }

    /// Grid extents, identical to the labelled mask
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Flat label array in the same order as the mask data
    #[inline]
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Consume the result, keeping only the flat label array
    pub fn into_labels(self) -> Vec<u32> {
        self.labels
    }

    /// Label at `(i, j, k)`, or `None` outside of the grid
    pub fn label_at(&self, i: usize, j: usize, k: usize) -> Option<u32> {
        if self.shape.contains([i, j, k]) {
            Some(self.labels[self.shape.index(i, j, k)])
        } else {
            None
        }
    }

    /// Number of spots
    #[inline]
    pub fn count(&self) -> usize {
        self.summaries.len()
    }

    /// True if the mask had no foreground at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    fn summary(&self, label: u32) -> Option<&Summary> {
        match label {
            0 => None,
            l => self.summaries.get(l as usize - 1),
        }
    }

    /// Tiling along x, y, z for a spot label
    pub fn tiling(&self, label: u32) -> Option<[Tiling; 3]> {
        self.summary(label).map(|s| s.tiling)
    }

    /// Tiling of every spot, in label order
    pub fn tilings(&self) -> impl Iterator<Item = [Tiling; 3]> + '_ {
        self.summaries.iter().map(|s| s.tiling)
    }

    /// Tiling table as integers, one row per axis and one column per spot
    ///
    /// Unbounded spots are marked with `-count()`, see [Tiling::factor()].
    ///
    /// ```rust
    /// # use pictools_grid::{Footprint, Mask, Periodicity, Shape};
    /// # use pictools_spots::label_periodic_components;
    /// let mask = Mask::filled(Shape::new(4, 2, 2), true);
    /// let spots = label_periodic_components(&mask, Periodicity::new(true, false, false), &Footprint::full());
    ///
    /// assert_eq!(spots.tiling_matrix(), [vec![-1], vec![1], vec![1]]);
    /// ```
    pub fn tiling_matrix(&self) -> [Vec<i64>; 3] {
        let count = self.count();
        [0, 1, 2].map(|a| {
            self.summaries
                .iter()
                .map(|s| s.tiling[a].factor(count))
                .collect()
        })
    }

    /// Number of cells in a spot
    pub fn size(&self, label: u32) -> Option<usize> {
        self.summary(label).map(|s| s.size)
    }

    /// Number of cells in every spot, in label order
    pub fn sizes(&self) -> Vec<usize> {
        self.summaries.iter().map(|s| s.size).collect()
    }

    /// Every `[i, j, k]` carrying a label
    pub fn cells(&self, label: u32) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.labels
            .iter()
            .enumerate()
            .filter(move |(_, l)| label != 0 && **l == label)
            .map(move |(index, _)| self.shape.coordinates(index))
    }

    /// Centre of a spot, in cell index units
    ///
    /// Cells are averaged after moving each one next to the rest of its spot,
    /// so a spot cut by a periodic boundary gets a centre near the boundary
    /// rather than in the middle of the domain. The result is folded back
    /// into `[0, n)` along periodic axes.
    ///
    /// Returns `None` for an unknown label, or for a spot that is unbounded
    /// along any axis, which has no meaningful centre.
    ///
    /// ```rust
    /// # use pictools_grid::{Footprint, Mask, Periodicity, Shape};
    /// # use pictools_spots::label_periodic_components;
    /// let shape = Shape::new(8, 1, 1);
    /// let mask = Mask::from_cells(shape, &[[0, 0, 0], [7, 0, 0]]).unwrap();
    /// let spots = label_periodic_components(&mask, Periodicity::new(true, false, false), &Footprint::full());
    ///
    /// // cells 7 and 8 (= 0) average to 7.5
    /// assert_eq!(spots.barycentre(1), Some([7.5, 0.0, 0.0]));
    /// ```
    pub fn barycentre(&self, label: u32) -> Option<[f64; 3]> {
        let summary = self.summary(label)?;
        if summary.tiling.iter().any(|t| t.is_unbounded()) {
            debug!("spot {label} wraps around the domain, no barycentre");
            return None;
        }

        let dims = self.shape.dims();
        Some([0, 1, 2].map(|a| {
            let mean = summary.sum[a] as f64 / summary.size as f64;
            match self.periodic[a] {
                true => mean.rem_euclid(dims[a] as f64),
                false => mean,
            }
        }))
    }
}
