//! Module for boolean grid data

// crate modules
use crate::error::{Error, Result};
use crate::footprint::Footprint;
use crate::periodicity::Periodicity;
use crate::shape::Shape;

/// Boolean array over a regular grid
///
/// Usually the result of thresholding a [Field](crate::Field), where `true`
/// marks the cells of interest (the foreground). Data are stored flat in the
/// row-major order described by [Shape].
///
/// ```rust
/// # use pictools_grid::{Mask, Shape};
/// let shape = Shape::new(4, 4, 4);
/// let mask = Mask::from_cells(shape, &[[0, 2, 2], [3, 2, 2]]).unwrap();
///
/// assert_eq!(mask.count(), 2);
/// assert_eq!(mask.get(3, 2, 2), Some(true));
/// assert_eq!(mask.get(1, 2, 2), Some(false));
/// assert_eq!(mask.get(4, 2, 2), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    shape: Shape,
    data: Vec<bool>,
}

impl Mask {
    /// Wrap existing flat data, which must match the grid size
    pub fn new(shape: Shape, data: Vec<bool>) -> Result<Self> {
        if data.len() != shape.len() {
            return Err(Error::UnexpectedLength {
                shape,
                expected: shape.len(),
                found: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Wrap flat data already known to match the grid size
    pub(crate) fn from_flat(shape: Shape, data: Vec<bool>) -> Self {
        debug_assert_eq!(data.len(), shape.len());
        Self { shape, data }
    }

    /// Every cell set to the same value
    pub fn filled(shape: Shape, value: bool) -> Self {
        Self {
            shape,
            data: vec![value; shape.len()],
        }
    }

    /// Evaluate a predicate at every `(i, j, k)`
    pub fn from_fn(shape: Shape, f: impl Fn(usize, usize, usize) -> bool) -> Self {
        Self {
            shape,
            data: shape.cells().map(|[i, j, k]| f(i, j, k)).collect(),
        }
    }

    /// Background everywhere except the listed cells
    pub fn from_cells(shape: Shape, cells: &[[usize; 3]]) -> Result<Self> {
        let mut mask = Self::filled(shape, false);
        for &[i, j, k] in cells {
            mask.set(i, j, k, true)?;
        }
        Ok(mask)
    }

    /// Grid extents
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Flat view of the data
    #[inline]
    pub fn data(&self) -> &[bool] {
        &self.data
    }

    /// Value at `(i, j, k)`, or `None` outside of the grid
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<bool> {
        if self.shape.contains([i, j, k]) {
            Some(self.data[self.shape.index(i, j, k)])
        } else {
            None
        }
    }

    /// Set the value at `(i, j, k)`
    pub fn set(&mut self, i: usize, j: usize, k: usize, value: bool) -> Result<()> {
        if !self.shape.contains([i, j, k]) {
            return Err(Error::CellOutOfBounds {
                cell: [i, j, k],
                shape: self.shape,
            });
        }
        let index = self.shape.index(i, j, k);
        self.data[index] = value;
        Ok(())
    }

    /// Every cell with its value, in flat index order
    pub fn iter(&self) -> impl Iterator<Item = ([usize; 3], bool)> + '_ {
        self.shape.cells().zip(self.data.iter().copied())
    }

    /// Number of foreground cells
    pub fn count(&self) -> usize {
        self.data.iter().filter(|v| **v).count()
    }

    /// True if there are no foreground cells at all
    pub fn is_clear(&self) -> bool {
        !self.data.iter().any(|v| *v)
    }

    /// Swap foreground and background
    pub fn invert(&self) -> Self {
        Self {
            shape: self.shape,
            data: self.data.iter().map(|v| !v).collect(),
        }
    }

    /// Binary dilation by a footprint
    ///
    /// Every foreground cell stays set and also sets each neighbour in the
    /// footprint. Neighbours across an effectively periodic boundary wrap to
    /// the opposite face, while anything beyond a non-periodic boundary is
    /// discarded.
    ///
    /// ```rust
    /// # use pictools_grid::{Footprint, Mask, Periodicity, Shape};
    /// let shape = Shape::new(5, 1, 1);
    /// let mask = Mask::from_cells(shape, &[[0, 0, 0]]).unwrap();
    ///
    /// let wrapped = mask.dilate(&Footprint::faces(), Periodicity::new(true, false, false));
    /// assert_eq!(wrapped.data(), &[true, true, false, false, true]);
    ///
    /// let clipped = mask.dilate(&Footprint::faces(), Periodicity::none());
    /// assert_eq!(clipped.data(), &[true, true, false, false, false]);
    /// ```
    pub fn dilate(&self, footprint: &Footprint, periodicity: Periodicity) -> Self {
        let wrap = periodicity.effective(self.shape);
        let offsets = footprint.offsets();
        let mut data = self.data.clone();

        for (cell, _) in self.shape.cells().zip(&self.data).filter(|(_, v)| **v) {
            for offset in &offsets {
                if let Some([i, j, k]) = self.shape.offset(cell, *offset, wrap) {
                    data[self.shape.index(i, j, k)] = true;
                }
            }
        }

        Self {
            shape: self.shape,
            data,
        }
    }
}
