//! Module for scalar grid data

// crate modules
use crate::error::{Error, Result};
use crate::mask::Mask;
use crate::shape::Shape;

// pictools modules
use pictools_utils::SliceExt;

/// Scalar values over a regular grid
///
/// Typically a physical quantity from simulation output, such as a density
/// or a flux function. The main use here is thresholding into a [Mask].
///
/// ```rust
/// # use pictools_grid::{Field, Shape};
/// let field = Field::from_fn(Shape::new(4, 1, 1), |i, _, _| i as f64);
///
/// assert_eq!(field.above(1.5).data(), &[false, false, true, true]);
/// assert_eq!(field.below(1.0).data(), &[true, false, false, false]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    shape: Shape,
    data: Vec<f64>,
}

impl Field {
    /// Wrap existing flat data, which must match the grid size
    pub fn new(shape: Shape, data: Vec<f64>) -> Result<Self> {
        if data.len() != shape.len() {
            return Err(Error::UnexpectedLength {
                shape,
                expected: shape.len(),
                found: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Evaluate a function at every `(i, j, k)`
    pub fn from_fn(shape: Shape, f: impl Fn(usize, usize, usize) -> f64) -> Self {
        Self {
            shape,
            data: shape.cells().map(|[i, j, k]| f(i, j, k)).collect(),
        }
    }

    /// Grid extents
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Flat view of the data
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Value at `(i, j, k)`, or `None` outside of the grid
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<f64> {
        if self.shape.contains([i, j, k]) {
            Some(self.data[self.shape.index(i, j, k)])
        } else {
            None
        }
    }

    /// Mask of every cell strictly greater than `level`
    pub fn above(&self, level: f64) -> Mask {
        self.threshold(|v| v > level)
    }

    /// Mask of every cell strictly less than `level`
    pub fn below(&self, level: f64) -> Mask {
        self.threshold(|v| v < level)
    }

    fn threshold(&self, predicate: impl Fn(f64) -> bool) -> Mask {
        let data = self.data.iter().map(|v| predicate(*v)).collect();
        Mask::from_flat(self.shape, data)
    }

    /// Smallest value in the field
    pub fn minimum(&self) -> Result<f64> {
        Ok(self.data.try_min()?)
    }

    /// Largest value in the field
    pub fn maximum(&self) -> Result<f64> {
        Ok(self.data.try_max()?)
    }

    /// `n` evenly spaced levels strictly between the field extremes
    ///
    /// ```rust
    /// # use pictools_grid::{Field, Shape};
    /// let field = Field::from_fn(Shape::new(5, 1, 1), |i, _, _| i as f64);
    /// assert_eq!(field.levels(3).unwrap(), vec![1.0, 2.0, 3.0]);
    /// ```
    pub fn levels(&self, n: usize) -> Result<Vec<f64>> {
        Ok(self.data.try_levels(n)?)
    }
}
