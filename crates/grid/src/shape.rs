//! Module for grid extents and indexing

// external crates
use itertools::iproduct;
use serde::{Deserialize, Serialize};

/// One of the three grid axes
///
/// Axes are always listed in x, y, z order, which is also the order of the
/// extents in a [Shape].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    /// First axis, slowest varying in memory
    X,
    /// Second axis
    Y,
    /// Third axis, fastest varying in memory
    Z,
}

impl Axis {
    /// Every axis in x, y, z order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of the axis in `[x, y, z]` style arrays
    ///
    /// ```rust
    /// # use pictools_grid::Axis;
    /// assert_eq!(Axis::X.index(), 0);
    /// assert_eq!(Axis::Z.index(), 2);
    /// ```
    #[inline]
    pub const fn index(&self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Unit vector along the axis
    pub const fn unit(&self) -> [i32; 3] {
        match self {
            Self::X => [1, 0, 0],
            Self::Y => [0, 1, 0],
            Self::Z => [0, 0, 1],
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
            Self::Z => write!(f, "z"),
        }
    }
}

/// Extents of a regular 3D grid
///
/// Flat indexing is row-major with `z` varying fastest, so the cell at
/// `(i, j, k)` lives at `(i * ny + j) * nz + k`. Two-dimensional data simply
/// use an extent of 1 along the unused axis.
///
/// ```rust
/// # use pictools_grid::Shape;
/// let shape = Shape::new(2, 3, 4);
/// assert_eq!(shape.len(), 24);
/// assert_eq!(shape.index(1, 2, 3), 23);
/// assert_eq!(shape.coordinates(23), [1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    dims: [usize; 3],
}

impl Shape {
    /// New shape from the number of cells along x, y, and z
    pub const fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Self { dims: [nx, ny, nz] }
    }

    /// Extents as an `[nx, ny, nz]` array
    #[inline]
    pub const fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Number of cells along a single axis
    #[inline]
    pub const fn extent(&self, axis: Axis) -> usize {
        self.dims[axis.index()]
    }

    /// Total number of cells
    #[inline]
    pub const fn len(&self) -> usize {
        self.dims[0] * self.dims[1] * self.dims[2]
    }

    /// True if any extent is zero
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distance in the flat buffer between neighbours along each axis
    #[inline]
    pub const fn strides(&self) -> [usize; 3] {
        [self.dims[1] * self.dims[2], self.dims[2], 1]
    }

    /// Flat index of the cell at `(i, j, k)`
    #[inline]
    pub const fn index(&self, i: usize, j: usize, k: usize) -> usize {
        (i * self.dims[1] + j) * self.dims[2] + k
    }

    /// The `[i, j, k]` coordinates of a flat index
    pub const fn coordinates(&self, index: usize) -> [usize; 3] {
        let plane = self.dims[1] * self.dims[2];
        [
            index / plane,
            (index % plane) / self.dims[2],
            index % self.dims[2],
        ]
    }

    /// True if the coordinates are inside the grid
    #[inline]
    pub fn contains(&self, cell: [usize; 3]) -> bool {
        cell.iter().zip(self.dims).all(|(c, n)| *c < n)
    }

    /// Shift a cell by an offset, returning `None` if it leaves the grid
    ///
    /// Axes flagged in `wrap` are treated as periodic and fold back into
    /// range instead.
    pub fn offset(&self, cell: [usize; 3], offset: [isize; 3], wrap: [bool; 3]) -> Option<[usize; 3]> {
        let mut result = [0; 3];
        for axis in 0..3 {
            let n = self.dims[axis] as isize;
            let mut c = cell[axis] as isize + offset[axis];
            if wrap[axis] {
                c = c.rem_euclid(n);
            } else if c < 0 || c >= n {
                return None;
            }
            result[axis] = c as usize;
        }
        Some(result)
    }

    /// Every `[i, j, k]` in flat index order
    pub fn cells(&self) -> impl Iterator<Item = [usize; 3]> {
        let [nx, ny, nz] = self.dims;
        iproduct!(0..nx, 0..ny, 0..nz).map(|(i, j, k)| [i, j, k])
    }
}

impl From<[usize; 3]> for Shape {
    fn from(dims: [usize; 3]) -> Self {
        Self { dims }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.dims[0], self.dims[1], self.dims[2])
    }
}
