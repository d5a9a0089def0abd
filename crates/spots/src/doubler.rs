//! Boundary doubling for periodic axes
//!
//! A local labelling algorithm cannot see that the two faces of a periodic
//! axis touch. Padding each periodic axis with a copy of the opposite face
//! puts the touching cells next to each other, at the cost of every cell on
//! those faces appearing twice.

// pictools modules
use pictools_grid::{Mask, Shape};

/// Working copy of a mask with every periodic axis padded by one slice
///
/// Along a periodic axis of extent `n`, padded slice `0` is a copy of the
/// last original slice, slices `1..=n` are the original data, and slice
/// `n + 1` is a copy of the first original slice. Other axes are unchanged.
///
/// The buffer is kept between calls so repeated labelling can reuse it.
#[derive(Debug, Clone)]
pub(crate) struct Padded {
    original: Shape,
    shape: Shape,
    periodic: [bool; 3],
    data: Vec<bool>,
}

impl Default for Padded {
    fn default() -> Self {
        Self {
            original: Shape::new(0, 0, 0),
            shape: Shape::new(0, 0, 0),
            periodic: [false; 3],
            data: Vec::new(),
        }
    }
}

impl Padded {
    /// Copy `mask` into the buffer, doubling the boundaries of `periodic` axes
    ///
    /// Callers pass effective flags, i.e. never periodic on a size-1 axis.
    pub fn fill(&mut self, mask: &Mask, periodic: [bool; 3]) {
        let original = mask.shape();
        let dims = original.dims();
        debug_assert!((0..3).all(|a| !periodic[a] || dims[a] > 1));

        self.original = original;
        self.periodic = periodic;
        self.shape = Shape::from([0, 1, 2].map(|a| dims[a] + 2 * periodic[a] as usize));

        let source = mask.data();
        let mut data = std::mem::take(&mut self.data);
        data.clear();
        data.reserve(self.shape.len());
        data.extend(self.shape.cells().map(|cell| {
            let [i, j, k] = source_cell(dims, periodic, cell);
            source[original.index(i, j, k)]
        }));
        self.data = data;
    }

    /// Number of padding slices before the original data on each axis
    #[inline]
    pub fn offset(&self) -> [usize; 3] {
        self.periodic.map(|p| p as usize)
    }

    /// Shape of the unpadded mask
    #[inline]
    pub fn original(&self) -> Shape {
        self.original
    }

    /// Shape of the padded buffer
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Axes that were padded
    #[inline]
    pub fn periodic(&self) -> [bool; 3] {
        self.periodic
    }

    /// Flat padded data
    #[inline]
    pub fn data(&self) -> &[bool] {
        &self.data
    }
}

/// Original cell that a padded cell is a copy of
#[inline]
fn source_cell(dims: [usize; 3], periodic: [bool; 3], cell: [usize; 3]) -> [usize; 3] {
    [0, 1, 2].map(|a| match periodic[a] {
        true => (cell[a] + dims[a] - 1) % dims[a],
        false => cell[a],
    })
}
