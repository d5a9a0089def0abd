//! Module for periodic boundary flags

// crate modules
use crate::shape::{Axis, Shape};

// external crates
use serde::{Deserialize, Serialize};

/// Periodic boundary flags for each axis
///
/// A periodic axis wraps around so that index `n-1` touches index `0`, as is
/// typical for simulation domains with periodic boundary conditions.
///
/// The flags on their own are only a request. An axis with a single cell
/// has nothing to wrap onto, so [Periodicity::effective()] drops the flag for
/// any axis of extent 1 and this is what every consumer should use.
///
/// ```rust
/// # use pictools_grid::{Periodicity, Shape};
/// let periodicity = Periodicity::new(true, true, true);
///
/// // A 2D grid, flat along z
/// let shape = Shape::new(16, 16, 1);
/// assert_eq!(periodicity.effective(shape), [true, true, false]);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Periodicity {
    flags: [bool; 3],
}

impl Periodicity {
    /// Periodicity from individual x, y, z flags
    pub const fn new(x: bool, y: bool, z: bool) -> Self {
        Self { flags: [x, y, z] }
    }

    /// No periodic axes
    pub const fn none() -> Self {
        Self::new(false, false, false)
    }

    /// Every axis periodic
    pub const fn all() -> Self {
        Self::new(true, true, true)
    }

    /// The requested flag for an axis, ignoring any grid extents
    #[inline]
    pub const fn is_periodic(&self, axis: Axis) -> bool {
        self.flags[axis.index()]
    }

    /// Flags as requested, in x, y, z order
    #[inline]
    pub const fn flags(&self) -> [bool; 3] {
        self.flags
    }

    /// Flags that actually apply to a grid of this shape
    ///
    /// An axis is only periodic if flagged and its extent is greater than 1.
    pub fn effective(&self, shape: Shape) -> [bool; 3] {
        let dims = shape.dims();
        [0, 1, 2].map(|a| self.flags[a] && dims[a] > 1)
    }

    /// Axes that actually wrap on a grid of this shape, in x, y, z order
    pub fn periodic_axes(&self, shape: Shape) -> Vec<Axis> {
        let effective = self.effective(shape);
        Axis::ALL
            .into_iter()
            .filter(|axis| effective[axis.index()])
            .collect()
    }
}

impl From<[bool; 3]> for Periodicity {
    fn from(flags: [bool; 3]) -> Self {
        Self { flags }
    }
}

impl From<(bool, bool, bool)> for Periodicity {
    fn from((x, y, z): (bool, bool, bool)) -> Self {
        Self::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_axes_never_wrap() {
        let shape = Shape::new(1, 5, 1);
        assert_eq!(Periodicity::all().effective(shape), [false, true, false]);
        assert_eq!(Periodicity::all().periodic_axes(shape), vec![Axis::Y]);
    }

    #[test]
    fn unflagged_axes_never_wrap() {
        let shape = Shape::new(4, 4, 4);
        let periodicity = Periodicity::from((false, true, false));
        assert_eq!(periodicity.effective(shape), [false, true, false]);
        assert!(Periodicity::none().periodic_axes(shape).is_empty());
    }
}
