//! Module for neighbour connectivity structures

// crate modules
use crate::error::{Error, Result};

// external crates
use itertools::iproduct;
use serde::{Deserialize, Serialize};

/// A 3x3x3 connectivity structure
///
/// Two cells touch if the offset between them is part of the footprint. The
/// centre cell is ignored. Common choices are provided directly:
///
/// | Constructor               | Neighbours | Touching through         |
/// | ------------------------- | ---------- | ------------------------ |
/// | [Footprint::faces()]      | 6          | shared faces             |
/// | [Footprint::edges()]      | 18         | shared faces and edges   |
/// | [Footprint::full()]       | 26         | any shared corner        |
///
/// Connectivity is symmetric by nature, so a footprint containing an offset
/// always contains its opposite.
///
/// ```rust
/// # use pictools_grid::Footprint;
/// assert_eq!(Footprint::faces().offsets().len(), 6);
/// assert_eq!(Footprint::edges().offsets().len(), 18);
/// assert_eq!(Footprint::full().offsets().len(), 26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[[[bool; 3]; 3]; 3]", into = "[[[bool; 3]; 3]; 3]")]
pub struct Footprint {
    cells: [[[bool; 3]; 3]; 3],
}

impl Footprint {
    /// Every one of the 26 neighbours touches
    pub fn full() -> Self {
        Self::from_rule(|_| true)
    }

    /// Neighbours sharing a face or an edge (18-connectivity)
    pub fn edges() -> Self {
        Self::from_rule(|o| o.iter().map(|c| c.abs()).sum::<isize>() <= 2)
    }

    /// Neighbours sharing a face (6-connectivity)
    pub fn faces() -> Self {
        Self::from_rule(|o| o.iter().map(|c| c.abs()).sum::<isize>() <= 1)
    }

    /// Build from an explicit 3x3x3 array, indexed `[di + 1][dj + 1][dk + 1]`
    ///
    /// ```rust
    /// # use pictools_grid::Footprint;
    /// let mut cells = [[[false; 3]; 3]; 3];
    /// cells[0][1][1] = true;
    /// cells[2][1][1] = true;
    ///
    /// // Only neighbours along x touch
    /// let footprint = Footprint::from_array(cells).unwrap();
    /// assert_eq!(footprint.offsets(), vec![[-1, 0, 0], [1, 0, 0]]);
    ///
    /// // One-sided structures are rejected
    /// cells[2][1][1] = false;
    /// assert!(Footprint::from_array(cells).is_err());
    /// ```
    pub fn from_array(cells: [[[bool; 3]; 3]; 3]) -> Result<Self> {
        let footprint = Self { cells };
        for offset in footprint.offsets() {
            if !footprint.contains(offset.map(|c| -c)) {
                return Err(Error::AsymmetricFootprint(offset));
            }
        }
        Ok(footprint)
    }

    fn from_rule(rule: impl Fn([isize; 3]) -> bool) -> Self {
        let mut cells = [[[false; 3]; 3]; 3];
        for (i, j, k) in iproduct!(0..3, 0..3, 0..3) {
            cells[i][j][k] = rule([i as isize - 1, j as isize - 1, k as isize - 1]);
        }
        Self { cells }
    }

    /// True if the offset touches the centre, always false for the centre
    pub fn contains(&self, offset: [isize; 3]) -> bool {
        if offset == [0, 0, 0] || offset.iter().any(|c| c.abs() > 1) {
            return false;
        }
        let [i, j, k] = offset.map(|c| (c + 1) as usize);
        self.cells[i][j][k]
    }

    /// Every neighbour offset, in raster order
    pub fn offsets(&self) -> Vec<[isize; 3]> {
        iproduct!(-1..=1, -1..=1, -1..=1)
            .map(|(i, j, k)| [i, j, k])
            .filter(|o| self.contains(*o))
            .collect()
    }

    /// Neighbour offsets that come before the centre in raster order
    ///
    /// A forward raster scan has already visited exactly these neighbours
    /// when it reaches a cell. Together with symmetry this is enough to see
    /// every connection once.
    pub fn backward_offsets(&self) -> Vec<[isize; 3]> {
        self.offsets()
            .into_iter()
            .filter(|o| *o < [0, 0, 0])
            .collect()
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Self::full()
    }
}

// deserialising goes through the symmetry check
impl TryFrom<[[[bool; 3]; 3]; 3]> for Footprint {
    type Error = Error;

    fn try_from(cells: [[[bool; 3]; 3]; 3]) -> Result<Self> {
        Self::from_array(cells)
    }
}

impl From<Footprint> for [[[bool; 3]; 3]; 3] {
    fn from(footprint: Footprint) -> Self {
        footprint.cells
    }
}
