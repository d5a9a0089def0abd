//! Spot counts over a sweep of threshold levels
//!
//! Thresholding a scalar field at a range of levels and counting the spots
//! above and below each one gives a curve whose jumps mark the levels where
//! regions appear, vanish, or join up.

// standard library
use std::fmt;

// crate modules
use crate::error::{Error, Result};
use crate::finder::SpotFinder;

// pictools modules
use pictools_grid::{Field, Footprint};
use pictools_utils::ValueExt;

// external crates
use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Counts of spots on either side of a single threshold level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionCount {
    /// Threshold level
    pub level: f64,
    /// Number of spots strictly above the level
    pub above: usize,
    /// Number of spots strictly below the level
    pub below: usize,
}

impl fmt::Display for RegionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:>6} {:>6}", self.level.sci(5, 2), self.above, self.below)
    }
}

/// Change in spot counts between two consecutive levels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Lower of the two levels, in sweep order
    pub lower: f64,
    /// Upper of the two levels, in sweep order
    pub upper: f64,
    /// Change in the count above
    pub above: isize,
    /// Change in the count below
    pub below: isize,
}

/// Spot counts for every level of a sweep, in the order the levels were given
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionCurve {
    counts: Vec<RegionCount>,
}

impl RegionCurve {
    /// Every level with its counts
    pub fn counts(&self) -> &[RegionCount] {
        &self.counts
    }

    /// Threshold levels
    pub fn levels(&self) -> Vec<f64> {
        self.counts.iter().map(|c| c.level).collect()
    }

    /// Number of spots above each level
    pub fn above(&self) -> Vec<usize> {
        self.counts.iter().map(|c| c.above).collect()
    }

    /// Number of spots below each level
    pub fn below(&self) -> Vec<usize> {
        self.counts.iter().map(|c| c.below).collect()
    }

    /// Consecutive level pairs across which either count changes
    ///
    /// ```rust
    /// # use pictools_grid::{Field, Footprint, Periodicity, Shape};
    /// # use pictools_spots::{RegionSweep, SpotFinder};
    /// // two separate bumps on a periodic line
    /// let values = [0.0, 2.0, 0.0, 0.0, 1.0, 0.0];
    /// let field = Field::new(Shape::new(6, 1, 1), values.to_vec()).unwrap();
    /// let finder = SpotFinder::new(Periodicity::all(), Footprint::full());
    ///
    /// let curve = RegionSweep::new(finder).run(&field, &[0.5, 1.5]).unwrap();
    /// assert_eq!(curve.above(), vec![2, 1]);
    ///
    /// let transitions = curve.transitions();
    /// assert_eq!(transitions.len(), 1);
    /// assert_eq!(transitions[0].above, -1);
    /// ```
    pub fn transitions(&self) -> Vec<Transition> {
        self.counts
            .windows(2)
            .filter_map(|pair| {
                let (a, b) = (pair[0], pair[1]);
                let transition = Transition {
                    lower: a.level,
                    upper: b.level,
                    above: b.above as isize - a.above as isize,
                    below: b.below as isize - a.below as isize,
                };
                (transition.above != 0 || transition.below != 0).then_some(transition)
            })
            .collect()
    }

    /// Number of levels
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the sweep had no levels
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Pretty JSON for plotting tools
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for RegionCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<12} {:>6} {:>6}", "level", "above", "below")?;
        for count in &self.counts {
            writeln!(f, "{count}")?;
        }
        Ok(())
    }
}

/// Count spots above and below a list of threshold levels
///
/// Each mask may optionally be dilated before counting, which joins regions
/// separated by less than the dilation footprint. Dilation wraps around the
/// same axes as the finder's periodicity.
///
/// Levels are processed in parallel, with one reusable counter per worker.
#[derive(Debug, Clone, Copy)]
pub struct RegionSweep {
    finder: SpotFinder,
    dilation: Option<Footprint>,
}

impl RegionSweep {
    /// New sweep counting with `finder` and no dilation
    pub fn new(finder: SpotFinder) -> Self {
        Self {
            finder,
            dilation: None,
        }
    }

    /// Dilate every thresholded mask with `footprint` before counting
    pub fn dilation(mut self, footprint: Footprint) -> Self {
        self.dilation = Some(footprint);
        self
    }

    /// Counts for every level, in the order given
    pub fn run(&self, field: &Field, levels: &[f64]) -> Result<RegionCurve> {
        if let Some(level) = levels.iter().find(|l| l.is_nan()) {
            return Err(Error::UndefinedLevel(*level));
        }

        if levels.is_empty() {
            warn!("Region sweep called with no threshold levels");
            return Ok(RegionCurve::default());
        }

        debug!(
            "Sweeping {} levels on a {} grid",
            levels.len(),
            field.shape()
        );

        let periodicity = self.finder.periodicity();
        let counts = levels
            .par_iter()
            .map_init(
                || self.finder.counter(),
                |counter, level| {
                    let mut count = |mask: pictools_grid::Mask| match &self.dilation {
                        Some(footprint) => counter.count(&mask.dilate(footprint, periodicity)),
                        None => counter.count(&mask),
                    };
                    let above = count(field.above(*level));
                    let below = count(field.below(*level));
                    RegionCount {
                        level: *level,
                        above,
                        below,
                    }
                },
            )
            .collect();

        Ok(RegionCurve { counts })
    }
}
