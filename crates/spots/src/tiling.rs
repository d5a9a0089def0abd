//! Tiling factors for labelled components

// crate modules
use crate::equivalence::Shift;

// external crates
use serde::{Deserialize, Serialize};

/// How many periodic copies of the domain are needed to see a spot whole
///
/// Along a non-periodic axis this is always `Finite(1)`. Along a periodic
/// axis a spot that never crosses the seam also needs just the one copy,
/// while a spot cut in two by the seam needs `Finite(2)`. Larger factors
/// occur too: a spot that winds along a periodic axis for more than one
/// period without meeting itself, e.g. a long diagonal staircase, needs one
/// copy per period it passes through.
///
/// A spot that runs all the way around a periodic axis and joins itself can
/// never be shown whole by any finite number of copies, which is what
/// [Tiling::Unbounded] marks. Callers drawing spots usually have to skip or
/// special-case these.
///
/// ```rust
/// # use pictools_spots::Tiling;
/// assert_eq!(Tiling::Finite(2).copies(), Some(2));
/// assert_eq!(Tiling::Unbounded.copies(), None);
///
/// // integer form, with a negative sentinel for unbounded spots
/// assert_eq!(Tiling::Finite(1).factor(3), 1);
/// assert_eq!(Tiling::Unbounded.factor(3), -3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tiling {
    /// Number of consecutive copies spanned by the spot
    Finite(usize),
    /// The spot wraps around the axis onto itself
    Unbounded,
}

impl Tiling {
    #[inline]
    /// Check if the Tiling is the `Unbounded` variant
    pub const fn is_unbounded(&self) -> bool {
        matches!(*self, Self::Unbounded)
    }

    /// Number of copies, or `None` if unbounded
    pub const fn copies(&self) -> Option<usize> {
        match self {
            Self::Finite(copies) => Some(*copies),
            Self::Unbounded => None,
        }
    }

    /// Integer tiling factor, using `-count` as the unbounded sentinel
    ///
    /// Matches the `int[3, N]` tables used by older post-processing scripts,
    /// where `count` is the total number of spots in the labelling.
    pub fn factor(&self, count: usize) -> i64 {
        match self {
            Self::Finite(copies) => *copies as i64,
            Self::Unbounded => -(count as i64),
        }
    }
}

impl Default for Tiling {
    fn default() -> Self {
        Self::Finite(1)
    }
}

impl std::fmt::Display for Tiling {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Finite(copies) => write!(f, "{copies}"),
            Self::Unbounded => write!(f, "inf"),
        }
    }
}

/// Range of periodic shifts seen across the cells of one spot
///
/// Every cell of the grid is visited once, and its shift is the number of
/// whole periods it must be moved to sit next to the rest of the spot. The
/// spread of those shifts is the number of copies the spot spans.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ShiftSpan {
    low: Shift,
    high: Shift,
    seen: bool,
}

impl ShiftSpan {
    pub fn include(&mut self, shift: Shift) {
        if !self.seen {
            self.low = shift;
            self.high = shift;
            self.seen = true;
            return;
        }
        for a in 0..3 {
            self.low[a] = self.low[a].min(shift[a]);
            self.high[a] = self.high[a].max(shift[a]);
        }
    }

    /// Tiling on each axis, with wrapping taking precedence over any span
    pub fn classify(&self, wraps: [bool; 3]) -> [Tiling; 3] {
        [0, 1, 2].map(|a| match wraps[a] {
            true => Tiling::Unbounded,
            false => Tiling::Finite((self.high[a] - self.low[a]) as usize + 1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_span_is_a_single_copy() {
        let span = ShiftSpan::default();
        assert_eq!(span.classify([false; 3]), [Tiling::Finite(1); 3]);
    }

    #[test]
    fn span_counts_copies_per_axis() {
        let mut span = ShiftSpan::default();
        span.include([0, 0, 0]);
        span.include([-1, 0, 0]);
        span.include([0, 0, 2]);
        assert_eq!(
            span.classify([false; 3]),
            [Tiling::Finite(2), Tiling::Finite(1), Tiling::Finite(3)]
        );
    }

    #[test]
    fn wrapping_wins_over_span() {
        let mut span = ShiftSpan::default();
        span.include([0, 0, 0]);
        span.include([1, 0, 0]);
        assert_eq!(
            span.classify([true, false, false]),
            [Tiling::Unbounded, Tiling::Finite(1), Tiling::Finite(1)]
        );
    }

    #[test]
    fn display_uses_inf_for_unbounded() {
        assert_eq!(Tiling::Finite(2).to_string(), "2");
        assert_eq!(Tiling::Unbounded.to_string(), "inf");
    }
}
