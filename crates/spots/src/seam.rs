//! Merging labels across the seams of periodic axes
//!
//! After doubling, every cell on a periodic face exists twice: once in the
//! low slab (padded slices `0` and `1`) and once in the high slab (padded
//! slices `n` and `n + 1`). The base labeler sees the two copies as
//! unrelated, so the same physical component can carry different labels on
//! either side of the seam. Comparing the slabs position by position and
//! joining whatever sits at the same place repairs this.
//!
//! A label found at the same position in both slabs has reached its own
//! copy through the interior, i.e. it runs all the way around the axis. The
//! equivalence table picks this up as a join with an inconsistent shift.

// crate modules
use crate::doubler::Padded;
use crate::equivalence::Equivalence;

// pictools modules
use pictools_grid::Axis;

// external crates
use itertools::iproduct;
use log::{debug, trace};

/// Join labels across the seam of every padded axis, in the order given
///
/// Returns the number of joins that merged two distinct classes. Axes in
/// `order` that were not padded are skipped.
pub(crate) fn merge_seams(
    labels: &[u32],
    padded: &Padded,
    order: &[Axis; 3],
    table: &mut Equivalence,
) -> usize {
    order
        .iter()
        .filter(|axis| padded.periodic()[axis.index()])
        .map(|axis| merge_axis(labels, padded, *axis, table))
        .sum()
}

/// Join labels across the seam of a single periodic axis
fn merge_axis(labels: &[u32], padded: &Padded, axis: Axis, table: &mut Equivalence) -> usize {
    let shape = padded.shape();
    let a = axis.index();
    let n = padded.original().extent(axis);
    let dims = shape.dims();

    // the slabs only line up if the axis was padded exactly once per side
    assert_eq!(
        dims[a],
        n + 2,
        "seam along {axis} expects a padded extent of {}, found {}",
        n + 2,
        dims[a]
    );
    assert_eq!(labels.len(), shape.len(), "label buffer does not match padded grid");

    // the two axes spanning the slab
    let (b, c) = match axis {
        Axis::X => (1, 2),
        Axis::Y => (0, 2),
        Axis::Z => (0, 1),
    };

    let mut merged = 0;
    for (layer, u, v) in iproduct!(0..2, 0..dims[b], 0..dims[c]) {
        let mut cell = [0; 3];
        cell[b] = u;
        cell[c] = v;

        cell[a] = layer;
        let low = labels[shape.index(cell[0], cell[1], cell[2])];
        cell[a] = n + layer;
        let high = labels[shape.index(cell[0], cell[1], cell[2])];

        // both copies come from the same original cell
        debug_assert_eq!(low == 0, high == 0);
        if low == 0 || high == 0 {
            continue;
        }

        // moving the high copy back by one period lands it on the low copy
        if table.union(low, high, axis.unit()) {
            trace!("seam {axis}: joined label {high} to {low}");
            merged += 1;
        }
    }

    debug!("seam {axis}: {merged} label joins");
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labeler::label_grid;
    use pictools_grid::{Footprint, Mask, Shape};

    fn merged_table(mask: &Mask, periodic: [bool; 3]) -> (Equivalence, u32) {
        let mut padded = Padded::default();
        padded.fill(mask, periodic);
        let mut labels = Vec::new();
        let mut table = Equivalence::default();
        let offsets = Footprint::full().backward_offsets();
        let count = label_grid(padded.data(), padded.shape(), &offsets, &mut labels, &mut table);
        table.reset(count);
        merge_seams(&labels, &padded, &Axis::ALL, &mut table);
        (table, count)
    }

    #[test]
    fn isolated_face_cell_folds_onto_its_copy() {
        let mask = Mask::from_cells(Shape::new(4, 4, 4), &[[0, 0, 0]]).unwrap();
        let (mut table, count) = merged_table(&mask, [true, false, false]);

        // the cell and its copy in the padding
        assert_eq!(count, 2);
        assert_eq!(table.classes(), 1);
        assert_eq!(table.wraps(1), [false; 3]);
    }

    #[test]
    fn straddling_pair_merges_without_wrapping() {
        let mask = Mask::from_cells(Shape::new(4, 4, 4), &[[0, 2, 2], [3, 2, 2]]).unwrap();
        let (mut table, _) = merged_table(&mask, [true, false, false]);

        assert_eq!(table.classes(), 1);
        assert_eq!(table.wraps(1), [false; 3]);
    }

    #[test]
    fn full_column_wraps() {
        let mask = Mask::from_fn(Shape::new(4, 3, 3), |_, j, k| j == 1 && k == 1);
        let (mut table, count) = merged_table(&mask, [true, false, false]);

        // the padded column is one label that meets itself on the seam
        assert_eq!(count, 1);
        assert_eq!(table.classes(), 1);
        assert_eq!(table.wraps(1), [true, false, false]);
    }

    #[test]
    fn diagonal_wrap_flags_both_axes() {
        let mask = Mask::from_fn(Shape::new(4, 4, 1), |i, j, _| i == j);
        let (mut table, _) = merged_table(&mask, [true, true, false]);

        assert_eq!(table.classes(), 1);
        assert_eq!(table.wraps(1), [true, true, false]);
    }

    #[test]
    #[should_panic(expected = "label buffer does not match padded grid")]
    fn mismatched_labels_are_rejected() {
        let mask = Mask::filled(Shape::new(4, 4, 4), true);
        let mut padded = Padded::default();
        padded.fill(&mask, [true, false, false]);
        let mut table = Equivalence::default();
        table.reset(1);
        merge_seams(&[1; 8], &padded, &Axis::ALL, &mut table);
    }
}
