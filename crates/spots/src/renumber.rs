//! Canonical renumbering of merged labels
//!
//! Turns the provisional labels of the padded grid into the final labelling:
//! the surviving classes are numbered `1..=N` in order of their
//! representatives, the padding is trimmed away, and per-spot totals are
//! gathered on the way through.

// crate modules
use crate::doubler::Padded;
use crate::equivalence::{Equivalence, Shift};
use crate::spots::{Spots, Summary};
use crate::tiling::ShiftSpan;

/// Build the final [Spots] from merged provisional labels
///
/// `labels` covers the padded grid and `table` must hold every merge for
/// it. Each representative is the smallest id of its class, so numbering
/// representatives in increasing order does not depend on the order in
/// which merges happened.
pub(crate) fn renumber(labels: &[u32], padded: &Padded, table: &mut Equivalence) -> Spots {
    let count = table.len() as usize;

    // every provisional id to its final label and periodic shift
    let mut resolved: Vec<(u32, Shift)> = vec![(0, [0; 3]); count + 1];
    let mut wraps: Vec<[bool; 3]> = Vec::new();
    for id in 1..=count {
        let (root, shift) = table.find(id as u32);
        if root as usize == id {
            wraps.push(table.wraps(root));
            resolved[id] = (wraps.len() as u32, shift);
        } else {
            // representatives are minimal, so the root is already numbered
            resolved[id] = (resolved[root as usize].0, shift);
        }
    }

    let original = padded.original();
    let dims = original.dims();
    let shape = padded.shape();
    let pad = padded.offset();

    let mut spans = vec![ShiftSpan::default(); wraps.len()];
    let mut summaries: Vec<Summary> = wraps
        .iter()
        .map(|_| Summary {
            size: 0,
            sum: [0; 3],
            tiling: Default::default(),
        })
        .collect();

    // trim back to the original extent while relabelling
    let mut trimmed = Vec::with_capacity(original.len());
    for cell in original.cells() {
        let provisional = labels[shape.index(cell[0] + pad[0], cell[1] + pad[1], cell[2] + pad[2])];
        if provisional == 0 {
            trimmed.push(0);
            continue;
        }

        let (label, shift) = resolved[provisional as usize];
        trimmed.push(label);

        let index = label as usize - 1;
        let summary = &mut summaries[index];
        summary.size += 1;
        for a in 0..3 {
            summary.sum[a] += cell[a] as i64 + shift[a] as i64 * dims[a] as i64;
        }
        spans[index].include(shift);
    }

    for ((summary, span), wraps) in summaries.iter_mut().zip(&spans).zip(&wraps) {
        summary.tiling = span.classify(*wraps);
    }

    Spots::new(original, padded.periodic(), trimmed, summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiling::Tiling;
    use pictools_grid::{Mask, Shape};

    #[test]
    fn empty_table_gives_empty_spots() {
        let mask = Mask::filled(Shape::new(3, 3, 3), false);
        let mut padded = Padded::default();
        padded.fill(&mask, [true, true, true]);
        let labels = vec![0; padded.shape().len()];
        let mut table = Equivalence::default();
        table.reset(0);

        let spots = renumber(&labels, &padded, &mut table);
        assert_eq!(spots.count(), 0);
        assert!(spots.is_empty());
        assert_eq!(spots.labels(), &[0; 27]);
        assert_eq!(spots.tiling_matrix(), [Vec::<i64>::new(), vec![], vec![]]);
    }

    #[test]
    fn classes_are_numbered_densely_in_order() {
        // provisional 1 and 3 merged, 2 alone, no padding involved
        let mask = Mask::filled(Shape::new(3, 1, 1), true);
        let mut padded = Padded::default();
        padded.fill(&mask, [false; 3]);
        let labels = vec![3, 2, 1];
        let mut table = Equivalence::default();
        table.reset(3);
        table.union(3, 1, [0; 3]);

        let spots = renumber(&labels, &padded, &mut table);
        assert_eq!(spots.labels(), &[1, 2, 1]);
        assert_eq!(spots.sizes(), vec![2, 1]);
        assert_eq!(spots.tiling(1), Some([Tiling::Finite(1); 3]));
    }
}
