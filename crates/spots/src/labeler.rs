//! Base connected-component labelling on a non-periodic grid
//!
//! Classic two-pass raster scan. The first pass hands out provisional ids
//! and records which ones touch through the footprint, the second resolves
//! them to dense labels numbered by first appearance.

// crate modules
use crate::equivalence::Equivalence;

// pictools modules
use pictools_grid::Shape;

/// Label `grid` into `labels`, returning the number of components
///
/// Components are numbered `1..=count` in order of their first cell in flat
/// index order, with `0` for background. `offsets` must be the backward half
/// of a symmetric footprint. Both `labels` and `forest` are scratch buffers
/// and are overwritten.
pub(crate) fn label_grid(
    grid: &[bool],
    shape: Shape,
    offsets: &[[isize; 3]],
    labels: &mut Vec<u32>,
    forest: &mut Equivalence,
) -> u32 {
    debug_assert_eq!(grid.len(), shape.len());

    labels.clear();
    labels.resize(grid.len(), 0);
    forest.reset(0);

    // first pass, provisional ids joined through already visited neighbours
    for (index, cell) in shape.cells().enumerate() {
        if !grid[index] {
            continue;
        }

        let mut current = 0;
        for offset in offsets {
            let Some([i, j, k]) = shape.offset(cell, *offset, [false; 3]) else {
                continue;
            };
            let neighbour = labels[shape.index(i, j, k)];
            if neighbour == 0 {
                continue;
            }
            if current == 0 {
                current = neighbour;
            } else if neighbour != current {
                forest.union(current, neighbour, [0; 3]);
            }
        }

        if current == 0 {
            current = forest.push();
        }
        labels[index] = current;
    }

    // second pass, dense numbering by first appearance
    let mut dense = vec![0_u32; forest.len() as usize + 1];
    let mut count = 0;
    for label in labels.iter_mut().filter(|l| **l != 0) {
        let (root, _) = forest.find(*label);
        if dense[root as usize] == 0 {
            count += 1;
            dense[root as usize] = count;
        }
        *label = dense[root as usize];
    }

    count
}
