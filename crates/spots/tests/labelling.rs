//! Integration tests for periodic spot labelling

use pictools_grid::{Axis, Field, Footprint, Mask, Periodicity, Shape};
use pictools_spots::{
    count_periodic_components, label_periodic_components, Error, RegionSweep, SpotFinder, Tiling,
};
use rstest::{fixture, rstest};

const ONE: Tiling = Tiling::Finite(1);

#[fixture]
fn cube() -> Shape {
    Shape::new(4, 4, 4)
}

#[fixture]
fn finder() -> SpotFinder {
    SpotFinder::new(Periodicity::all(), Footprint::full())
}

#[rstest]
fn empty_mask_has_no_spots(cube: Shape) {
    let mask = Mask::filled(cube, false);
    let spots = label_periodic_components(&mask, Periodicity::all(), &Footprint::full());

    assert_eq!(spots.count(), 0);
    assert!(spots.is_empty());
    assert!(spots.labels().iter().all(|l| *l == 0));
    assert_eq!(spots.tiling_matrix(), [Vec::<i64>::new(), vec![], vec![]]);
}

#[rstest]
fn zero_volume_grid_has_no_spots() {
    let mask = Mask::filled(Shape::new(0, 4, 4), true);
    let spots = label_periodic_components(&mask, Periodicity::all(), &Footprint::full());

    assert_eq!(spots.count(), 0);
    assert!(spots.labels().is_empty());
}

#[rstest]
#[case([0, 0, 0])] // corner, on every seam
#[case([3, 3, 3])] // opposite corner
#[case([0, 2, 1])] // one seam
#[case([1, 2, 2])] // interior
fn single_cell_is_one_period(cube: Shape, #[case] cell: [usize; 3]) {
    let mask = Mask::from_cells(cube, &[cell]).unwrap();
    let spots = label_periodic_components(&mask, Periodicity::all(), &Footprint::full());

    assert_eq!(spots.count(), 1);
    assert_eq!(spots.label_at(cell[0], cell[1], cell[2]), Some(1));
    assert_eq!(spots.tiling(1), Some([ONE; 3]));
    assert_eq!(spots.size(1), Some(1));
}

#[rstest]
#[case(Footprint::full())]
#[case(Footprint::edges())]
#[case(Footprint::faces())]
fn seam_pair_is_one_spot(cube: Shape, #[case] footprint: Footprint) {
    let mask = Mask::from_cells(cube, &[[0, 2, 2], [3, 2, 2]]).unwrap();
    let spots = label_periodic_components(&mask, Periodicity::all(), &footprint);

    assert_eq!(spots.count(), 1);
    assert_eq!(spots.label_at(0, 2, 2), Some(1));
    assert_eq!(spots.label_at(3, 2, 2), Some(1));
    assert_eq!(spots.tiling(1), Some([Tiling::Finite(2), ONE, ONE]));
}

#[rstest]
fn seam_pair_without_periodicity_is_two_spots(cube: Shape) {
    let mask = Mask::from_cells(cube, &[[0, 2, 2], [3, 2, 2]]).unwrap();
    let spots = label_periodic_components(&mask, Periodicity::none(), &Footprint::full());

    assert_eq!(spots.count(), 2);
    assert_eq!(spots.label_at(0, 2, 2), Some(1));
    assert_eq!(spots.label_at(3, 2, 2), Some(2));
    assert!(spots.tilings().all(|t| t == [ONE; 3]));
}

#[rstest]
#[case(Footprint::full())]
#[case(Footprint::faces())]
fn full_row_wraps_around(cube: Shape, #[case] footprint: Footprint) {
    let mask = Mask::from_fn(cube, |_, j, k| j == 1 && k == 1);
    let spots = label_periodic_components(&mask, Periodicity::all(), &footprint);

    assert_eq!(spots.count(), 1);
    assert_eq!(spots.tiling(1), Some([Tiling::Unbounded, ONE, ONE]));
    assert_eq!(spots.barycentre(1), None);
    assert_eq!(spots.tiling_matrix(), [vec![-1], vec![1], vec![1]]);
}

#[rstest]
fn staircase_spans_three_periods() {
    // unwrapped x runs from 0 to 8 on a periodic extent of 4, never closing
    let shape = Shape::new(4, 9, 1);
    let cells: Vec<[usize; 3]> = (0..9).map(|j| [j % 4, j, 0]).collect();
    let mask = Mask::from_cells(shape, &cells).unwrap();
    let spots = label_periodic_components(&mask, Periodicity::new(true, false, false), &Footprint::full());

    assert_eq!(spots.count(), 1);
    assert_eq!(spots.tiling(1), Some([Tiling::Finite(3), ONE, ONE]));
    assert_eq!(spots.tiling_matrix(), [vec![3], vec![1], vec![1]]);
}

#[rstest]
fn filled_box_wraps_on_every_periodic_axis() {
    let mask = Mask::filled(Shape::new(2, 3, 4), true);
    let spots = label_periodic_components(&mask, Periodicity::new(true, false, true), &Footprint::faces());

    assert_eq!(spots.count(), 1);
    assert_eq!(spots.tiling(1), Some([Tiling::Unbounded, ONE, Tiling::Unbounded]));
}

#[rstest]
fn diagonal_crosses_two_seams() {
    // (3, 3) touches (0, 0) only through the xy corner
    let shape = Shape::new(4, 4, 1);
    let mask = Mask::from_cells(shape, &[[0, 0, 0], [3, 3, 0]]).unwrap();

    let full = label_periodic_components(&mask, Periodicity::all(), &Footprint::full());
    assert_eq!(full.count(), 1);
    assert_eq!(full.tiling(1), Some([Tiling::Finite(2), Tiling::Finite(2), ONE]));

    let faces = label_periodic_components(&mask, Periodicity::all(), &Footprint::faces());
    assert_eq!(faces.count(), 2);
}

#[rstest]
fn unit_axis_is_never_periodic() {
    let shape = Shape::new(3, 1, 3);
    let mask = Mask::from_cells(shape, &[[0, 0, 0], [2, 0, 2]]).unwrap();

    let flagged = label_periodic_components(&mask, Periodicity::new(false, true, false), &Footprint::full());
    let plain = label_periodic_components(&mask, Periodicity::none(), &Footprint::full());

    assert_eq!(flagged, plain);
    assert_eq!(flagged.count(), 2);
}

#[rstest]
fn labels_are_idempotent(cube: Shape, finder: SpotFinder) {
    let mask = Mask::from_fn(cube, |i, j, k| (i + 2 * j + 3 * k) % 5 == 0);
    let first = finder.label(&mask);

    let relabelled = Mask::new(cube, first.labels().iter().map(|l| *l > 0).collect()).unwrap();
    let second = finder.label(&relabelled);

    assert_eq!(first, second);
}

#[rstest]
fn count_matches_labels(cube: Shape, finder: SpotFinder) {
    let mut counter = finder.counter();
    for stride in 2..7 {
        let mask = Mask::from_fn(cube, |i, j, k| (i * 7 + j * 3 + k) % stride == 0);
        let expected = finder.label(&mask).count();
        assert_eq!(counter.count(&mask), expected);
        assert_eq!(count_periodic_components(&mask, Periodicity::all(), &Footprint::full()), expected);
    }
}

#[rstest]
#[case([Axis::X, Axis::Y, Axis::Z])]
#[case([Axis::Y, Axis::Z, Axis::X])]
#[case([Axis::Z, Axis::Y, Axis::X])]
fn axis_order_does_not_change_labels(cube: Shape, finder: SpotFinder, #[case] order: [Axis; 3]) {
    let mask = Mask::from_fn(cube, |i, j, k| (i == 0 || i == 3) && (j + k) % 3 != 1);
    let reordered = finder.axis_order(order).unwrap();

    let (a, b) = (finder.label(&mask), reordered.label(&mask));
    assert_eq!(a.labels(), b.labels());
    assert!(a.tilings().eq(b.tilings()));
}

#[rstest]
fn repeated_axis_is_rejected(finder: SpotFinder) {
    let result = finder.axis_order([Axis::X, Axis::Y, Axis::X]);
    assert!(matches!(result, Err(Error::InvalidAxisOrder(_))));
}

#[rstest]
fn barycentre_sits_on_the_seam() {
    let shape = Shape::new(10, 3, 1);
    let mask = Mask::from_cells(shape, &[[9, 1, 0], [0, 1, 0], [1, 1, 0]]).unwrap();
    let spots = label_periodic_components(&mask, Periodicity::new(true, false, false), &Footprint::faces());

    assert_eq!(spots.count(), 1);
    assert_eq!(spots.tiling(1), Some([Tiling::Finite(2), ONE, ONE]));
    assert_eq!(spots.barycentre(1), Some([0.0, 1.0, 0.0]));
}

#[rstest]
fn cells_list_every_member(cube: Shape) {
    let mask = Mask::from_cells(cube, &[[0, 1, 1], [3, 1, 1], [1, 3, 2]]).unwrap();
    let spots = label_periodic_components(&mask, Periodicity::all(), &Footprint::faces());

    assert_eq!(spots.sizes(), vec![2, 1]);
    let cells: Vec<[usize; 3]> = spots.cells(1).collect();
    assert_eq!(cells, vec![[0, 1, 1], [3, 1, 1]]);
}

#[rstest]
fn region_sweep_matches_single_counts(finder: SpotFinder) {
    let shape = Shape::new(12, 12, 3);
    let field = Field::from_fn(shape, |i, j, k| {
        let (x, y) = (i as f64 * 0.5, j as f64 * 0.5);
        x.sin() * y.cos() + 0.1 * k as f64
    });
    let levels = field.levels(7).unwrap();

    let curve = RegionSweep::new(finder).run(&field, &levels).unwrap();

    for count in curve.counts() {
        let above = count_periodic_components(&field.above(count.level), Periodicity::all(), &Footprint::full());
        let below = count_periodic_components(&field.below(count.level), Periodicity::all(), &Footprint::full());
        assert_eq!(count.above, above);
        assert_eq!(count.below, below);
    }
}

#[rstest]
fn dilated_sweep_matches_dilated_counts(finder: SpotFinder) {
    let shape = Shape::new(8, 8, 1);
    let field = Field::from_fn(shape, |i, j, _| ((i % 4 == 0) && (j % 4 == 0)) as u8 as f64);
    let dilation = Footprint::faces();

    let curve = RegionSweep::new(finder).dilation(dilation).run(&field, &[0.5]).unwrap();

    let mask = field.above(0.5).dilate(&dilation, Periodicity::all());
    assert_eq!(curve.above(), vec![finder.count(&mask)]);
    assert_eq!(curve.above(), vec![4]);
}
