//! Convergence sweeps for the halving strategy.
//!
//! Every hidden cell of a set of small grids is searched from several
//! starting positions, with a truthful judge, under both tie-break rules.

use strictly_knight::{Feedback, GridExtent, HalvingStrategy, Point, TieBreak};

/// Searches for `target` and returns the number of decisions taken.
///
/// Asserts the per-turn properties along the way.
fn search(extent: GridExtent, start: Point, target: Point, tie_break: TieBreak) -> u32 {
    let mut strategy = HalvingStrategy::new(extent, start)
        .expect("Valid start")
        .with_tie_break(tie_break);
    let bound = extent.halving_bound();

    let mut guess = start;
    let mut area = strategy.region().area();
    let mut decisions = 0;

    while let Some(feedback) = Feedback::between(guess, target) {
        guess = strategy.decide(feedback).expect("Truthful feedback is consistent");
        decisions += 1;

        let region = strategy.region();
        assert!(region.contains(guess), "guess {guess} outside {region}");
        assert!(region.contains(target), "target {target} dropped from {region}");
        assert!(region.area() <= area, "area grew to {region}");
        area = region.area();

        assert!(
            decisions <= bound,
            "{extent} grid: target {target} from {start} not found in {bound} decisions"
        );
    }

    decisions
}

fn starts(extent: GridExtent) -> Vec<Point> {
    let (w, h) = (extent.width(), extent.height());
    vec![
        Point::new(0, 0),
        Point::new(w - 1, 0),
        Point::new(0, h - 1),
        Point::new(w - 1, h - 1),
        Point::new(w / 2, h / 2),
    ]
}

fn sweep(width: i64, height: i64) {
    let extent = GridExtent::new(width, height).unwrap();
    for tie_break in [TieBreak::Floor, TieBreak::Ceil] {
        for start in starts(extent) {
            for x in 0..extent.width() {
                for y in 0..extent.height() {
                    search(extent, start, Point::new(x, y), tie_break);
                }
            }
        }
    }
}

#[test]
fn test_single_column_grid_converges() {
    sweep(1, 5);
    sweep(1, 37);
}

#[test]
fn test_minimum_height_grid_converges() {
    sweep(2, 5);
    sweep(13, 5);
}

#[test]
fn test_small_grids_converge() {
    for width in [2, 3, 4, 6, 7, 8, 9, 16, 17] {
        for height in [6, 8, 9, 16, 31, 33] {
            sweep(width, height);
        }
    }
}

#[test]
fn test_large_grid_samples_converge() {
    let extent = GridExtent::new(10_000, 10_000).unwrap();
    let targets = [
        Point::new(0, 0),
        Point::new(9_999, 9_999),
        Point::new(1, 9_998),
        Point::new(5_000, 4_999),
        Point::new(1_234, 8_765),
    ];
    for target in targets {
        for start in starts(extent) {
            search(extent, start, target, TieBreak::Floor);
        }
    }
}

#[test]
fn test_start_on_target_needs_no_decision() {
    let extent = GridExtent::new(6, 6).unwrap();
    let target = Point::new(4, 3);
    assert_eq!(search(extent, target, target, TieBreak::Floor), 0);
}

#[test]
fn test_worked_example_six_by_six() {
    let extent = GridExtent::new(6, 6).unwrap();
    assert_eq!(search(extent, Point::new(2, 2), Point::new(4, 3), TieBreak::Floor), 2);
}

#[test]
fn test_midpoint_is_deterministic() {
    let extent = GridExtent::new(100, 80).unwrap();
    let tokens = [Feedback::DownRight, Feedback::UpLeft, Feedback::Right, Feedback::Down];

    let play = || {
        let mut strategy = HalvingStrategy::new(extent, Point::new(10, 10)).unwrap();
        tokens
            .iter()
            .map(|&feedback| strategy.decide(feedback).unwrap())
            .collect::<Vec<_>>()
    };

    assert_eq!(play(), play());

    let region = HalvingStrategy::new(extent, Point::new(10, 10)).unwrap().region();
    assert_eq!(region.midpoint(TieBreak::Floor), region.midpoint(TieBreak::Floor));
}
