//! Bounding region: the cells still consistent with all feedback.

use crate::error::GameError;
use crate::feedback::{Feedback, Horizontal, Vertical};
use crate::types::{GridExtent, Point};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How the midpoint of an even-length span is chosen.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TieBreak {
    /// Round toward the minimum bound.
    #[default]
    Floor,
    /// Round toward the maximum bound.
    Ceil,
}

impl TieBreak {
    /// Midpoint of the inclusive span `[min, max]`.
    pub fn midpoint(self, min: i32, max: i32) -> i32 {
        match self {
            TieBreak::Floor => min + (max - min) / 2,
            TieBreak::Ceil => min + (max - min + 1) / 2,
        }
    }
}

/// Axis-aligned rectangle with inclusive bounds on both axes.
///
/// Values produced by [`Region::initial`] and [`Region::narrow`] are never
/// empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("x∈[{x_min}, {x_max}] y∈[{y_min}, {y_max}]")]
pub struct Region {
    x_min: i32,
    x_max: i32,
    y_min: i32,
    y_max: i32,
}

impl Region {
    /// The whole grid.
    #[instrument]
    pub fn initial(extent: GridExtent) -> Self {
        Self {
            x_min: 0,
            x_max: extent.width() - 1,
            y_min: 0,
            y_max: extent.height() - 1,
        }
    }

    /// Builds a region from inclusive bounds, or `None` if it would be empty.
    pub fn from_bounds(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Option<Self> {
        let region = Self {
            x_min,
            x_max,
            y_min,
            y_max,
        };
        (!region.is_empty()).then_some(region)
    }

    /// Applies one token observed at `guess`.
    ///
    /// Bounds only ever move inward. Fails with
    /// [`GameError::ConsistencyViolation`] if no cell would remain.
    #[instrument]
    pub fn narrow(&self, guess: Point, feedback: Feedback) -> Result<Region, GameError> {
        let mut next = *self;

        match feedback.horizontal() {
            Some(Horizontal::Right) => next.x_min = next.x_min.max(guess.x.saturating_add(1)),
            Some(Horizontal::Left) => next.x_max = next.x_max.min(guess.x.saturating_sub(1)),
            None => {}
        }

        match feedback.vertical() {
            Some(Vertical::Down) => next.y_min = next.y_min.max(guess.y.saturating_add(1)),
            Some(Vertical::Up) => next.y_max = next.y_max.min(guess.y.saturating_sub(1)),
            None => {}
        }

        if next.is_empty() {
            return Err(GameError::ConsistencyViolation {
                guess,
                feedback,
                region: *self,
            });
        }

        debug!(before = %self, after = %next, "Region narrowed");
        Ok(next)
    }

    /// Midpoint of the region on each axis.
    pub fn midpoint(&self, tie_break: TieBreak) -> Point {
        Point::new(
            tie_break.midpoint(self.x_min, self.x_max),
            tie_break.midpoint(self.y_min, self.y_max),
        )
    }

    /// Returns true if the point lies inside the region.
    pub fn contains(&self, point: Point) -> bool {
        (self.x_min..=self.x_max).contains(&point.x) && (self.y_min..=self.y_max).contains(&point.y)
    }

    /// Returns true if every cell of `self` lies in `other`.
    pub fn is_within(&self, other: &Region) -> bool {
        self.x_min >= other.x_min
            && self.x_max <= other.x_max
            && self.y_min >= other.y_min
            && self.y_max <= other.y_max
    }

    /// Returns the only cell if the region has exactly one.
    pub fn single_cell(&self) -> Option<Point> {
        (self.x_min == self.x_max && self.y_min == self.y_max)
            .then(|| Point::new(self.x_min, self.y_min))
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        (self.x_max - self.x_min + 1).max(0) as u32
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        (self.y_max - self.y_min + 1).max(0) as u32
    }

    /// Number of cells.
    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Returns true if no cell remains.
    pub fn is_empty(&self) -> bool {
        self.x_min > self.x_max || self.y_min > self.y_max
    }

    /// Smallest column.
    pub fn x_min(&self) -> i32 {
        self.x_min
    }

    /// Largest column.
    pub fn x_max(&self) -> i32 {
        self.x_max
    }

    /// Smallest row.
    pub fn y_min(&self) -> i32 {
        self.y_min
    }

    /// Largest row.
    pub fn y_max(&self) -> i32 {
        self.y_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn six_by_six() -> Region {
        Region::initial(GridExtent::new(6, 6).unwrap())
    }

    #[test]
    fn test_initial_covers_grid() {
        let region = six_by_six();
        assert_eq!(region, Region::from_bounds(0, 5, 0, 5).unwrap());
        assert_eq!(region.area(), 36);
    }

    #[test]
    fn test_down_right_narrows_both_axes() {
        let region = six_by_six()
            .narrow(Point::new(2, 2), Feedback::DownRight)
            .unwrap();
        assert_eq!(region, Region::from_bounds(3, 5, 3, 5).unwrap());
    }

    #[test]
    fn test_vertical_token_keeps_columns() {
        let region = six_by_six().narrow(Point::new(2, 2), Feedback::Up).unwrap();
        assert_eq!(region, Region::from_bounds(0, 5, 0, 1).unwrap());
    }

    #[test]
    fn test_horizontal_token_keeps_rows() {
        let region = six_by_six().narrow(Point::new(4, 1), Feedback::Left).unwrap();
        assert_eq!(region, Region::from_bounds(0, 3, 0, 5).unwrap());
    }

    #[test]
    fn test_bounds_never_widen() {
        let region = Region::from_bounds(3, 5, 3, 5).unwrap();
        // Guess outside the region: RIGHT of column 0 must not pull x_min back.
        let narrowed = region.narrow(Point::new(0, 4), Feedback::Right).unwrap();
        assert_eq!(narrowed, region);
    }

    #[test]
    fn test_contradiction_is_consistency_violation() {
        let region = Region::from_bounds(3, 3, 0, 5).unwrap();
        let result = region.narrow(Point::new(3, 2), Feedback::Right);
        assert!(matches!(
            result,
            Err(GameError::ConsistencyViolation { feedback: Feedback::Right, .. })
        ));
    }

    #[test]
    fn test_left_of_column_zero_is_violation() {
        let result = six_by_six().narrow(Point::new(0, 0), Feedback::Left);
        assert!(result.is_err());
    }

    #[test]
    fn test_floor_and_ceil_midpoints() {
        let region = Region::from_bounds(3, 4, 0, 4).unwrap();
        assert_eq!(region.midpoint(TieBreak::Floor), Point::new(3, 2));
        assert_eq!(region.midpoint(TieBreak::Ceil), Point::new(4, 2));
    }

    #[test]
    fn test_single_cell() {
        assert_eq!(
            Region::from_bounds(4, 4, 3, 3).unwrap().single_cell(),
            Some(Point::new(4, 3))
        );
        assert_eq!(six_by_six().single_cell(), None);
        assert!(Region::from_bounds(5, 4, 0, 0).is_none());
    }
}
