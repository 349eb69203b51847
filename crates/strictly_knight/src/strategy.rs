//! Halving decision strategy.
//!
//! Each decision narrows the bounding region with the latest token and
//! jumps to the midpoint of what is left. Both axes halve in parallel,
//! so a `W x H` grid pins the hidden cell within
//! `ceil(log2 W) + ceil(log2 H)` decisions.

use crate::contracts::{Contract, DecideContract};
use crate::error::GameError;
use crate::feedback::Feedback;
use crate::region::{Region, TieBreak};
use crate::types::{GridExtent, Point};
use tracing::{debug, instrument};

/// Deterministic binary-search player.
///
/// Owns the bounding region and the last guess for the whole game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalvingStrategy {
    pub(crate) extent: GridExtent,
    pub(crate) region: Region,
    pub(crate) last_guess: Point,
    pub(crate) tie_break: TieBreak,
}

impl HalvingStrategy {
    /// Creates a strategy covering the whole grid, standing at `start`.
    #[instrument]
    pub fn new(extent: GridExtent, start: Point) -> Result<Self, GameError> {
        if !extent.contains(start) {
            return Err(GameError::InvalidArgument {
                what: "start position",
                detail: format!("({}) is outside the {} grid", start, extent),
            });
        }

        Ok(Self {
            extent,
            region: Region::initial(extent),
            last_guess: start,
            tie_break: TieBreak::default(),
        })
    }

    /// Replaces the tie-break policy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Consumes one token and returns the next guess.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(guess = %self.last_guess, region = %self.region))]
    pub fn decide(&mut self, feedback: Feedback) -> Result<Point, GameError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        DecideContract::pre(self, &feedback)?;

        let narrowed = self.region.narrow(self.last_guess, feedback)?;
        let next = narrowed.midpoint(self.tie_break);

        self.region = narrowed;
        self.last_guess = next;

        #[cfg(debug_assertions)]
        DecideContract::post(&before, self)?;

        debug!(next = %next, area = narrowed.area(), "Decided next guess");
        Ok(next)
    }

    /// Returns the current bounding region.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Returns the last guess (the starting position before any decision).
    pub fn last_guess(&self) -> Point {
        self.last_guess
    }

    /// Returns the grid extent.
    pub fn extent(&self) -> GridExtent {
        self.extent
    }

    /// Returns the tie-break policy.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn six_by_six(start: Point) -> HalvingStrategy {
        HalvingStrategy::new(GridExtent::new(6, 6).unwrap(), start).unwrap()
    }

    #[test]
    fn test_first_decision_uses_start_position() {
        let mut strategy = six_by_six(Point::new(2, 2));
        let next = strategy.decide(Feedback::DownRight).unwrap();

        assert_eq!(strategy.region(), Region::from_bounds(3, 5, 3, 5).unwrap());
        assert_eq!(next, Point::new(4, 4));
        assert_eq!(strategy.last_guess(), next);
    }

    #[test]
    fn test_finds_target_of_worked_example() {
        // Hidden cell (4, 3).
        let mut strategy = six_by_six(Point::new(2, 2));
        strategy.decide(Feedback::DownRight).unwrap();
        let next = strategy.decide(Feedback::Up).unwrap();

        assert_eq!(next, Point::new(4, 3));
    }

    #[test]
    fn test_ceil_tie_break_rounds_up() {
        let mut strategy = six_by_six(Point::new(0, 0)).with_tie_break(TieBreak::Ceil);
        let next = strategy.decide(Feedback::DownRight).unwrap();
        // Region x∈[1, 5] y∈[1, 5]: both spans are odd-length, tie-break irrelevant.
        assert_eq!(next, Point::new(3, 3));

        let next = strategy.decide(Feedback::UpLeft).unwrap();
        // Region x∈[1, 2] y∈[1, 2]: ceil picks the upper cell.
        assert_eq!(next, Point::new(2, 2));
    }

    #[test]
    fn test_start_off_grid_rejected() {
        let result = HalvingStrategy::new(GridExtent::new(6, 6).unwrap(), Point::new(6, 0));
        assert!(matches!(result, Err(GameError::InvalidArgument { .. })));
    }

    #[test]
    fn test_contradiction_leaves_state_untouched() {
        let mut strategy = six_by_six(Point::new(0, 3));
        let before = strategy.clone();

        let result = strategy.decide(Feedback::Left);

        assert!(matches!(result, Err(GameError::ConsistencyViolation { .. })));
        assert_eq!(strategy, before);
    }
}
