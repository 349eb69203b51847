//! First-class invariants for the halving strategy.
//!
//! Invariants are logical properties that must hold after every decision.
//! They are testable independently and double as documentation.

#[cfg(kani)]
mod verification;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for 2- and 3-tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod guess_in_region;
pub mod non_empty_region;
pub mod region_on_grid;

pub use guess_in_region::GuessInRegionInvariant;
pub use non_empty_region::NonEmptyRegionInvariant;
pub use region_on_grid::RegionOnGridInvariant;

/// All strategy invariants as a composable set.
pub type StrategyInvariants = (
    NonEmptyRegionInvariant,
    RegionOnGridInvariant,
    GuessInRegionInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Feedback, GridExtent, HalvingStrategy, Point};

    fn strategy() -> HalvingStrategy {
        let extent = GridExtent::new(10, 10).unwrap();
        HalvingStrategy::new(extent, Point::new(0, 0)).unwrap()
    }

    #[test]
    fn test_invariant_set_holds_for_fresh_strategy() {
        assert!(StrategyInvariants::check_all(&strategy()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_decisions() {
        let mut strategy = strategy();
        strategy.decide(Feedback::DownRight).unwrap();
        strategy.decide(Feedback::UpLeft).unwrap();
        assert!(StrategyInvariants::check_all(&strategy).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut strategy = strategy();
        strategy.last_guess = Point::new(42, 42);

        let violations = StrategyInvariants::check_all(&strategy).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, GuessInRegionInvariant::description());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (NonEmptyRegionInvariant, RegionOnGridInvariant);
        assert!(TwoInvariants::check_all(&strategy()).is_ok());
    }
}
