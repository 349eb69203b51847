//! Contract-based validation for decisions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::error::GameError;
use crate::feedback::Feedback;
use crate::invariants::{InvariantSet, StrategyInvariants};
use crate::strategy::HalvingStrategy;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Decision Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the guess the token refers to is on the grid.
pub struct GuessOnGrid;

impl GuessOnGrid {
    #[instrument(skip(strategy))]
    pub fn check(strategy: &HalvingStrategy) -> Result<(), GameError> {
        if strategy.extent().contains(strategy.last_guess()) {
            Ok(())
        } else {
            Err(GameError::IllegalState(format!(
                "guess {} is off the {} grid",
                strategy.last_guess(),
                strategy.extent()
            )))
        }
    }
}

/// Precondition: the token leaves at least one candidate cell.
pub struct FeedbackConsistent;

impl FeedbackConsistent {
    #[instrument(skip(strategy))]
    pub fn check(feedback: &Feedback, strategy: &HalvingStrategy) -> Result<(), GameError> {
        strategy
            .region()
            .narrow(strategy.last_guess(), *feedback)
            .map(|_| ())
    }
}

// ─────────────────────────────────────────────────────────────
//  Decide Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for [`HalvingStrategy::decide`].
///
/// Preconditions:
/// - Last guess is on the grid
/// - Token is consistent with the region
///
/// Postconditions:
/// - Strategy invariants hold
/// - Region did not widen
pub struct DecideContract;

impl Contract<HalvingStrategy, Feedback> for DecideContract {
    fn pre(strategy: &HalvingStrategy, feedback: &Feedback) -> Result<(), GameError> {
        GuessOnGrid::check(strategy)?;
        FeedbackConsistent::check(feedback, strategy)
    }

    fn post(before: &HalvingStrategy, after: &HalvingStrategy) -> Result<(), GameError> {
        StrategyInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Strategy invariants violated");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        if !after.region().is_within(&before.region()) {
            warn!(before = %before.region(), after = %after.region(), "Region widened");
            return Err(GameError::InvariantViolation(format!(
                "Postcondition failed: region widened from {} to {}",
                before.region(),
                after.region()
            )));
        }

        Ok(())
    }
}
