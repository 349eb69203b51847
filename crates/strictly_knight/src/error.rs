//! Game error types.

use crate::feedback::Feedback;
use crate::region::Region;
use crate::types::Point;

/// Error that can occur while setting up or playing a game.
///
/// Every variant is terminal for the game instance that produced it.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Malformed or out-of-range input (grid size, budget, start, token).
    #[display("{what}: {detail}")]
    InvalidArgument {
        /// Which input was rejected.
        what: &'static str,
        /// Why it was rejected.
        detail: String,
    },

    /// A turn was requested when the game cannot accept one.
    #[display("The game is not running: {}", _0)]
    IllegalState(#[error(not(source))] String),

    /// Feedback contradicts everything seen so far.
    #[display("Feedback {feedback} at {guess} empties region {region}")]
    ConsistencyViolation {
        /// Guess the feedback refers to.
        guess: Point,
        /// The contradicting token.
        feedback: Feedback,
        /// Region before the token was applied.
        region: Region,
    },

    /// The feedback source or guess sink failed.
    #[display("Boundary failure: {}", _0)]
    Boundary(#[error(not(source))] String),

    /// A postcondition failed (internal bug).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

impl GameError {
    /// Creates an invalid-argument error for input that failed to parse.
    pub fn malformed(what: &'static str, input: &str) -> Self {
        GameError::InvalidArgument {
            what,
            detail: format!("argument '{}' is incorrect", input),
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Boundary(err.to_string())
    }
}
