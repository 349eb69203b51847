//! The judge side of the game: where tokens come from and guesses go.

use crate::error::GameError;
use crate::feedback::Feedback;
use crate::types::Point;
use tracing::{debug, instrument};

/// Source of feedback tokens and sink for guesses.
///
/// The controller calls [`Boundary::feedback`] once per turn, then
/// [`Boundary::emit`] with the resulting guess.
pub trait Boundary {
    /// Blocks until the next token arrives.
    ///
    /// Returns `Ok(None)` once the judge has nothing more to say.
    fn feedback(&mut self) -> Result<Option<Feedback>, GameError>;

    /// Publishes the next guess.
    fn emit(&mut self, guess: Point) -> Result<(), GameError>;
}

/// Truthful judge with a known hidden cell.
///
/// Answers each guess with [`Feedback::between`] and stops answering
/// once a guess lands on the target.
#[derive(Debug, Clone)]
pub struct SimulatedJudge {
    target: Point,
    current: Point,
    emitted: Vec<Point>,
}

impl SimulatedJudge {
    /// Creates a judge for a player standing at `start`.
    #[instrument]
    pub fn new(target: Point, start: Point) -> Self {
        Self {
            target,
            current: start,
            emitted: Vec::new(),
        }
    }

    /// Returns the hidden cell.
    pub fn target(&self) -> Point {
        self.target
    }

    /// Returns every guess received so far.
    pub fn emitted(&self) -> &[Point] {
        &self.emitted
    }

    /// Returns true if the latest position is the target.
    pub fn is_found(&self) -> bool {
        self.current == self.target
    }
}

impl Boundary for SimulatedJudge {
    fn feedback(&mut self) -> Result<Option<Feedback>, GameError> {
        let feedback = Feedback::between(self.current, self.target);
        debug!(current = %self.current, target = %self.target, ?feedback, "Judge answered");
        Ok(feedback)
    }

    fn emit(&mut self, guess: Point) -> Result<(), GameError> {
        self.current = guess;
        self.emitted.push(guess);
        Ok(())
    }
}

/// Replays a fixed list of tokens, recording every guess.
#[derive(Debug, Clone, Default)]
pub struct ScriptedJudge {
    tokens: std::collections::VecDeque<Feedback>,
    emitted: Vec<Point>,
}

impl ScriptedJudge {
    /// Creates a judge that sends `tokens` in order, then stops.
    pub fn new(tokens: impl IntoIterator<Item = Feedback>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
            emitted: Vec::new(),
        }
    }

    /// Returns every guess received so far.
    pub fn emitted(&self) -> &[Point] {
        &self.emitted
    }
}

impl Boundary for ScriptedJudge {
    fn feedback(&mut self) -> Result<Option<Feedback>, GameError> {
        Ok(self.tokens.pop_front())
    }

    fn emit(&mut self, guess: Point) -> Result<(), GameError> {
        self.emitted.push(guess);
        Ok(())
    }
}
