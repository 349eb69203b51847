//! Phase-specific typestate structs for the turn controller.
//!
//! Each phase is its own type. A `GameFinished` ALWAYS has a finish
//! reason, and only `GameRunning` can play a turn.

use crate::boundary::Boundary;
use crate::error::GameError;
use crate::feedback::Feedback;
use crate::region::{Region, TieBreak};
use crate::strategy::HalvingStrategy;
use crate::types::{GridExtent, Point, TurnBudget};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// The game keeps running while at least this many turns remain.
pub const STOP_BELOW_TURNS: u32 = 1;

/// Why a game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum FinishReason {
    /// Every turn of the budget was played.
    #[display("turn budget exhausted")]
    BudgetExhausted,
    /// The judge stopped sending tokens.
    #[display("judge stopped sending feedback")]
    JudgeStopped,
}

/// One played turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct TurnRecord {
    /// 1-based turn number.
    pub turn: u32,
    /// Token received this turn.
    pub feedback: Feedback,
    /// Guess emitted in response.
    pub guess: Point,
    /// Region after applying the token.
    pub region: Region,
}

// ─────────────────────────────────────────────────────────────
//  Ready Phase
// ─────────────────────────────────────────────────────────────

/// Game constructed and validated, no turn played yet.
#[derive(Debug, Clone)]
pub struct GameReady {
    strategy: HalvingStrategy,
    budget: TurnBudget,
}

impl GameReady {
    /// Creates a game from validated inputs.
    #[instrument]
    pub fn new(extent: GridExtent, budget: TurnBudget, start: Point) -> Result<Self, GameError> {
        Ok(Self {
            strategy: HalvingStrategy::new(extent, start)?,
            budget,
        })
    }

    /// Replaces the strategy's tie-break policy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.strategy = self.strategy.with_tie_break(tie_break);
        self
    }

    /// Returns the strategy.
    pub fn strategy(&self) -> &HalvingStrategy {
        &self.strategy
    }

    /// Returns the turn budget.
    pub fn budget(&self) -> TurnBudget {
        self.budget
    }

    /// Starts the game (consumes ready, returns running).
    #[instrument(skip(self))]
    pub fn start(self) -> GameRunning {
        info!(
            extent = %self.strategy.extent(),
            turns = self.budget.turns(),
            start = %self.strategy.last_guess(),
            "Game started"
        );
        GameRunning {
            strategy: self.strategy,
            budget: self.budget,
            turns_left: self.budget.turns(),
            history: Vec::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Running Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can play turns.
#[derive(Debug, Clone)]
pub struct GameRunning {
    pub(crate) strategy: HalvingStrategy,
    pub(crate) budget: TurnBudget,
    pub(crate) turns_left: u32,
    pub(crate) history: Vec<TurnRecord>,
}

impl GameRunning {
    /// Returns true while turns remain.
    pub fn is_running(&self) -> bool {
        self.turns_left >= STOP_BELOW_TURNS
    }

    /// Plays one turn, consuming self and transitioning to the next state.
    ///
    /// Reads a token from `boundary`, decides, emits the guess, and
    /// spends one turn.
    #[instrument(skip(self, boundary), fields(turns_left = self.turns_left))]
    pub fn play_turn<B: Boundary>(mut self, boundary: &mut B) -> Result<TurnResult, GameError> {
        if !self.is_running() {
            return Err(GameError::IllegalState("no turns left".to_string()));
        }

        let Some(feedback) = boundary.feedback()? else {
            info!(turns_left = self.turns_left, "Judge stopped, ending game");
            return Ok(TurnResult::Finished(self.finish(FinishReason::JudgeStopped)));
        };

        let guess = self.strategy.decide(feedback)?;
        boundary.emit(guess)?;

        self.turns_left -= 1;
        let turn = self.budget.turns() - self.turns_left;
        self.history
            .push(TurnRecord::new(turn, feedback, guess, self.strategy.region()));
        debug!(turn, %feedback, %guess, "Turn played");

        if self.is_running() {
            Ok(TurnResult::Running(self))
        } else {
            info!("Turn budget exhausted");
            Ok(TurnResult::Finished(self.finish(FinishReason::BudgetExhausted)))
        }
    }

    /// Returns the remaining number of turns.
    pub fn turns_left(&self) -> u32 {
        self.turns_left
    }

    /// Returns the strategy.
    pub fn strategy(&self) -> &HalvingStrategy {
        &self.strategy
    }

    /// Returns the turns played so far.
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    fn finish(self, reason: FinishReason) -> GameFinished {
        GameFinished {
            strategy: self.strategy,
            budget: self.budget,
            turns_left: self.turns_left,
            history: self.history,
            reason,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game over - no further turns accepted.
#[derive(Debug, Clone)]
pub struct GameFinished {
    strategy: HalvingStrategy,
    budget: TurnBudget,
    turns_left: u32,
    history: Vec<TurnRecord>,
    reason: FinishReason,
}

impl GameFinished {
    /// Returns why the game stopped.
    pub fn reason(&self) -> FinishReason {
        self.reason
    }

    /// Returns the strategy in its final state.
    pub fn strategy(&self) -> &HalvingStrategy {
        &self.strategy
    }

    /// Returns the original turn budget.
    pub fn budget(&self) -> TurnBudget {
        self.budget
    }

    /// Returns the unplayed turns.
    pub fn turns_left(&self) -> u32 {
        self.turns_left
    }

    /// Returns every turn played.
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Returns the last guess emitted (the start if no turn was played).
    pub fn final_guess(&self) -> Point {
        self.strategy.last_guess()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of playing a turn.
#[derive(Debug)]
pub enum TurnResult {
    /// Game continues.
    Running(GameRunning),
    /// Game finished.
    Finished(GameFinished),
}
