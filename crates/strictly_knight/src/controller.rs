//! Runtime wrapper over the typestate phases.
//!
//! Drivers that cannot track the phase statically (the stdin loop, for
//! one) hold a [`TurnController`] and ask it for the next turn. Asking a
//! finished game fails with [`GameError::IllegalState`].

use crate::boundary::Boundary;
use crate::error::GameError;
use crate::typestate::{GameFinished, GameReady, GameRunning, TurnResult};
use tracing::{instrument, warn};

/// A game in any phase.
#[derive(Debug, Clone)]
pub enum TurnController {
    /// Constructed, no turn requested yet.
    Ready(GameReady),
    /// At least one turn requested, turns remain.
    Running(GameRunning),
    /// No further turns accepted.
    Finished(GameFinished),
}

impl From<GameReady> for TurnController {
    fn from(game: GameReady) -> Self {
        TurnController::Ready(game)
    }
}

impl From<GameRunning> for TurnController {
    fn from(game: GameRunning) -> Self {
        TurnController::Running(game)
    }
}

impl From<GameFinished> for TurnController {
    fn from(game: GameFinished) -> Self {
        TurnController::Finished(game)
    }
}

impl From<TurnResult> for TurnController {
    fn from(result: TurnResult) -> Self {
        match result {
            TurnResult::Running(g) => g.into(),
            TurnResult::Finished(g) => g.into(),
        }
    }
}

impl TurnController {
    /// Returns true if another turn may be requested.
    pub fn is_running(&self) -> bool {
        match self {
            TurnController::Ready(_) => true,
            TurnController::Running(game) => game.is_running(),
            TurnController::Finished(_) => false,
        }
    }

    /// Returns the number of turns still available.
    pub fn turns_left(&self) -> u32 {
        match self {
            TurnController::Ready(game) => game.budget().turns(),
            TurnController::Running(game) => game.turns_left(),
            TurnController::Finished(game) => game.turns_left(),
        }
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self {
            TurnController::Ready(game) => {
                format!("Ready. {} turns available.", game.budget().turns())
            }
            TurnController::Running(game) => format!(
                "Running. {} turns left, searching {}.",
                game.turns_left(),
                game.strategy().region()
            ),
            TurnController::Finished(game) => format!(
                "Finished ({}). Last guess {}.",
                game.reason(),
                game.final_guess()
            ),
        }
    }

    /// Plays one turn, starting the game first if needed.
    #[instrument(skip(self, boundary))]
    pub fn next_turn<B: Boundary>(self, boundary: &mut B) -> Result<Self, GameError> {
        match self {
            TurnController::Ready(game) => Ok(game.start().play_turn(boundary)?.into()),
            TurnController::Running(game) => Ok(game.play_turn(boundary)?.into()),
            TurnController::Finished(game) => {
                warn!(reason = %game.reason(), "Turn requested after game finished");
                Err(GameError::IllegalState(format!(
                    "no turns left ({})",
                    game.reason()
                )))
            }
        }
    }

    /// Plays turns until the game finishes.
    #[instrument(skip(self, boundary))]
    pub fn run<B: Boundary>(self, boundary: &mut B) -> Result<GameFinished, GameError> {
        let mut controller = self;
        while controller.is_running() {
            controller = controller.next_turn(boundary)?;
        }

        match controller {
            TurnController::Finished(game) => Ok(game),
            other => Err(GameError::IllegalState(format!(
                "loop ended without finishing: {}",
                other.status_string()
            ))),
        }
    }
}
