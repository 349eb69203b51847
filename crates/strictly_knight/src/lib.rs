//! Strictly Knight - pure game logic for directional grid search.
//!
//! A hidden cell sits somewhere on a `W x H` grid. Each turn the judge
//! says which way the cell lies from the last guess, and the player
//! answers with a new guess.
//!
//! # Architecture
//!
//! - **Region**: inclusive rectangle of cells still consistent with feedback
//! - **Strategy**: halving player that owns the region and the last guess
//! - **Typestate**: `GameReady` → `GameRunning` → `GameFinished` phases
//! - **Controller**: runtime wrapper that drives the phases against a [`Boundary`]
//!
//! # Example
//!
//! ```
//! use strictly_knight::{GameReady, GridExtent, Point, SimulatedJudge, TurnBudget, TurnController};
//!
//! # fn example() -> Result<(), strictly_knight::GameError> {
//! let extent = GridExtent::new(6, 6)?;
//! let start = extent.point(2, 2)?;
//! let game = GameReady::new(extent, TurnBudget::new(6)?, start)?;
//!
//! let mut judge = SimulatedJudge::new(Point::new(4, 3), start);
//! let finished = TurnController::from(game).run(&mut judge)?;
//! assert_eq!(finished.final_guess(), Point::new(4, 3));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod boundary;
mod contracts;
mod controller;
mod error;
mod feedback;
mod invariants;
mod region;
mod strategy;
mod typestate;
mod types;

// Crate-level exports - Domain types
pub use types::{
    GridExtent, MAX_HEIGHT, MAX_TURNS, MAX_WIDTH, MIN_HEIGHT, MIN_TURNS, MIN_WIDTH, Point,
    TurnBudget, ceil_log2,
};

// Crate-level exports - Errors
pub use error::GameError;

// Crate-level exports - Feedback tokens
pub use feedback::{Feedback, Horizontal, Vertical};

// Crate-level exports - Region and strategy
pub use region::{Region, TieBreak};
pub use strategy::HalvingStrategy;

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, DecideContract, FeedbackConsistent, GuessOnGrid};
pub use invariants::{
    GuessInRegionInvariant, Invariant, InvariantSet, InvariantViolation,
    NonEmptyRegionInvariant, RegionOnGridInvariant, StrategyInvariants,
};

// Crate-level exports - Turn controller
pub use boundary::{Boundary, ScriptedJudge, SimulatedJudge};
pub use controller::TurnController;
pub use typestate::{
    FinishReason, GameFinished, GameReady, GameRunning, STOP_BELOW_TURNS, TurnRecord, TurnResult,
};
