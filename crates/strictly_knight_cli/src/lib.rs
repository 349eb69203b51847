//! Strictly Knight CLI library - protocol I/O around the game logic.
//!
//! # Architecture
//!
//! - **Protocol**: token reader, header parsing, stdin/stdout [`strictly_knight::Boundary`]
//! - **Config**: TOML file plus command-line overrides
//! - **Transcript**: JSON record of a finished game

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod protocol;
mod transcript;

pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_LOG_FILTER, KnightConfig};
pub use protocol::{GameHeader, LineBoundary, TokenReader};
pub use transcript::Transcript;

use std::io::{BufRead, Write};
use strictly_knight::{GameError, TurnController};
use tracing::{info, instrument};

/// Plays one full game: header from `input`, then one guess per token.
///
/// Returns the transcript once the budget is spent or the input ends.
#[instrument(skip(input, output, config))]
pub fn play<R: BufRead, W: Write>(
    input: R,
    output: W,
    config: &KnightConfig,
) -> Result<Transcript, GameError> {
    let mut tokens = TokenReader::new(input);
    let header = GameHeader::read(&mut tokens)?;
    let game = header.game()?.with_tie_break(*config.tie_break());

    let mut boundary = LineBoundary::new(tokens, output);
    let finished = TurnController::from(game).run(&mut boundary)?;

    info!(
        reason = %finished.reason(),
        turns = finished.history().len(),
        "Game finished"
    );
    Ok(Transcript::new(&header, &finished))
}
