//! JSON transcript of a finished game.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use strictly_knight::{FinishReason, GameFinished, GridExtent, Point, TieBreak, TurnRecord};
use tracing::{info, instrument};

use crate::protocol::GameHeader;

/// Everything that happened in one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// Grid size.
    pub extent: GridExtent,
    /// Turns allowed.
    pub budget: u32,
    /// Starting position.
    pub start: Point,
    /// Midpoint rounding used.
    pub tie_break: TieBreak,
    /// Why the game stopped.
    pub reason: FinishReason,
    /// Turns in order.
    pub turns: Vec<TurnRecord>,
}

impl Transcript {
    /// Summarizes a finished game.
    pub fn new(header: &GameHeader, finished: &GameFinished) -> Self {
        Self {
            extent: header.extent,
            budget: header.budget.turns(),
            start: header.start,
            tie_break: finished.strategy().tie_break(),
            reason: finished.reason(),
            turns: finished.history().to_vec(),
        }
    }

    /// Writes the transcript as pretty JSON.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn write_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        info!(turns = self.turns.len(), "Transcript written");
        Ok(())
    }
}
