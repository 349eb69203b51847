//! Command-line interface for strictly_knight.

use clap::Parser;
use std::path::PathBuf;
use strictly_knight::TieBreak;

/// Strictly Knight - plays the directional grid search game over stdin/stdout
///
/// Reads `W H`, `N` and `X0 Y0`, then answers every feedback token
/// (U, UR, R, DR, D, DL, L, UL) with the next guess.
#[derive(Parser, Debug, Default)]
#[command(name = "strictly_knight")]
#[command(about = "Type-safe halving player for the grid search game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Midpoint rounding on even spans (floor or ceil)
    #[arg(long)]
    pub tie_break: Option<TieBreak>,

    /// Write a JSON transcript of the game to this path
    #[arg(long)]
    pub transcript: Option<PathBuf>,

    /// Log filter directive (overrides RUST_LOG), e.g. "strictly_knight=debug"
    #[arg(long)]
    pub log_filter: Option<String>,
}
