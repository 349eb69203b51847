//! Strictly Knight - grid search player
//!
//! Speaks the judge's line protocol on stdin/stdout. Logs go to stderr.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_knight_cli::{Cli, DEFAULT_LOG_FILTER, KnightConfig, play};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = KnightConfig::resolve(&cli).context("Failed to load configuration")?;

    init_tracing(config.log_filter().as_deref());
    run(&config)
}

/// Installs the stderr subscriber.
///
/// Precedence: explicit filter, then `RUST_LOG`, then [`DEFAULT_LOG_FILTER`].
fn init_tracing(filter: Option<&str>) {
    let env_filter = match filter {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Plays one game on stdin/stdout and writes the transcript if asked.
#[instrument(skip(config))]
fn run(config: &KnightConfig) -> Result<()> {
    info!("Starting Strictly Knight");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let transcript = play(stdin.lock(), stdout.lock(), config).context("Game aborted")?;

    if let Some(path) = config.transcript() {
        transcript
            .write_to(path)
            .with_context(|| format!("Failed to write transcript to {}", path.display()))?;
    }

    Ok(())
}
