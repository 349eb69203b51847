//! Player configuration: TOML file merged with command-line overrides.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_knight::TieBreak;
use tracing::{debug, info, instrument};

/// Log filter used when neither the config nor `RUST_LOG` sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Player configuration.
///
/// Every field is optional in the file; missing fields take defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KnightConfig {
    /// Midpoint rounding on even spans.
    tie_break: TieBreak,

    /// Where to write the JSON transcript, if anywhere.
    transcript: Option<PathBuf>,

    /// Tracing filter directive.
    log_filter: Option<String>,
}

impl KnightConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(tie_break = %config.tie_break, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the effective configuration for a command line.
    ///
    /// Loads `--config` when given, then lets every flag that was set
    /// override the file value.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(tie_break) = cli.tie_break {
            self.tie_break = tie_break;
        }
        if let Some(path) = &cli.transcript {
            self.transcript = Some(path.clone());
        }
        if let Some(filter) = &cli.log_filter {
            self.log_filter = Some(filter.clone());
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
