//! Run configuration for the batch runner.

use crate::report::OutputFormat;
use derive_getters::Getters;
use derive_more::{Display, Error};
use ntoe::HaltPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How a batch is played and reported.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RunConfig {
    /// Output format for the report.
    #[serde(default)]
    format: OutputFormat,

    /// Whether the final board is printed after the statuses.
    #[serde(default = "default_print_board")]
    print_board: bool,

    /// When the driver stops processing moves.
    #[serde(default)]
    halt_policy: HaltPolicy,
}

#[instrument]
fn default_print_board() -> bool {
    false
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            print_board: default_print_board(),
            halt_policy: HaltPolicy::default(),
        }
    }
}

impl RunConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(format = %config.format, halt_policy = %config.halt_policy, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn with_overrides(
        mut self,
        format: Option<OutputFormat>,
        print_board: bool,
        halt_policy: Option<HaltPolicy>,
    ) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        self.print_board |= print_board;
        if let Some(halt_policy) = halt_policy {
            self.halt_policy = halt_policy;
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
