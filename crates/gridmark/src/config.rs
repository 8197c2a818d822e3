//! Game configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use gridmark_core::{GridError, Mark, Roster};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for one game, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cells along one edge of the board.
    #[serde(default = "default_side")]
    side: usize,

    /// Player marks in turn order.
    #[serde(default = "default_marks")]
    marks: Vec<Mark>,

    /// Dim position placeholders with ANSI colour.
    #[serde(default = "default_color")]
    color: bool,
}

fn default_side() -> usize {
    3
}

fn default_marks() -> Vec<Mark> {
    vec![Mark::ClassicX, Mark::ClassicO]
}

fn default_color() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            side: default_side(),
            marks: default_marks(),
            color: default_color(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(side = config.side, players = config.marks.len(), "Config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_overrides(
        mut self,
        side: Option<usize>,
        marks: Option<Vec<Mark>>,
        no_color: bool,
    ) -> Self {
        if let Some(side) = side {
            self.side = side;
        }
        if let Some(marks) = marks {
            self.marks = marks;
        }
        if no_color {
            self.color = false;
        }
        self
    }

    /// Builds the roster, one fresh player per configured mark.
    pub fn roster(&self) -> Result<Roster, GridError> {
        Roster::from_marks(self.marks.iter().copied())
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
