//! Application configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Default window title
pub const DEFAULT_TITLE: &str = "Calculadora Simple";

/// Default tracing filter
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Front-end configuration
///
/// Precedence is CLI flag, then config file, then these defaults. Missing
/// fields in a config file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Title shown above the calculator
    pub title: String,
    /// Tracing filter directive (`info`, `keypad_calculator=debug`, ...)
    pub log_level: String,
    /// File that receives log output; logging is off when unset
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the log filter
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the log file
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Parse configuration from JSON
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        serde_json::from_str(json).map_err(|e| CalcError::config(format!("invalid JSON: {e}")))
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> CalcResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CalcError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// Apply command-line overrides on top of this configuration
    #[must_use]
    pub fn merge_cli(
        mut self,
        title: Option<String>,
        log_level: Option<String>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if log_file.is_some() {
            self.log_file = log_file;
        }
        self
    }
}
