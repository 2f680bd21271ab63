use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::deck::{Deck, TOTAL_PAGES};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/anniversary/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("anniversary").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing default file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates an explicit config file. Unlike [`Config::load`],
    /// a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The tick rate is non-zero
    /// - Swipe threshold and cell width are positive
    /// - `[[pages]]`, when present, lists exactly one entry per page
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        if !is_positive(self.gesture.threshold_px) {
            return Err(ConfigError::ValidationError {
                message: "gesture.threshold_px must be positive".to_string(),
            });
        }

        if !is_positive(self.gesture.cell_width_px) {
            return Err(ConfigError::ValidationError {
                message: "gesture.cell_width_px must be positive".to_string(),
            });
        }

        if !self.pages.is_empty() && self.pages.len() != usize::from(TOTAL_PAGES) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Expected {} [[pages]] entries, found {}",
                    TOTAL_PAGES,
                    self.pages.len()
                ),
            });
        }

        Ok(())
    }

    /// The deck to present: configured pages or the built-in ones.
    pub fn deck(&self) -> Deck {
        if self.pages.is_empty() {
            Deck::builtin()
        } else {
            Deck::from_pages(self.pages.clone())
        }
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
