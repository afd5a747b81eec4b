use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

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
    /// Uses `~/.config/greeter/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("greeter").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise behaves like [`Config::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads, parses and validates the config file at `path`.
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
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Spring stiffness, damping ratio and threshold are positive
    /// - The expanded extent is finite and not negative
    /// - The frame interval is not zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let animation = &self.animation;
        let positive = [
            ("animation.stiffness", animation.stiffness),
            ("animation.damping_ratio", animation.damping_ratio),
            ("animation.visibility_threshold", animation.visibility_threshold),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationError {
                    message: format!("{} must be a positive number, got {}", name, value),
                });
            }
        }

        if !(animation.expanded_extent.is_finite() && animation.expanded_extent >= 0.0) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "animation.expanded_extent must not be negative, got {}",
                    animation.expanded_extent
                ),
            });
        }

        if self.ui.frame_interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.frame_interval_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
