//! Config file loading and validation.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// `~/.config/demograph/config.toml`, or the platform equivalent.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("demograph").join("config.toml")
    }

    /// Load from the default path. A missing file is not an error; it yields
    /// the built-in defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs no fetch could ever satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.country.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "country code must not be empty".to_string(),
            });
        }
        if self.source.start_year > self.source.end_year {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "start year {} is after end year {}",
                    self.source.start_year, self.source.end_year
                ),
            });
        }
        if self.source.per_page == 0 {
            return Err(ConfigError::ValidationError {
                message: "per_page must be at least 1".to_string(),
            });
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "tick rate must be positive".to_string(),
            });
        }
        Ok(())
    }
}
