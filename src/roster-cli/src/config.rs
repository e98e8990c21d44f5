//! Configuration file loading.
//!
//! ```toml
//! [autocomplete]
//! blur_delay_ms = 200
//! max_visible_rows = 8
//! show_description_below = false
//!
//! [logging]
//! level = "warn"
//! ```
//!
//! Unknown keys are ignored. A missing file at the default location means
//! defaults; a missing file named with `--config` is an error.

use std::path::{Path, PathBuf};
use std::time::Duration;

use roster_components::autocomplete::{
    AutocompleteConfig, DEFAULT_BLUR_DELAY, DEFAULT_MAX_VISIBLE_ROWS,
};
use serde::Deserialize;
use thiserror::Error;

use crate::cli::LogLevel;

/// Longest accepted blur delay.
pub const MAX_BLUR_DELAY_MS: u64 = 5000;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse TOML in '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A value is out of range.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// `[autocomplete]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AutocompleteSection {
    /// Grace window for a deferred blur and the just-selected flag.
    pub blur_delay_ms: u64,
    /// Dropdown viewport height in rows.
    pub max_visible_rows: usize,
    pub show_description_below: bool,
}

impl Default for AutocompleteSection {
    fn default() -> Self {
        Self {
            blur_delay_ms: DEFAULT_BLUR_DELAY.as_millis() as u64,
            max_visible_rows: DEFAULT_MAX_VISIBLE_ROWS,
            show_description_below: false,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: Option<String>,
}

/// Whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub autocomplete: AutocompleteSection,
    pub logging: LoggingSection,
}

impl RosterConfig {
    /// `<config dir>/roster/config.toml`, when a config dir exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("roster").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Parse and validate TOML. `origin` is only used in error messages.
    pub fn from_toml_str(content: &str, origin: &Path) -> ConfigResult<Self> {
        let config: RosterConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.autocomplete.blur_delay_ms > MAX_BLUR_DELAY_MS {
            return Err(ConfigError::InvalidValue {
                key: "autocomplete.blur_delay_ms".to_string(),
                message: format!(
                    "{} exceeds the maximum of {MAX_BLUR_DELAY_MS}",
                    self.autocomplete.blur_delay_ms
                ),
            });
        }
        if self.autocomplete.max_visible_rows == 0 {
            return Err(ConfigError::InvalidValue {
                key: "autocomplete.max_visible_rows".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if let Some(level) = &self.logging.level
            && LogLevel::from_str_loose(level).is_none()
        {
            return Err(ConfigError::InvalidValue {
                key: "logging.level".to_string(),
                message: format!("unknown level '{level}'"),
            });
        }
        Ok(())
    }

    /// The configured log level, if any.
    pub fn log_level(&self) -> Option<LogLevel> {
        self.logging.level.as_deref().and_then(LogLevel::from_str_loose)
    }

    /// Input settings seeded from the file.
    pub fn autocomplete_config(&self) -> AutocompleteConfig {
        AutocompleteConfig::default()
            .blur_delay(Duration::from_millis(self.autocomplete.blur_delay_ms))
            .max_visible_rows(self.autocomplete.max_visible_rows)
            .show_description_below(self.autocomplete.show_description_below)
    }
}
