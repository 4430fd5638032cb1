//! Application configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command-line flags are applied on top (see `cli`).
//!
//! None of these settings change validation results; they only control how
//! output and logs look.

use std::env;

use tracing::Level;

use crate::logging::LogFormat;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Log level (`ORDER_LOG_LEVEL`, default: warn)
    pub log_level: Level,

    /// Log output format (`ORDER_LOG_FORMAT`, default: compact)
    pub log_format: LogFormat,

    /// Pretty-print response JSON (`ORDER_PRETTY_JSON`, default: false)
    pub pretty_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_level: Level::WARN,
            log_format: LogFormat::Compact,
            pretty_json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let log_level = match lookup("ORDER_LOG_LEVEL") {
            Some(value) => value
                .trim()
                .parse::<Level>()
                .map_err(|_| ConfigError::InvalidValue("ORDER_LOG_LEVEL".to_string()))?,
            None => defaults.log_level,
        };

        let log_format = match lookup("ORDER_LOG_FORMAT") {
            Some(value) => value
                .trim()
                .parse::<LogFormat>()
                .map_err(|_| ConfigError::InvalidValue("ORDER_LOG_FORMAT".to_string()))?,
            None => defaults.log_format,
        };

        let pretty_json = match lookup("ORDER_PRETTY_JSON") {
            Some(value) => value
                .trim()
                .to_ascii_lowercase()
                .parse::<bool>()
                .map_err(|_| ConfigError::InvalidValue("ORDER_PRETTY_JSON".to_string()))?,
            None => defaults.pretty_json,
        };

        Ok(AppConfig {
            log_level,
            log_format,
            pretty_json,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
