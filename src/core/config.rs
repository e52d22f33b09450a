//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Leptos' own settings (address, site root) come from `Cargo.toml` and
//! `LEPTOS_*` variables, not from here.

use std::str::FromStr;

use tracing::Level;

pub const LOG_LEVEL_VAR: &str = "BOOSTLYX_LOG_LEVEL";
pub const COMPRESSION_VAR: &str = "BOOSTLYX_COMPRESSION";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: `{value}` is not a log level (trace, debug, info, warn, error)")]
    InvalidLogLevel { var: &'static str, value: String },
    #[error("{var}: `{value}` is not a boolean (true/false, 1/0, yes/no, on/off)")]
    InvalidFlag { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum level of emitted log events
    pub log_level: Level,
    /// Brotli/gzip response compression
    pub compression: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            compression: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, unset keys keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(value) => Level::from_str(value.trim()).map_err(|_| ConfigError::InvalidLogLevel {
                var: LOG_LEVEL_VAR,
                value,
            })?,
            None => defaults.log_level,
        };

        let compression = match lookup(COMPRESSION_VAR) {
            Some(value) => parse_flag(&value).ok_or(ConfigError::InvalidFlag {
                var: COMPRESSION_VAR,
                value,
            })?,
            None => defaults.compression,
        };

        Ok(Self {
            log_level,
            compression,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
