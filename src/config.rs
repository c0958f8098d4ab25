//! Configuration Module
//!
//! Handles loading the menu driver's settings from environment variables.

use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised while parsing configuration values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown state format: {0} (expected text or json)")]
    UnknownStateFormat(String),
}

/// How the cache state is rendered after each mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for StateFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(StateFormat::Text),
            "json" => Ok(StateFormat::Json),
            _ => Err(ConfigError::UnknownStateFormat(s.trim().to_string())),
        }
    }
}

/// Driver configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Capacity of the cache before the first explicit build
    pub initial_capacity: usize,
    /// Whether to print the cache contents after every mutation
    pub show_state: bool,
    /// Rendering used when `show_state` is on
    pub state_format: StateFormat,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `LRU_INITIAL_CAPACITY` - Capacity before the first build (default: 0)
    /// - `LRU_SHOW_STATE` - Print cache contents after mutations (default: true)
    /// - `LRU_STATE_FORMAT` - `text` or `json` (default: text)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            initial_capacity: lookup("LRU_INITIAL_CAPACITY")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.initial_capacity),
            show_state: lookup("LRU_SHOW_STATE")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.show_state),
            state_format: lookup("LRU_STATE_FORMAT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.state_format),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            show_state: true,
            state_format: StateFormat::Text,
        }
    }
}
