//! Configuration data types.

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::validation;
use crate::domain::RuleTarget;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Admit every record without consulting filters
    pub skip_filtering: bool,

    /// Discard records without a value
    pub discard_tombstones: bool,

    /// Enable debug logging to file
    pub debug: bool,

    /// Path to log directory
    pub log_path: PathBuf,

    /// Regex filter rules
    #[serde(default)]
    pub filters: Vec<FilterRule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip_filtering: false,
            discard_tombstones: false,
            debug: false,
            log_path: default_log_path(),
            filters: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration and return errors if invalid.
    /// Delegates to the comprehensive validation module.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }
}

/// Regex filter rule configuration.
///
/// A record is discarded when the selected field matches `pattern`.
///
/// # Examples
///
/// ```toml
/// [[filters]]
/// target = "key"
/// pattern = "^test-"
///
/// [[filters]]
/// target = "header"
/// header = "source"
/// pattern = "^replay$"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct FilterRule {
    /// Field to match: key, value, topic or header
    pub target: RuleTarget,

    /// Header name, required when `target = "header"`
    #[serde(default)]
    pub header: Option<String>,

    /// Regex pattern
    pub pattern: String,
}

/// Get default log path (relative to config directory).
/// This returns a placeholder; the actual path is set by ConfigService based on config file location.
pub fn default_log_path() -> PathBuf {
    default_log_path_for_config_dir(None)
}

/// Get log path based on config directory.
pub fn default_log_path_for_config_dir(config_dir: Option<&Path>) -> PathBuf {
    config_dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
                .join("filtering-listener")
        })
        .join("logs")
}
