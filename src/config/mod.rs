//! Configuration system for wayback.
//!
//! This module provides the configuration structure for wayback with sensible defaults
//! and support for serialization/deserialization via serde. Configuration can be loaded
//! from TOML files and merged with command-line arguments.
//!
//! # Example
//!
//! ```
//! use wayback::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert!(config.enabled);
//! assert_eq!(config.line_threshold, 5);
//!
//! // Create custom configuration
//! let custom = Config {
//!     line_threshold: 0,
//!     ..Config::default()
//! };
//! assert_eq!(custom.line_threshold, 0);
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for navigation history.
///
/// # Fields
///
/// * `enabled` - Record waypoints as soon as a session is activated (default: true)
/// * `line_threshold` - A cursor move must exceed this many lines to be recorded (default: 5)
/// * `navigation_timeout_ms` - Give up on a navigation if the editor takes longer (default: none)
/// * `ignored_prefixes` - Paths starting with any of these are never recorded (default: `["atom://"]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Record waypoints on activation
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Minimum cursor travel, exclusive, for a move to count as a jump
    #[serde(default = "default_line_threshold")]
    pub line_threshold: usize,

    /// Navigation timeout in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_timeout_ms: Option<u64>,

    /// Path prefixes of internal views that should not become waypoints
    #[serde(default = "default_ignored_prefixes")]
    pub ignored_prefixes: Vec<String>,
}

/// Returns the default enabled state.
fn default_enabled() -> bool {
    true
}

/// Returns the default line threshold.
fn default_line_threshold() -> usize {
    crate::host::filter::DEFAULT_LINE_THRESHOLD
}

/// Returns the default ignored prefixes.
fn default_ignored_prefixes() -> Vec<String> {
    vec!["atom://".to_string()]
}

impl Default for Config {
    /// Creates a new configuration with default values.
    ///
    /// # Default Values
    ///
    /// * `enabled`: true
    /// * `line_threshold`: 5
    /// * `navigation_timeout_ms`: None
    /// * `ignored_prefixes`: `["atom://"]`
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            line_threshold: default_line_threshold(),
            navigation_timeout_ms: None,
            ignored_prefixes: default_ignored_prefixes(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/wayback/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("wayback");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        Self::load_from(&config_path).unwrap_or_else(|err| {
            tracing::warn!(path = %config_path.display(), error = %err, "ignoring unreadable config");
            Self::default()
        })
    }

    /// Loads configuration from an explicit file.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to an explicit file.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Navigation timeout as a duration, if one is configured.
    pub fn navigation_timeout(&self) -> Option<Duration> {
        self.navigation_timeout_ms.map(Duration::from_millis)
    }
}
