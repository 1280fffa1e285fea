// SPDX-License-Identifier: Apache-2.0

//! Configuration management for Vigil.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths via the `dirs` crate.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `VIGIL_`)
//! 2. Config file: `~/.config/vigil/config.toml` (or platform equivalent)
//! 3. Built-in defaults
//!
//! The GitHub token is never part of the configuration; it is resolved at
//! run time from the environment (see [`crate::github::resolve_token`]).
//!
//! # Examples
//!
//! ```bash
//! # Override the minimum star filter via environment variable
//! VIGIL_SEARCH__MIN_STARS=500 vigil sync
//! ```

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::VigilError;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Document settings (path and section markers).
    pub document: DocumentConfig,
    /// Search settings (queries and star filter).
    pub search: SearchConfig,
    /// UI preferences.
    pub ui: UiConfig,
}

/// Settings for the curated list document.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Path to the document holding the curated list.
    pub path: PathBuf,
    /// Literal line marking the start of the list section.
    pub marker_start: String,
    /// Literal line marking the end of the list section.
    pub marker_end: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("README.md"),
            marker_start: "<!-- VIGIL_LIST_START -->".to_string(),
            marker_end: "<!-- VIGIL_LIST_END -->".to_string(),
        }
    }
}

/// GitHub search settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Minimum star count appended to every query.
    pub min_stars: u32,
    /// Ordered list of search query strings.
    pub queries: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_stars: 1000,
            queries: Vec::new(),
        }
    }
}

/// UI preferences.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Ask for confirmation before rewriting the document (interactive runs only).
    pub confirm_before_write: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            confirm_before_write: true,
        }
    }
}

/// Returns the Vigil configuration directory.
///
/// - Linux: `~/.config/vigil`
/// - macOS: `~/Library/Application Support/vigil`
/// - Windows: `C:\Users\<User>\AppData\Roaming\vigil`
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .expect("Could not determine config directory - is HOME set?")
        .join("vigil")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration.
///
/// Loads from config file (if exists) and environment variables.
/// Environment variables use the prefix `VIGIL_` and double underscore
/// for nested keys (e.g., `VIGIL_SEARCH__MIN_STARS`).
///
/// # Errors
///
/// Returns `VigilError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, VigilError> {
    let config_path = config_file_path();

    let config = Config::builder()
        // Load from config file (optional - may not exist)
        .add_source(File::with_name(config_path.to_string_lossy().as_ref()).required(false))
        // Override with environment variables
        .add_source(
            Environment::with_prefix("VIGIL")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_config_defaults() {
        // Without any config file or env vars, should return defaults
        let config = load_config().expect("should load with defaults");

        assert_eq!(config.document.path, PathBuf::from("README.md"));
        assert_eq!(config.document.marker_start, "<!-- VIGIL_LIST_START -->");
        assert_eq!(config.document.marker_end, "<!-- VIGIL_LIST_END -->");
        assert_eq!(config.search.min_stars, 1000);
        assert!(config.search.queries.is_empty());
        assert!(config.ui.confirm_before_write);
    }

    #[test]
    #[serial]
    #[allow(unsafe_code)]
    fn test_load_config_env_override() {
        // SAFETY: the test is serialized; nothing else touches the
        // environment while the variable is set.
        unsafe { std::env::set_var("VIGIL_SEARCH__MIN_STARS", "250") };
        let config = load_config().expect("env override should parse");
        unsafe { std::env::remove_var("VIGIL_SEARCH__MIN_STARS") };

        assert_eq!(config.search.min_stars, 250);
    }

    #[test]
    fn test_config_dir_exists() {
        let dir = config_dir();
        assert!(dir.ends_with("vigil"));
    }

    #[test]
    fn test_config_file_path() {
        let path = config_file_path();
        assert!(path.ends_with("config.toml"));
    }
}
