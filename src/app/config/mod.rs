// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme
//! - `[tracker]` - Feed form and chart preferences
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `NIGHTFEED_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Theme key
//!
//! `[general] theme` holds the persisted theme as `"light"`, `"dark"`, or
//! `"night-vision"`. It is written on every toggle. When the key is absent
//! the OS color-scheme preference decides between light and dark at startup.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Persisted theme. `None` means the user never toggled and the OS
    /// preference applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeMode>,
}

/// Feed tracking preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackerConfig {
    /// Bottle size pre-filled on the feed form, in millilitres.
    #[serde(
        default = "default_bottle_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_bottle_size_ml: Option<f32>,

    /// Trailing days shown on the intake chart.
    #[serde(default = "default_chart_days", skip_serializing_if = "Option::is_none")]
    pub chart_days: Option<u32>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            default_bottle_size_ml: default_bottle_size(),
            chart_days: default_chart_days(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Feed tracking preferences.
    #[serde(default)]
    pub tracker: TrackerConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_bottle_size() -> Option<f32> {
    Some(DEFAULT_BOTTLE_SIZE_ML)
}

fn default_chart_days() -> Option<u32> {
    Some(DEFAULT_CHART_DAYS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_theme() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme: Some(ThemeMode::NightVision),
            },
            tracker: TrackerConfig::default(),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.general.language, config.general.language);
        assert_eq!(loaded.general.theme, Some(ThemeMode::NightVision));
    }

    #[test]
    fn theme_persists_as_kebab_case_string() {
        let config = Config {
            general: GeneralConfig {
                language: None,
                theme: Some(ThemeMode::NightVision),
            },
            tracker: TrackerConfig::default(),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let content = fs::read_to_string(&config_path).expect("read config");
        assert!(content.contains("theme = \"night-vision\""), "got: {content}");
    }

    #[test]
    fn default_config_has_no_persisted_theme() {
        let config = Config::default();
        assert_eq!(config.general.theme, None);
    }

    #[test]
    fn default_tracker_values_are_filled() {
        let config = Config::default();
        assert_eq!(
            config.tracker.default_bottle_size_ml,
            Some(DEFAULT_BOTTLE_SIZE_ML)
        );
        assert_eq!(config.tracker.chart_days, Some(DEFAULT_CHART_DAYS));
    }

    #[test]
    fn load_with_override_returns_default_for_missing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_warns_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn partial_config_fills_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme = \"dark\"\n").expect("write config");

        let loaded = load_from_path(&config_path).expect("load config");
        assert_eq!(loaded.general.theme, Some(ThemeMode::Dark));
        assert_eq!(loaded.tracker, TrackerConfig::default());
    }
}
