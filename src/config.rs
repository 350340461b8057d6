//! Configuration management for the application.
//!
//! This module handles loading and saving application configuration in TOML
//! format with platform-specific directory resolution. Only UI preferences
//! live here; picker state (history, saved colors) is managed elsewhere.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::APP_NAME;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Which code form the copy key puts on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CopyFormat {
    /// Hex form, "#RRGGBB"
    #[default]
    Hex,
    /// Decimal form, "rgb(R, G, B)"
    Rgb,
}

impl CopyFormat {
    /// Cycle to the other format.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Hex => Self::Rgb,
            Self::Rgb => Self::Hex,
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Code form used when copying to the clipboard
    #[serde(default)]
    pub copy_format: CopyFormat,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Huepick/config.toml`
/// - macOS: `~/Library/Application Support/Huepick/config.toml`
/// - Windows: `%APPDATA%\Huepick\config.toml`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::debug!(path = %config_path.display(), "config saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = Config::new();
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(config.ui.copy_format, CopyFormat::Hex);
    }

    #[test]
    fn test_copy_format_toggled() {
        assert_eq!(CopyFormat::Hex.toggled(), CopyFormat::Rgb);
        assert_eq!(CopyFormat::Rgb.toggled(), CopyFormat::Hex);
    }

    #[test]
    fn test_config_toml_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let config = Config {
            ui: UiConfig {
                theme_mode: ThemeMode::Dark,
                copy_format: CopyFormat::Rgb,
            },
        };

        // Manually save to temp location for testing
        let content = toml::to_string_pretty(&config).unwrap();
        fs::write(&config_file, content).unwrap();

        let content = fs::read_to_string(&config_file).unwrap();
        let loaded: Config = toml::from_str(&content).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_missing_sections_use_defaults() {
        let loaded: Config = toml::from_str("").unwrap();
        assert_eq!(loaded, Config::new());

        let loaded: Config = toml::from_str("[ui]\ntheme_mode = \"Light\"\n").unwrap();
        assert_eq!(loaded.ui.theme_mode, ThemeMode::Light);
        assert_eq!(loaded.ui.copy_format, CopyFormat::Hex);
    }
}
