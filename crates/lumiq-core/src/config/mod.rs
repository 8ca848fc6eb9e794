//! Configuration management for Lumiq.
//!
//! This module handles loading, saving, and managing Lumiq configuration.
//!
//! ## Configuration File Locations
//!
//! | Platform | Path |
//! |----------|------|
//! | Linux | `~/.config/lumiq/config.toml` |
//! | macOS | `~/Library/Application Support/Lumiq/config.toml` |
//! | Windows | `%APPDATA%\Lumiq\config\config.toml` |
//!
//! ## Example
//!
//! ```rust,ignore
//! use lumiq_core::config::Config;
//!
//! let config = Config::load()?;
//! println!("Initial theme: {}", config.picker.current_theme);
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::announce::DEFAULT_ANNOUNCEMENT_TTL;
use crate::catalog::ThemeId;
use crate::error::{Error, Result};

/// Main configuration struct for Lumiq.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Picker settings
    pub picker: PickerConfig,
    /// Preference storage settings
    pub storage: StorageConfig,
    /// UI settings
    pub ui: UiConfig,
}

/// Options an embedder passes to the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Initial theme, also the fallback for missing or unknown stored values
    pub current_theme: ThemeId,
    /// Whether the dark-mode toggle is shown
    pub show_dark_mode: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            current_theme: crate::catalog::default_theme().id,
            show_dark_mode: true,
        }
    }
}

/// Preference storage options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Preference file (None for the platform data directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// UI options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long announcements stay in the live region
    #[serde(with = "humantime_serde")]
    pub announcement_ttl: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            announcement_ttl: DEFAULT_ANNOUNCEMENT_TTL,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// If the configuration file doesn't exist, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, with the same fallback as [`Config::load`].
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("Failed to read config: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to the default location.
    ///
    /// Creates the configuration directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::ConfigError(format!("Failed to create config directory: {e}"))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| Error::ConfigError(format!("Failed to write config: {e}")))
    }

    /// Get a value by its flat key name, formatted for display.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "current_theme" => Some(self.picker.current_theme.to_string()),
            "show_dark_mode" => Some(self.picker.show_dark_mode.to_string()),
            "storage_path" => Some(
                self.storage
                    .path
                    .as_ref()
                    .map_or_else(|| "(default)".to_string(), |p| p.display().to_string()),
            ),
            "announcement_ttl" => Some(format!("{}ms", self.ui.announcement_ttl.as_millis())),
            _ => None,
        }
    }

    /// Set a value by its flat key name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for unknown keys or unparsable values.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = |reason: String| Error::InvalidConfig {
            key: key.to_string(),
            reason,
        };

        match key {
            "current_theme" => {
                self.picker.current_theme = value
                    .parse()
                    .map_err(|e: Error| invalid(e.to_string()))?;
            }
            "show_dark_mode" => {
                self.picker.show_dark_mode = value
                    .parse()
                    .map_err(|e: std::str::ParseBoolError| invalid(e.to_string()))?;
            }
            "storage_path" => {
                self.storage.path = match value {
                    "" | "default" => None,
                    path => Some(PathBuf::from(path)),
                };
            }
            "announcement_ttl" => {
                self.ui.announcement_ttl = humantime_serde::parse(value).map_err(invalid)?;
            }
            _ => return Err(invalid("unknown configuration key".to_string())),
        }

        Ok(())
    }

    /// Keys accepted by [`Config::get`] and [`Config::set`].
    pub const KEYS: [&'static str; 4] = [
        "current_theme",
        "show_dark_mode",
        "storage_path",
        "announcement_ttl",
    ];

    /// Get the default configuration directory path.
    #[must_use]
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "lumiq", "Lumiq")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the full path to the configuration file.
    #[must_use]
    pub fn config_path() -> PathBuf {
        Self::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }
}

mod humantime_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis = duration.as_millis();
        if millis % 1000 == 0 {
            serializer.serialize_str(&format!("{}s", duration.as_secs()))
        } else {
            serializer.serialize_str(&format!("{millis}ms"))
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(serde::de::Error::custom)
    }

    /// Parse `250ms`, `2s` or `1m`.
    pub fn parse(s: &str) -> Result<Duration, String> {
        let s = s.trim();
        let number = |digits: &str| digits.parse::<u64>().map_err(|e| e.to_string());

        if let Some(ms) = s.strip_suffix("ms") {
            number(ms).map(Duration::from_millis)
        } else if let Some(secs) = s.strip_suffix('s') {
            number(secs).map(Duration::from_secs)
        } else if let Some(mins) = s.strip_suffix('m') {
            number(mins).and_then(|m| {
                m.checked_mul(60)
                    .map(Duration::from_secs)
                    .ok_or_else(|| "duration too large".to_string())
            })
        } else {
            Err("invalid duration format".to_string())
        }
    }
}
