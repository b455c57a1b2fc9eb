//! Configuration management for panel-kit.
//!
//! This module handles loading and managing configuration from a TOML file
//! located at `~/.panel-kit/config.toml`. It carries the defaults applied to
//! every widget (theme, locale, popup motion, dialog sizing) and the logging
//! settings used by the gallery.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::components::popup::{FooterType, MotionType};
use crate::i18n::Locale;
use crate::ui::theme::{Theme, ThemePreset};

/// Main configuration structure.
///
/// All configuration options are optional and will fall back to sensible defaults
/// if not specified in the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI and display configuration
    #[serde(default)]
    pub ui: UiConfig,

    /// Popup chrome defaults
    #[serde(default)]
    pub popup: PopupConfig,

    /// Dialog defaults
    #[serde(default)]
    pub dialog: DialogConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UI configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Color theme preset
    /// Options: "dark", "light", "custom"
    #[serde(default)]
    pub theme: ThemePreset,

    /// Display language for built-in labels
    /// Options: "en", "zh"
    #[serde(default)]
    pub locale: Locale,
}

/// Popup chrome defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopupConfig {
    /// Entrance/exit effect
    #[serde(default)]
    pub motion_type: MotionType,

    /// Duration of one entrance or exit transition in milliseconds
    #[serde(default = "default_motion_duration")]
    pub motion_duration_ms: u64,

    /// Which footer buttons to show
    #[serde(default)]
    pub footer_type: FooterType,
}

/// Dialog defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogConfig {
    /// Rows shown by a checkbox dialog before its list scrolls
    #[serde(default = "default_max_item_num")]
    pub max_item_num: usize,
}

/// Logging configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directives, e.g. "info" or "panel_kit=debug"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file name inside the config directory
    #[serde(default = "default_log_file")]
    pub file: String,
}

// Default value functions for serde
fn default_motion_duration() -> u64 {
    300
}

fn default_max_item_num() -> usize {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "panel-kit.log".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemePreset::default(),
            locale: Locale::default(),
        }
    }
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            motion_type: MotionType::default(),
            motion_duration_ms: default_motion_duration(),
            footer_type: FooterType::default(),
        }
    }
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            max_item_num: default_max_item_num(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

impl Config {
    /// Returns the path to the configuration directory (~/.panel-kit/)
    pub fn config_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to determine home directory")?;
        Ok(home_dir.join(".panel-kit"))
    }

    /// Returns the path to the configuration file (~/.panel-kit/config.toml)
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path of the log file inside the config directory
    pub fn log_file_path(&self) -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(&self.logging.file))
    }

    /// The theme selected by `[ui] theme`
    pub fn theme(&self) -> Theme {
        Theme::from_preset(self.ui.theme.clone())
    }

    /// Loads configuration from the config file, creating a default if it doesn't exist.
    ///
    /// # Behavior
    /// 1. If the config file exists, parse and return it
    /// 2. If the config file doesn't exist, create default config file and return defaults
    /// 3. If parsing fails, return error with context
    ///
    /// # Errors
    /// This function will return an error if:
    /// - Home directory cannot be determined
    /// - File I/O operations fail
    /// - TOML parsing fails
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {config_path:?}"))?;

            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {config_path:?}"))?;

            Ok(config)
        } else {
            let default_config = Config::default();
            default_config.create_default_config()?;
            Ok(default_config)
        }
    }

    /// Creates a default configuration file at ~/.panel-kit/config.toml
    ///
    /// This function will create the config directory if it doesn't exist, then
    /// write a default configuration file with helpful comments.
    ///
    /// # Errors
    /// This function will return an error if:
    /// - Directory creation fails
    /// - File write operations fail
    pub fn create_default_config(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        let config_path = Self::config_file_path()?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {config_dir:?}"))?;
        }

        fs::write(&config_path, DEFAULT_CONFIG_TOML)
            .with_context(|| format!("Failed to write config file: {config_path:?}"))?;

        Ok(())
    }

    /// Saves the current configuration to the config file.
    ///
    /// # Errors
    /// This function will return an error if:
    /// - Directory creation fails
    /// - TOML serialization fails
    /// - File write operations fail
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        let config_path = Self::config_file_path()?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {config_dir:?}"))?;
        }

        let toml_string =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config to TOML")?;

        fs::write(&config_path, toml_string)
            .with_context(|| format!("Failed to write config file: {config_path:?}"))?;

        Ok(())
    }
}

const DEFAULT_CONFIG_TOML: &str = r#"# panel-kit Configuration File
# This file is automatically generated with default values.
# You can edit this file to customize the widget defaults.

[ui]
# Color theme
# Options: "dark", "light", "custom"
theme = "dark"

# Language of built-in labels (Cancel, Confirm, Back, ...)
# Options: "en", "zh"
locale = "en"

[popup]
# Entrance/exit effect of popups
# Options: "none", "fade", "pull-up", "scale-fade-in", "scale-pull-down"
motion_type = "pull-up"

# Duration of one transition in milliseconds
motion_duration_ms = 300

# Footer buttons
# Options: "both", "single-confirm", "single-cancel", "custom"
footer_type = "both"

[dialog]
# Rows a checkbox dialog shows before it scrolls
max_item_num = 5

[logging]
# Log filter, e.g. "info", "debug" or "panel_kit=trace"
level = "info"

# Log file name inside ~/.panel-kit/
file = "panel-kit.log"
"#;
