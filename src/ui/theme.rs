//! Theme system for panel-kit widgets.
//!
//! Every widget reads its colors from a [`Theme`]: a general palette shared with
//! the surrounding application plus a set of dialog tokens used by the dialog and
//! popup chrome. Colors are stored as strings so they can be written by hand in the
//! config file and are parsed into ratatui colors on access.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Available theme presets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Dark,
    Light,
    Custom,
}

/// Complete color theme definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Theme preset name
    #[serde(default)]
    pub preset: ThemePreset,

    /// Color configuration
    #[serde(default)]
    pub colors: ThemeColors,

    /// Dialog and popup chrome tokens
    #[serde(default)]
    pub dialog: DialogTokens,
}

/// Individual color definitions for the theme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Primary accent color (used for highlights, focused controls)
    #[serde(default = "default_primary")]
    pub primary: String,

    /// Background color
    #[serde(default = "default_background")]
    pub background: String,

    /// Foreground/text color
    #[serde(default = "default_foreground")]
    pub foreground: String,

    /// Success/positive messages
    #[serde(default = "default_success")]
    pub success: String,

    /// Warning messages
    #[serde(default = "default_warning")]
    pub warning: String,

    /// Error messages
    #[serde(default = "default_error")]
    pub error: String,

    /// Info messages
    #[serde(default = "default_info")]
    pub info: String,

    /// Muted/disabled text
    #[serde(default = "default_muted")]
    pub muted: String,

    /// Highlighted text (focused background)
    #[serde(default = "default_highlight_bg")]
    pub highlight_bg: String,

    /// Highlighted text foreground
    #[serde(default = "default_highlight_fg")]
    pub highlight_fg: String,
}

/// Tokens shared by dialogs and popups.
///
/// Mirrors the dialog section of a mobile design system: a fixed container
/// width, hairline separators and distinct colors for the title, subtitle and
/// the two footer actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogTokens {
    /// Preferred container width in columns
    #[serde(default = "default_dialog_width")]
    pub width: u16,

    /// Container background
    #[serde(default = "default_background")]
    pub bg: String,

    /// Separator lines between header, content and footer
    #[serde(default = "default_line")]
    pub line: String,

    #[serde(default = "default_foreground")]
    pub title: String,

    #[serde(default = "default_muted")]
    pub subtitle: String,

    #[serde(default = "default_cancel")]
    pub cancel: String,

    #[serde(default = "default_confirm")]
    pub confirm: String,

    /// Checkbox color when an item is selected
    #[serde(default = "default_checked")]
    pub checked: String,

    /// Checkbox color when an item is not selected
    #[serde(default = "default_unchecked")]
    pub unchecked: String,
}

fn default_primary() -> String {
    "cyan".to_string()
}
fn default_background() -> String {
    "black".to_string()
}
fn default_foreground() -> String {
    "white".to_string()
}
fn default_success() -> String {
    "green".to_string()
}
fn default_warning() -> String {
    "yellow".to_string()
}
fn default_error() -> String {
    "red".to_string()
}
fn default_info() -> String {
    "blue".to_string()
}
fn default_muted() -> String {
    "darkgray".to_string()
}
fn default_highlight_bg() -> String {
    "cyan".to_string()
}
fn default_highlight_fg() -> String {
    "black".to_string()
}
fn default_dialog_width() -> u16 {
    50
}
fn default_line() -> String {
    "gray".to_string()
}
fn default_cancel() -> String {
    "gray".to_string()
}
fn default_confirm() -> String {
    "#FF4800".to_string()
}
fn default_checked() -> String {
    "#44DB5E".to_string()
}
fn default_unchecked() -> String {
    "#E5E5E5".to_string()
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::dark()
    }
}

impl Default for DialogTokens {
    fn default() -> Self {
        Self::dark()
    }
}

impl ThemeColors {
    /// Creates a dark theme color palette
    pub fn dark() -> Self {
        Self {
            primary: "cyan".to_string(),
            background: "black".to_string(),
            foreground: "white".to_string(),
            success: "green".to_string(),
            warning: "yellow".to_string(),
            error: "red".to_string(),
            info: "blue".to_string(),
            muted: "darkgray".to_string(),
            highlight_bg: "cyan".to_string(),
            highlight_fg: "black".to_string(),
        }
    }

    /// Creates a light theme color palette
    pub fn light() -> Self {
        Self {
            primary: "blue".to_string(),
            background: "white".to_string(),
            foreground: "black".to_string(),
            success: "green".to_string(),
            warning: "yellow".to_string(),
            error: "red".to_string(),
            info: "blue".to_string(),
            muted: "gray".to_string(),
            highlight_bg: "blue".to_string(),
            highlight_fg: "white".to_string(),
        }
    }

    /// Parses a color string into a ratatui Color
    ///
    /// Supports named colors (red, green, blue, etc.) and hex colors (#RRGGBB)
    pub fn parse_color(color_str: &str) -> Color {
        match color_str.to_lowercase().as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "gray" | "grey" => Color::Gray,
            "darkgray" | "darkgrey" => Color::DarkGray,
            "lightred" => Color::LightRed,
            "lightgreen" => Color::LightGreen,
            "lightyellow" => Color::LightYellow,
            "lightblue" => Color::LightBlue,
            "lightmagenta" => Color::LightMagenta,
            "lightcyan" => Color::LightCyan,
            "white" => Color::White,
            // Hex color support
            s if s.starts_with('#') && s.len() == 7 => {
                if let Ok(r) = u8::from_str_radix(&s[1..3], 16) {
                    if let Ok(g) = u8::from_str_radix(&s[3..5], 16) {
                        if let Ok(b) = u8::from_str_radix(&s[5..7], 16) {
                            return Color::Rgb(r, g, b);
                        }
                    }
                }
                Color::White // Fallback
            }
            _ => Color::White, // Default fallback
        }
    }
}

impl DialogTokens {
    /// Dialog tokens for dark terminals
    pub fn dark() -> Self {
        Self {
            width: default_dialog_width(),
            bg: "black".to_string(),
            line: "darkgray".to_string(),
            title: "white".to_string(),
            subtitle: "gray".to_string(),
            cancel: "gray".to_string(),
            confirm: default_confirm(),
            checked: default_checked(),
            unchecked: "darkgray".to_string(),
        }
    }

    /// Dialog tokens for light terminals
    pub fn light() -> Self {
        Self {
            width: default_dialog_width(),
            bg: "white".to_string(),
            line: "#E5E5E5".to_string(),
            title: "#333333".to_string(),
            subtitle: "#999999".to_string(),
            cancel: "#666666".to_string(),
            confirm: default_confirm(),
            checked: default_checked(),
            unchecked: default_unchecked(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            preset: ThemePreset::Dark,
            colors: ThemeColors::dark(),
            dialog: DialogTokens::dark(),
        }
    }
}

impl Theme {
    /// Creates a new theme from a preset
    pub fn from_preset(preset: ThemePreset) -> Self {
        let (colors, dialog) = match preset {
            ThemePreset::Dark => (ThemeColors::dark(), DialogTokens::dark()),
            ThemePreset::Light => (ThemeColors::light(), DialogTokens::light()),
            ThemePreset::Custom => (ThemeColors::dark(), DialogTokens::dark()), // Custom uses dark as base
        };

        Self {
            preset,
            colors,
            dialog,
        }
    }

    pub fn primary(&self) -> Color {
        ThemeColors::parse_color(&self.colors.primary)
    }

    pub fn background(&self) -> Color {
        ThemeColors::parse_color(&self.colors.background)
    }

    pub fn foreground(&self) -> Color {
        ThemeColors::parse_color(&self.colors.foreground)
    }

    pub fn success(&self) -> Color {
        ThemeColors::parse_color(&self.colors.success)
    }

    pub fn warning(&self) -> Color {
        ThemeColors::parse_color(&self.colors.warning)
    }

    pub fn error(&self) -> Color {
        ThemeColors::parse_color(&self.colors.error)
    }

    pub fn info(&self) -> Color {
        ThemeColors::parse_color(&self.colors.info)
    }

    pub fn muted(&self) -> Color {
        ThemeColors::parse_color(&self.colors.muted)
    }

    pub fn highlight_bg(&self) -> Color {
        ThemeColors::parse_color(&self.colors.highlight_bg)
    }

    pub fn highlight_fg(&self) -> Color {
        ThemeColors::parse_color(&self.colors.highlight_fg)
    }

    pub fn dialog_bg(&self) -> Color {
        ThemeColors::parse_color(&self.dialog.bg)
    }

    pub fn dialog_line(&self) -> Color {
        ThemeColors::parse_color(&self.dialog.line)
    }

    pub fn dialog_title(&self) -> Color {
        ThemeColors::parse_color(&self.dialog.title)
    }

    pub fn dialog_subtitle(&self) -> Color {
        ThemeColors::parse_color(&self.dialog.subtitle)
    }

    pub fn dialog_cancel(&self) -> Color {
        ThemeColors::parse_color(&self.dialog.cancel)
    }

    pub fn dialog_confirm(&self) -> Color {
        ThemeColors::parse_color(&self.dialog.confirm)
    }

    pub fn checked(&self) -> Color {
        ThemeColors::parse_color(&self.dialog.checked)
    }

    pub fn unchecked(&self) -> Color {
        ThemeColors::parse_color(&self.dialog.unchecked)
    }
}
