//! UI primitives shared by every widget.
//!
//! - Theme system with dialog tokens and customizable colors
//! - Styled blocks and styles built from the theme
//! - Small reusable widgets (toast, inline switch, checkbox glyphs)
//! - Text and layout helpers

pub mod styled;
pub mod theme;
pub mod utils;
pub mod widgets;

// Re-export commonly used items
pub use theme::{DialogTokens, Theme, ThemeColors, ThemePreset};
pub use utils::{bottom_rect, centered_rect, top_rect, truncate_text, wrap_text};
pub use widgets::{render_toast, ToastType};
