//! UI utility functions for text processing and layout management.
//!
//! This module provides helper functions for truncating and wrapping text and
//! for positioning dialogs inside a parent area.

use ratatui::layout::Rect;
use ratatui::text::Span;

/// Display width of `text` in terminal columns (wide characters count twice)
pub fn display_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Truncates text to fit within a maximum width, adding ellipsis if needed
///
/// Works on characters rather than bytes so multi-byte text never splits
/// inside a code point.
///
/// # Arguments
/// * `text` - The text to truncate
/// * `max_width` - Maximum width in characters
///
/// # Returns
/// Truncated string with "..." appended if truncation occurred
///
/// # Examples
/// ```
/// use panel_kit::ui::utils::truncate_text;
///
/// assert_eq!(truncate_text("Hello, World!", 10), "Hello, ...");
/// assert_eq!(truncate_text("Short", 10), "Short");
/// ```
pub fn truncate_text(text: &str, max_width: usize) -> String {
    let len = text.chars().count();
    if len <= max_width {
        text.to_string()
    } else if max_width <= 3 {
        "...".to_string()
    } else {
        let truncated: String = text.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    }
}

/// Wraps text to fit within a given width, breaking on word boundaries
///
/// Explicit newlines are preserved as line breaks.
///
/// # Arguments
/// * `text` - The text to wrap
/// * `width` - Maximum line width in characters
///
/// # Returns
/// Vector of wrapped lines
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current_line = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let chars: Vec<char> = word.chars().collect();

            // If word itself is longer than width, break it
            if chars.len() > width {
                if !current_line.is_empty() {
                    lines.push(std::mem::take(&mut current_line));
                }
                let mut chunks = chars.chunks(width).peekable();
                while let Some(chunk) = chunks.next() {
                    let piece: String = chunk.iter().collect();
                    if chunks.peek().is_some() {
                        lines.push(piece);
                    } else {
                        current_len = chunk.len();
                        current_line = piece;
                    }
                }
                continue;
            }

            let space_needed = usize::from(!current_line.is_empty());
            if current_len + space_needed + chars.len() > width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
                current_len = 0;
            }

            if !current_line.is_empty() {
                current_line.push(' ');
                current_len += 1;
            }
            current_line.push_str(word);
            current_len += chars.len();
        }

        lines.push(current_line);
    }

    lines
}

/// Creates a centered area within a parent area
///
/// # Arguments
/// * `parent` - The parent area
/// * `width` - Desired width (or parent width if larger)
/// * `height` - Desired height (or parent height if larger)
///
/// # Returns
/// A centered Rect within the parent
pub fn centered_rect(parent: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(parent.width);
    let height = height.min(parent.height);

    Rect {
        x: parent.x + (parent.width.saturating_sub(width)) / 2,
        y: parent.y + (parent.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Creates a horizontally centered area pinned to the top of the parent
pub fn top_rect(parent: Rect, width: u16, height: u16) -> Rect {
    let rect = centered_rect(parent, width, height);
    Rect { y: parent.y, ..rect }
}

/// Creates a horizontally centered area pinned to the bottom of the parent
pub fn bottom_rect(parent: Rect, width: u16, height: u16) -> Rect {
    let rect = centered_rect(parent, width, height);
    Rect {
        y: parent.bottom().saturating_sub(rect.height),
        ..rect
    }
}
