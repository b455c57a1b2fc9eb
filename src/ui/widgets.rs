//! Small reusable pieces of widget rendering.
//!
//! Toast notifications, the inline on/off switch and checkbox glyphs. The
//! larger components in `crate::components` are assembled from these.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::styled;
use super::theme::Theme;
use crate::components::dialog::SelectionMode;

/// Width of the inline switch in columns
pub const SWITCH_WIDTH: u16 = 5;

/// Toast notification type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Error,
    Warning,
    Info,
}

/// Renders a toast notification near the bottom of `screen`
///
/// # Arguments
/// * `f` - The ratatui Frame to render into
/// * `screen` - Area the toast is positioned in
/// * `message` - Message to display
/// * `toast_type` - Type of toast (affects color)
/// * `theme` - Theme for colors
pub fn render_toast(f: &mut Frame, screen: Rect, message: &str, toast_type: ToastType, theme: &Theme) {
    let width = (message.chars().count().min(60) as u16 + 6).min(screen.width);
    let height = 3.min(screen.height);

    let area = Rect {
        x: screen.x + screen.width.saturating_sub(width) / 2,
        y: screen.y + screen.height.saturating_sub(height + 1),
        width,
        height,
    };

    f.render_widget(Clear, area);

    let (icon, color) = match toast_type {
        ToastType::Success => ("✓", theme.success()),
        ToastType::Error => ("✗", theme.error()),
        ToastType::Warning => ("⚠", theme.warning()),
        ToastType::Info => ("ℹ", theme.info()),
    };

    let text = Line::from(vec![
        Span::styled(
            format!("{icon} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(message, Style::default().fg(theme.foreground())),
    ]);

    let widget = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(theme.background())),
    );

    f.render_widget(widget, area);
}

/// The inline switch as a single span, e.g. `[ ON]` / `[OFF]`
pub fn switch_span(on: bool, focused: bool, theme: &Theme) -> Span<'static> {
    let text = if on { "[ ON]" } else { "[OFF]" };
    let style = styled::switch(theme, on);
    Span::styled(text, if focused { styled::focused(style) } else { style })
}

/// Checkbox glyph for a list row: radio buttons for single selection,
/// square boxes for multi selection
pub fn checkbox_glyph(mode: SelectionMode, checked: bool) -> &'static str {
    match (mode, checked) {
        (SelectionMode::Single, true) => "◉",
        (SelectionMode::Single, false) => "○",
        (SelectionMode::Multi, true) => "[✓]",
        (SelectionMode::Multi, false) => "[ ]",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_switch_span_text() {
        let theme = Theme::default();
        assert_eq!(switch_span(true, false, &theme).content, "[ ON]");
        assert_eq!(switch_span(false, false, &theme).content, "[OFF]");
        assert_eq!(switch_span(true, false, &theme).width(), SWITCH_WIDTH as usize);
    }

    #[test]
    fn test_switch_span_focus_reverses() {
        let theme = Theme::default();
        let span = switch_span(false, true, &theme);
        assert!(span.style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_checkbox_glyphs() {
        assert_eq!(checkbox_glyph(SelectionMode::Single, true), "◉");
        assert_eq!(checkbox_glyph(SelectionMode::Multi, false), "[ ]");
    }

    #[test]
    fn test_toast_renders_message() {
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|f| {
                let area = f.area();
                render_toast(f, area, "saved", ToastType::Success, &theme);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("✓ saved"));
    }
}
