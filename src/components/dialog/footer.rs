//! Cancel / confirm footer shared by dialogs and the popup skeleton.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::ui::{styled, theme::Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FooterButton {
    Cancel,
    Confirm,
}

/// Which footer buttons are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterButtons {
    pub cancel: bool,
    pub confirm: bool,
}

impl FooterButtons {
    pub const BOTH: FooterButtons = FooterButtons {
        cancel: true,
        confirm: true,
    };
    pub const NONE: FooterButtons = FooterButtons {
        cancel: false,
        confirm: false,
    };

    pub fn contains(self, button: FooterButton) -> bool {
        match button {
            FooterButton::Cancel => self.cancel,
            FooterButton::Confirm => self.confirm,
        }
    }

    /// Buttons in left-to-right order
    pub fn iter(self) -> impl Iterator<Item = FooterButton> {
        [
            (self.cancel, FooterButton::Cancel),
            (self.confirm, FooterButton::Confirm),
        ]
        .into_iter()
        .filter_map(|(shown, button)| shown.then_some(button))
    }
}

#[derive(Debug, Clone)]
pub struct DialogFooter {
    pub cancel_text: String,
    pub confirm_text: String,
    pub cancel_label: String,
    pub confirm_label: String,
    pub buttons: FooterButtons,
    cancel_area: Option<Rect>,
    confirm_area: Option<Rect>,
}

impl DialogFooter {
    /// Rows taken by the footer: one hairline plus the button row
    pub const HEIGHT: u16 = 2;

    pub fn new(cancel_text: impl Into<String>, confirm_text: impl Into<String>) -> Self {
        Self {
            cancel_text: cancel_text.into(),
            confirm_text: confirm_text.into(),
            cancel_label: "Dialog.Cancel".to_string(),
            confirm_label: "Dialog.Confirm".to_string(),
            buttons: FooterButtons::BOTH,
            cancel_area: None,
            confirm_area: None,
        }
    }

    pub fn label(&self, button: FooterButton) -> &str {
        match button {
            FooterButton::Cancel => &self.cancel_label,
            FooterButton::Confirm => &self.confirm_label,
        }
    }

    /// Area the button occupied in the last render
    pub fn area_of(&self, button: FooterButton) -> Option<Rect> {
        match button {
            FooterButton::Cancel => self.cancel_area,
            FooterButton::Confirm => self.confirm_area,
        }
    }

    pub fn hit(&self, position: Position) -> Option<FooterButton> {
        self.buttons
            .iter()
            .find(|&button| self.area_of(button).is_some_and(|area| area.contains(position)))
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme, focused: Option<FooterButton>) {
        self.cancel_area = None;
        self.confirm_area = None;

        let block = styled::footer(theme);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let shown: Vec<FooterButton> = self.buttons.iter().collect();
        if shown.is_empty() {
            return;
        }

        let cells = Layout::horizontal(vec![Constraint::Fill(1); shown.len()]).split(inner);
        let both = shown.len() == 2;

        for (&button, &cell) in shown.iter().zip(cells.iter()) {
            let (text, style, bordered) = match button {
                FooterButton::Cancel => (
                    self.cancel_text.as_str(),
                    styled::cancel_text(theme, !both),
                    both,
                ),
                FooterButton::Confirm => (self.confirm_text.as_str(), styled::confirm_text(theme), false),
            };
            let style = if focused == Some(button) {
                styled::focused(style)
            } else {
                style
            };

            let widget = Paragraph::new(Span::styled(text.to_string(), style))
                .alignment(Alignment::Center)
                .block(styled::button(theme, bordered));
            f.render_widget(widget, cell);

            match button {
                FooterButton::Cancel => self.cancel_area = Some(cell),
                FooterButton::Confirm => self.confirm_area = Some(cell),
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(footer: &mut DialogFooter) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(30, 2)).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|f| {
                let area = f.area();
                footer.render(f, area, &theme, None);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect()
    }

    #[test]
    fn test_both_buttons_split_the_row() {
        let mut footer = DialogFooter::new("Cancel", "Confirm");
        let rows = render(&mut footer);
        assert!(rows[1].contains("Cancel"));
        assert!(rows[1].contains("Confirm"));
        assert!(rows[1].contains('│'));

        let cancel = footer.area_of(FooterButton::Cancel).unwrap();
        let confirm = footer.area_of(FooterButton::Confirm).unwrap();
        assert!(cancel.x < confirm.x);
        assert_eq!(footer.hit(Position::new(cancel.x, cancel.y)), Some(FooterButton::Cancel));
        assert_eq!(footer.hit(Position::new(confirm.x + 1, confirm.y)), Some(FooterButton::Confirm));
        assert_eq!(footer.hit(Position::new(0, 0)), None);
    }

    #[test]
    fn test_single_button_takes_full_width() {
        let mut footer = DialogFooter::new("Cancel", "Confirm");
        footer.buttons = FooterButtons {
            cancel: false,
            confirm: true,
        };
        let rows = render(&mut footer);
        assert!(!rows[1].contains("Cancel"));
        assert!(rows[1].contains("Confirm"));
        assert_eq!(footer.area_of(FooterButton::Confirm).unwrap().width, 30);
        assert_eq!(footer.area_of(FooterButton::Cancel), None);
    }

    #[test]
    fn test_no_buttons_renders_only_the_rule() {
        let mut footer = DialogFooter::new("Cancel", "Confirm");
        footer.buttons = FooterButtons::NONE;
        let rows = render(&mut footer);
        assert_eq!(rows[1].trim(), "");
        assert_eq!(footer.hit(Position::new(5, 1)), None);
    }

    #[test]
    fn test_default_accessibility_labels() {
        let footer = DialogFooter::new("Cancel", "Confirm");
        assert_eq!(footer.label(FooterButton::Cancel), "Dialog.Cancel");
        assert_eq!(footer.label(FooterButton::Confirm), "Dialog.Confirm");
    }

    #[test]
    fn test_button_iteration_order() {
        let order: Vec<_> = FooterButtons::BOTH.iter().collect();
        assert_eq!(order, vec![FooterButton::Cancel, FooterButton::Confirm]);
        assert_eq!(FooterButtons::NONE.iter().count(), 0);
    }
}
