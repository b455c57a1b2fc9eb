//! Widgets built on top of the `ui` primitives.

pub mod dialog;
pub mod modal;
pub mod popup;
pub mod top_bar;

use ratatui::{layout::Rect, Frame};
use std::fmt;

use crate::ui::theme::Theme;

/// Draw callback of a caller-supplied element
pub type RenderFn = Box<dyn Fn(&mut Frame, Rect, &Theme)>;

/// A caller-drawn element occupying a fixed number of rows
pub struct Element {
    pub height: u16,
    render: RenderFn,
}

impl Element {
    pub fn new(height: u16, render: impl Fn(&mut Frame, Rect, &Theme) + 'static) -> Self {
        Self {
            height,
            render: Box::new(render),
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        (self.render)(f, area, theme);
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
