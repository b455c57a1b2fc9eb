//! Navigation bar.
//!
//! A [`TopBar`] is a single colored strip holding a content slot (a title with
//! optional subtitle, or a caller-drawn [`Element`]) between action buttons.
//! Actions added before the content sit on the left, actions added after it
//! on the right.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::components::Element;
use crate::ui::{theme::Theme, utils::display_width};

/// Glyph of a built-in named icon
pub fn icon(name: &str) -> Option<&'static str> {
    let glyph = match name {
        "back" => "‹",
        "edit" => "✎",
        "close" => "✕",
        "more" => "⋯",
        "plus" => "+",
        "settings" => "⚙",
        _ => return None,
    };
    Some(glyph)
}

pub struct TopBarAction {
    glyph: String,
    key: Option<char>,
    color: Option<Color>,
    on_press: Option<Box<dyn FnMut()>>,
    area: Option<Rect>,
}

impl std::fmt::Debug for TopBarAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TopBarAction")
            .field("glyph", &self.glyph)
            .field("key", &self.key)
            .field("area", &self.area)
            .finish_non_exhaustive()
    }
}

impl TopBarAction {
    /// An action drawn with the given glyph or text
    pub fn source(glyph: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            key: None,
            color: None,
            on_press: None,
            area: None,
        }
    }

    /// An action drawn with a built-in icon; unknown names render as text
    pub fn named(name: &str) -> Self {
        match icon(name) {
            Some(glyph) => Self::source(glyph),
            None => {
                log::debug!("No icon named {name:?}; drawing the name");
                Self::source(name)
            }
        }
    }

    /// Keyboard shortcut that presses the action
    pub fn key(mut self, key: char) -> Self {
        self.key = Some(key);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn on_press(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_press = Some(Box::new(f));
        self
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Where the action was drawn in the last render
    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    pub fn press(&mut self) {
        if let Some(on_press) = self.on_press.as_mut() {
            on_press();
        }
    }

    fn width(&self) -> u16 {
        u16::try_from(display_width(&self.glyph))
            .unwrap_or(u16::MAX)
            .saturating_add(2)
    }
}

#[derive(Debug)]
pub enum TopBarContent {
    Title {
        title: String,
        subtitle: Option<String>,
    },
    Custom(Element),
}

#[derive(Debug)]
pub struct TopBar {
    background: Color,
    color: Color,
    left: Vec<TopBarAction>,
    right: Vec<TopBarAction>,
    content: Option<TopBarContent>,
}

impl Default for TopBar {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

impl TopBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            background: theme.background(),
            color: theme.foreground(),
            left: Vec::new(),
            right: Vec::new(),
            content: None,
        }
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Default color of titles and action glyphs
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn action(mut self, action: TopBarAction) -> Self {
        if self.content.is_none() {
            self.left.push(action);
        } else {
            self.right.push(action);
        }
        self
    }

    pub fn content(mut self, content: TopBarContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn title(self, title: impl Into<String>, subtitle: Option<String>) -> Self {
        self.content(TopBarContent::Title {
            title: title.into(),
            subtitle,
        })
    }

    pub fn left_actions(&self) -> &[TopBarAction] {
        &self.left
    }

    pub fn right_actions(&self) -> &[TopBarAction] {
        &self.right
    }

    /// Rows the bar occupies
    pub fn height(&self) -> u16 {
        match &self.content {
            Some(TopBarContent::Title {
                subtitle: Some(_), ..
            }) => 2,
            Some(TopBarContent::Custom(element)) => element.height.max(1),
            _ => 1,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let bar = Rect {
            height: self.height().min(area.height),
            ..area
        };
        f.render_widget(Block::default().style(Style::default().bg(self.background)), bar);

        let constraints: Vec<Constraint> = self
            .left
            .iter()
            .map(|a| Constraint::Length(a.width()))
            .chain(std::iter::once(Constraint::Fill(1)))
            .chain(self.right.iter().map(|a| Constraint::Length(a.width())))
            .collect();
        let cells = Layout::horizontal(constraints).split(bar);

        let left_count = self.left.len();
        let content_cell = cells[left_count];
        let style = Style::default().fg(self.color).bg(self.background);

        for (action, &cell) in self
            .left
            .iter_mut()
            .chain(self.right.iter_mut())
            .zip(cells[..left_count].iter().chain(cells[left_count + 1..].iter()))
        {
            let glyph_style = action.color.map_or(style, |c| style.fg(c));
            f.render_widget(
                Paragraph::new(Span::styled(action.glyph.clone(), glyph_style))
                    .alignment(Alignment::Center),
                cell,
            );
            action.area = Some(cell);
        }

        match &self.content {
            Some(TopBarContent::Title { title, subtitle }) => {
                let mut lines = vec![Line::styled(
                    title.clone(),
                    style.add_modifier(Modifier::BOLD),
                )];
                if let Some(subtitle) = subtitle {
                    lines.push(Line::styled(subtitle.clone(), style.add_modifier(Modifier::DIM)));
                }
                f.render_widget(
                    Paragraph::new(lines).alignment(Alignment::Center),
                    content_cell,
                );
            }
            Some(TopBarContent::Custom(element)) => element.draw(f, content_cell, theme),
            None => {}
        }
    }

    /// Presses the action bound to the pressed character
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let KeyCode::Char(c) = key.code else {
            return false;
        };
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match self.actions_mut().find(|a| a.key == Some(c)) {
            Some(action) => {
                action.press();
                true
            }
            None => false,
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        let position = Position::new(mouse.column, mouse.row);
        match self
            .actions_mut()
            .find(|a| a.area.is_some_and(|area| area.contains(position)))
        {
            Some(action) => {
                action.press();
                true
            }
            None => false,
        }
    }

    fn actions_mut(&mut self) -> impl Iterator<Item = &mut TopBarAction> {
        self.left.iter_mut().chain(self.right.iter_mut())
    }
}
