//! Styled primitives shared by the dialog and popup widgets.
//!
//! Each function turns the dialog tokens of a [`Theme`] into a ratatui
//! `Block` or `Style`, so every widget draws its container, header, footer and
//! buttons the same way.

use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Padding},
};

use super::theme::Theme;

/// Rounded container every dialog and popup is drawn in
pub fn container(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.dialog_line()))
        .style(Style::default().bg(theme.dialog_bg()))
}

/// Header row with a hairline underneath
pub fn header(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.dialog_line()))
}

/// Footer row with a hairline on top
pub fn footer(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.dialog_line()))
}

pub fn title(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.dialog_title())
        .add_modifier(Modifier::BOLD)
}

pub fn subtitle(theme: &Theme) -> Style {
    Style::default().fg(theme.dialog_subtitle())
}

/// Footer button cell; a bordered button draws a separator on its right edge
pub fn button(theme: &Theme, bordered: bool) -> Block<'static> {
    let borders = if bordered { Borders::RIGHT } else { Borders::NONE };
    Block::default()
        .borders(borders)
        .border_style(Style::default().fg(theme.dialog_line()))
}

/// Cancel label; a lone cancel button is emphasized like a confirm button
pub fn cancel_text(theme: &Theme, single: bool) -> Style {
    let style = Style::default().fg(theme.dialog_cancel());
    if single {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

pub fn confirm_text(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.dialog_confirm())
        .add_modifier(Modifier::BOLD)
}

/// Extra emphasis for the control that currently has keyboard focus
pub fn focused(style: Style) -> Style {
    style.add_modifier(Modifier::REVERSED)
}

/// Row style of a checkbox list item
pub fn checkbox_item(theme: &Theme, checked: bool) -> Style {
    if checked {
        Style::default().fg(theme.dialog_title())
    } else {
        Style::default().fg(theme.dialog_subtitle())
    }
}

/// Style of the cursor row inside a list
pub fn list_highlight(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.highlight_fg())
        .bg(theme.highlight_bg())
        .add_modifier(Modifier::BOLD)
}

/// Body of a checkbox list, inset one column from the container edges
pub fn list(theme: &Theme) -> Block<'static> {
    Block::default()
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(theme.dialog_bg()))
}

/// Back affordance in the title row
pub fn back(theme: &Theme) -> Style {
    Style::default().fg(theme.primary())
}

/// Inline on/off switch in the title row
pub fn switch(theme: &Theme, on: bool) -> Style {
    if on {
        Style::default()
            .fg(theme.highlight_fg())
            .bg(theme.checked())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.foreground()).bg(theme.muted())
    }
}
