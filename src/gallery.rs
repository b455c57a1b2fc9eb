//! Gallery rendering.

use panel_kit::ui::{render_toast, styled};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{App, Overlay, Scene};

/// Draws the whole gallery: top bar, scene menu, status line, then the open
/// overlay and the toast on top.
pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    f.buffer_mut()
        .set_style(area, Style::default().bg(app.theme.background()));

    let [bar_area, menu_area, status_area] = Layout::vertical([
        Constraint::Length(app.top_bar.height()),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    app.top_bar.render(f, bar_area, &app.theme);
    draw_menu(f, app, menu_area);

    let help = Line::from(vec![
        Span::styled(app.status_message.clone(), Style::default().fg(app.theme.foreground())),
        Span::styled(
            "  ↑↓ select · Enter open · m motion · l locale · b/e top bar · q quit",
            Style::default().fg(app.theme.muted()),
        ),
    ]);
    f.render_widget(Paragraph::new(help), status_area);

    match app.overlay.as_mut() {
        Some(Overlay::Checkbox(dialog)) => dialog.render(f, area),
        Some(Overlay::List(popup)) => popup.render(f, area),
        Some(Overlay::Notice(popup)) => popup.render(f, area),
        None => {}
    }

    if let Some(toast) = &app.toast {
        render_toast(f, area, &toast.message, toast.kind, &app.theme);
    }
}

fn draw_menu(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = Scene::ALL
        .iter()
        .map(|scene| ListItem::new(scene.title()))
        .collect();

    let title = format!(
        " panel-kit gallery · motion {:?} · {} ",
        app.motion_type, app.locale
    );
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(app.theme.primary())),
        )
        .style(Style::default().fg(app.theme.foreground()))
        .highlight_style(styled::list_highlight(&app.theme))
        .highlight_symbol("› ");

    let mut state = ListState::default();
    state.select(Some(app.selected_index));
    f.render_stateful_widget(list, area, &mut state);
}
