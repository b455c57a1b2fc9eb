//! Checkbox selection dialog.
//!
//! Renders a title, an optional subtitle, a list of [`CheckboxItem`]s that
//! scrolls past `max_item_num` rows, and a cancel / confirm footer. The dialog
//! owns its [`Selection`]; `confirm` always reports that internal value, not
//! the one it was built with.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::footer::{DialogFooter, FooterButton};
use super::selection::{Selection, SelectionMode};
use crate::i18n::{I18n, Locale};
use crate::ui::{
    styled,
    theme::Theme,
    utils::{centered_rect, truncate_text, wrap_text},
    widgets::checkbox_glyph,
};

/// A selectable entry: an identifier plus optional display overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxItem {
    pub value: String,
    pub title: Option<String>,
    /// Glyph color while checked; the theme's `checked` color otherwise
    pub checked_color: Option<Color>,
    pub disabled: bool,
}

impl CheckboxItem {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            title: None,
            checked_color: None,
            disabled: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn checked_color(mut self, color: Color) -> Self {
        self.checked_color = Some(color);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The title, or the identifier when no title is set
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.value)
    }
}

impl From<&str> for CheckboxItem {
    fn from(value: &str) -> Self {
        CheckboxItem::new(value)
    }
}

/// One list row per item; `muted` greys out every row
pub(crate) fn checkbox_rows<'a>(
    items: &'a [CheckboxItem],
    selection: &Selection,
    theme: &Theme,
    muted: bool,
) -> Vec<ListItem<'a>> {
    let mode = selection.mode();
    items
        .iter()
        .map(|item| {
            let checked = selection.is_selected(&item.value);
            let (glyph_style, title_style) = if muted || item.disabled {
                let style = Style::default().fg(theme.muted());
                (style, style)
            } else if checked {
                (
                    Style::default().fg(item.checked_color.unwrap_or(theme.checked())),
                    styled::checkbox_item(theme, true),
                )
            } else {
                (
                    Style::default().fg(theme.unchecked()),
                    styled::checkbox_item(theme, false),
                )
            };
            ListItem::new(Line::from(vec![
                Span::styled(checkbox_glyph(mode, checked), glyph_style),
                Span::raw(" "),
                Span::styled(item.display_title(), title_style),
            ]))
        })
        .collect()
}

/// Maps a click inside a rendered list to the item index under it
pub(crate) fn row_at(area: Rect, offset: usize, position: Position, len: usize) -> Option<usize> {
    if !area.contains(position) {
        return None;
    }
    let row = offset + usize::from(position.y - area.y);
    (row < len).then_some(row)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    List,
    Cancel,
    Confirm,
}

type SelectionCallback = Box<dyn FnMut(&Selection)>;

pub struct CheckboxDialog {
    title: String,
    subtitle: Option<String>,
    items: Vec<CheckboxItem>,
    selection: Selection,
    mode: SelectionMode,
    max_item_num: usize,
    title_lines: usize,
    cancel_text: Option<String>,
    confirm_text: Option<String>,
    footer: DialogFooter,
    theme: Theme,
    locale: Locale,
    cursor: usize,
    list_state: ListState,
    list_area: Option<Rect>,
    focus: Focus,
    on_change: Option<SelectionCallback>,
    on_confirm: Option<SelectionCallback>,
    on_cancel: Option<Box<dyn FnMut()>>,
}

impl std::fmt::Debug for CheckboxDialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckboxDialog")
            .field("title", &self.title)
            .field("mode", &self.mode)
            .field("selection", &self.selection)
            .field("items", &self.items.len())
            .finish_non_exhaustive()
    }
}

impl CheckboxDialog {
    /// Builds a dialog whose mode follows the shape of `selection`.
    /// Identifiers that are not among `items` are dropped with a warning.
    pub fn new(title: impl Into<String>, items: Vec<CheckboxItem>, selection: Selection) -> Self {
        let mode = selection.mode();
        let selection = selection.retain_known(items.iter().map(|item| item.value.as_str()));
        let mut dialog = Self {
            title: title.into(),
            subtitle: None,
            items,
            selection,
            mode,
            max_item_num: 5,
            title_lines: 2,
            cancel_text: None,
            confirm_text: None,
            footer: DialogFooter::new("", ""),
            theme: Theme::default(),
            locale: Locale::default(),
            cursor: 0,
            list_state: ListState::default(),
            list_area: None,
            focus: Focus::List,
            on_change: None,
            on_confirm: None,
            on_cancel: None,
        };
        dialog.sync_footer_text();
        dialog
    }

    /// Radio semantics with an optional initial value
    pub fn single(title: impl Into<String>, items: Vec<CheckboxItem>, value: Option<&str>) -> Self {
        Self::new(title, items, Selection::Single(value.map(str::to_string)))
    }

    /// Checkbox semantics with the initially checked identifiers
    pub fn multi(title: impl Into<String>, items: Vec<CheckboxItem>, values: &[&str]) -> Self {
        let values = values.iter().map(|v| v.to_string()).collect();
        Self::new(title, items, Selection::Multi(values))
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Rows shown before the list scrolls
    pub fn max_item_num(mut self, max: usize) -> Self {
        self.max_item_num = max.max(1);
        self
    }

    /// Lines the title may wrap onto before it is cut off
    pub fn title_lines(mut self, lines: usize) -> Self {
        self.title_lines = lines.max(1);
        self
    }

    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self.sync_footer_text();
        self
    }

    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self.sync_footer_text();
        self
    }

    pub fn cancel_label(mut self, label: impl Into<String>) -> Self {
        self.footer.cancel_label = label.into();
        self
    }

    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.footer.confirm_label = label.into();
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self.sync_footer_text();
        self
    }

    pub fn on_change(mut self, f: impl FnMut(&Selection) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn on_confirm(mut self, f: impl FnMut(&Selection) + 'static) -> Self {
        self.on_confirm = Some(Box::new(f));
        self
    }

    pub fn on_cancel(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_cancel = Some(Box::new(f));
        self
    }

    fn sync_footer_text(&mut self) {
        let i18n = I18n::new(self.locale);
        self.footer.cancel_text = self
            .cancel_text
            .clone()
            .unwrap_or_else(|| i18n.get("cancel").to_string());
        self.footer.confirm_text = self
            .confirm_text
            .clone()
            .unwrap_or_else(|| i18n.get("confirm").to_string());
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn value(&self) -> &Selection {
        &self.selection
    }

    pub fn items(&self) -> &[CheckboxItem] {
        &self.items
    }

    pub fn footer(&self) -> &DialogFooter {
        &self.footer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_scrollable(&self) -> bool {
        self.items.len() > self.max_item_num
    }

    pub fn visible_rows(&self) -> usize {
        self.items.len().min(self.max_item_num)
    }

    /// Checks or unchecks `id`, notifying `on_change` when the selection
    /// changed. Unknown and disabled identifiers are ignored.
    pub fn toggle(&mut self, id: &str, checked: bool) -> bool {
        let Some(item) = self.items.iter().find(|item| item.value == id) else {
            log::warn!("Checkbox dialog has no item {id:?}; ignoring toggle");
            return false;
        };
        if item.disabled {
            log::debug!("Item {id:?} is disabled");
            return false;
        }

        let changed = self.selection.toggle(id, checked);
        if changed {
            if let Some(on_change) = self.on_change.as_mut() {
                on_change(&self.selection);
            }
        }
        changed
    }

    /// Emits the current internal selection
    pub fn confirm(&mut self) {
        if let Some(on_confirm) = self.on_confirm.as_mut() {
            on_confirm(&self.selection);
        }
    }

    pub fn cancel(&mut self) {
        if let Some(on_cancel) = self.on_cancel.as_mut() {
            on_cancel();
        }
    }

    /// Resynchronizes with an externally supplied value. A value of the wrong
    /// shape is coerced to this dialog's mode with a warning.
    pub fn set_value(&mut self, value: Selection) {
        let value = value
            .coerce(self.mode)
            .retain_known(self.items.iter().map(|item| item.value.as_str()));
        if value != self.selection {
            log::debug!("Checkbox dialog value resynced to {value:?}");
            self.selection = value;
        }
    }

    fn toggle_at_cursor(&mut self) {
        if let Some(id) = self.items.get(self.cursor).map(|item| item.value.clone()) {
            let checked = !self.selection.is_selected(&id);
            self.toggle(&id, checked);
        }
    }

    fn next_focus(&mut self, forward: bool) {
        const ORDER: [Focus; 3] = [Focus::List, Focus::Cancel, Focus::Confirm];
        let current = ORDER.iter().position(|&f| f == self.focus).unwrap_or(0);
        let next = if forward { current + 1 } else { current + ORDER.len() - 1 };
        self.focus = ORDER[next % ORDER.len()];
    }

    /// Returns `true` if the key was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match key.code {
            KeyCode::Tab => self.next_focus(true),
            KeyCode::BackTab => self.next_focus(false),
            KeyCode::Esc => self.cancel(),
            KeyCode::Up | KeyCode::Char('k') if self.focus == Focus::List => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') if self.focus == Focus::List => {
                if self.cursor + 1 < self.items.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Char(' ') if self.focus == Focus::List => self.toggle_at_cursor(),
            KeyCode::Enter => match self.focus {
                Focus::List => self.toggle_at_cursor(),
                Focus::Cancel => self.cancel(),
                Focus::Confirm => self.confirm(),
            },
            _ => return false,
        }
        true
    }

    /// Hit-tests a left click against the last render
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        let position = Position::new(mouse.column, mouse.row);

        if let Some(button) = self.footer.hit(position) {
            match button {
                FooterButton::Cancel => self.cancel(),
                FooterButton::Confirm => self.confirm(),
            }
            return true;
        }

        let hit = self
            .list_area
            .and_then(|area| row_at(area, self.list_state.offset(), position, self.items.len()));
        match hit {
            Some(row) => {
                self.focus = Focus::List;
                self.cursor = row;
                self.toggle_at_cursor();
                true
            }
            None => false,
        }
    }

    fn header_lines(&self, width: usize) -> (Vec<String>, Vec<String>) {
        let mut title = wrap_text(&self.title, width);
        if title.len() > self.title_lines {
            let rest = title.split_off(self.title_lines - 1).join(" ");
            title.push(truncate_text(&rest, width));
        }
        let subtitle = self
            .subtitle
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| wrap_text(s, width))
            .unwrap_or_default();
        (title, subtitle)
    }

    /// Total rows the dialog needs at `width` columns
    pub fn height(&self, width: u16) -> u16 {
        let (title, subtitle) = self.header_lines(usize::from(width.saturating_sub(4)));
        let header = (title.len() + subtitle.len()) as u16 + 1;
        header + self.visible_rows() as u16 + DialogFooter::HEIGHT + 2
    }

    /// Draws the dialog centered in `area`
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let width = self.theme.dialog.width.min(area.width);
        let rect = centered_rect(area, width, self.height(width));

        f.render_widget(Clear, rect);
        let container = styled::container(&self.theme);
        let inner = container.inner(rect);
        f.render_widget(container, rect);

        let (title, subtitle) = self.header_lines(usize::from(inner.width.saturating_sub(2)));
        let header_height = (title.len() + subtitle.len()) as u16 + 1;
        let [header_area, list_area, footer_area] = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(DialogFooter::HEIGHT),
        ])
        .areas(inner);

        let title_style = styled::title(&self.theme);
        let subtitle_style = styled::subtitle(&self.theme);
        let lines: Vec<Line> = title
            .into_iter()
            .map(|line| Line::styled(line, title_style).centered())
            .chain(
                subtitle
                    .into_iter()
                    .map(|line| Line::styled(line, subtitle_style).centered()),
            )
            .collect();
        f.render_widget(
            Paragraph::new(lines).block(styled::header(&self.theme)),
            header_area,
        );

        let body = styled::list(&self.theme);
        let rows_area = body.inner(list_area);
        let highlight = if self.focus == Focus::List {
            styled::list_highlight(&self.theme)
        } else {
            Style::default()
        };
        let list = List::new(checkbox_rows(&self.items, &self.selection, &self.theme, false))
            .block(body)
            .highlight_style(highlight);
        self.list_state.select(Some(self.cursor));
        f.render_stateful_widget(list, list_area, &mut self.list_state);
        self.list_area = Some(rows_area);

        let focused = match self.focus {
            Focus::List => None,
            Focus::Cancel => Some(FooterButton::Cancel),
            Focus::Confirm => Some(FooterButton::Confirm),
        };
        self.footer.render(f, footer_area, &self.theme, focused);
    }
}
