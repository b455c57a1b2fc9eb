//! Built-in list content for popups.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Position, Rect},
    widgets::{List, ListState},
    Frame,
};
use serde_json::Value;

use super::skeleton::{ContentContext, DataReporter, PopupContent};
use crate::components::dialog::checkbox::{checkbox_rows, row_at};
use crate::components::dialog::{CheckboxItem, Selection};
use crate::ui::styled;

/// A checkbox list that reports its selection on every toggle. The id of the
/// toggled item is passed along as the single extra parameter.
#[derive(Debug)]
pub struct ListContent {
    items: Vec<CheckboxItem>,
    selection: Selection,
    cursor: usize,
    max_rows: usize,
    state: ListState,
    rows_area: Option<Rect>,
}

impl ListContent {
    pub fn new(items: Vec<CheckboxItem>, selection: Selection) -> Self {
        let selection = selection.retain_known(items.iter().map(|item| item.value.as_str()));
        Self {
            items,
            selection,
            cursor: 0,
            max_rows: 5,
            state: ListState::default(),
            rows_area: None,
        }
    }

    pub fn single(items: Vec<CheckboxItem>, value: Option<&str>) -> Self {
        Self::new(items, Selection::Single(value.map(str::to_string)))
    }

    pub fn multi(items: Vec<CheckboxItem>, values: &[&str]) -> Self {
        Self::new(
            items,
            Selection::Multi(values.iter().map(|v| v.to_string()).collect()),
        )
    }

    /// Rows shown before the list scrolls
    pub fn max_rows(mut self, rows: usize) -> Self {
        self.max_rows = rows.max(1);
        self
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn toggle(&mut self, index: usize, reporter: &mut DataReporter<Selection>) -> bool {
        let Some(item) = self.items.get(index) else {
            return false;
        };
        if item.disabled {
            return false;
        }
        let id = item.value.clone();
        if self.selection.flip(&id) {
            reporter.report(self.selection.clone(), vec![Value::from(id)]);
        }
        true
    }
}

impl PopupContent for ListContent {
    type Data = Selection;

    fn height_hint(&self, _width: u16) -> u16 {
        self.items.len().min(self.max_rows) as u16
    }

    fn mount(&mut self, reporter: &mut DataReporter<Selection>) {
        reporter.report_data(self.selection.clone());
    }

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &ContentContext) {
        let body = styled::list(ctx.theme);
        self.rows_area = Some(body.inner(area));

        let mut list = List::new(checkbox_rows(
            &self.items,
            &self.selection,
            ctx.theme,
            !ctx.switch_value,
        ))
        .block(body);
        if ctx.switch_value {
            list = list.highlight_style(styled::list_highlight(ctx.theme));
        }
        self.state.select(Some(self.cursor));
        f.render_stateful_widget(list, area, &mut self.state);
    }

    fn handle_key(
        &mut self,
        key: KeyEvent,
        ctx: &ContentContext,
        reporter: &mut DataReporter<Selection>,
    ) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.items.len() {
                    self.cursor += 1;
                }
                true
            }
            KeyCode::Char(' ') => {
                if ctx.switch_value {
                    self.toggle(self.cursor, reporter);
                }
                true
            }
            _ => false,
        }
    }

    fn handle_click(
        &mut self,
        position: Position,
        ctx: &ContentContext,
        reporter: &mut DataReporter<Selection>,
    ) -> bool {
        let Some(row) = self
            .rows_area
            .and_then(|area| row_at(area, self.state.offset(), position, self.items.len()))
        else {
            return false;
        };
        self.cursor = row;
        ctx.switch_value && self.toggle(row, reporter)
    }
}
