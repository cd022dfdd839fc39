use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::color::Rgb;
use crate::decorate::{decorate_all, DecoratedGroup, DecoratedItem};
use crate::items::ListGroup;
use crate::ready::ReadyHooks;

/// Which panel is focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    List,
    Swatches,
}

/// A flattened row in the list view, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRow {
    /// Blank line above a spaced item or between groups.
    Spacer,
    Item {
        text: String,
        color: Rgb,
        group: usize,
        index_in_group: usize,
    },
}

pub struct App {
    pub groups: Vec<ListGroup>,
    pub decorated: Vec<DecoratedGroup>,
    pub source_name: String,
    pub start: Rgb,
    pub end: Rgb,
    pub should_quit: bool,

    // List view state.
    pub rows: Vec<ListRow>,
    pub selected_row: usize,

    // Focus.
    pub focus: FocusPanel,

    // Startup chrome stays dimmed until the ready hooks run.
    pub startup: bool,
    pub ready: ReadyHooks<App>,
}

impl App {
    pub fn new(groups: Vec<ListGroup>, source_name: String, start: Rgb, end: Rgb) -> Self {
        let mut app = Self {
            groups,
            decorated: Vec::new(),
            source_name,
            start,
            end,
            should_quit: false,
            rows: Vec::new(),
            selected_row: 0,
            focus: FocusPanel::List,
            startup: true,
            ready: ReadyHooks::new(),
        };
        app.redecorate();
        app
    }

    /// Re-run the gradient over the current groups and rebuild the rows.
    pub fn redecorate(&mut self) {
        self.decorated = decorate_all(&self.groups, self.start, self.end);
        self.rebuild_rows();
    }

    /// Replace the input groups, re-sizing each group's gradient.
    pub fn set_groups(&mut self, groups: Vec<ListGroup>) {
        self.groups = groups;
        self.redecorate();
    }

    /// Rebuild the flattened rows from the decorated groups. Spacer rows sit
    /// between groups and above every item except a group's first.
    pub fn rebuild_rows(&mut self) {
        let mut rows = Vec::new();
        for (g, group) in self.decorated.iter().enumerate() {
            if g > 0 {
                rows.push(ListRow::Spacer);
            }
            for (i, item) in group.items.iter().enumerate() {
                if item.spacer_above {
                    rows.push(ListRow::Spacer);
                }
                rows.push(ListRow::Item {
                    text: item.text.clone(),
                    color: item.color,
                    group: g,
                    index_in_group: i,
                });
            }
        }
        self.rows = rows;
        self.clamp_selection();
    }

    /// Register a callback to run on the first ready signal.
    pub fn on_ready<F>(&mut self, hook: F)
    where
        F: FnOnce(&mut App) + 'static,
    {
        self.ready.register(hook);
    }

    /// Fire the ready hooks. Later calls are no-ops.
    pub fn fire_ready(&mut self) {
        if let Some(hooks) = self.ready.take_hooks() {
            for hook in hooks {
                hook(self);
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(-1),
            KeyCode::Char('G') => self.select_last(),
            KeyCode::Char('g') => self.select_first(),
            KeyCode::Char('r') => self.reverse_endpoints(),
            KeyCode::Tab => self.cycle_focus(),
            KeyCode::PageDown => self.move_selection(10),
            KeyCode::PageUp => self.move_selection(-10),
            _ => {}
        }
    }

    /// Swap the gradient's endpoints and re-decorate.
    pub fn reverse_endpoints(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
        self.redecorate();
    }

    /// The decorated item under the cursor, if any.
    pub fn selected_item(&self) -> Option<&DecoratedItem> {
        match self.rows.get(self.selected_row)? {
            ListRow::Item {
                group,
                index_in_group,
                ..
            } => self.decorated.get(*group)?.items.get(*index_in_group),
            ListRow::Spacer => None,
        }
    }

    /// Index of the group under the cursor, if any.
    pub fn selected_group(&self) -> Option<usize> {
        match self.rows.get(self.selected_row) {
            Some(ListRow::Item { group, .. }) => Some(*group),
            _ => None,
        }
    }

    pub fn total_items(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    fn move_selection(&mut self, delta: i32) {
        let item_rows = self.item_row_indices();
        if item_rows.is_empty() {
            return;
        }
        let current = item_rows
            .iter()
            .position(|&r| r == self.selected_row)
            .unwrap_or(0);
        let next = (current as i32 + delta).clamp(0, item_rows.len() as i32 - 1) as usize;
        self.selected_row = item_rows[next];
    }

    fn select_first(&mut self) {
        if let Some(&row) = self.item_row_indices().first() {
            self.selected_row = row;
        }
    }

    fn select_last(&mut self) {
        if let Some(&row) = self.item_row_indices().last() {
            self.selected_row = row;
        }
    }

    fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::List => FocusPanel::Swatches,
            FocusPanel::Swatches => FocusPanel::List,
        };
    }

    /// Indices of the selectable (non-spacer) rows.
    fn item_row_indices(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(i, row)| matches!(row, ListRow::Item { .. }).then_some(i))
            .collect()
    }

    /// Snap the selection onto an item row after the rows change.
    fn clamp_selection(&mut self) {
        let item_rows = self.item_row_indices();
        match item_rows.iter().rev().find(|&&r| r <= self.selected_row) {
            Some(&row) => self.selected_row = row,
            None => self.selected_row = item_rows.first().copied().unwrap_or(0),
        }
    }
}

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[allow(dead_code)]
mod helpers;
