use envtable_types::EnvironmentVariable;
use tracing::debug;

use super::columns::{Column, SortState};
use super::variable_table::{row_key, visible_sorted_rows};

/// Interactive state of the variable table: active sort and the selected row key.
///
/// Selection is tracked by row key rather than index so it follows the row
/// when the sort changes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VariableTableState {
    sort: Option<SortState>,
    selected_key: Option<String>,
}

impl VariableTableState {
    pub fn with_sort(sort: Option<SortState>) -> Self {
        Self { sort, selected_key: None }
    }

    // Selectors
    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.selected_key.as_deref()
    }

    // Reducers
    pub fn toggle_sort(&mut self, column: Column) {
        self.sort = SortState::toggled(self.sort, column);
        debug!(sort = ?self.sort, "sort changed");
    }

    pub fn reset_sort(&mut self) {
        self.sort = None;
    }

    pub fn select_next(&mut self, variables: &[EnvironmentVariable]) {
        self.move_selection(variables, |current, len| current.map_or(0, |index| (index + 1).min(len - 1)));
    }

    pub fn select_previous(&mut self, variables: &[EnvironmentVariable]) {
        self.move_selection(variables, |current, _| current.map_or(0, |index| index.saturating_sub(1)));
    }

    pub fn select_first(&mut self, variables: &[EnvironmentVariable]) {
        self.move_selection(variables, |_, _| 0);
    }

    pub fn select_last(&mut self, variables: &[EnvironmentVariable]) {
        self.move_selection(variables, |_, len| len - 1);
    }

    /// Applies `step(current_index, row_count)` over the visible, sorted rows.
    /// `current_index` is `None` when nothing valid is selected; `row_count` is never zero.
    fn move_selection(&mut self, variables: &[EnvironmentVariable], step: impl Fn(Option<usize>, usize) -> usize) {
        let rows = visible_sorted_rows(variables, self.sort);
        if rows.is_empty() {
            self.selected_key = None;
            return;
        }
        let current = self
            .selected_key
            .as_deref()
            .and_then(|key| rows.iter().position(|row| row_key(row) == key));
        let next = step(current, rows.len()).min(rows.len() - 1);
        self.selected_key = Some(row_key(rows[next]).to_string());
    }
}
