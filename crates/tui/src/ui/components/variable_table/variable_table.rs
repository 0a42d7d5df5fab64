//! Read-only table of environment variables.
//!
//! The reserved transformer config variable is never shown. An empty input
//! renders the subdued `Not available` placeholder instead of a table.
//!
//! Emptiness is decided on the input before filtering: an input made only of
//! the reserved variable renders a table with a header and no rows.
use envtable_types::{EnvironmentVariable, visible_variables};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Cell, HighlightSpacing, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use super::columns::{COLUMNS, ColumnDef, SortState, sort_rows};
use crate::ui::theme::{Theme, theme_helpers as th};

/// Placeholder shown when there are no variables.
pub const UNAVAILABLE_TEXT: &str = "Not available";

/// Stable identity of a row.
pub fn row_key(variable: &EnvironmentVariable) -> &str {
    &variable.name
}

/// What the table resolves to for a given input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView<'a> {
    Table { rows: Vec<&'a EnvironmentVariable> },
    Unavailable,
}

/// Visible rows of `variables`, reserved entry removed, in sorted order.
pub fn visible_sorted_rows(variables: &[EnvironmentVariable], sort: Option<SortState>) -> Vec<&EnvironmentVariable> {
    let mut rows: Vec<&EnvironmentVariable> = visible_variables(variables).collect();
    sort_rows(&mut rows, sort);
    rows
}

/// Widget rendering a borrowed variable list.
#[derive(Debug, Clone, Copy)]
pub struct VariableTable<'a> {
    variables: &'a [EnvironmentVariable],
    theme: &'a dyn Theme,
    sort: Option<SortState>,
    selected: Option<&'a str>,
}

impl<'a> VariableTable<'a> {
    pub fn new(variables: &'a [EnvironmentVariable], theme: &'a dyn Theme) -> Self {
        Self {
            variables,
            theme,
            sort: None,
            selected: None,
        }
    }

    /// Treats a missing list as an empty one.
    pub fn from_optional(variables: Option<&'a [EnvironmentVariable]>, theme: &'a dyn Theme) -> Self {
        Self::new(variables.unwrap_or_default(), theme)
    }

    pub fn sort(mut self, sort: Option<SortState>) -> Self {
        self.sort = sort;
        self
    }

    /// Highlights the row whose key equals `key`.
    pub fn selected(mut self, key: Option<&'a str>) -> Self {
        self.selected = key;
        self
    }

    pub fn view(&self) -> TableView<'a> {
        if self.variables.is_empty() {
            return TableView::Unavailable;
        }
        TableView::Table {
            rows: visible_sorted_rows(self.variables, self.sort),
        }
    }

    fn header(&self) -> Row<'static> {
        let cells = COLUMNS.iter().map(|def| Cell::from(self.header_label(def)));
        Row::new(cells).style(th::table_header_row_style(self.theme))
    }

    fn header_label(&self, def: &ColumnDef) -> Line<'static> {
        let label = Span::styled(def.label, th::table_header_style(self.theme));
        match self.sort {
            Some(sort) if sort.column == def.column => Line::from(vec![
                label,
                Span::raw(" "),
                Span::styled(sort.direction.indicator(), self.theme.accent_emphasis_style()),
            ]),
            _ => Line::from(label),
        }
    }

    fn render_table(&self, rows: &[&'a EnvironmentVariable], area: Rect, buf: &mut Buffer) {
        let table_rows = rows.iter().enumerate().map(|(index, variable)| {
            Row::new([
                Cell::from(variable.name.as_str()),
                Cell::from(variable.value.as_str()),
            ])
            .style(th::table_row_style(self.theme, index))
        });
        let widths = COLUMNS.map(|def| Constraint::Percentage(def.width_percent));

        let table = Table::new(table_rows, widths)
            .header(self.header())
            .style(th::panel_style(self.theme))
            .row_highlight_style(th::table_selected_style(self.theme))
            .highlight_symbol("› ")
            .highlight_spacing(HighlightSpacing::WhenSelected);

        let mut state = TableState::default();
        if let Some(key) = self.selected {
            state.select(rows.iter().position(|variable| row_key(variable) == key));
        }
        StatefulWidget::render(table, area, buf, &mut state);
    }

    fn render_unavailable(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(UNAVAILABLE_TEXT, self.theme.text_muted_style())).render(area, buf);
    }
}

impl Widget for &VariableTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.view() {
            TableView::Table { rows } => self.render_table(&rows, area, buf),
            TableView::Unavailable => self.render_unavailable(area, buf),
        }
    }
}

impl Widget for VariableTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}
