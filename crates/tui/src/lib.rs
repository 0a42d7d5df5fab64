//! # Envtable TUI
//!
//! Terminal rendering of environment-variable listings with Ratatui.
//!
//! The core is [`VariableTable`], a read-only widget that shows name/value
//! pairs in a sortable two-column table, hides the reserved transformer
//! config variable, and falls back to a subdued `Not available` line when the
//! list is empty. [`run`] wraps it in an interactive viewer and
//! [`render_snapshot`] renders it once to plain text.

mod ui;

pub use ui::components::variable_table::{
    COLUMNS, Column, ColumnDef, SortDirection, SortState, TableView, UNAVAILABLE_TEXT, VariableTable, VariableTableState, row_key,
};
pub use ui::runtime::{DEFAULT_TITLE, ViewerOptions, run};
pub use ui::snapshot::render_snapshot;
pub use ui::theme::{self, LoadedTheme, Theme};
