pub mod columns;
pub mod state;
#[allow(clippy::module_inception)]
pub mod variable_table;

pub use columns::{COLUMNS, Column, ColumnDef, SortDirection, SortState};
pub use state::VariableTableState;
pub use variable_table::{TableView, UNAVAILABLE_TEXT, VariableTable, row_key};
