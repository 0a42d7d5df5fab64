//! UI components: the variable table and its hint bar.

pub mod hint_bar;
pub mod variable_table;

pub use hint_bar::HintBar;
pub use variable_table::{VariableTable, VariableTableState};
