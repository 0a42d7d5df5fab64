//! Shared types for the envtable workspace.
//!
//! This crate owns the data model rendered by the TUI (`EnvironmentVariable`),
//! the reserved variable name that is never displayed, the loaders that turn
//! JSON/YAML documents into variable lists, and the small preferences store
//! used for theme selection.

pub mod document;
pub mod preferences;
pub mod variable;

pub use document::{DocumentError, DocumentFormat, ModelConfig, VariablesDocument, load_variables, parse_variables};
pub use preferences::{PREFERENCES_PATH_ENV, PreferencesError, UserPreferences};
pub use variable::{EnvironmentVariable, STANDARD_TRANSFORMER_CONFIG_ENV_NAME, visible_variables};
