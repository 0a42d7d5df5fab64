pub mod components;
pub mod runtime;
pub mod snapshot;
pub mod theme;
