//! Theme styling for the TUI.
//!
//! Provides the Dracula palette for truecolor terminals, an ANSI 256-color
//! fallback, semantic roles, and helper builders for Ratatui styles. Prefer
//! these helpers over hard-coded colors.

use std::env;

use tracing::{debug, warn};

pub mod ansi256;
pub mod catalog;
pub mod dracula;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
pub use catalog::ThemeDefinition;
pub use dracula::{DraculaTheme, DraculaThemeHighContrast};
pub use roles::Theme;

/// Environment variable selecting a theme by id or alias.
pub const THEME_ENV: &str = "ENVTABLE_THEME";
/// Environment variable forcing the color mode (`truecolor` or `ansi256`).
pub const COLOR_MODE_ENV: &str = "ENVTABLE_COLOR_MODE";

/// Theme plus the definition it was built from.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
}

impl LoadedTheme {
    fn from_definition(definition: &'static ThemeDefinition) -> Self {
        Self {
            definition,
            theme: definition.build(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme from the environment, the caller's preference and terminal capabilities.
///
/// ANSI-only terminals always get the fallback palette. Otherwise
/// `ENVTABLE_THEME` wins over `preferred_theme`, which wins over the default.
pub fn load(preferred_theme: Option<&str>) -> LoadedTheme {
    if matches!(detect_color_capability(), ColorCapability::Ansi256) {
        debug!("ANSI-only terminal detected; using fallback palette");
        return LoadedTheme::from_definition(catalog::default_ansi());
    }

    if let Ok(theme_name) = env::var(THEME_ENV) {
        match catalog::resolve(theme_name.trim()) {
            Some(definition) => return LoadedTheme::from_definition(definition),
            None => warn!(theme = %theme_name, "unknown theme in {THEME_ENV}"),
        }
    }

    if let Some(name) = preferred_theme {
        match catalog::resolve(name.trim()) {
            Some(definition) => return LoadedTheme::from_definition(definition),
            None => warn!(theme = %name, "unknown preferred theme"),
        }
    }

    LoadedTheme::from_definition(catalog::default_truecolor())
}

fn detect_color_capability() -> ColorCapability {
    if let Some(mode) = env::var(COLOR_MODE_ENV).ok().and_then(|value| parse_color_mode(value.trim())) {
        return mode;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") || term.contains("direct") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn parse_color_mode(value: &str) -> Option<ColorCapability> {
    match value.to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorCapability::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorCapability::Ansi256),
        _ => None,
    }
}
