use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Dracula palette (https://draculatheme.com/contribute)
pub const BG: Color = Color::Rgb(0x28, 0x2A, 0x36); // #282a36
pub const CURRENT_LINE: Color = Color::Rgb(0x44, 0x47, 0x5A); // #44475a
pub const FOREGROUND: Color = Color::Rgb(0xF8, 0xF8, 0xF2); // #f8f8f2
pub const COMMENT: Color = Color::Rgb(0x62, 0x72, 0xA4); // #6272a4

pub const CYAN: Color = Color::Rgb(0x8B, 0xE9, 0xFD); // #8be9fd
pub const PURPLE: Color = Color::Rgb(0xBD, 0x93, 0xF9); // #bd93f9

// Zebra stripes sit slightly below the panel background.
pub const ROW_EVEN: Color = Color::Rgb(0x22, 0x24, 0x2E);
pub const ROW_ODD: Color = Color::Rgb(0x2C, 0x2E, 0x3B);

fn roles(border: Color, text: Color) -> ThemeRoles {
    ThemeRoles {
        surface: BG,
        surface_muted: CURRENT_LINE,
        border,

        text,
        text_secondary: COMMENT,
        text_muted: COMMENT,

        accent_secondary: CYAN,

        selection_bg: CURRENT_LINE,
        selection_fg: FOREGROUND,
        focus: CYAN,

        table_row_even: ROW_EVEN,
        table_row_odd: ROW_ODD,
    }
}

/// Default Dracula theme tuned for dark truecolor terminals.
#[derive(Debug, Clone)]
pub struct DraculaTheme {
    roles: ThemeRoles,
}

impl DraculaTheme {
    pub fn new() -> Self {
        Self {
            roles: roles(CURRENT_LINE, FOREGROUND),
        }
    }
}

impl Theme for DraculaTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// High-contrast Dracula: purple borders around the same surfaces.
#[derive(Debug, Clone)]
pub struct DraculaThemeHighContrast {
    roles: ThemeRoles,
}

impl DraculaThemeHighContrast {
    pub fn new() -> Self {
        Self {
            roles: roles(PURPLE, Color::White),
        }
    }
}

impl Theme for DraculaThemeHighContrast {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
