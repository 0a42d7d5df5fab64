//! Single-line strip of key bindings shown under the variable table.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::theme::Theme;

/// Key bindings in display order: (keys, label).
pub const HINTS: &[(&str, &str)] = &[
    ("n", " sort name  "),
    ("v", " sort value  "),
    ("r", " reset  "),
    ("↑/↓", " move  "),
    ("q", " quit"),
];

#[derive(Debug, Clone, Copy)]
pub struct HintBar<'a> {
    theme: &'a dyn Theme,
}

impl<'a> HintBar<'a> {
    pub fn new(theme: &'a dyn Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HintBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled("Hints: ", self.theme.text_muted_style())];
        for (keys, label) in HINTS {
            spans.push(Span::styled(*keys, self.theme.accent_emphasis_style()));
            spans.push(Span::styled(*label, self.theme.text_muted_style()));
        }
        Paragraph::new(Line::from(spans))
            .style(self.theme.text_muted_style())
            .render(area, buf);
    }
}
