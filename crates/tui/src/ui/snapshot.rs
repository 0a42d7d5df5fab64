//! One-shot, non-interactive rendering of the variable table to plain text.
use envtable_types::{EnvironmentVariable, visible_variables};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use unicode_width::UnicodeWidthStr;

use crate::ui::components::VariableTable;
use crate::ui::runtime::ViewerOptions;
use crate::ui::theme;

/// Renders the table once into an off-screen buffer `width` columns wide and
/// returns its text, one line per row, with trailing blanks trimmed.
///
/// `None` renders like an empty list. Styling is dropped.
pub fn render_snapshot(variables: Option<&[EnvironmentVariable]>, options: &ViewerOptions, width: u16) -> String {
    let variables = variables.unwrap_or_default();
    let loaded = theme::load(options.theme.as_deref());
    let table = VariableTable::new(variables, &*loaded.theme).sort(options.sort);

    // Header plus one line per visible row; the placeholder needs one line.
    let height = if variables.is_empty() {
        1
    } else {
        1 + visible_variables(variables).count()
    };
    let area = Rect::new(0, 0, width.max(1), u16::try_from(height).unwrap_or(u16::MAX));
    let mut buffer = Buffer::empty(area);
    table.render(area, &mut buffer);
    buffer_to_text(&buffer)
}

fn buffer_to_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut lines = Vec::with_capacity(area.height as usize);
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        let mut x = area.left();
        while x < area.right() {
            let symbol = buffer[(x, y)].symbol();
            line.push_str(symbol);
            // Wide glyphs occupy the following cells as well.
            x += symbol.width().max(1) as u16;
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use envtable_types::STANDARD_TRANSFORMER_CONFIG_ENV_NAME;

    use super::*;
    use crate::ui::components::variable_table::{Column, SortState};

    #[test]
    fn empty_list_snapshot_is_placeholder() {
        let options = ViewerOptions::default();
        assert_eq!(render_snapshot(Some(&[]), &options, 40), "Not available");
        assert_eq!(render_snapshot(None, &options, 40), "Not available");
    }

    #[test]
    fn snapshot_lists_sorted_visible_rows() {
        let variables = vec![
            EnvironmentVariable::new("A", "1"),
            EnvironmentVariable::new(STANDARD_TRANSFORMER_CONFIG_ENV_NAME, "{}"),
            EnvironmentVariable::new("B", "2"),
        ];
        let options = ViewerOptions {
            sort: Some(SortState::descending(Column::Name)),
            ..ViewerOptions::default()
        };

        let text = render_snapshot(Some(&variables), &options, 30);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Name ▼"));
        assert!(lines[1].starts_with('B') && lines[1].ends_with('2'));
        assert!(lines[2].starts_with('A') && lines[2].ends_with('1'));
    }

    #[test]
    fn reserved_only_snapshot_is_header_only() {
        let variables = vec![EnvironmentVariable::new(STANDARD_TRANSFORMER_CONFIG_ENV_NAME, "x")];
        let text = render_snapshot(Some(&variables), &ViewerOptions::default(), 30);
        assert!(text.starts_with("Name"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn wide_glyphs_are_not_padded() {
        let variables = vec![EnvironmentVariable::new("GREETING", "日本")];
        let text = render_snapshot(Some(&variables), &ViewerOptions::default(), 30);
        assert!(text.lines().nth(1).is_some_and(|line| line.ends_with("日本")));
    }
}
