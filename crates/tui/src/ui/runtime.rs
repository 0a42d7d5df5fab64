//! Runtime: terminal lifecycle and the input loop for the interactive viewer.
//!
//! The loop is synchronous. Each key press updates `VariableTableState` and
//! the whole screen is redrawn from the borrowed variable list; nothing else
//! is kept between frames.
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use envtable_types::EnvironmentVariable;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use tracing::{debug, info};

use crate::ui::components::variable_table::{Column, SortState};
use crate::ui::components::{HintBar, VariableTable, VariableTableState};
use crate::ui::theme::{self, Theme, theme_helpers as th};

pub const DEFAULT_TITLE: &str = "Environment Variables";

/// Options shared by the interactive viewer and snapshot rendering.
#[derive(Debug, Clone, Default)]
pub struct ViewerOptions {
    /// Preferred theme id or alias.
    pub theme: Option<String>,
    /// Sort applied before the first frame.
    pub sort: Option<SortState>,
    /// Panel title; defaults to [`DEFAULT_TITLE`].
    pub title: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct Viewer<'a> {
    variables: &'a [EnvironmentVariable],
    state: VariableTableState,
    theme: Box<dyn Theme>,
    title: String,
}

impl<'a> Viewer<'a> {
    fn new(variables: &'a [EnvironmentVariable], options: ViewerOptions) -> Self {
        let loaded = theme::load(options.theme.as_deref());
        debug!(theme = loaded.definition.id, label = loaded.definition.label, "theme selected");
        Self {
            variables,
            state: VariableTableState::with_sort(options.sort),
            theme: loaded.theme,
            title: options.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Flow::Quit,
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('n') | KeyCode::Char('1') => self.state.toggle_sort(Column::Name),
            KeyCode::Char('v') | KeyCode::Char('2') => self.state.toggle_sort(Column::Value),
            KeyCode::Char('r') => self.state.reset_sort(),
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next(self.variables),
            KeyCode::Up | KeyCode::Char('k') => self.state.select_previous(self.variables),
            KeyCode::Home | KeyCode::Char('g') => self.state.select_first(self.variables),
            KeyCode::End | KeyCode::Char('G') => self.state.select_last(self.variables),
            _ => {}
        }
        Flow::Continue
    }

    fn draw(&self, frame: &mut Frame) {
        let [body, hints] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        let block = th::block(&*self.theme, Some(self.title.as_str()), true);
        let inner = block.inner(body);
        frame.render_widget(block, body);

        let table = VariableTable::new(self.variables, &*self.theme)
            .sort(self.state.sort())
            .selected(self.state.selected_key());
        frame.render_widget(table, inner);
        frame.render_widget(HintBar::new(&*self.theme), hints);
    }
}

type CrosstermTerminal = Terminal<CrosstermBackend<std::io::Stdout>>;

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<CrosstermTerminal> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut CrosstermTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn event_loop(terminal: &mut CrosstermTerminal, viewer: &mut Viewer<'_>) -> Result<()> {
    loop {
        terminal.draw(|frame| viewer.draw(frame))?;
        // Resize and other events only trigger a redraw.
        if let Event::Key(key) = event::read().context("failed to read terminal event")?
            && viewer.handle_key(key) == Flow::Quit
        {
            return Ok(());
        }
    }
}

/// Runs the interactive viewer until the user quits.
///
/// The terminal is restored even when the loop fails; the loop error takes
/// precedence over a cleanup error.
pub fn run(variables: &[EnvironmentVariable], options: ViewerOptions) -> Result<()> {
    info!(count = variables.len(), "starting variable viewer");
    let mut viewer = Viewer::new(variables, options);
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut viewer);
    let cleanup = cleanup_terminal(&mut terminal);
    result.and(cleanup)
}

#[cfg(test)]
mod tests {
    use envtable_types::STANDARD_TRANSFORMER_CONFIG_ENV_NAME;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::ui::components::variable_table::SortDirection;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn variables() -> Vec<EnvironmentVariable> {
        vec![
            EnvironmentVariable::new("B", "2"),
            EnvironmentVariable::new("A", "1"),
            EnvironmentVariable::new(STANDARD_TRANSFORMER_CONFIG_ENV_NAME, "{}"),
        ]
    }

    #[test]
    fn sort_keys_toggle_columns() {
        let vars = variables();
        let mut viewer = Viewer::new(&vars, ViewerOptions::default());

        assert_eq!(viewer.handle_key(press(KeyCode::Char('n'))), Flow::Continue);
        assert_eq!(viewer.state.sort(), Some(SortState::ascending(Column::Name)));
        viewer.handle_key(press(KeyCode::Char('n')));
        assert_eq!(viewer.state.sort().map(|s| s.direction), Some(SortDirection::Descending));
        viewer.handle_key(press(KeyCode::Char('2')));
        assert_eq!(viewer.state.sort(), Some(SortState::ascending(Column::Value)));
        viewer.handle_key(press(KeyCode::Char('r')));
        assert_eq!(viewer.state.sort(), None);
    }

    #[test]
    fn quit_keys_end_the_loop() {
        let vars = variables();
        let mut viewer = Viewer::new(&vars, ViewerOptions::default());
        assert_eq!(viewer.handle_key(press(KeyCode::Char('q'))), Flow::Quit);
        assert_eq!(viewer.handle_key(press(KeyCode::Esc)), Flow::Quit);
        assert_eq!(
            viewer.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Flow::Quit
        );
    }

    #[test]
    fn navigation_keys_move_selection() {
        let vars = variables();
        let mut viewer = Viewer::new(&vars, ViewerOptions::default());
        viewer.handle_key(press(KeyCode::Down));
        assert_eq!(viewer.state.selected_key(), Some("B"));
        viewer.handle_key(press(KeyCode::Char('j')));
        assert_eq!(viewer.state.selected_key(), Some("A"));
        viewer.handle_key(press(KeyCode::Char('g')));
        assert_eq!(viewer.state.selected_key(), Some("B"));
    }

    #[test]
    fn end_key_selects_last_row_from_fresh_state() {
        let vars = variables();
        let mut viewer = Viewer::new(&vars, ViewerOptions::default());
        viewer.handle_key(press(KeyCode::End));
        assert_eq!(viewer.state.selected_key(), Some("A"));
    }

    #[test]
    fn draw_frames_table_with_title_and_hints() {
        let vars = variables();
        let options = ViewerOptions {
            title: Some("model-a env".into()),
            ..ViewerOptions::default()
        };
        let viewer = Viewer::new(&vars, options);

        let mut terminal = Terminal::new(TestBackend::new(50, 8)).unwrap();
        terminal.draw(|frame| viewer.draw(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let line = |y: u16| (0..50).map(|x| buffer[(x, y)].symbol()).collect::<String>();

        assert!(line(0).contains("model-a env"));
        assert!(line(1).contains("Name"));
        assert!(line(2).contains('B'));
        assert!(line(7).starts_with("Hints:"));
        assert!((0..8).all(|y| !line(y).contains(STANDARD_TRANSFORMER_CONFIG_ENV_NAME)));
    }
}
