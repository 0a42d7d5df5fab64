use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use envtable_tui::{Column, SortState, ViewerOptions, theme::catalog};
use envtable_types::{DocumentFormat, EnvironmentVariable, UserPreferences, load_variables, parse_variables};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// View the environment variables of a model configuration.
#[derive(Debug, Parser)]
#[command(name = "envtable", version, about)]
struct Cli {
    /// JSON or YAML document: a list of {name, value} records or a model
    /// config with `env_vars`. Use `-` for stdin. Omit for an empty listing.
    file: Option<PathBuf>,

    /// Document format; derived from the file extension when omitted.
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Theme id or alias (dracula, dracula_hc, ansi256).
    #[arg(long)]
    theme: Option<String>,

    /// Remember `--theme` as the preferred theme.
    #[arg(long, requires = "theme")]
    save_theme: bool,

    /// Initial sort column.
    #[arg(long, value_enum)]
    sort: Option<SortArg>,

    /// Sort descending instead of ascending.
    #[arg(long, requires = "sort")]
    descending: bool,

    /// Render once to stdout instead of starting the interactive viewer.
    #[arg(long)]
    print: bool,

    /// Output width for `--print`.
    #[arg(long, default_value_t = 80)]
    width: u16,

    /// Panel title for the interactive viewer.
    #[arg(long)]
    title: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Json,
    Yaml,
}

impl From<FormatArg> for DocumentFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => DocumentFormat::Json,
            FormatArg::Yaml => DocumentFormat::Yaml,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SortArg {
    Name,
    Value,
}

impl Cli {
    fn initial_sort(&self) -> Option<SortState> {
        let column = match self.sort? {
            SortArg::Name => Column::Name,
            SortArg::Value => Column::Value,
        };
        Some(if self.descending {
            SortState::descending(column)
        } else {
            SortState::ascending(column)
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(if cli.print { "info" } else { "warn" });

    let variables = read_variables(cli.file.as_deref(), cli.format.map(DocumentFormat::from))?;
    let theme = resolve_theme(&cli)?;
    let options = ViewerOptions {
        theme,
        sort: cli.initial_sort(),
        title: cli.title.clone(),
    };

    if cli.print || !std::io::stdout().is_terminal() {
        println!("{}", envtable_tui::render_snapshot(variables.as_deref(), &options, cli.width));
        return Ok(());
    }

    envtable_tui::run(variables.as_deref().unwrap_or_default(), options)
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// `None` when no document was given.
fn read_variables(file: Option<&Path>, format: Option<DocumentFormat>) -> Result<Option<Vec<EnvironmentVariable>>> {
    let Some(path) = file else {
        debug!("no variables document given");
        return Ok(None);
    };

    let variables = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read variables from stdin")?;
        parse_variables(&text, format.unwrap_or(DocumentFormat::Json))?
    } else {
        load_variables(path, format)?
    };
    Ok(Some(variables))
}

/// Theme precedence: `--theme`, then the saved preference.
fn resolve_theme(cli: &Cli) -> Result<Option<String>> {
    let mut preferences = UserPreferences::load().unwrap_or_else(|error| {
        warn!(%error, "failed to load preferences; continuing with defaults");
        UserPreferences::ephemeral()
    });

    if cli.save_theme
        && let Some(name) = cli.theme.as_deref()
    {
        let Some(definition) = catalog::resolve(name.trim()) else {
            bail!("unknown theme '{name}'");
        };
        preferences
            .set_preferred_theme(Some(definition.id.to_string()))
            .with_context(|| format!("failed to save preferences to {}", preferences.path().display()))?;
    }

    Ok(cli
        .theme
        .clone()
        .or_else(|| preferences.preferred_theme().map(str::to_string)))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use envtable_tui::SortDirection;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn sort_flags_build_initial_sort() {
        let cli = Cli::try_parse_from(["envtable", "vars.json", "--sort", "value", "--descending"]).unwrap();
        let sort = cli.initial_sort().unwrap();
        assert_eq!(sort.column, Column::Value);
        assert_eq!(sort.direction, SortDirection::Descending);

        let cli = Cli::try_parse_from(["envtable", "--sort", "name"]).unwrap();
        assert_eq!(cli.initial_sort(), Some(SortState::ascending(Column::Name)));
    }

    #[test]
    fn descending_requires_sort() {
        assert!(Cli::try_parse_from(["envtable", "--descending"]).is_err());
        assert!(Cli::try_parse_from(["envtable", "--save-theme"]).is_err());
    }

    #[test]
    fn missing_file_argument_means_no_document() {
        assert!(read_variables(None, None).unwrap().is_none());
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["envtable"]).unwrap();
        assert_eq!(cli.width, 80);
        assert!(!cli.print);
        assert!(cli.initial_sort().is_none());
    }
}
