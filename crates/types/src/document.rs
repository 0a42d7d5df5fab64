//! Loading variable lists from JSON or YAML documents.
//!
//! Two shapes are accepted: a bare array of `{name, value}` records, or a
//! model configuration object whose `env_vars` field holds that array (the
//! shape returned by the model service API). Loading never filters entries;
//! the reserved variable is removed at render time.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::variable::EnvironmentVariable;

/// Errors raised while reading or parsing a variables document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read variables from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON variables document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML variables document: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Serialization format of a variables document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Guess the format from a file extension; anything other than `.yaml`/`.yml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Subset of a model configuration carrying the environment variables.
///
/// Fields other than `env_vars` are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub env_vars: Vec<EnvironmentVariable>,
}

/// Accepted top-level document shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum VariablesDocument {
    List(Vec<EnvironmentVariable>),
    Config(ModelConfig),
}

impl VariablesDocument {
    pub fn into_variables(self) -> Vec<EnvironmentVariable> {
        match self {
            Self::List(variables) => variables,
            Self::Config(config) => config.env_vars,
        }
    }
}

/// Parse `text` as a variables document in the given format.
///
/// Blank input yields an empty list.
pub fn parse_variables(text: &str, format: DocumentFormat) -> Result<Vec<EnvironmentVariable>, DocumentError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let document: VariablesDocument = match format {
        DocumentFormat::Json => serde_json::from_str(text)?,
        DocumentFormat::Yaml => serde_yaml::from_str(text)?,
    };
    let variables = document.into_variables();
    debug!(count = variables.len(), ?format, "parsed variables document");
    Ok(variables)
}

/// Read and parse the document at `path`. When `format` is `None` it is derived from the extension.
pub fn load_variables(path: &Path, format: Option<DocumentFormat>) -> Result<Vec<EnvironmentVariable>, DocumentError> {
    let text = fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = format.unwrap_or_else(|| DocumentFormat::from_path(path));
    debug!(path = %path.display(), ?format, "loading variables document");
    parse_variables(&text, format)
}
