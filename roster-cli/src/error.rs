//! CLI error type.

use std::path::PathBuf;

use roster_lib::error::{ColumnError, CrudError, RecordError};

/// Error type for the `roster` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid settings file {path}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Column(#[from] ColumnError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Crud(#[from] CrudError),

    #[error("Invalid pattern for field '{field}': {source}")]
    Pattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid {flag} value '{value}', expected {expected}")]
    Argument {
        flag: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("No base URL configured (pass --base-url or set base_url in settings.json)")]
    MissingBaseUrl,

    /// Some inputs were rejected. `report` holds the per-input output.
    #[error("{count} value(s) failed validation")]
    Invalid { count: usize, report: String },

    #[error("Delete failed")]
    DeleteFailed,
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Invalid { .. } => 1,
            CliError::DeleteFailed => 1,
            _ => 2,
        }
    }
}
