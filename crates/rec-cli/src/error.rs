//! Error types for rec-cli

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown user in the training corpus
    #[error("Unknown user: {0}")]
    UnknownUser(i64),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Recomendar error
    #[error("Recomendar error: {0}")]
    Recomendar(String),
}

impl CliError {
    /// Get exit code for this error
    pub(crate) fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound(_) => ExitCode::from(3),
            Self::UnknownUser(_) => ExitCode::from(2),
            Self::Json(_) => ExitCode::from(4),
            Self::Io(_) => ExitCode::from(7),
            Self::Recomendar(_) => ExitCode::from(1),
        }
    }
}

impl From<recomendar::RecomendarError> for CliError {
    fn from(e: recomendar::RecomendarError) -> Self {
        Self::Recomendar(e.to_string())
    }
}
