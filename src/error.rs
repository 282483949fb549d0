//! Error types for Recomendar operations.

use std::fmt;

/// Main error type for Recomendar operations.
///
/// The prediction pipeline itself never fails: missing data is absorbed by
/// the fallback policy in [`crate::recommend`]. Errors surface only at the
/// edges, when reading a dataset stream.
///
/// # Examples
///
/// ```
/// use recomendar::error::RecomendarError;
///
/// let err = RecomendarError::Other("unexpected input".to_string());
/// assert_eq!(err.to_string(), "unexpected input");
/// ```
#[derive(Debug)]
pub enum RecomendarError {
    /// I/O error while reading a dataset stream.
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for RecomendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RecomendarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Other(_) => None,
        }
    }
}

impl From<std::io::Error> for RecomendarError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, RecomendarError>;
