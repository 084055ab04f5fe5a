use hearth_core::SearchError;
use std::fmt::Display;

/// Application-wide error types for the Hearth launcher front end.
///
/// Errors are classified by subsystem so callers can decide between
/// degrading gracefully (theme problems fall back to default colors) and
/// surfacing the failure to the user (search and configuration problems).
#[derive(Debug)]
pub enum AppError {
    /// Search provider or suggestion client failures.
    Search(String),
    /// Theme resolution failures, including missing color tiers and
    /// unparseable scheme files.
    Theme(String),
    /// Configuration loading and validation errors.
    Config(String),
    /// File system and I/O operation failures.
    Io(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Search(msg) => write!(f, "Search Error: {msg}"),
            AppError::Theme(msg) => write!(f, "Theme Error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Io(msg) => write!(f, "I/O Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        AppError::Search(err.to_string())
    }
}

impl From<crate::theme::ThemeError> for AppError {
    fn from(err: crate::theme::ThemeError) -> Self {
        AppError::Theme(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
