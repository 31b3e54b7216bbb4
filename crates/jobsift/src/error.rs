//! Error types for the jobsift library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for jobsift operations.
#[derive(Debug, Error)]
pub enum SiftError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no header to build a dataset from.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller-supplied input is missing a required field.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The query agent failed or could not be reached.
    #[error("Agent error: {0}")]
    Agent(String),
}

impl SiftError {
    /// Returns true if this error was caused by the caller's input.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, SiftError::InvalidRequest(_))
    }
}

/// Result type alias for jobsift operations.
pub type Result<T> = std::result::Result<T, SiftError>;
