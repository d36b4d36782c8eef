//! Error types for kgtool operations

use thiserror::Error;

/// Result type alias for kgtool operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for kgtool
#[derive(Error, Debug)]
pub enum Error {
    /// Input had the wrong shape for the requested operation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed JSON on one line of a JSON-lines file
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid regular expression
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// JSON serialization or parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
