//! Error types for the parser.
//!
//! `ParserError::MissingTitle` is the only error the parsing core itself
//! produces; the remaining variants cover the file-reading and output
//! layers around it.

use thiserror::Error;

/// Main error type for the parser library.
#[derive(Debug, Error)]
pub enum ParserError {
    /// Segment does not begin with a recognized title.
    #[error("No title found in segment: '{0}'")]
    MissingTitle(String),

    /// Input file has an extension outside the accepted set.
    #[error("Unsupported file extension: '{0}'. Expected .csv or .txt")]
    UnsupportedExtension(String),

    /// CSV reading failed.
    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;
