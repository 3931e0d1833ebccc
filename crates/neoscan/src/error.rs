//! Error types for the neoscan library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for neoscan operations.
#[derive(Debug, Error)]
pub enum NeoError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source does not have the expected shape (missing column, short row,
    /// unexpected field list).
    #[error("Source format error: {message}")]
    SourceFormat { message: String },

    /// A time string could not be parsed by chrono.
    #[error("Invalid approach time '{input}': {source}")]
    Format {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A time string does not have the compact `YYYY-Mon-DD HH:MM` shape.
    #[error("Invalid approach time '{input}': expected YYYY-Mon-DD HH:MM")]
    FormatShape { input: String },

    /// A field value could not be coerced to its typed form.
    #[error("Invalid value at row {row}, field '{field}': '{value}' ({message})")]
    Value {
        row: usize,
        field: String,
        value: String,
        message: String,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure while writing exported results.
    #[error("Output error: {0}")]
    Output(String),
}

impl NeoError {
    /// Build a [`NeoError::SourceFormat`] from any message.
    pub fn source_format(message: impl Into<String>) -> Self {
        NeoError::SourceFormat {
            message: message.into(),
        }
    }

    /// True for errors raised by time parsing.
    pub fn is_format(&self) -> bool {
        matches!(self, NeoError::Format { .. } | NeoError::FormatShape { .. })
    }
}

/// Result type alias for neoscan operations.
pub type Result<T> = std::result::Result<T, NeoError>;
