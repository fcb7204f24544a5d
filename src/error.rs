//! Error types for deltadoc library.

use std::io;
use thiserror::Error;

/// Result type alias for deltadoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading, segmenting, or exporting content.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The editor handle could not provide its contents.
    #[error("Editor content is unavailable")]
    EditorUnavailable,

    /// The delta payload is not valid JSON or not a delta.
    #[error("Invalid delta: {0}")]
    InvalidDelta(String),

    /// The delta contains an operation that is not an insert.
    #[error("Unsupported delta operation: {0}")]
    UnsupportedOperation(String),

    /// The document encoder failed.
    #[error("Encoding error: {0}")]
    Encode(String),

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),

    /// No exporter is registered for the requested format.
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    /// Navigation menu configuration could not be loaded.
    #[error("Invalid menu: {0}")]
    InvalidMenu(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.into())
        } else {
            Error::InvalidDelta(err.to_string())
        }
    }
}
