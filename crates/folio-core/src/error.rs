//! Error types for Folio

use thiserror::Error;

/// Main error type for page behavior setup.
///
/// User input problems are never errors; they surface as inline form
/// messages. These variants cover startup faults and host failures.
#[derive(Error, Debug)]
pub enum FolioError {
    /// A required element was not found in the document
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// Configuration values are out of range
    #[error("Config error: {0}")]
    Config(String),

    /// Configuration JSON could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A validation pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// The host document rejected an operation
    #[error("DOM error: {0}")]
    Dom(String),

    /// The logging subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;
