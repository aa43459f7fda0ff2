//! Error types for the place-data crate.

use thiserror::Error;

/// Errors that can occur while loading and validating place data
#[derive(Error, Debug)]
pub enum PlaceDataError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A seed file couldn't be deserialized
    #[error("Parse error in {file}: {reason}")]
    Parse { file: String, reason: String },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue { field: String, value: String },

    /// Two records share the same id
    #[error("Duplicate {entity} id: {id}")]
    DuplicateId { entity: String, id: String },

    /// Referenced entity doesn't exist (e.g., place pointing at an unknown category)
    #[error("Missing reference: {entity} with id {id}")]
    MissingReference { entity: String, id: String },

    /// Data validation failed
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, PlaceDataError>;
