//! Error types for the data-loader crate.
//!
//! Everything that can go wrong while turning a CSV file (or a list of
//! records) into a `SalesDataset` is represented here. Once a dataset is
//! built, nothing downstream can fail with a `DataLoadError`.

use thiserror::Error;

/// Errors that can occur during dataset loading and parsing
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The header line doesn't name a required column
    #[error("Missing required column '{column}' in header")]
    MissingColumn { column: String },

    /// Line in data file couldn't be parsed
    ///
    /// This variant stores context about where the error occurred
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: '{value}'")]
    InvalidValue { field: String, value: String },

    /// A row has fewer fields than the header announced
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
