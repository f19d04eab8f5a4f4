//! Error types for the sheetsmith library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sheetsmith operations.
#[derive(Debug, Error)]
pub enum SheetsmithError {
    /// The input path does not exist.
    #[error("File not found: '{}'", path.display())]
    SourceNotFound { path: PathBuf },

    /// The workbook could not be opened or parsed.
    #[error("Failed to read spreadsheet '{}': {message}", path.display())]
    SourceRead { path: PathBuf, message: String },

    /// Writing the CSV output failed.
    #[error("Failed to write CSV file '{}': {source}", path.display())]
    SinkWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// No columns to describe in a CREATE TABLE statement.
    #[error("Cannot build CREATE TABLE {table}: no columns found")]
    EmptySchema { table: String },

    /// Error reading or writing a plain file.
    #[error("IO error for '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SheetsmithError {
    pub(crate) fn source_read(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        SheetsmithError::SourceRead {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// Result type alias for sheetsmith operations.
pub type Result<T> = std::result::Result<T, SheetsmithError>;
