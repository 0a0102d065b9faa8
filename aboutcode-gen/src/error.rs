//! Error types for bulk generation

use aboutcode_common::{HasSeverity, Severity};
use std::path::PathBuf;
use thiserror::Error;

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, GenError>;

/// Hard failures while reading inputs or writing generated files.
#[derive(Debug, Error)]
pub enum GenError {
    /// The input CSV could not be parsed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Column names repeat when compared case-insensitively
    #[error("Duplicated column name(s): {}", columns.join(", "))]
    DuplicateColumns { columns: Vec<String> },

    /// The input file could not be opened
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A generated file could not be written
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenError {
    pub(crate) fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::FileWrite {
            path: path.into(),
            source,
        }
    }
}

impl HasSeverity for GenError {
    fn severity(&self) -> Severity {
        match self {
            GenError::DuplicateColumns { .. } | GenError::FileWrite { .. } => Severity::Critical,
            GenError::Csv(_) | GenError::FileRead { .. } => Severity::Error,
        }
    }
}
