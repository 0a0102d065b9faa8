//! Error types for aboutcode
//!
//! Data-quality problems in ABOUT records are reported as
//! [`Issue`](crate::Issue) values. The error types here are reserved for
//! conditions where an operation cannot produce its output at all, such as
//! failing to write a CSV file.

use std::io;
use std::path::PathBuf;
use thiserror::Error as ThisError;

use crate::severity::Severity;

/// Trait for error types that map onto the issue severity scale
///
/// This lets the command layer pick an exit status and a log level for hard
/// failures the same way it does for collected issues.
///
/// # Example
///
/// ```rust
/// use aboutcode_common::{HasSeverity, Severity};
///
/// #[derive(Debug)]
/// enum MyError {
///     Unreadable,
///     Skipped,
/// }
///
/// impl HasSeverity for MyError {
///     fn severity(&self) -> Severity {
///         match self {
///             MyError::Unreadable => Severity::Critical,
///             MyError::Skipped => Severity::Warning,
///         }
///     }
/// }
///
/// assert_eq!(MyError::Unreadable.severity(), Severity::Critical);
/// ```
pub trait HasSeverity {
    /// Get the severity level of this error
    fn severity(&self) -> Severity;
}

/// Result type alias for aboutcode operations
pub type Result<T> = std::result::Result<T, AboutCodeError>;

/// Hard failures shared across the aboutcode crates
#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum AboutCodeError {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// CSV reading or writing failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A location that does not exist or cannot be used
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Other error with custom message
    #[error("{message}")]
    Other { message: String },
}

impl AboutCodeError {
    /// Create a FileRead error.
    pub fn file_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a FileWrite error.
    pub fn file_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Create an InvalidPath error.
    pub fn invalid_path(path: impl Into<PathBuf>) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    /// Create an Other error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

impl HasSeverity for AboutCodeError {
    fn severity(&self) -> Severity {
        match self {
            AboutCodeError::InvalidPath { .. } => Severity::Critical,
            AboutCodeError::FileWrite { .. } => Severity::Critical,
            AboutCodeError::Io(_)
            | AboutCodeError::FileRead { .. }
            | AboutCodeError::Csv(_)
            | AboutCodeError::Json(_)
            | AboutCodeError::Other { .. } => Severity::Error,
        }
    }
}
