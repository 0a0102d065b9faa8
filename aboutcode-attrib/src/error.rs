//! Error types for attribution generation

use aboutcode_common::{HasSeverity, Severity};
use std::path::PathBuf;
use thiserror::Error;

/// Result type for attribution operations
pub type Result<T> = std::result::Result<T, AttribError>;

/// Hard failures while producing an attribution document.
///
/// Template syntax problems are normally caught up front by
/// [`check_template`](crate::check_template), which reports them as values.
#[derive(Debug, Error)]
pub enum AttribError {
    /// The template does not parse
    #[error("Template error at line {line}: {message}")]
    Template { line: usize, message: String },

    /// Rendering failed after a successful parse
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// The template file could not be read
    #[error("failed to read template '{path}': {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HasSeverity for AttribError {
    fn severity(&self) -> Severity {
        match self {
            AttribError::Template { .. } | AttribError::TemplateRead { .. } => Severity::Critical,
            AttribError::Render(_) => Severity::Error,
        }
    }
}
