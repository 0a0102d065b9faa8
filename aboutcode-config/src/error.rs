//! Error types for configuration loading

use aboutcode_common::{HasSeverity, Severity};
use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration source could not be parsed or did not match the schema
    #[error("Failed to parse configuration: {source}")]
    ParseError {
        #[source]
        source: Box<figment::Error>,
    },

    /// Current directory could not be determined
    #[error("Unable to determine current directory: {source}")]
    CurrentDirectoryNotFound {
        #[source]
        source: std::io::Error,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::ParseError {
            source: Box::new(error),
        }
    }
}

impl HasSeverity for ConfigError {
    fn severity(&self) -> Severity {
        match self {
            ConfigError::ParseError { .. } => Severity::Error,
            ConfigError::CurrentDirectoryNotFound { .. } => Severity::Critical,
        }
    }
}
