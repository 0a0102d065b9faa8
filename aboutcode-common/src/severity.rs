//! Severity levels and collected issues
//!
//! Data-quality problems found while parsing or validating ABOUT records are
//! never raised: they are collected as [`Issue`] values carrying a
//! [`Severity`]. Severities are totally ordered from least to most severe, so
//! callers can filter with a simple comparison.
//!
//! # Example
//!
//! ```
//! use aboutcode_common::{Issue, Severity};
//!
//! let issue = Issue::critical("Field about_resource is required");
//! assert!(issue.severity > Severity::Warning);
//! assert_eq!(issue.to_string(), "CRITICAL: Field about_resource is required");
//!
//! let parsed: Severity = "warning".parse().unwrap();
//! assert_eq!(parsed, Severity::Warning);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level of a collected issue, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational, e.g. a custom field was detected
    Info,
    /// Should be looked at, e.g. a field is present but empty
    Warning,
    /// Structurally recoverable, e.g. a path could not be checked
    Error,
    /// The record is non-conformant and must not be used for output
    Critical,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Error => write!(f, "ERROR"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "critical" => Ok(Severity::Critical),
            _ => Err(format!("Invalid severity: {}", s)),
        }
    }
}

/// A single problem found in a record, collected as data.
///
/// Ordering compares severity first, then message, which gives a stable
/// order for sorting aggregated inventories.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Issue {
    /// How bad it is
    pub severity: Severity,
    /// Human readable description
    pub message: String,
}

impl Issue {
    /// Create a new issue
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self::new(Severity::Critical, message)
    }

    /// True when this issue makes a record unusable for output.
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Per-severity counts over a list of issues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IssueCounts {
    pub info: usize,
    pub warning: usize,
    pub error: usize,
    pub critical: usize,
}

impl IssueCounts {
    /// Count the issues by severity.
    pub fn from_issues<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> Self {
        let mut counts = Self::default();
        for issue in issues {
            match issue.severity {
                Severity::Info => counts.info += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Error => counts.error += 1,
                Severity::Critical => counts.critical += 1,
            }
        }
        counts
    }

    /// Count for a single severity.
    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Info => self.info,
            Severity::Warning => self.warning,
            Severity::Error => self.error,
            Severity::Critical => self.critical,
        }
    }

    /// Highest severity with a non-zero count.
    pub fn highest(&self) -> Option<Severity> {
        Severity::ALL
            .iter()
            .rev()
            .copied()
            .find(|severity| self.get(*severity) > 0)
    }
}
