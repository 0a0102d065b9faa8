//! # aboutcode common
//!
//! Foundational types shared across the aboutcode crates.
//!
//! ## Modules
//!
//! - [`constants`] - reserved names and the ABOUT file suffix
//! - [`error`] - hard-failure error type and the [`HasSeverity`] trait
//! - [`severity`] - the [`Severity`] scale and collected [`Issue`] values

pub mod constants;
pub mod error;
pub mod severity;

pub use constants::{
    is_about_file, ABOUT_FILE_EXTENSION, ABOUT_FILE_PATH_ATTR, ABOUT_RESOURCE_PATH_ATTR,
};
pub use error::{AboutCodeError, HasSeverity, Result};
pub use severity::{Issue, IssueCounts, Severity};
