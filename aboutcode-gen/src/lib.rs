//! # aboutcode gen
//!
//! Bulk generation of ABOUT records from a CSV inventory.
//!
//! Rows are read with [`load_rows`], optionally renamed with
//! [`apply_mapping`], turned into a [`GenerationPlan`] by [`plan`] and
//! written with [`write_plan`]. License texts come from an injected
//! [`LicenseLibrary`].

mod action;
pub mod error;
mod library;
mod plan;
mod rows;

pub use action::GenerationAction;
pub use error::{GenError, Result};
pub use library::{DirectoryLicenseLibrary, InMemoryLicenseLibrary, LicenseLibrary};
pub use plan::{
    derive_about_resource, output_path, plan, write_plan, GenerationOptions, GenerationPlan,
    ABOUT_FILE_COLUMN, MANDATORY_COLUMNS,
};
pub use rows::{apply_mapping, load_rows, read_rows, Row};
