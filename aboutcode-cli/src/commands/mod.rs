//! Subcommand implementations
//!
//! Each command exposes `handle_command`, which runs it and turns failures
//! into an exit code.

pub mod attrib;
pub mod check;
pub mod gen;
pub mod inventory;

use crate::context::CliContext;
use crate::report;
use aboutcode_common::{Issue, Severity};
use aboutcode_model::{collect_inventory, About};
use std::path::Path;

/// Collect records under `location` and print their issues.
fn collect_and_report(location: &Path, context: &CliContext) -> (Vec<Issue>, Vec<About>) {
    let (issues, abouts) = collect_inventory(location);
    tracing::info!(
        records = abouts.len(),
        issues = issues.len(),
        "collected {}",
        location.display()
    );
    report::print_issues(
        &report::locate_issues(&issues, &abouts),
        min_severity(context, None),
    );
    (issues, abouts)
}

/// Threshold for printed issues. Quiet mode only shows errors.
fn min_severity(context: &CliContext, requested: Option<Severity>) -> Severity {
    let threshold = requested.unwrap_or(context.config.min_severity);
    if context.quiet {
        threshold.max(Severity::Error)
    } else {
        threshold
    }
}
