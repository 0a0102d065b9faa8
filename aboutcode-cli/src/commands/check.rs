//! `about check`

use super::min_severity;
use crate::context::CliContext;
use crate::exit_codes::EXIT_ERROR;
use crate::report;
use aboutcode_common::Severity;
use aboutcode_model::collect_inventory;
use std::path::Path;

pub fn handle_command(
    location: &Path,
    requested: Option<Severity>,
    context: &CliContext,
) -> i32 {
    if !location.exists() {
        eprintln!("Check failed: {} does not exist", location.display());
        return EXIT_ERROR;
    }

    let (issues, abouts) = collect_inventory(location);
    tracing::debug!(records = abouts.len(), "checked {}", location.display());

    if context.verbose {
        for about in &abouts {
            println!(
                "{}: {} issue(s)",
                about.about_file_path().unwrap_or_default(),
                about.errors().len()
            );
        }
    }
    report::print_issues(
        &report::locate_issues(&issues, &abouts),
        min_severity(context, requested),
    );
    if !context.quiet {
        println!("Checked {} ABOUT file(s)", abouts.len());
        report::print_summary(&issues);
    }
    report::exit_code_for(&issues)
}
