//! `about inventory`

use super::collect_and_report;
use crate::context::CliContext;
use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS};
use crate::report;
use aboutcode_model::write_csv;
use anyhow::{bail, Context, Result};
use std::path::Path;

pub fn handle_command(location: &Path, output: &Path, context: &CliContext) -> i32 {
    match run_inventory(location, output, context) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Inventory failed: {:#}", e);
            EXIT_ERROR
        }
    }
}

fn run_inventory(location: &Path, output: &Path, context: &CliContext) -> Result<()> {
    let is_csv = output
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        bail!("output must be a .csv file: {}", output.display());
    }
    if !location.exists() {
        bail!("{} does not exist", location.display());
    }

    let (issues, abouts) = collect_and_report(location, context);
    write_csv(&abouts, output)
        .with_context(|| format!("writing inventory to {}", output.display()))?;

    if !context.quiet {
        report::print_summary(&issues);
        println!(
            "Wrote {} record(s) to {} with {} issue(s)",
            abouts.len(),
            output.display(),
            issues.len()
        );
    }
    Ok(())
}
