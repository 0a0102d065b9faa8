//! `about attrib`

use super::collect_and_report;
use crate::context::CliContext;
use crate::exit_codes::{EXIT_CRITICAL, EXIT_ERROR, EXIT_SUCCESS};
use aboutcode_attrib::{check_template, generate, DEFAULT_TEMPLATE};
use anyhow::{bail, Context, Result};
use std::path::Path;

pub fn handle_command(
    location: &Path,
    output: &Path,
    template: Option<&Path>,
    context: &CliContext,
) -> i32 {
    match run_attrib(location, output, template, context) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Attribution failed: {:#}", e);
            EXIT_ERROR
        }
    }
}

fn run_attrib(
    location: &Path,
    output: &Path,
    template: Option<&Path>,
    context: &CliContext,
) -> Result<i32> {
    let template_location = template.or(context.config.template.as_deref());
    let template_text = match template_location {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading template {}", path.display()))?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    if let Some((line, message)) = check_template(&template_text) {
        eprintln!("Template validation error at line {}: {}", line, message);
        return Ok(EXIT_CRITICAL);
    }
    if !location.exists() {
        bail!("{} does not exist", location.display());
    }

    let (_, abouts) = collect_and_report(location, context);
    let rendered = generate(&abouts, &template_text)?;
    std::fs::write(output, rendered)
        .with_context(|| format!("writing attribution to {}", output.display()))?;

    if !context.quiet {
        println!(
            "Wrote attribution for {} record(s) to {}",
            abouts.len(),
            output.display()
        );
    }
    Ok(EXIT_SUCCESS)
}
