//! `about gen`

use super::min_severity;
use crate::context::CliContext;
use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS};
use crate::report;
use aboutcode_gen::{
    apply_mapping, load_rows, plan, write_plan, DirectoryLicenseLibrary, GenerationAction,
    GenerationOptions, InMemoryLicenseLibrary, LicenseLibrary,
};
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Arguments of `about gen`.
#[derive(Debug, Clone)]
pub struct GenArgs {
    pub input: PathBuf,
    pub target: PathBuf,
    pub action: GenerationAction,
    pub all_in_one: bool,
    pub license_dir: Option<PathBuf>,
    pub mapping: bool,
}

pub fn handle_command(args: &GenArgs, context: &CliContext) -> i32 {
    match run_gen(args, context) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Generation failed: {:#}", e);
            EXIT_ERROR
        }
    }
}

fn run_gen(args: &GenArgs, context: &CliContext) -> Result<i32> {
    let mut rows = load_rows(&args.input)?;
    if args.mapping {
        if context.config.mapping.is_empty() {
            bail!("--mapping given but no mapping table is configured");
        }
        rows = apply_mapping(&rows, &context.config.mapping);
    }

    let license_dir = args
        .license_dir
        .clone()
        .or_else(|| context.config.license_dir.clone());
    let library: Box<dyn LicenseLibrary> = match &license_dir {
        Some(dir) => Box::new(DirectoryLicenseLibrary::new(dir)),
        None => Box::new(InMemoryLicenseLibrary::new()),
    };
    let options = GenerationOptions {
        action: args.action,
        all_in_one: args.all_in_one,
        license_dir,
    };

    let generation = plan(&rows, &args.target, &options, library.as_ref());
    report::print_issues(&generation.issues, min_severity(context, None));
    if generation.issues.iter().any(|issue| issue.is_critical()) && generation.records.is_empty()
    {
        return Ok(report::exit_code_for(&generation.issues));
    }

    write_plan(&generation)
        .with_context(|| format!("writing records under {}", args.target.display()))?;
    if !context.quiet {
        println!(
            "Generated {} ABOUT file(s) in {}",
            generation.records.len(),
            args.target.display()
        );
    }
    Ok(EXIT_SUCCESS)
}
