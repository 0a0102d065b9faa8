//! Library side of the `about` command-line tool.

pub mod cli;
pub mod commands;
pub mod context;
pub mod exit_codes;
pub mod logging;
pub mod report;

use cli::{Cli, Commands};
use commands::gen::GenArgs;
use context::CliContext;

/// Run a parsed command line and return the process exit code.
pub fn run(cli: Cli, context: &CliContext) -> i32 {
    match cli.command {
        Commands::Inventory { location, output } => {
            commands::inventory::handle_command(&location, &output, context)
        }
        Commands::Check {
            location,
            min_severity,
        } => commands::check::handle_command(&location, min_severity, context),
        Commands::Attrib {
            location,
            output,
            template,
        } => commands::attrib::handle_command(&location, &output, template.as_deref(), context),
        Commands::Gen {
            input,
            target,
            action,
            all_in_one,
            license_dir,
            mapping,
        } => {
            let args = GenArgs {
                input,
                target,
                action,
                all_in_one,
                license_dir,
                mapping,
            };
            commands::gen::handle_command(&args, context)
        }
    }
}
