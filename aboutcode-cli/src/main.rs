use aboutcode_cli::{cli::Cli, context::CliContext, logging::configure_logging};
use aboutcode_config::AboutConfig;
use clap::Parser;
use std::process;

/// Load configuration, falling back to defaults so a broken config file
/// does not make the tool unusable.
fn load_cli_configuration() -> AboutConfig {
    match aboutcode_config::load_configuration() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Configuration loading failed: {}", e);
            eprintln!("Continuing with default configuration...");
            AboutConfig::default()
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let config = load_cli_configuration();

    configure_logging(cli.verbose, cli.debug, cli.quiet, &config.log_level);
    tracing::debug!(?config, "starting");

    let context = CliContext::new(config, cli.verbose, cli.quiet);
    let exit_code = aboutcode_cli::run(cli, &context);
    process::exit(exit_code);
}
