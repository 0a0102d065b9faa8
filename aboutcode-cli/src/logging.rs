//! Tracing setup for the `about` binary

/// Filter directive for the given flags, falling back to the configured level.
pub fn log_filter(verbose: bool, debug: bool, quiet: bool, configured: &str) -> String {
    if quiet {
        "error".to_string()
    } else if debug {
        "debug".to_string()
    } else if verbose {
        "trace".to_string()
    } else {
        configured.to_string()
    }
}

/// Install a stderr subscriber. Stdout is reserved for command output.
pub fn configure_logging(verbose: bool, debug: bool, quiet: bool, configured: &str) {
    use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

    let directive = log_filter(verbose, debug, quiet, configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("Warning: invalid log level '{}': {}", directive, e);
        EnvFilter::new("info")
    });

    registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
