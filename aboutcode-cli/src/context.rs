//! State shared by every command

use aboutcode_config::AboutConfig;

/// Loaded configuration plus the global output flags.
#[derive(Debug, Clone, Default)]
pub struct CliContext {
    pub config: AboutConfig,
    pub verbose: bool,
    pub quiet: bool,
}

impl CliContext {
    pub fn new(config: AboutConfig, verbose: bool, quiet: bool) -> Self {
        Self {
            config,
            verbose,
            quiet,
        }
    }
}
