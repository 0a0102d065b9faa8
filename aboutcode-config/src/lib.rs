//! Configuration for the `about` tool using Figment
//!
//! Settings are merged from these sources, later ones winning:
//!
//! 1. built-in defaults
//! 2. `~/.aboutcode/config.{toml,yaml,yml,json}`
//! 3. `./.aboutcode/config.{toml,yaml,yml,json}`
//! 4. `ABOUTCODE_*` environment variables
//!
//! ```no_run
//! use aboutcode_config::load_configuration;
//!
//! let config = load_configuration()?;
//! println!("log level: {}", config.log_level);
//! # Ok::<(), aboutcode_config::ConfigError>(())
//! ```

pub mod error;
pub mod provider;

pub use error::{ConfigError, ConfigResult};
pub use provider::{
    build_figment, discover_config_files, load_configuration, load_configuration_from,
    AboutConfig, ConfigFormat, CONFIG_DIR_NAME, ENV_PREFIX,
};
