//! Configuration provider using Figment

use crate::error::{ConfigError, ConfigResult};
use aboutcode_common::Severity;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Directory holding configuration files, under home and under the project.
pub const CONFIG_DIR_NAME: &str = ".aboutcode";

/// Base name of configuration files inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_STEM: &str = "config";

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "ABOUTCODE_";

/// Settings shared by every `about` subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutConfig {
    /// Default tracing filter when no verbosity flag is given
    pub log_level: String,
    /// Default attribution template
    pub template: Option<PathBuf>,
    /// Target field name to source column header, applied before generation
    pub mapping: IndexMap<String, String>,
    /// Directory of `<key>.LICENSE` texts used during generation
    pub license_dir: Option<PathBuf>,
    /// Issues below this severity are not printed
    pub min_severity: Severity,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            template: None,
            mapping: IndexMap::new(),
            license_dir: None,
            min_severity: Severity::Info,
        }
    }
}

/// Configuration file format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Extensions probed in each configuration directory, in merge order
    pub const EXTENSIONS: [&'static str; 4] = ["toml", "yaml", "yml", "json"];

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    fn provider(self, path: &Path) -> Figment {
        match self {
            ConfigFormat::Toml => Figment::from(Toml::file(path)),
            ConfigFormat::Yaml => Figment::from(Yaml::file(path)),
            ConfigFormat::Json => Figment::from(Json::file(path)),
        }
    }
}

/// Configuration files present in `dir/.aboutcode/`, in merge order.
pub fn discover_config_files(dir: &Path) -> Vec<(PathBuf, ConfigFormat)> {
    let config_dir = dir.join(CONFIG_DIR_NAME);
    ConfigFormat::EXTENSIONS
        .iter()
        .filter_map(|ext| {
            let path = config_dir.join(format!("{}.{}", CONFIG_FILE_STEM, ext));
            if !path.is_file() {
                return None;
            }
            ConfigFormat::from_extension(ext).map(|format| (path, format))
        })
        .collect()
}

/// Build the figment with all sources in precedence order.
///
/// Later sources override earlier ones:
/// 1. defaults
/// 2. global files under `home_dir`
/// 3. project files under `project_dir`
/// 4. `ABOUTCODE_` environment variables
pub fn build_figment(project_dir: &Path, home_dir: Option<&Path>) -> Figment {
    let mut figment = Figment::new().merge(Serialized::defaults(AboutConfig::default()));

    let scopes = home_dir
        .into_iter()
        .chain(std::iter::once(project_dir))
        .collect::<Vec<_>>();
    for (index, dir) in scopes.iter().enumerate() {
        // Home and project may be the same directory.
        if scopes[..index].contains(dir) {
            continue;
        }
        for (path, format) in discover_config_files(dir) {
            trace!("Loading config file: {} ({:?})", path.display(), format);
            figment = figment.merge(format.provider(&path));
        }
    }

    figment.merge(Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().into()))
}

/// Load configuration for `project_dir`, with global files under `home_dir`.
pub fn load_configuration_from(
    project_dir: &Path,
    home_dir: Option<&Path>,
) -> ConfigResult<AboutConfig> {
    let config: AboutConfig = build_figment(project_dir, home_dir).extract()?;
    debug!(
        log_level = %config.log_level,
        min_severity = %config.min_severity,
        mappings = config.mapping.len(),
        "loaded configuration"
    );
    Ok(config)
}

/// Load configuration for the current directory and the user's home.
pub fn load_configuration() -> ConfigResult<AboutConfig> {
    let project_dir = std::env::current_dir()
        .map_err(|source| ConfigError::CurrentDirectoryNotFound { source })?;
    load_configuration_from(&project_dir, dirs::home_dir().as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &Path, file_name: &str, content: &str) {
        let config_dir = dir.join(CONFIG_DIR_NAME);
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join(file_name), content).unwrap();
    }

    #[test]
    #[serial]
    fn test_defaults_without_files() {
        let project = TempDir::new().unwrap();
        let config = load_configuration_from(project.path(), None).unwrap();
        assert_eq!(config, AboutConfig::default());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.min_severity, Severity::Info);
    }

    #[test]
    #[serial]
    fn test_project_overrides_global() {
        let home = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        write_config(
            home.path(),
            "config.yaml",
            "log_level: debug\nlicense_dir: /srv/licenses\n",
        );
        write_config(project.path(), "config.toml", "log_level = \"warn\"\n");

        let config = load_configuration_from(project.path(), Some(home.path())).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.license_dir, Some(PathBuf::from("/srv/licenses")));
    }

    #[test]
    #[serial]
    fn test_mapping_keeps_file_order() {
        let project = TempDir::new().unwrap();
        write_config(
            project.path(),
            "config.toml",
            r#"
min_severity = "warning"

[mapping]
about_file = "Directory/Filename"
name = "Component"
version = "Confirmed Version"
"#,
        );

        let config = load_configuration_from(project.path(), None).unwrap();
        assert_eq!(config.min_severity, Severity::Warning);
        assert_eq!(
            config.mapping.keys().collect::<Vec<_>>(),
            vec!["about_file", "name", "version"]
        );
        assert_eq!(config.mapping["name"], "Component");
    }

    #[test]
    #[serial]
    fn test_environment_overrides_files() {
        let project = TempDir::new().unwrap();
        write_config(project.path(), "config.json", r#"{"log_level": "trace"}"#);

        std::env::set_var("ABOUTCODE_LOG_LEVEL", "error");
        std::env::set_var("ABOUTCODE_MIN_SEVERITY", "critical");
        let result = load_configuration_from(project.path(), None);
        std::env::remove_var("ABOUTCODE_LOG_LEVEL");
        std::env::remove_var("ABOUTCODE_MIN_SEVERITY");

        let config = result.unwrap();
        assert_eq!(config.log_level, "error");
        assert_eq!(config.min_severity, Severity::Critical);
    }

    #[test]
    #[serial]
    fn test_invalid_severity_is_a_parse_error() {
        let project = TempDir::new().unwrap();
        write_config(project.path(), "config.toml", "min_severity = \"loud\"\n");
        let err = load_configuration_from(project.path(), None).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_discovery_ignores_other_files() {
        let project = TempDir::new().unwrap();
        write_config(project.path(), "config.toml", "");
        write_config(project.path(), "config.ini", "");
        write_config(project.path(), "config.yml", "");
        let found = discover_config_files(project.path());
        assert_eq!(
            found.iter().map(|(_, format)| *format).collect::<Vec<_>>(),
            vec![ConfigFormat::Toml, ConfigFormat::Yaml]
        );
    }
}
