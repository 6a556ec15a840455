use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CavyError, Result};

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "cavy.toml";

/// Represents the complete configuration for cavy.
///
/// Contains the publish tagging settings, how the registry is queried, and logging options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub publish: PublishConfig,

    #[serde(default)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_pre_release_tag() -> String {
    "next".to_string()
}

fn default_dev_postfix() -> String {
    "dev-build".to_string()
}

fn default_access() -> String {
    "public".to_string()
}

/// Settings of the publish command that drive tag selection.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PublishConfig {
    /// Suffix of pre-release tags (`v1~next`), and the only tag of development builds
    #[serde(default = "default_pre_release_tag")]
    pub pre_release_tag: String,

    /// Marker identifying development builds; must not be empty
    #[serde(default = "default_dev_postfix")]
    pub dev_postfix: String,

    /// Value passed to `npm publish --access`
    #[serde(default = "default_access")]
    pub access: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        PublishConfig {
            pre_release_tag: default_pre_release_tag(),
            dev_postfix: default_dev_postfix(),
            access: default_access(),
        }
    }
}

fn default_npm() -> String {
    "npm".to_string()
}

/// How published versions are looked up.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RegistryConfig {
    #[serde(default = "default_npm")]
    pub npm: String,

    #[serde(default)]
    pub url: Option<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            npm: default_npm(),
            url: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Log output settings; `CAVY_LOG` overrides `level` when set.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Config {
    /// Reject settings that would produce malformed tags or match every version
    pub fn validate(&self) -> Result<()> {
        validate_tag_name(&self.publish.pre_release_tag)?;
        validate_dev_postfix(&self.publish.dev_postfix)?;

        if self.registry.npm.trim().is_empty() {
            return Err(CavyError::config("registry.npm must not be empty"));
        }

        Ok(())
    }
}

/// Check a user supplied pre-release tag name.
///
/// The name becomes part of every pre-release tag, so it may not be empty,
/// contain whitespace or `~`, or be `latest`.
pub fn validate_tag_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(CavyError::config("pre_release_tag must not be empty"));
    }
    if name.chars().any(|c| c.is_whitespace() || c == '~') {
        return Err(CavyError::config(format!(
            "pre_release_tag '{}' must not contain whitespace or '~'",
            name
        )));
    }
    if name == crate::domain::LATEST {
        return Err(CavyError::config(
            "pre_release_tag must differ from 'latest'",
        ));
    }
    Ok(())
}

/// Check a user supplied development build marker.
///
/// Every version contains the empty string, so an empty marker would turn
/// each publish into a development build.
pub fn validate_dev_postfix(marker: &str) -> Result<()> {
    if marker.trim().is_empty() {
        return Err(CavyError::config("dev_postfix must not be empty"));
    }
    Ok(())
}

/// Path of the per-user configuration file, if a config directory exists
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cavy").join(CONFIG_FILE_NAME))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `cavy.toml` in current directory
/// 3. `cavy/cavy.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded and validated configuration
/// * `Err` - If a file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        PathBuf::from(CONFIG_FILE_NAME)
    } else {
        match user_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        }
    };

    load_config_file(&path)
}

/// Read, parse and validate one configuration file
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        CavyError::config(format!("cannot read {}: {}", path.display(), e))
    })?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CavyError::config(format!("cannot parse {}: {}", path.display(), e)))?;
    config.validate()?;

    Ok(config)
}
