use std::process::Command;

use serde::Deserialize;
use tracing::debug;

use crate::config::RegistryConfig;
use crate::error::{CavyError, Result};
use crate::registry::PublishedVersionsFetcher;

/// Fetches published versions with `npm view <package> versions --json`
#[derive(Debug, Clone)]
pub struct NpmRegistry {
    program: String,
    registry_url: Option<String>,
}

/// `npm view ... --json` prints a bare string when only one version exists
#[derive(Deserialize)]
#[serde(untagged)]
enum ViewOutput {
    Many(Vec<String>),
    One(String),
}

impl NpmRegistry {
    /// Use the given npm executable against its configured registry
    pub fn new(program: impl Into<String>) -> Self {
        NpmRegistry {
            program: program.into(),
            registry_url: None,
        }
    }

    /// Query a specific registry instead of npm's configured one
    pub fn with_registry_url(mut self, url: impl Into<String>) -> Self {
        self.registry_url = Some(url.into());
        self
    }

    /// Build from the `[registry]` config section
    pub fn from_config(config: &RegistryConfig) -> Self {
        let registry = Self::new(config.npm.clone());
        match &config.url {
            Some(url) if !url.is_empty() => registry.with_registry_url(url.clone()),
            _ => registry,
        }
    }

    /// Arguments passed to npm for a lookup
    pub fn view_args(&self, package_name: &str) -> Vec<String> {
        let mut args = vec![
            "view".to_string(),
            package_name.to_string(),
            "versions".to_string(),
            "--json".to_string(),
        ];
        if let Some(url) = &self.registry_url {
            args.push("--registry".to_string());
            args.push(url.clone());
        }
        args
    }
}

impl Default for NpmRegistry {
    fn default() -> Self {
        Self::new("npm")
    }
}

impl PublishedVersionsFetcher for NpmRegistry {
    fn fetch_published_versions(&self, package_name: &str) -> Result<Vec<String>> {
        let args = self.view_args(package_name);
        debug!(program = %self.program, ?args, "querying registry");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| {
                CavyError::registry(
                    package_name,
                    format!("failed to run {}: {}", self.program, e),
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CavyError::registry(
                package_name,
                format!(
                    "{} exited with code {}: {}",
                    self.program,
                    output.status.code().unwrap_or(-1),
                    stderr.trim()
                ),
            ));
        }

        parse_view_output(package_name, &String::from_utf8_lossy(&output.stdout))
    }
}

/// Decode the JSON printed by `npm view <package> versions --json`
pub fn parse_view_output(package_name: &str, stdout: &str) -> Result<Vec<String>> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let parsed: ViewOutput = serde_json::from_str(trimmed).map_err(|e| {
        CavyError::registry(package_name, format!("unreadable registry response: {}", e))
    })?;

    Ok(match parsed {
        ViewOutput::Many(versions) => versions,
        ViewOutput::One(version) => vec![version],
    })
}
