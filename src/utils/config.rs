// Configuration utilities and TOML parsing

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::models::package_manager::PackageManager;
use crate::utils::error::{Result, ScaffoldError};

/// Optional config file looked up in the directory the tool is run from
pub const CONFIG_FILE_NAME: &str = "next-scaffold.toml";

/// Settings for a scaffolding run; every field has a default
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Installer used for the dependency steps
    pub package_manager: PackageManager,
    /// `tracing` filter directive, e.g. `warn` or `next_scaffold=debug`
    pub log_level: String,
    /// Version tag passed to `create-next-app@`
    pub next_version: String,
    /// Version tag passed to `shadcn@`
    pub shadcn_version: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            package_manager: PackageManager::default(),
            log_level: "warn".to_string(),
            next_version: "latest".to_string(),
            shadcn_version: "latest".to_string(),
        }
    }
}

/// Configuration parsing and validation utilities
pub struct ConfigParser;

impl ConfigParser {
    /// Load `next-scaffold.toml` from `dir`, falling back to defaults when absent
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<ScaffoldConfig> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);

        if !path.exists() {
            return Ok(ScaffoldConfig::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            ScaffoldError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::parse_config(&content)
    }

    /// Parse and validate configuration from a TOML string
    pub fn parse_config(content: &str) -> Result<ScaffoldConfig> {
        let config: ScaffoldConfig = toml::from_str(content)
            .map_err(|e| ScaffoldError::ConfigError(format!("Invalid TOML syntax: {e}")))?;

        Self::validate_version_tag("next_version", &config.next_version)?;
        Self::validate_version_tag("shadcn_version", &config.shadcn_version)?;

        if config.log_level.trim().is_empty() {
            return Err(ScaffoldError::ConfigError(
                "log_level cannot be empty".to_string(),
            ));
        }

        Ok(config)
    }

    /// Version tags end up inside `<package>@<tag>`, so they must be a single token
    fn validate_version_tag(field: &str, tag: &str) -> Result<()> {
        if tag.is_empty() || tag.chars().any(char::is_whitespace) || tag.contains('@') {
            return Err(ScaffoldError::ConfigError(format!(
                "Invalid {field} '{tag}' (expected a version or dist-tag such as 'latest' or '15.1.0')"
            )));
        }
        Ok(())
    }
}
