//! Configuration loader for volman
//!
//! Precedence, lowest first: built-in defaults, an optional JSON file, then
//! environment variables. Each later layer only overrides the fields it sets.

use crate::config::{parse_masters, ConfigSource, ManagerConfig};
use std::path::{Path, PathBuf};
use volman_core::{Error, Result, VOLMAN_MASTERS_VAR, VOLMAN_USE_SSL_VAR};

/// Loads `ManagerConfig` at startup
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    /// Optional JSON file to read
    file: Option<PathBuf>,
    /// Whether to read environment overrides
    skip_env: bool,
    /// Whether an empty endpoint list is an error
    require_masters: bool,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Read settings from a JSON file
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Ignore environment overrides
    pub fn skip_env(mut self, skip: bool) -> Self {
        self.skip_env = skip;
        self
    }

    /// Require at least one master endpoint
    pub fn require_masters(mut self, require: bool) -> Self {
        self.require_masters = require;
        self
    }

    /// Load the configuration from the process environment
    pub fn load(self) -> Result<(ManagerConfig, ConfigSource)> {
        self.load_with_env(|key| std::env::var(key).ok())
    }

    /// Load the configuration using `lookup` to read environment variables
    pub fn load_with_env<F>(self, lookup: F) -> Result<(ManagerConfig, ConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ManagerConfig::default();
        let mut source = ConfigSource::Default;

        if let Some(path) = &self.file {
            config = read_file(path)?;
            source = ConfigSource::ConfigFile(path.clone());
            tracing::debug!(path = %path.display(), "loaded manager config file");
        }

        if !self.skip_env {
            if let Some(raw) = lookup(VOLMAN_MASTERS_VAR) {
                config.masters = parse_masters(&raw);
                source = ConfigSource::EnvironmentVariable(VOLMAN_MASTERS_VAR.to_string());
            }
            if let Some(raw) = lookup(VOLMAN_USE_SSL_VAR) {
                config.use_ssl = parse_bool(VOLMAN_USE_SSL_VAR, &raw)?;
            }
        }

        let config = config.normalize()?;
        if self.require_masters {
            config.require_masters()?;
        }

        tracing::debug!(
            masters = ?config.masters,
            use_ssl = config.use_ssl,
            source = ?source,
            "manager configuration resolved"
        );
        Ok((config, source))
    }
}

fn read_file(path: &Path) -> Result<ManagerConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::file_system(path, "read manager config", e))?;
    serde_json::from_str(&content).map_err(|e| {
        Error::json(
            format!("invalid manager config in '{}'", path.display()),
            e,
        )
    })
}

fn parse_bool(variable: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(Error::configuration(format!(
            "{variable} must be a boolean, got '{other}'"
        ))),
    }
}
