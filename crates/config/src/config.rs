//! Manager configuration shared by every component that builds volumes
//!
//! `ManagerConfig` is immutable after loading and cheap to clone.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use volman_core::{Error, Result, MASTERS_SEPARATOR};

/// Bootstrap parameters for the volume manager
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ManagerConfig {
    /// Metadata (master) endpoints, passed unchanged to the volume factory
    pub masters: Vec<String>,

    /// Whether the metadata client should use TLS
    pub use_ssl: bool,
}

impl ManagerConfig {
    pub fn new(masters: Vec<String>) -> Self {
        Self {
            masters,
            use_ssl: false,
        }
    }

    pub fn with_ssl(mut self, use_ssl: bool) -> Self {
        self.use_ssl = use_ssl;
        self
    }

    /// Trim endpoints and reject blank ones
    pub fn normalize(mut self) -> Result<Self> {
        let mut masters = Vec::with_capacity(self.masters.len());
        for (index, master) in self.masters.iter().enumerate() {
            let trimmed = master.trim();
            if trimmed.is_empty() {
                return Err(Error::configuration(format!(
                    "master endpoint at position {index} is empty"
                )));
            }
            masters.push(trimmed.to_string());
        }
        self.masters = masters;
        Ok(self)
    }

    /// Fail unless at least one endpoint is configured
    pub fn require_masters(&self) -> Result<()> {
        if self.masters.is_empty() {
            return Err(Error::configuration("no master endpoints configured"));
        }
        Ok(())
    }
}

/// Where the master endpoints were taken from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default configuration
    Default,
    /// Configuration file
    ConfigFile(PathBuf),
    /// Environment variable
    EnvironmentVariable(String),
}

/// Split a separator-delimited endpoint list, dropping surrounding whitespace
///
/// Empty segments are kept so that `normalize` can report them.
pub fn parse_masters(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(MASTERS_SEPARATOR)
        .map(|s| s.trim().to_string())
        .collect()
}
