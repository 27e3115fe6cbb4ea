//! Volume manager builder and initialization

use super::VolumeManager;
use crate::traits::VolumeFactory;
use std::sync::Arc;
use volman_config::ManagerConfig;
use volman_core::{Error, Result};

/// Builder for VolumeManager
#[derive(Default)]
pub struct VolumeManagerBuilder {
    config: Option<ManagerConfig>,
    masters: Option<Vec<String>>,
    use_ssl: Option<bool>,
    factory: Option<Arc<dyn VolumeFactory>>,
}

impl VolumeManagerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a loaded configuration; later setters override it
    pub fn with_config(mut self, config: ManagerConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_masters<I, S>(mut self, masters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.masters = Some(masters.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_ssl(mut self, use_ssl: bool) -> Self {
        self.use_ssl = Some(use_ssl);
        self
    }

    pub fn with_factory(mut self, factory: impl VolumeFactory + 'static) -> Self {
        self.factory = Some(Arc::new(factory));
        self
    }

    /// Build the manager
    pub fn build(mut self) -> Result<Arc<VolumeManager>> {
        let factory = self
            .factory
            .take()
            .ok_or_else(|| Error::configuration("volume manager requires a volume factory"))?;
        let config = self.build_config();
        tracing::debug!(
            masters = ?config.masters,
            use_ssl = config.use_ssl,
            "volume manager created"
        );
        Ok(VolumeManager::with_factory(config, factory))
    }

    /// Endpoints are passed through as given; `ConfigLoader` is where they
    /// are validated.
    fn build_config(self) -> ManagerConfig {
        let mut config = self.config.unwrap_or_default();
        if let Some(masters) = self.masters {
            config.masters = masters;
        }
        if let Some(use_ssl) = self.use_ssl {
            config.use_ssl = use_ssl;
        }
        config
    }
}
