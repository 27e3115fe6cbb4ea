//! Builder methods for creating errors with context

use super::types::{Error, SharedSource};
use crate::types::Dependency;
use std::path::PathBuf;
use std::sync::Arc;

impl Error {
    /// Create a "volume does not exist" error
    #[must_use]
    pub fn volume_not_found(volume: impl Into<String>) -> Self {
        Error::VolumeNotFound {
            volume: volume.into(),
        }
    }

    /// Create a "dependency not configured" error
    #[must_use]
    pub fn not_configured(dependency: Dependency) -> Self {
        Error::NotConfigured { dependency }
    }

    /// Create a "dependency already configured" error
    #[must_use]
    pub fn already_configured(dependency: Dependency) -> Self {
        Error::AlreadyConfigured { dependency }
    }

    /// Create a volume construction error
    #[must_use]
    pub fn construction(volume: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Construction {
            volume: volume.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a volume construction error with a source error
    #[must_use]
    pub fn construction_with_source(
        volume: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Construction {
            volume: volume.into(),
            message: message.into(),
            source: Some(shared(source)),
        }
    }

    /// Create a volume teardown error
    #[must_use]
    pub fn teardown(volume: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Teardown {
            volume: volume.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a volume teardown error with a source error
    #[must_use]
    pub fn teardown_with_source(
        volume: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Teardown {
            volume: volume.into(),
            message: message.into(),
            source: Some(shared(source)),
        }
    }

    /// Create a metadata client error
    #[must_use]
    pub fn metadata_client(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Error::MetadataClient {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Create a background task error
    #[must_use]
    pub fn background(task: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Background {
            task: task.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a file system error
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source: Arc::new(source),
        }
    }

    /// Create a JSON error
    #[must_use]
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Json {
            message: message.into(),
            source: Arc::new(source),
        }
    }
}

fn shared(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> SharedSource {
    Arc::from(source.into())
}
