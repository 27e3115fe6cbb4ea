//! Core error type definitions

use crate::types::Dependency;
use std::path::PathBuf;
use std::sync::Arc;

/// Result type alias for volman operations
pub type Result<T> = std::result::Result<T, Error>;

/// Shared, cloneable error source
pub type SharedSource = Arc<dyn std::error::Error + Send + Sync>;

/// Core error type for volman operations using thiserror
///
/// The type is `Clone` so that a single failed volume construction can be
/// handed verbatim to every caller that waited on that attempt.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The named volume does not exist upstream
    VolumeNotFound { volume: String },

    /// A singleton dependency was read before it was configured
    NotConfigured { dependency: Dependency },

    /// A singleton dependency was configured a second time
    AlreadyConfigured { dependency: Dependency },

    /// The volume factory failed to build a handle
    Construction {
        volume: String,
        message: String,
        #[source]
        source: Option<SharedSource>,
    },

    /// Closing a volume handle failed
    Teardown {
        volume: String,
        message: String,
        #[source]
        source: Option<SharedSource>,
    },

    /// Metadata (master) client errors
    MetadataClient { endpoint: String, message: String },

    /// Background task could not be started
    Background { task: String, message: String },

    /// Configuration errors
    Configuration { message: String },

    /// File system operations
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: Arc<std::io::Error>,
    },

    /// JSON serialization/deserialization errors
    Json {
        message: String,
        #[source]
        source: Arc<serde_json::Error>,
    },
}
