//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::VolumeNotFound { volume } => {
                write!(f, "volume '{volume}' does not exist")
            }
            Error::NotConfigured { dependency } => {
                write!(f, "{dependency} not configured")
            }
            Error::AlreadyConfigured { dependency } => {
                write!(f, "{dependency} already configured")
            }
            Error::Construction {
                volume, message, ..
            } => {
                write!(f, "failed to load volume '{volume}': {message}")
            }
            Error::Teardown {
                volume, message, ..
            } => {
                write!(f, "failed to close volume '{volume}': {message}")
            }
            Error::MetadataClient { endpoint, message } => {
                write!(f, "metadata client error for '{endpoint}': {message}")
            }
            Error::Background { task, message } => {
                write!(f, "failed to start background task '{task}': {message}")
            }
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
            Error::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "file system {} operation failed for '{}': {}",
                    operation,
                    path.display(),
                    source
                )
            }
            Error::Json { message, .. } => {
                write!(f, "JSON error: {message}")
            }
        }
    }
}
