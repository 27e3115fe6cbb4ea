use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Singleton dependencies the volume manager hands out to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dependency {
    /// Client for the cluster's metadata (master) nodes
    MetadataClient,
    /// Pluggable backing store
    Store,
}

impl Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dependency::MetadataClient => write!(f, "metadata client"),
            Dependency::Store => write!(f, "store"),
        }
    }
}
