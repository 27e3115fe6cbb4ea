//! On-demand volume handle manager
//!
//! [`VolumeManager`] maps a volume name to a lazily built, expensive handle.
//! Concurrent callers asking for the same unseen name share a single
//! construction, while lookups of already cached names never wait on it.
//! Handles are removed by explicit [`VolumeManager::evict`], by
//! [`VolumeManager::close`], or when a handle's own background work reports
//! that its volume no longer exists upstream.
//!
//! The handle itself, the factory that builds it, the metadata client and the
//! backing store are collaborators described by the traits in [`traits`].

pub mod manager;
pub mod traits;

pub use manager::{VolumeManager, VolumeManagerBuilder, VolumeStatus};
pub use traits::{AsyncTaskErrorFn, MetadataClient, Store, Volume, VolumeConfig, VolumeFactory};
pub use volman_config::ManagerConfig;
pub use volman_core::{Credentials, Dependency, Error, Result};
