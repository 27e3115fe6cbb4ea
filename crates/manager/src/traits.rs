//! Contracts between the volume manager and its collaborators

use crate::manager::VolumeManager;
use std::fmt;
use std::sync::{Arc, Weak};
use volman_core::{Credentials, Error, Result};

/// Callback a volume uses to report failures from its background tasks
///
/// Only [`Error::VolumeNotFound`] has an effect: the manager evicts the
/// volume the callback was created for. Every other error is ignored here.
pub type AsyncTaskErrorFn = Arc<dyn Fn(&Error) + Send + Sync>;

/// Everything a factory needs to build one volume
#[derive(Clone)]
pub struct VolumeConfig {
    /// Volume name
    pub volume: String,
    /// Metadata endpoints, as given to the manager
    pub masters: Vec<String>,
    /// Eviction hook for the volume's background tasks
    pub on_async_task_error: AsyncTaskErrorFn,
}

impl fmt::Debug for VolumeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VolumeConfig")
            .field("volume", &self.volume)
            .field("masters", &self.masters)
            .finish_non_exhaustive()
    }
}

/// A cached volume handle
///
/// The manager shares one instance between the cache table and every caller
/// that received it, and calls [`Volume::close`] at most once per instance.
pub trait Volume: Send + Sync {
    /// Name the volume was built for
    fn name(&self) -> &str;

    /// Credential pair, used only for diagnostics
    fn credentials(&self) -> Credentials;

    /// Record the owning manager; called once, before the volume is published
    fn attach_manager(&self, manager: Weak<VolumeManager>);

    /// Post-construction initialization, run in the background after the
    /// volume became visible. Its completion is never awaited.
    fn load_metadata(&self);

    /// Release the volume's resources
    ///
    /// May be invoked from the volume's own background task when that task
    /// reports the volume missing, so it must not wait for that task. It
    /// must not call back into the manager.
    fn close(&self) -> Result<()>;
}

/// Builds volume handles on a cache miss
///
/// Called synchronously while the per-volume init lock is held; it must not
/// ask the same manager for the same volume name.
pub trait VolumeFactory: Send + Sync {
    fn create(&self, config: VolumeConfig) -> Result<Arc<dyn Volume>>;
}

impl<F> VolumeFactory for F
where
    F: Fn(VolumeConfig) -> Result<Arc<dyn Volume>> + Send + Sync,
{
    fn create(&self, config: VolumeConfig) -> Result<Arc<dyn Volume>> {
        self(config)
    }
}

/// Client for the cluster's metadata nodes
pub trait MetadataClient: Send + Sync {
    /// Endpoints the client talks to
    fn endpoints(&self) -> &[String];
}

/// Pluggable backing store
pub trait Store: Send + Sync {
    /// Called once when the store is handed to the manager
    fn init(&self, manager: Weak<VolumeManager>);
}
