//! The volume manager: name → handle table with single-flight construction

mod builder;
mod dependencies;
mod hooks;
mod init_lock;

pub use builder::VolumeManagerBuilder;

use crate::traits::{MetadataClient, Store, Volume, VolumeConfig, VolumeFactory};
use dependencies::DependencySlot;
use init_lock::{InitLockRegistry, InitState};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};
use volman_config::ManagerConfig;
use volman_core::{Dependency, Error, Result};

/// Where a volume name currently stands in the manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeStatus {
    /// Neither cached nor being built
    Absent,
    /// A construction attempt is in flight
    Constructing,
    /// A handle is cached and returned without construction
    Ready,
}

/// Result of one pass under a volume's init lock
enum LoadAttempt {
    Cached(Arc<dyn Volume>),
    Created(Arc<dyn Volume>),
    Failed(Error),
    Retry,
}

/// Caches volume handles by name and builds each at most once at a time
///
/// Constructed once at startup and shared by reference (`Arc`) with every
/// component that needs volume access.
pub struct VolumeManager {
    config: ManagerConfig,
    factory: Arc<dyn VolumeFactory>,
    volumes: RwLock<HashMap<String, Arc<dyn Volume>>>,
    init_locks: InitLockRegistry,
    metadata_client: DependencySlot<dyn MetadataClient>,
    store: DependencySlot<dyn Store>,
    self_ref: Weak<VolumeManager>,
}

impl VolumeManager {
    /// Create a manager that builds volumes with `factory`
    pub fn new(config: ManagerConfig, factory: impl VolumeFactory + 'static) -> Arc<Self> {
        Self::with_factory(config, Arc::new(factory))
    }

    /// Start building a manager
    pub fn builder() -> VolumeManagerBuilder {
        VolumeManagerBuilder::new()
    }

    pub(crate) fn with_factory(
        config: ManagerConfig,
        factory: Arc<dyn VolumeFactory>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|self_ref| Self {
            config,
            factory,
            volumes: RwLock::new(HashMap::new()),
            init_locks: InitLockRegistry::new(),
            metadata_client: DependencySlot::new(Dependency::MetadataClient),
            store: DependencySlot::new(Dependency::Store),
            self_ref: self_ref.clone(),
        })
    }

    /// Bootstrap configuration
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Metadata endpoints handed to every new volume
    pub fn masters(&self) -> &[String] {
        &self.config.masters
    }

    /// Return the cached handle for `name`, building it on first use
    ///
    /// Concurrent callers for the same unseen name share one factory call and
    /// all receive its handle, or its error. A failure is not remembered: the
    /// next call after it tries again.
    pub fn volume(&self, name: &str) -> Result<Arc<dyn Volume>> {
        if let Some(volume) = self.cached(name) {
            return Ok(volume);
        }
        self.load_volume(name)
    }

    /// Remove `name` from the cache and close its handle
    ///
    /// Returns whether this call removed an entry. Only the remover closes
    /// the handle, so racing evictions close it once.
    pub fn evict(&self, name: &str) -> bool {
        let removed = self.volumes.write().remove(name);
        let Some(volume) = removed else {
            return false;
        };
        tracing::debug!(volume = name, "released volume");
        if let Err(err) = volume.close() {
            tracing::error!(volume = name, error = %err, "failed to close released volume");
        }
        true
    }

    /// Close every cached handle and empty the cache
    ///
    /// Close errors are logged and otherwise ignored. Returns how many
    /// handles were closed.
    pub fn close(&self) -> usize {
        let mut volumes = self.volumes.write();
        let count = volumes.len();
        for (name, volume) in volumes.drain() {
            match volume.close() {
                Ok(()) => tracing::debug!(volume = %name, "released volume"),
                Err(err) => {
                    tracing::error!(volume = %name, error = %err, "failed to close volume")
                }
            }
        }
        count
    }

    /// Current state of `name`
    ///
    /// The table and the init-lock registry are read one after the other, so
    /// this is a best-effort snapshot: a construction finishing between the
    /// two reads can be reported as `Absent`.
    pub fn status(&self, name: &str) -> VolumeStatus {
        if self.volumes.read().contains_key(name) {
            VolumeStatus::Ready
        } else if self.init_locks.contains(name) {
            VolumeStatus::Constructing
        } else {
            VolumeStatus::Absent
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.volumes.read().contains_key(name)
    }

    /// Number of cached volumes
    pub fn len(&self) -> usize {
        self.volumes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.read().is_empty()
    }

    /// Names of the cached volumes, sorted
    pub fn volume_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.volumes.read().keys().cloned().collect();
        names.sort();
        names
    }

    fn cached(&self, name: &str) -> Option<Arc<dyn Volume>> {
        self.volumes.read().get(name).cloned()
    }

    fn load_volume(&self, name: &str) -> Result<Arc<dyn Volume>> {
        let _span = volman_utils::tracing::volume_span(name).entered();
        loop {
            let attempt = self
                .init_locks
                .with_lock(name, |state| self.load_under_lock(name, state));

            match attempt {
                LoadAttempt::Cached(volume) => return Ok(volume),
                LoadAttempt::Created(volume) => {
                    self.start_background_init(name, &volume);
                    return Ok(volume);
                }
                LoadAttempt::Failed(err) => return Err(err),
                // Woke up on a retired lock and the entry it produced is
                // already gone; take a fresh lock from the registry.
                LoadAttempt::Retry => continue,
            }
        }
    }

    fn load_under_lock(&self, name: &str, state: &mut InitState) -> LoadAttempt {
        if let Some(volume) = self.cached(name) {
            return LoadAttempt::Cached(volume);
        }
        match state {
            InitState::Pending => {}
            InitState::Done => return LoadAttempt::Retry,
            InitState::Failed(err) => return LoadAttempt::Failed(err.clone()),
        }

        let volume = match self.factory.create(self.volume_config(name)) {
            Ok(volume) => volume,
            Err(err) => {
                tracing::debug!(volume = name, error = %err, "failed to load volume");
                *state = InitState::Failed(err.clone());
                return LoadAttempt::Failed(err);
            }
        };

        let credentials = volume.credentials();
        tracing::debug!(
            volume = name,
            access_key = %credentials.access_key,
            has_secret_key = !credentials.secret_key.is_empty(),
            "loaded volume"
        );

        volume.attach_manager(self.self_ref.clone());
        self.volumes
            .write()
            .insert(name.to_string(), Arc::clone(&volume));
        *state = InitState::Done;
        LoadAttempt::Created(volume)
    }

    fn volume_config(&self, name: &str) -> VolumeConfig {
        VolumeConfig {
            volume: name.to_string(),
            masters: self.config.masters.clone(),
            on_async_task_error: hooks::eviction_hook(self.self_ref.clone(), name),
        }
    }

    fn start_background_init(&self, name: &str, volume: &Arc<dyn Volume>) {
        let volume = Arc::clone(volume);
        if let Err(err) = volman_utils::spawn_background(name, move || volume.load_metadata()) {
            tracing::warn!(volume = name, error = %err, "failed to start volume metadata loading");
        }
    }
}

impl fmt::Debug for VolumeManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VolumeManager")
            .field("masters", &self.config.masters)
            .field("volumes", &self.volume_names())
            .field("in_flight", &self.init_locks.len())
            .finish_non_exhaustive()
    }
}
