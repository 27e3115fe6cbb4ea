//! Singleton dependencies configured once at startup

use super::VolumeManager;
use crate::traits::{MetadataClient, Store};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use volman_core::{Dependency, Error, Result};

/// Write-once slot for a shared dependency
pub(crate) struct DependencySlot<T: ?Sized> {
    dependency: Dependency,
    cell: OnceCell<Arc<T>>,
}

impl<T: ?Sized> DependencySlot<T> {
    pub(crate) const fn new(dependency: Dependency) -> Self {
        Self {
            dependency,
            cell: OnceCell::new(),
        }
    }

    pub(crate) fn set(&self, value: Arc<T>) -> Result<()> {
        self.try_init(|| Ok(value)).map(drop)
    }

    /// Run `init` and publish its value, unless the slot is already filled
    ///
    /// Concurrent callers block until the first `init` finishes, so at most
    /// one `init` ever succeeds. A failed `init` leaves the slot empty.
    pub(crate) fn try_init<F>(&self, init: F) -> Result<Arc<T>>
    where
        F: FnOnce() -> Result<Arc<T>>,
    {
        let mut installed = false;
        let value = self.cell.get_or_try_init(|| {
            let value = init()?;
            installed = true;
            Ok::<_, Error>(value)
        })?;
        if installed {
            Ok(Arc::clone(value))
        } else {
            Err(Error::already_configured(self.dependency))
        }
    }

    pub(crate) fn get(&self) -> Result<Arc<T>> {
        self.cell
            .get()
            .cloned()
            .ok_or_else(|| Error::not_configured(self.dependency))
    }

    pub(crate) fn is_configured(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl VolumeManager {
    /// Hand the backing store to the manager
    ///
    /// The store's `init` is called with a back-reference before it is
    /// published, and only for the store that wins. Fails if a store was
    /// already configured. `init` must not read the store back from the
    /// manager.
    pub fn configure_store(&self, store: Arc<dyn Store>) -> Result<()> {
        self.store.try_init(|| {
            store.init(self.self_ref.clone());
            Ok(store)
        })?;
        tracing::debug!("store configured");
        Ok(())
    }

    /// The configured backing store
    pub fn store(&self) -> Result<Arc<dyn Store>> {
        self.store.get()
    }

    /// Hand an already built metadata client to the manager
    pub fn configure_metadata_client(&self, client: Arc<dyn MetadataClient>) -> Result<()> {
        self.metadata_client.set(client)?;
        tracing::debug!(masters = ?self.config.masters, "metadata client configured");
        Ok(())
    }

    /// Build the metadata client from the manager's own endpoints and TLS flag
    pub fn configure_metadata_client_with<F>(
        &self,
        connect: F,
    ) -> Result<Arc<dyn MetadataClient>>
    where
        F: FnOnce(&[String], bool) -> Result<Arc<dyn MetadataClient>>,
    {
        let client = self
            .metadata_client
            .try_init(|| connect(&self.config.masters, self.config.use_ssl))?;
        tracing::debug!(masters = ?self.config.masters, "metadata client configured");
        Ok(client)
    }

    /// The configured metadata client
    pub fn metadata_client(&self) -> Result<Arc<dyn MetadataClient>> {
        self.metadata_client.get()
    }

    /// Whether `dependency` has been configured
    pub fn is_configured(&self, dependency: Dependency) -> bool {
        match dependency {
            Dependency::MetadataClient => self.metadata_client.is_configured(),
            Dependency::Store => self.store.is_configured(),
        }
    }
}
