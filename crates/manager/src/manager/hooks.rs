//! Eviction hook handed to every volume for its background tasks

use super::VolumeManager;
use crate::traits::AsyncTaskErrorFn;
use std::sync::{Arc, Weak};
use volman_core::Error;

/// Build the callback a volume's background tasks report errors through
///
/// A "volume does not exist" error evicts `volume`; anything else is left to
/// the volume itself. The manager is held weakly so a volume never keeps it
/// alive.
pub(crate) fn eviction_hook(manager: Weak<VolumeManager>, volume: &str) -> AsyncTaskErrorFn {
    let volume = volume.to_string();
    Arc::new(move |err: &Error| {
        if !err.is_volume_not_found() {
            return;
        }
        let Some(manager) = manager.upgrade() else {
            return;
        };
        tracing::info!(volume = %volume, error = %err, "volume removed upstream, evicting");
        manager.evict(&volume);
    })
}
