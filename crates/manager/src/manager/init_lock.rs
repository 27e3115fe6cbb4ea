//! Transient per-volume initialization locks
//!
//! A lock exists in the registry only while an attempt to build that volume
//! is in flight. It is removed right after its holder unlocks it, and only if
//! the registry still maps the name to that same lock object.

use dashmap::DashMap;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;
use volman_core::Error;

/// Outcome recorded in an init lock by the caller that held it
#[derive(Debug)]
pub(crate) enum InitState {
    /// No attempt has completed under this lock
    Pending,
    /// An attempt completed; the cache table holds its result
    Done,
    /// The attempt failed; callers queued on this lock get the same error
    Failed(Error),
}

type InitLock = Arc<Mutex<InitState>>;

#[derive(Default)]
pub(crate) struct InitLockRegistry {
    locks: DashMap<String, InitLock>,
}

impl InitLockRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Run `critical` while holding the init lock for `volume`
    ///
    /// Callers racing on the same name either share one lock object and run
    /// one after another, or arrive after it was retired and get a fresh one.
    pub(crate) fn with_lock<R>(
        &self,
        volume: &str,
        critical: impl FnOnce(&mut InitState) -> R,
    ) -> R {
        let lock = self.get_or_create(volume);
        // Declared before the guard so it runs after the unlock
        let _retire = Retire {
            locks: &self.locks,
            volume,
            lock: &lock,
        };
        let mut held = Held {
            state: lock.lock(),
        };
        tracing::debug!(volume, "acquired volume init lock");

        let outcome = critical(&mut *held.state);
        drop(held);
        outcome
    }

    /// Whether an attempt for `volume` is in flight
    pub(crate) fn contains(&self, volume: &str) -> bool {
        self.locks.contains_key(volume)
    }

    pub(crate) fn len(&self) -> usize {
        self.locks.len()
    }

    fn get_or_create(&self, volume: &str) -> InitLock {
        // The shard guard is dropped at the end of this statement, before
        // the caller blocks on the returned lock.
        Arc::clone(
            self.locks
                .entry(volume.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(InitState::Pending)))
                .value(),
        )
    }
}

/// Holds the init lock and marks it finished on release
struct Held<'a> {
    state: MutexGuard<'a, InitState>,
}

impl Drop for Held<'_> {
    fn drop(&mut self) {
        if matches!(*self.state, InitState::Pending) {
            *self.state = InitState::Done;
        }
    }
}

/// Removes the registry entry once the lock has been released
struct Retire<'a> {
    locks: &'a DashMap<String, InitLock>,
    volume: &'a str,
    lock: &'a InitLock,
}

impl Drop for Retire<'_> {
    fn drop(&mut self) {
        self.locks
            .remove_if(self.volume, |_, current| Arc::ptr_eq(current, self.lock));
        tracing::debug!(volume = self.volume, "released volume init lock");
    }
}
