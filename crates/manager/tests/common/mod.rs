#![allow(dead_code)]

use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};
use std::thread;
use std::time::{Duration, Instant};
use volman::{
    AsyncTaskErrorFn, Credentials, Error, ManagerConfig, Result, Volume, VolumeConfig,
    VolumeFactory, VolumeManager,
};

/// Volume double that counts how the manager drives it
pub struct MockVolume {
    name: String,
    masters: Vec<String>,
    on_async_task_error: AsyncTaskErrorFn,
    manager: Mutex<Option<Weak<VolumeManager>>>,
    closes: AtomicUsize,
    metadata_loads: AtomicUsize,
    fail_close: bool,
}

impl MockVolume {
    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    pub fn metadata_load_count(&self) -> usize {
        self.metadata_loads.load(Ordering::SeqCst)
    }

    pub fn masters(&self) -> &[String] {
        &self.masters
    }

    pub fn has_manager(&self) -> bool {
        self.manager
            .lock()
            .as_ref()
            .and_then(Weak::upgrade)
            .is_some()
    }

    /// Simulate a background task reporting an error
    pub fn report(&self, err: &Error) {
        (self.on_async_task_error)(err);
    }
}

impl Volume for MockVolume {
    fn name(&self) -> &str {
        &self.name
    }

    fn credentials(&self) -> Credentials {
        Credentials::new(format!("ak-{}", self.name), format!("sk-{}", self.name))
    }

    fn attach_manager(&self, manager: Weak<VolumeManager>) {
        *self.manager.lock() = Some(manager);
    }

    fn load_metadata(&self) {
        self.metadata_loads.fetch_add(1, Ordering::SeqCst);
    }

    fn close(&self) -> Result<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        if self.fail_close {
            return Err(Error::teardown(&self.name, "connection reset"));
        }
        Ok(())
    }
}

#[derive(Default)]
struct FactoryState {
    calls: AtomicUsize,
    created: Mutex<Vec<Arc<MockVolume>>>,
    failures: Mutex<HashMap<String, Error>>,
    failing_close: Mutex<HashSet<String>>,
}

/// Factory double with injectable delay and failures
#[derive(Clone, Default)]
pub struct MockFactory {
    state: Arc<FactoryState>,
    delay: Duration,
}

impl MockFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    /// Make every construction of `volume` fail with `err`
    pub fn fail(&self, volume: &str, err: Error) {
        self.state.failures.lock().insert(volume.to_string(), err);
    }

    pub fn recover(&self, volume: &str) {
        self.state.failures.lock().remove(volume);
    }

    /// Make closing any instance of `volume` return an error
    pub fn fail_close(&self, volume: &str) {
        self.state.failing_close.lock().insert(volume.to_string());
    }

    pub fn calls(&self) -> usize {
        self.state.calls.load(Ordering::SeqCst)
    }

    /// Every instance built so far, oldest first
    pub fn created(&self) -> Vec<Arc<MockVolume>> {
        self.state.created.lock().clone()
    }

    pub fn created_named(&self, volume: &str) -> Vec<Arc<MockVolume>> {
        self.created()
            .into_iter()
            .filter(|v| v.name() == volume)
            .collect()
    }

    pub fn latest(&self, volume: &str) -> Option<Arc<MockVolume>> {
        self.created_named(volume).pop()
    }
}

impl VolumeFactory for MockFactory {
    fn create(&self, config: VolumeConfig) -> Result<Arc<dyn Volume>> {
        self.state.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        if let Some(err) = self.state.failures.lock().get(&config.volume) {
            return Err(err.clone());
        }

        let fail_close = self.state.failing_close.lock().contains(&config.volume);
        let volume = Arc::new(MockVolume {
            name: config.volume,
            masters: config.masters,
            on_async_task_error: config.on_async_task_error,
            manager: Mutex::new(None),
            closes: AtomicUsize::new(0),
            metadata_loads: AtomicUsize::new(0),
            fail_close,
        });
        self.state.created.lock().push(Arc::clone(&volume));
        Ok(volume as Arc<dyn Volume>)
    }
}

pub fn test_config() -> ManagerConfig {
    ManagerConfig::new(vec![
        "192.168.0.11:17010".to_string(),
        "192.168.0.12:17010".to_string(),
    ])
}

pub fn manager_with(factory: &MockFactory) -> Arc<VolumeManager> {
    // Only the first test in a binary installs the subscriber
    let _ = volman_utils::tracing::init_with_filter("volman=debug");
    VolumeManager::new(test_config(), factory.clone())
}

/// Poll `condition` until it holds or `timeout` expires
pub fn wait_until(timeout: Duration, condition: impl Fn() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    condition()
}
