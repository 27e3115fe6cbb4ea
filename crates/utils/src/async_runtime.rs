use std::thread;
use volman_core::{Error, Result, BACKGROUND_THREAD_PREFIX};

/// Where a background job ended up running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundExecutor {
    /// On the current tokio runtime's blocking pool
    TokioBlocking,
    /// On a dedicated, detached OS thread
    Thread,
}

/// Check if we're already in an async context
#[must_use]
pub fn is_in_async_context() -> bool {
    tokio::runtime::Handle::try_current().is_ok()
}

/// Run `job` without waiting for it
///
/// Inside a tokio runtime the job goes to the blocking pool, since it may
/// perform synchronous network calls. Outside of one a named thread is
/// spawned. The caller never observes the job's outcome.
pub fn spawn_background<F>(label: &str, job: F) -> Result<BackgroundExecutor>
where
    F: FnOnce() + Send + 'static,
{
    if let Ok(handle) = tokio::runtime::Handle::try_current() {
        // Dropping the JoinHandle detaches the job
        drop(handle.spawn_blocking(job));
        return Ok(BackgroundExecutor::TokioBlocking);
    }

    thread::Builder::new()
        .name(format!("{BACKGROUND_THREAD_PREFIX}-{label}"))
        .spawn(job)
        .map(|_| BackgroundExecutor::Thread)
        .map_err(|e| Error::background(label, e.to_string()))
}
