//! Shared utilities for volman
//!
//! Logging setup and the helper used to run fire-and-forget work whether or
//! not the caller is inside a tokio runtime.

pub mod async_runtime;
pub mod tracing;

pub use async_runtime::*;
