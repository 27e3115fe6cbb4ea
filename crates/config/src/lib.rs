//! Bootstrap configuration for volman
//!
//! The volume manager needs very little to start: the list of metadata
//! (master) endpoints that is passed through to every volume it builds, and
//! whether the metadata client should talk TLS. This crate loads those
//! settings with a fixed precedence (defaults, then a JSON file, then the
//! environment) and validates them once at startup.

pub mod config;
pub mod loader;

#[cfg(test)]
mod config_tests;

pub use config::{parse_masters, ConfigSource, ManagerConfig};
pub use loader::ConfigLoader;
