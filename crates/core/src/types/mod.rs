//! Domain types shared across the volman workspace

pub mod dependency;
pub mod security;

pub use dependency::Dependency;
pub use security::{Credentials, SecretKey};
