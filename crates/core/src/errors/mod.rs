//! Error types for volman operations

mod builders;
mod classify;
mod conversions;
mod display;
mod types;

pub use types::{Error, Result, SharedSource};
