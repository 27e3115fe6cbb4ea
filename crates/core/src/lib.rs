//! Core domain types, errors, and constants for `volman`.
//!
//! ## Key Components
//!
//! - **`errors`**: the `Error` enum shared by every crate in the workspace,
//!   together with the classification helpers the volume manager uses to
//!   decide when an asynchronously reported failure means "evict".
//! - **`types`**: small domain types such as `Credentials` and the
//!   `Dependency` kinds the manager hands out.
//! - **`constants`**: environment variable names and defaults.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result},
    types::*,
};
