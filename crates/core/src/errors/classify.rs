//! Error classification used when deciding how to react to a failure

use super::types::Error;

impl Error {
    /// Whether this error reports that the volume no longer exists upstream
    ///
    /// This is the only class of asynchronously reported error that causes
    /// the volume manager to evict a cached handle.
    #[must_use]
    pub const fn is_volume_not_found(&self) -> bool {
        matches!(self, Self::VolumeNotFound { .. })
    }

    /// Whether this error comes from reading a dependency too early
    #[must_use]
    pub const fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured { .. })
    }
}
