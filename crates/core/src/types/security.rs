//! Credential types exposed by volume handles

use crate::constants::REDACTED;
use std::fmt::{self, Debug, Display};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret half of a volume's credential pair, zeroized on drop
///
/// Neither `Debug` nor `Display` print the value.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Borrow the raw secret (be careful with the returned value)
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SecretKey").field(&REDACTED).finish()
    }
}

impl Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

/// Access/secret key pair owned by a volume
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: SecretKey,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: SecretKey::new(secret_key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_secret_is_redacted() {
        let creds = Credentials::new("AKIA", "s3cr3t");
        let debug = format!("{creds:?}");
        assert!(debug.contains("AKIA"));
        assert!(!debug.contains("s3cr3t"));
        assert_eq!(creds.secret_key.to_string(), REDACTED);
        assert_eq!(creds.secret_key.expose(), "s3cr3t");
    }

    proptest! {
        #[test]
        fn prop_secret_never_formatted(secret in "[0-9]{4,32}") {
            let key = SecretKey::new(secret.clone());
            let debug = format!("{key:?}");
            let display = key.to_string();
            prop_assert!(!debug.contains(&secret));
            prop_assert!(!display.contains(&secret));
        }
    }
}
