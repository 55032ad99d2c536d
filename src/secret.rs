//! Secret key handling.
//!
//! The raw value is only reachable through [`SecretKey::expose`]. Everything
//! that formats a key (`Debug`, `Display`, the JSON summary) shows the
//! fingerprint instead: the first 8 hex characters of `SHA256(value)`.

use std::fmt;

use sha2::{Digest, Sha256};

/// Env var holding the application secret.
pub const SECRET_KEY_ENV: &str = "DATA_PROCESSOR_SECRET_KEY";
/// Unprefixed fallback, read only when [`SECRET_KEY_ENV`] is unset or blank.
pub const SECRET_KEY_FALLBACK_ENV: &str = "SECRET_KEY";

#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    /// Returns `None` for empty or whitespace-only input.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// Read the secret from [`SECRET_KEY_ENV`], then [`SECRET_KEY_FALLBACK_ENV`].
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same resolution as [`SecretKey::from_env`] over an arbitrary lookup.
    /// A blank primary value counts as unset and falls through.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(SECRET_KEY_ENV)
            .and_then(Self::new)
            .or_else(|| lookup(SECRET_KEY_FALLBACK_ENV).and_then(Self::new))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        hex::encode(digest)[..8].to_string()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(sha256:{})", self.fingerprint())
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
