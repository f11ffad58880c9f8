//! API key lookup.

use std::fmt;

use crate::error::MissingCredential;

/// A non-blank API key. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key; blank input yields `None`.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The secret itself, for the request header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Supplies the API key at call time.
pub trait CredentialSource: Send + Sync {
    /// The key, or the reason it is unavailable.
    fn api_key(&self) -> Result<ApiKey, MissingCredential>;
}

/// Reads the key from an environment variable on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    /// Read from `var`.
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Variable name.
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl CredentialSource for EnvCredentials {
    fn api_key(&self) -> Result<ApiKey, MissingCredential> {
        std::env::var(&self.var)
            .ok()
            .and_then(ApiKey::new)
            .ok_or_else(|| MissingCredential::new(&self.var))
    }
}
