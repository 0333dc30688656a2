//! API credentials for authenticated requests
//!
//! Both halves are optional: a client with no credentials can still call public
//! endpoints, and a client with only an API key can call key-only endpoints.
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::error::{AuthError, AuthResult};
use crate::signer;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "BINANCE_API_KEY";
/// Environment variable holding the API secret
pub const API_SECRET_ENV: &str = "BINANCE_API_SECRET";

/// API credentials, immutable once constructed
#[derive(Default)]
pub struct Credentials {
    api_key: Option<String>,
    api_secret: Option<SecretString>,
}

impl Credentials {
    /// Create credentials with both an API key and a secret
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            api_secret: Some(SecretString::from(api_secret.into())),
        }
    }

    /// Create credentials for key-only endpoints
    pub fn api_key_only(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            api_secret: None,
        }
    }

    /// Create credentials from optional parts
    pub fn from_parts(api_key: Option<String>, api_secret: Option<String>) -> Self {
        Self {
            api_key,
            api_secret: api_secret.map(SecretString::from),
        }
    }

    /// Create credentials from environment variables
    ///
    /// Reads `BINANCE_API_KEY` (required) and `BINANCE_API_SECRET` (optional).
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        let api_secret = std::env::var(API_SECRET_ENV).ok();

        debug!(has_secret = api_secret.is_some(), "Loaded credentials from environment");

        Ok(Self::from_parts(Some(api_key), api_secret))
    }

    /// Get the API key, if configured
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Check whether an API secret is configured
    pub fn has_secret(&self) -> bool {
        self.api_secret.is_some()
    }

    /// Check whether neither half is configured
    pub fn is_empty(&self) -> bool {
        self.api_key.is_none() && self.api_secret.is_none()
    }

    /// Sign a canonical body with the configured secret
    ///
    /// Returns `None` when no secret is configured.
    pub fn sign(&self, canonical_body: &str) -> Option<String> {
        self.api_secret
            .as_ref()
            .map(|secret| signer::sign(canonical_body, secret.expose_secret()))
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretString with same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: self
                .api_secret
                .as_ref()
                .map(|s| SecretString::from(s.expose_secret().to_owned())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "api_key",
                &self
                    .api_key
                    .as_ref()
                    .map(|k| format!("{}...", k.chars().take(8).collect::<String>())),
            )
            .field(
                "api_secret",
                &self.api_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
