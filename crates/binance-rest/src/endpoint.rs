//! Endpoint descriptors
//!
//! Every REST operation is described by a static [`EndpointDescriptor`]: its
//! path below the API base, its HTTP method and the security tier that decides
//! which credentials the dispatcher must attach.

use std::fmt;

/// HTTP method of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Method name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether parameters travel in the query string rather than the body
    pub fn uses_query(&self) -> bool {
        matches!(self, Self::Get)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authentication required by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SecurityTier {
    /// Public endpoint, nothing attached
    #[default]
    None,
    /// API key header required
    ApiKey,
    /// API key header plus `timestamp` and `signature` parameters
    Signed,
}

impl SecurityTier {
    /// Whether the API key header must be attached
    pub fn requires_api_key(&self) -> bool {
        matches!(self, Self::ApiKey | Self::Signed)
    }

    /// Whether the request must be signed
    pub fn requires_signature(&self) -> bool {
        matches!(self, Self::Signed)
    }
}

impl fmt::Display for SecurityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "NONE",
            Self::ApiKey => "API_KEY",
            Self::Signed => "SIGNED",
        };
        f.write_str(s)
    }
}

/// Static definition of one API operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EndpointDescriptor {
    path: &'static str,
    method: Option<HttpMethod>,
    tier: SecurityTier,
}

impl EndpointDescriptor {
    /// Describe an endpoint with no explicit method (resolves to GET)
    pub const fn new(path: &'static str, tier: SecurityTier) -> Self {
        Self {
            path,
            method: None,
            tier,
        }
    }

    /// Set the HTTP method
    pub const fn with_method(self, method: HttpMethod) -> Self {
        Self {
            method: Some(method),
            ..self
        }
    }

    pub const fn get(path: &'static str, tier: SecurityTier) -> Self {
        Self::new(path, tier).with_method(HttpMethod::Get)
    }

    pub const fn post(path: &'static str, tier: SecurityTier) -> Self {
        Self::new(path, tier).with_method(HttpMethod::Post)
    }

    pub const fn put(path: &'static str, tier: SecurityTier) -> Self {
        Self::new(path, tier).with_method(HttpMethod::Put)
    }

    pub const fn delete(path: &'static str, tier: SecurityTier) -> Self {
        Self::new(path, tier).with_method(HttpMethod::Delete)
    }

    /// Path below the API base
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Resolved HTTP method, defaulting to GET
    pub fn method(&self) -> HttpMethod {
        self.method.unwrap_or_default()
    }

    /// Required security tier
    pub fn tier(&self) -> SecurityTier {
        self.tier
    }
}

/// Join a base URL and an endpoint path with exactly one slash between them
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
