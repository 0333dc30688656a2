//! HTTP transport abstraction
//!
//! The dispatcher never talks to reqwest directly. It hands a fully built
//! [`HttpRequest`] to a [`Transport`], which must return every completed
//! exchange as an [`HttpResponse`] whatever its status code. Only failures
//! where no HTTP response was obtained are reported as [`TransportError`].
//!
//! # Example
//!
//! ```no_run
//! use binance_rest::transport::{HttpRequest, ReqwestTransport, Transport, TransportError};
//! use binance_rest::HttpMethod;
//!
//! async fn example() -> Result<(), TransportError> {
//!     let transport = ReqwestTransport::new()?;
//!     let request = HttpRequest::new(HttpMethod::Get, "https://api.binance.com/api/v1/ping");
//!     let response = transport.execute(request).await?;
//!     println!("{} {}", response.status, response.body);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::endpoint::HttpMethod;

/// Transport layer errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection failed (refused, DNS, TLS)
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Request could not be built or sent
    #[error("request failed: {0}")]
    Request(String),

    /// Response body could not be read
    #[error("failed to read response body: {0}")]
    Body(String),

    /// A response arrived with a status code outside the classified ranges
    #[error("unexpected HTTP status {0}")]
    UnexpectedStatus(u16),
}

/// Fully built request handed to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Encoded query string, appended after `?`
    pub query: Option<String>,
    /// Encoded form body
    pub body: Option<String>,
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Create a request with no headers, query or body
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            query: None,
            body: None,
            timeout: None,
        }
    }

    /// Look up a header value (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// URL including the query string
    pub fn full_url(&self) -> String {
        match &self.query {
            Some(query) if !query.is_empty() => format!("{}?{}", self.url, query),
            _ => self.url.clone(),
        }
    }

    /// The encoded parameter string, wherever it travels
    pub fn payload(&self) -> Option<&str> {
        self.query.as_deref().or(self.body.as_deref())
    }
}

/// Completed HTTP exchange, whatever the status
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: Value,
}

impl HttpResponse {
    /// Create a response with the canonical reason phrase for `status`
    pub fn new(status: u16, body: Value) -> Self {
        Self {
            status,
            status_text: reason_phrase(status).to_string(),
            body,
        }
    }
}

/// Canonical reason phrase for a status code, empty if unknown
pub fn reason_phrase(status: u16) -> &'static str {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("")
}

/// Trait for HTTP transport abstraction
///
/// Implementations must be safe to share between concurrent dispatches and
/// must not turn non-2xx statuses into errors.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request, exactly once
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Real transport using reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with reqwest defaults
    pub fn new() -> Result<Self, TransportError> {
        Self::with_user_agent(concat!("binance-rest/", env!("CARGO_PKG_VERSION")))
    }

    /// Create a transport with a custom user agent
    pub fn with_user_agent(user_agent: &str) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing reqwest client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    fn map_send_error(err: reqwest::Error, timeout: Option<Duration>) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(timeout.unwrap_or_default())
        } else if err.is_connect() {
            TransportError::ConnectionFailed(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, request.full_url());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_send_error(e, request.timeout))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        debug!(status = status.as_u16(), len = text.len(), "Received response");

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
            body: parse_body(&text),
        })
    }
}

/// Parse a response body as JSON, keeping non-JSON text as a string
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Mock transport for testing
///
/// Returns queued responses in order and records every request it receives.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Default)]
pub struct MockTransport {
    responses: parking_lot::Mutex<std::collections::VecDeque<Result<HttpResponse, TransportError>>>,
    requests: parking_lot::Mutex<Vec<HttpRequest>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and JSON body
    pub fn push_response(&self, status: u16, body: Value) {
        self.responses.lock().push_back(Ok(HttpResponse::new(status, body)));
    }

    /// Queue a transport failure
    pub fn push_error(&self, error: TransportError) {
        self.responses.lock().push_back(Err(error));
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::new(200, Value::Object(Default::default()))))
    }
}
