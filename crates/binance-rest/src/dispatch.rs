//! Request dispatch and authentication pipeline
//!
//! [`Dispatcher::dispatch`] turns an [`EndpointDescriptor`] plus call
//! parameters into exactly one HTTP exchange:
//!
//! 1. Resolve the method (GET unless the descriptor says otherwise)
//! 2. Copy the caller's parameters into a working set
//! 3. Enforce the security tier: attach `X-MBX-APIKEY`, and for signed
//!    endpoints append `timestamp` and then `signature` computed over the
//!    serialized working set
//! 4. Join the base URL and endpoint path
//! 5. Hand the request to the [`Transport`]
//! 6. Wrap transport failures as [`RestError::Http`]
//! 7. Classify the status code into success or a typed error
//!
//! The parameter string is serialized once. The signature is computed over
//! that string and then appended to it, so what is signed is byte for byte
//! what is transmitted.

use binance_auth::{timestamp_ms, Credentials};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};

use crate::endpoint::{join_url, EndpointDescriptor};
use crate::error::{RestError, RestResult};
use crate::hooks::{RequestHooks, RequestInfo, ResponseInfo};
use crate::params::Params;
use crate::transport::{HttpRequest, HttpResponse, Transport, TransportError};

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.binance.com/api";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(15_000);

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Per-call options passed through to the transport
#[derive(Debug, Clone, Default)]
pub struct DispatchOptions {
    /// Overrides the client's default timeout for this call
    pub timeout: Option<Duration>,
}

impl DispatchOptions {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// Successful (2xx/3xx) response
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: Value,
}

impl RawResponse {
    /// Deserialize the body into a typed response
    pub fn decode<T: DeserializeOwned>(self) -> RestResult<T> {
        serde_json::from_value(self.body).map_err(|e| RestError::Decode(e.to_string()))
    }
}

/// How a received status code is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 200–399
    Success,
    /// 400–499
    Malformed,
    /// 504 exactly
    ResultUnknown,
    /// 500–599 except 504
    Internal,
    /// Anything else (0, 1xx, 600+)
    Unexpected,
}

/// Classify a status code. Every `u16` maps to exactly one class.
pub fn classify_status(status: u16) -> StatusClass {
    match status {
        200..=399 => StatusClass::Success,
        400..=499 => StatusClass::Malformed,
        504 => StatusClass::ResultUnknown,
        500..=599 => StatusClass::Internal,
        _ => StatusClass::Unexpected,
    }
}

/// Map a completed exchange to the dispatch outcome
fn into_outcome(response: HttpResponse) -> RestResult<RawResponse> {
    let HttpResponse {
        status,
        status_text,
        body,
    } = response;

    match classify_status(status) {
        StatusClass::Success => Ok(RawResponse {
            status,
            status_text,
            body,
        }),
        StatusClass::Malformed => Err(RestError::MalformedRequest {
            status_code: status,
            status_text,
            response: body,
        }),
        StatusClass::ResultUnknown => {
            warn!(status, "Exchange returned 504, request outcome unknown");
            Err(RestError::RequestResultUnknown {
                status_code: status,
                status_text,
                response: body,
            })
        }
        StatusClass::Internal => {
            warn!(status, %status_text, "Exchange internal error");
            Err(RestError::InternalRequest {
                status_code: status,
                status_text,
                response: body,
            })
        }
        StatusClass::Unexpected => Err(RestError::Http(TransportError::UnexpectedStatus(status))),
    }
}

/// Builds, authenticates, sends and classifies requests
///
/// Holds only immutable state, so one dispatcher can serve any number of
/// concurrent calls.
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    credentials: Credentials,
    base_url: String,
    timeout: Duration,
    hooks: RequestHooks,
}

impl Dispatcher {
    /// Create a dispatcher with default base URL and timeout
    pub fn new(transport: Arc<dyn Transport>, credentials: Credentials) -> Self {
        Self {
            transport,
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            hooks: RequestHooks::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_hooks(mut self, hooks: RequestHooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build the wire request for an endpoint without sending it
    ///
    /// Fails with [`RestError::MissingCredentials`] when the endpoint's tier
    /// needs a credential that is not configured. The API key is checked
    /// before the secret.
    pub fn prepare(
        &self,
        descriptor: &EndpointDescriptor,
        params: &Params,
        options: &DispatchOptions,
    ) -> RestResult<HttpRequest> {
        let method = descriptor.method();
        let tier = descriptor.tier();
        let mut working = params.clone();
        let mut headers = Vec::new();

        if tier.requires_api_key() {
            let api_key = self
                .credentials
                .api_key()
                .ok_or(RestError::MissingCredentials {
                    field: "apiKey",
                    tier,
                })?;
            headers.push((API_KEY_HEADER.to_string(), api_key.to_string()));
        }

        let encoded = if tier.requires_signature() {
            if !self.credentials.has_secret() {
                return Err(RestError::MissingCredentials {
                    field: "apiSecret",
                    tier,
                });
            }

            working.push("timestamp", timestamp_ms());
            let canonical = working.to_form_string()?;
            let signature = self
                .credentials
                .sign(&canonical)
                .ok_or(RestError::MissingCredentials {
                    field: "apiSecret",
                    tier,
                })?;
            format!("{}&signature={}", canonical, signature)
        } else {
            working.to_form_string()?
        };

        let payload = (!encoded.is_empty()).then_some(encoded);
        let (query, body) = if method.uses_query() {
            (payload, None)
        } else {
            (None, payload)
        };

        Ok(HttpRequest {
            method,
            url: join_url(&self.base_url, descriptor.path()),
            headers,
            query,
            body,
            timeout: Some(options.timeout.unwrap_or(self.timeout)),
        })
    }

    /// Send one request to an endpoint and classify the outcome
    ///
    /// The request is transmitted at most once; nothing is retried.
    #[instrument(
        skip(self, descriptor, params, options),
        fields(path = descriptor.path(), method = %descriptor.method(), tier = %descriptor.tier())
    )]
    pub async fn dispatch(
        &self,
        descriptor: &EndpointDescriptor,
        params: &Params,
        options: &DispatchOptions,
    ) -> RestResult<RawResponse> {
        let request = self.prepare(descriptor, params, options)?;
        let method = request.method;
        let url = request.url.clone();

        debug!(url = %url, params = params.len(), "Sending request");
        self.hooks.invoke_request(&RequestInfo {
            method,
            url: url.clone(),
            tier: descriptor.tier(),
        });

        let started = Instant::now();
        let result = self.transport.execute(request).await;
        let elapsed = started.elapsed();

        self.hooks.invoke_response(&ResponseInfo {
            method,
            url,
            status: result.as_ref().ok().map(|r| r.status),
            error: result.as_ref().err().map(|e| e.to_string()),
            elapsed,
        });

        match result {
            Ok(response) => {
                debug!(status = response.status, ?elapsed, "Received response");
                into_outcome(response)
            }
            Err(err) => {
                warn!(error = %err, ?elapsed, "Transport failure");
                Err(RestError::Http(err))
            }
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("hooks", &self.hooks)
            .finish()
    }
}
