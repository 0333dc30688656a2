//! Observability hooks for request dispatch
//!
//! Hooks let callers observe traffic (for logging, metrics or auditing)
//! without the dispatcher depending on any particular sink. They run at two
//! fixed points: just before the request is handed to the transport and just
//! after the transport returns.
//!
//! # Example
//!
//! ```
//! use binance_rest::hooks::RequestHooks;
//!
//! let hooks = RequestHooks::new()
//!     .on_request(|info| {
//!         println!("-> {} {} [{}]", info.method, info.url, info.tier);
//!     })
//!     .on_response(|info| {
//!         println!("<- {:?} in {:?}", info.status, info.elapsed);
//!     });
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::endpoint::{HttpMethod, SecurityTier};

/// Information about a request about to be sent
///
/// Never contains the API secret or the computed signature.
#[derive(Debug, Clone)]
pub struct RequestInfo {
    pub method: HttpMethod,
    /// URL without the query string
    pub url: String,
    pub tier: SecurityTier,
}

/// Information about a finished exchange
#[derive(Debug, Clone)]
pub struct ResponseInfo {
    pub method: HttpMethod,
    pub url: String,
    /// Status code, `None` when the transport failed
    pub status: Option<u16>,
    /// Transport error message, if any
    pub error: Option<String>,
    pub elapsed: Duration,
}

pub type RequestHook = Arc<dyn Fn(&RequestInfo) + Send + Sync>;
pub type ResponseHook = Arc<dyn Fn(&ResponseInfo) + Send + Sync>;

/// Request hooks container
///
/// Hooks are optional and executed synchronously on the dispatching task.
#[derive(Clone, Default)]
pub struct RequestHooks {
    pub(crate) on_request: Option<RequestHook>,
    pub(crate) on_response: Option<ResponseHook>,
}

impl fmt::Debug for RequestHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestHooks")
            .field("on_request", &self.on_request.as_ref().map(|_| "..."))
            .field("on_response", &self.on_response.as_ref().map(|_| "..."))
            .finish()
    }
}

impl RequestHooks {
    /// Create an empty hooks container
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback run before each request is sent
    pub fn on_request<F>(mut self, f: F) -> Self
    where
        F: Fn(&RequestInfo) + Send + Sync + 'static,
    {
        self.on_request = Some(Arc::new(f));
        self
    }

    /// Register a callback run after each response or transport failure
    pub fn on_response<F>(mut self, f: F) -> Self
    where
        F: Fn(&ResponseInfo) + Send + Sync + 'static,
    {
        self.on_response = Some(Arc::new(f));
        self
    }

    pub(crate) fn invoke_request(&self, info: &RequestInfo) {
        if let Some(ref hook) = self.on_request {
            hook(info);
        }
    }

    pub(crate) fn invoke_response(&self, info: &ResponseInfo) {
        if let Some(ref hook) = self.on_response {
            hook(info);
        }
    }
}
