//! Error types for REST API operations
//!
//! Every dispatch resolves to either a [`RawResponse`](crate::RawResponse) or
//! exactly one of these variants. Nothing is retried or swallowed internally.
//!
//! [`RestError::RequestResultUnknown`] deserves special care: Binance answered
//! 504, which means the request reached the matching engine but its effect is
//! unknown. An order may or may not have been placed. Callers must treat it
//! as an unknown outcome and reconcile (e.g. query the order), never as a
//! failure.

use serde_json::Value;

use crate::endpoint::SecurityTier;
use crate::transport::TransportError;

/// Errors that can occur during REST API operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RestError {
    /// Endpoint requires a credential that was not configured
    #[error("Missing credentials: {field} is required for {tier} endpoints")]
    MissingCredentials {
        /// Name of the missing field (`apiKey` or `apiSecret`)
        field: &'static str,
        /// Tier of the endpoint that was called
        tier: SecurityTier,
    },

    /// No HTTP response was obtained
    #[error("HTTP error: {0}")]
    Http(#[from] TransportError),

    /// Exchange rejected the request (HTTP 4xx)
    #[error("Malformed request: {status_code} {status_text}")]
    MalformedRequest {
        status_code: u16,
        status_text: String,
        response: Value,
    },

    /// Exchange timed out internally (HTTP 504); the outcome is unknown
    #[error("Request result unknown: {status_code} {status_text}")]
    RequestResultUnknown {
        status_code: u16,
        status_text: String,
        response: Value,
    },

    /// Exchange failed internally (HTTP 5xx other than 504)
    #[error("Internal request error: {status_code} {status_text}")]
    InternalRequest {
        status_code: u16,
        status_text: String,
        response: Value,
    },

    /// Successful response body did not have the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Client could not be configured
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Discriminant of [`RestError`] for matching without destructuring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingCredentials,
    Http,
    MalformedRequest,
    RequestResultUnknown,
    InternalRequest,
    Decode,
    InvalidParameter,
    InvalidConfig,
}

impl RestError {
    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredentials { .. } => ErrorKind::MissingCredentials,
            Self::Http(_) => ErrorKind::Http,
            Self::MalformedRequest { .. } => ErrorKind::MalformedRequest,
            Self::RequestResultUnknown { .. } => ErrorKind::RequestResultUnknown,
            Self::InternalRequest { .. } => ErrorKind::InternalRequest,
            Self::Decode(_) => ErrorKind::Decode,
            Self::InvalidParameter(_) => ErrorKind::InvalidParameter,
            Self::InvalidConfig(_) => ErrorKind::InvalidConfig,
        }
    }

    /// HTTP status code, for errors produced from a received response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::MalformedRequest { status_code, .. }
            | Self::RequestResultUnknown { status_code, .. }
            | Self::InternalRequest { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Response body, for errors produced from a received response
    pub fn response(&self) -> Option<&Value> {
        match self {
            Self::MalformedRequest { response, .. }
            | Self::RequestResultUnknown { response, .. }
            | Self::InternalRequest { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Binance error code (`{"code": -1121, "msg": ..}`), if the body carries one
    pub fn api_code(&self) -> Option<i64> {
        self.response()?.get("code")?.as_i64()
    }

    /// Binance error message, if the body carries one
    pub fn api_message(&self) -> Option<&str> {
        self.response()?.get("msg")?.as_str()
    }

    /// Check whether the request's effect on the exchange is unknown
    pub fn is_result_unknown(&self) -> bool {
        matches!(self, Self::RequestResultUnknown { .. })
    }
}

impl From<binance_auth::AuthError> for RestError {
    fn from(err: binance_auth::AuthError) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::error::Error as _;

    #[test]
    fn test_display_combines_kind_status_and_text() {
        let err = RestError::MalformedRequest {
            status_code: 406,
            status_text: "Not Acceptable".to_string(),
            response: json!({"code": -1121, "msg": "Invalid symbol."}),
        };
        assert_eq!(err.to_string(), "Malformed request: 406 Not Acceptable");

        let err = RestError::RequestResultUnknown {
            status_code: 504,
            status_text: "Gateway Timeout".to_string(),
            response: Value::Null,
        };
        assert_eq!(err.to_string(), "Request result unknown: 504 Gateway Timeout");
    }

    #[test]
    fn test_missing_credentials_names_field_and_tier() {
        let err = RestError::MissingCredentials {
            field: "apiSecret",
            tier: SecurityTier::Signed,
        };
        let msg = err.to_string();
        assert!(msg.contains("apiSecret"));
        assert!(msg.contains("SIGNED"));
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_api_code_and_message() {
        let err = RestError::MalformedRequest {
            status_code: 400,
            status_text: "Bad Request".to_string(),
            response: json!({"code": -1121, "msg": "Invalid symbol."}),
        };
        assert_eq!(err.api_code(), Some(-1121));
        assert_eq!(err.api_message(), Some("Invalid symbol."));
        assert_eq!(err.kind(), ErrorKind::MalformedRequest);
        assert!(!err.is_result_unknown());
    }

    #[test]
    fn test_http_error_keeps_source() {
        let err = RestError::from(TransportError::ConnectionFailed("refused".to_string()));
        assert_eq!(err.kind(), ErrorKind::Http);
        assert!(err.source().is_some());
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn test_auth_error_converts_to_config_error() {
        let err: RestError = binance_auth::AuthError::EnvVarNotSet("BINANCE_API_KEY".into()).into();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }
}
