//! Credentials and request signing for the Binance REST API
//!
//! Binance authenticates in two tiers. Some endpoints only need the API key,
//! sent as the `X-MBX-APIKEY` header. Signed endpoints also need a `timestamp`
//! parameter and an HMAC-SHA256 `signature` computed over the exact
//! form-encoded parameter string that goes on the wire.
//!
//! # Example
//!
//! ```
//! use binance_auth::{sign, Credentials};
//!
//! let creds = Credentials::new("my-api-key", "my-secret");
//! let signature = creds.sign("symbol=LTCBTC&timestamp=1499827319559");
//! assert_eq!(signature, Some(sign("symbol=LTCBTC&timestamp=1499827319559", "my-secret")));
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::Credentials;
pub use error::{AuthError, AuthResult};
pub use signer::{sign, timestamp_ms};
