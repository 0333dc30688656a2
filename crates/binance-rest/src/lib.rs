//! REST API client for the Binance cryptocurrency exchange
//!
//! This crate builds correctly authenticated Binance REST requests, classifies
//! responses into typed outcomes and reshapes a few payloads into friendlier
//! structures.
//!
//! # Features
//!
//! - **Market Data**: Ping, server time, depth, trades, klines, tickers
//! - **User Data Stream**: Start, keep alive and close listen keys
//! - **Trading**: Place, test, query and cancel orders
//! - **Account**: Balances and trade history
//!
//! # Authentication
//!
//! Each endpoint declares a security tier. Public endpoints get nothing
//! attached. API-key endpoints get the `X-MBX-APIKEY` header. Signed endpoints
//! additionally get `timestamp` and an HMAC-SHA256 `signature` of the exact
//! parameter string that is transmitted.
//!
//! # Errors
//!
//! A call resolves to a value or one [`RestError`]. HTTP 4xx is
//! `MalformedRequest`, 5xx is `InternalRequest` and 504 is
//! `RequestResultUnknown`. The last means the exchange may or may not have
//! acted on the request. Nothing is retried internally.
//!
//! # Example
//!
//! ```no_run
//! use binance_rest::{BinanceRestClient, Credentials, NewOrder, OrderSide};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = BinanceRestClient::new()?;
//!     let book = client.depth("BTCUSDT", Some(5)).await?;
//!     println!("Best bid: {:?}", book.best_bid());
//!
//!     // Signed endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = BinanceRestClient::with_credentials(creds)?;
//!     let order = NewOrder::limit("BTCUSDT", OrderSide::Buy, dec!(0.001), dec!(20000));
//!     auth_client.trading().test_order(&order).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod client;
pub mod dispatch;
pub mod endpoint;
pub mod endpoints;
pub mod error;
pub mod hooks;
pub mod params;
pub mod transport;
pub mod types;

// Re-export main types
pub use binance_auth::Credentials;
pub use client::{BinanceRestClient, ClientConfig};
pub use dispatch::{classify_status, DispatchOptions, Dispatcher, RawResponse, StatusClass};
pub use endpoint::{EndpointDescriptor, HttpMethod, SecurityTier};
pub use error::{ErrorKind, RestError, RestResult};
pub use hooks::RequestHooks;
pub use params::Params;

// Re-export endpoint-specific types
pub use types::{
    // Market data
    BookTicker, Kline, KlineInterval, OrderBook, PriceLevel, ServerTime, SymbolPrice,
    // Trading
    NewOrder, OrderAck, OrderRef, OrderSide, OrderType, TimeInForce,
    // User data stream
    ListenKey,
};
