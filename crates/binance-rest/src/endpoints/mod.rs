//! API endpoint implementations

pub mod market;
pub mod user_stream;
pub mod trading;
pub mod account;

pub use market::MarketEndpoints;
pub use user_stream::UserStreamEndpoints;
pub use trading::TradingEndpoints;
pub use account::AccountEndpoints;
