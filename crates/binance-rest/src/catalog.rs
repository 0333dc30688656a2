//! Endpoint catalog
//!
//! One descriptor per supported Binance operation. Paths are relative to the
//! API base (`https://api.binance.com/api` by default).

use crate::endpoint::{EndpointDescriptor, SecurityTier};

// Market data (public)

pub const PING: EndpointDescriptor = EndpointDescriptor::new("v1/ping", SecurityTier::None);
pub const SERVER_TIME: EndpointDescriptor = EndpointDescriptor::new("v1/time", SecurityTier::None);
pub const EXCHANGE_INFO: EndpointDescriptor =
    EndpointDescriptor::new("v1/exchangeInfo", SecurityTier::None);
pub const DEPTH: EndpointDescriptor = EndpointDescriptor::new("v1/depth", SecurityTier::None);
pub const AGG_TRADES: EndpointDescriptor =
    EndpointDescriptor::new("v1/aggTrades", SecurityTier::None);
pub const KLINES: EndpointDescriptor = EndpointDescriptor::new("v1/klines", SecurityTier::None);
pub const TICKER_24HR: EndpointDescriptor =
    EndpointDescriptor::new("v1/ticker/24hr", SecurityTier::None);
pub const ALL_PRICES: EndpointDescriptor =
    EndpointDescriptor::new("v1/ticker/allPrices", SecurityTier::None);
pub const ALL_BOOK_TICKERS: EndpointDescriptor =
    EndpointDescriptor::new("v1/ticker/allBookTickers", SecurityTier::None);

// Market data (API key)

pub const HISTORICAL_TRADES: EndpointDescriptor =
    EndpointDescriptor::get("v1/historicalTrades", SecurityTier::ApiKey);

// User data stream (API key)

pub const START_USER_DATA_STREAM: EndpointDescriptor =
    EndpointDescriptor::post("v1/userDataStream", SecurityTier::ApiKey);
pub const KEEP_ALIVE_USER_DATA_STREAM: EndpointDescriptor =
    EndpointDescriptor::put("v1/userDataStream", SecurityTier::ApiKey);
pub const CLOSE_USER_DATA_STREAM: EndpointDescriptor =
    EndpointDescriptor::delete("v1/userDataStream", SecurityTier::ApiKey);

// Trading (signed)

pub const NEW_ORDER: EndpointDescriptor =
    EndpointDescriptor::post("v3/order", SecurityTier::Signed);
pub const TEST_ORDER: EndpointDescriptor =
    EndpointDescriptor::post("v3/order/test", SecurityTier::Signed);
pub const QUERY_ORDER: EndpointDescriptor =
    EndpointDescriptor::get("v3/order", SecurityTier::Signed);
pub const CANCEL_ORDER: EndpointDescriptor =
    EndpointDescriptor::delete("v3/order", SecurityTier::Signed);
pub const OPEN_ORDERS: EndpointDescriptor =
    EndpointDescriptor::get("v3/openOrders", SecurityTier::Signed);
pub const ALL_ORDERS: EndpointDescriptor =
    EndpointDescriptor::get("v3/allOrders", SecurityTier::Signed);

// Account (signed)

pub const ACCOUNT: EndpointDescriptor = EndpointDescriptor::get("v3/account", SecurityTier::Signed);
pub const MY_TRADES: EndpointDescriptor =
    EndpointDescriptor::get("v3/myTrades", SecurityTier::Signed);

/// Every descriptor with its operation name
pub const ALL: &[(&str, EndpointDescriptor)] = &[
    ("ping", PING),
    ("time", SERVER_TIME),
    ("exchangeInfo", EXCHANGE_INFO),
    ("depth", DEPTH),
    ("aggTrades", AGG_TRADES),
    ("klines", KLINES),
    ("ticker24hr", TICKER_24HR),
    ("allPrices", ALL_PRICES),
    ("allBookTickers", ALL_BOOK_TICKERS),
    ("historicalTrades", HISTORICAL_TRADES),
    ("startUserDataStream", START_USER_DATA_STREAM),
    ("keepAliveUserDataStream", KEEP_ALIVE_USER_DATA_STREAM),
    ("closeUserDataStream", CLOSE_USER_DATA_STREAM),
    ("newOrder", NEW_ORDER),
    ("testOrder", TEST_ORDER),
    ("queryOrder", QUERY_ORDER),
    ("cancelOrder", CANCEL_ORDER),
    ("openOrders", OPEN_ORDERS),
    ("allOrders", ALL_ORDERS),
    ("account", ACCOUNT),
    ("myTrades", MY_TRADES),
];

/// Look up a descriptor by operation name
pub fn lookup(name: &str) -> Option<EndpointDescriptor> {
    ALL.iter().find(|(n, _)| *n == name).map(|(_, d)| *d)
}
