//! Types for Binance REST API requests and responses
//!
//! Most endpoints are passed through as `serde_json::Value`. A few responses
//! are reshaped into friendlier structures: order book levels arrive as
//! `[price, quantity, []]` arrays and klines as 12-element arrays.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::{RestError, RestResult};
use crate::params::Params;

// ============================================================================
// Market Data Types
// ============================================================================

/// Server time response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTime {
    /// Milliseconds since epoch
    pub server_time: u64,
}

/// One price level of an order book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: String,
    pub quantity: String,
}

impl PriceLevel {
    pub fn new(price: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            price: price.into(),
            quantity: quantity.into(),
        }
    }

    /// Price as a decimal
    pub fn price_decimal(&self) -> Option<Decimal> {
        self.price.parse().ok()
    }

    /// Quantity as a decimal
    pub fn quantity_decimal(&self) -> Option<Decimal> {
        self.quantity.parse().ok()
    }

    fn from_raw(raw: &[Value]) -> RestResult<Self> {
        match raw {
            [price, quantity, ..] => Ok(Self {
                price: value_to_string(price)?,
                quantity: value_to_string(quantity)?,
            }),
            _ => Err(RestError::Decode(format!(
                "price level needs price and quantity, got {} elements",
                raw.len()
            ))),
        }
    }
}

/// Order book snapshot with named price levels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBook {
    pub last_update_id: u64,
    pub bids: Vec<PriceLevel>,
    pub asks: Vec<PriceLevel>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOrderBook {
    last_update_id: u64,
    bids: Vec<Vec<Value>>,
    asks: Vec<Vec<Value>>,
}

impl OrderBook {
    /// Reshape the raw depth payload
    pub fn from_raw(body: Value) -> RestResult<Self> {
        let raw: RawOrderBook =
            serde_json::from_value(body).map_err(|e| RestError::Decode(e.to_string()))?;

        Ok(Self {
            last_update_id: raw.last_update_id,
            bids: raw
                .bids
                .iter()
                .map(|level| PriceLevel::from_raw(level))
                .collect::<RestResult<_>>()?,
            asks: raw
                .asks
                .iter()
                .map(|level| PriceLevel::from_raw(level))
                .collect::<RestResult<_>>()?,
        })
    }

    pub fn best_bid(&self) -> Option<&PriceLevel> {
        self.bids.first()
    }

    pub fn best_ask(&self) -> Option<&PriceLevel> {
        self.asks.first()
    }

    /// Get spread (best ask minus best bid)
    pub fn spread(&self) -> Option<Decimal> {
        let ask = self.best_ask()?.price_decimal()?;
        let bid = self.best_bid()?.price_decimal()?;
        Some(ask - bid)
    }
}

/// One candlestick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kline {
    pub open_time: u64,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
    pub close_time: u64,
    pub quote_asset_volume: String,
    pub trades: u64,
    pub taker_buy_base_asset_volume: String,
    pub taker_buy_quote_asset_volume: String,
}

impl Kline {
    /// Reshape one raw kline array
    pub fn from_raw(raw: &[Value]) -> RestResult<Self> {
        if raw.len() < 11 {
            return Err(RestError::Decode(format!(
                "kline needs 11 fields, got {}",
                raw.len()
            )));
        }

        Ok(Self {
            open_time: value_to_u64(&raw[0])?,
            open: value_to_string(&raw[1])?,
            high: value_to_string(&raw[2])?,
            low: value_to_string(&raw[3])?,
            close: value_to_string(&raw[4])?,
            volume: value_to_string(&raw[5])?,
            close_time: value_to_u64(&raw[6])?,
            quote_asset_volume: value_to_string(&raw[7])?,
            trades: value_to_u64(&raw[8])?,
            taker_buy_base_asset_volume: value_to_string(&raw[9])?,
            taker_buy_quote_asset_volume: value_to_string(&raw[10])?,
        })
    }

    /// Reshape a raw klines response
    pub fn list_from_raw(body: Value) -> RestResult<Vec<Self>> {
        let rows: Vec<Vec<Value>> =
            serde_json::from_value(body).map_err(|e| RestError::Decode(e.to_string()))?;
        rows.iter().map(|row| Self::from_raw(row)).collect()
    }
}

/// Latest price for a symbol
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SymbolPrice {
    pub symbol: String,
    pub price: String,
}

/// Best bid/ask for a symbol
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookTicker {
    pub symbol: String,
    pub bid_price: String,
    pub bid_qty: String,
    pub ask_price: String,
    pub ask_qty: String,
}

/// Candlestick interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KlineInterval {
    OneMinute,
    ThreeMinutes,
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    OneHour,
    TwoHours,
    FourHours,
    SixHours,
    EightHours,
    TwelveHours,
    OneDay,
    ThreeDays,
    OneWeek,
    OneMonth,
}

impl KlineInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMinute => "1m",
            Self::ThreeMinutes => "3m",
            Self::FiveMinutes => "5m",
            Self::FifteenMinutes => "15m",
            Self::ThirtyMinutes => "30m",
            Self::OneHour => "1h",
            Self::TwoHours => "2h",
            Self::FourHours => "4h",
            Self::SixHours => "6h",
            Self::EightHours => "8h",
            Self::TwelveHours => "12h",
            Self::OneDay => "1d",
            Self::ThreeDays => "3d",
            Self::OneWeek => "1w",
            Self::OneMonth => "1M",
        }
    }
}

impl fmt::Display for KlineInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Trading Types
// ============================================================================

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderType {
    Limit,
    Market,
    StopLoss,
    StopLossLimit,
    TakeProfit,
    TakeProfitLimit,
    LimitMaker,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Limit => "LIMIT",
            Self::Market => "MARKET",
            Self::StopLoss => "STOP_LOSS",
            Self::StopLossLimit => "STOP_LOSS_LIMIT",
            Self::TakeProfit => "TAKE_PROFIT",
            Self::TakeProfitLimit => "TAKE_PROFIT_LIMIT",
            Self::LimitMaker => "LIMIT_MAKER",
        };
        f.write_str(s)
    }
}

/// Time in force
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeInForce {
    /// Good till cancelled
    Gtc,
    /// Immediate or cancel
    Ioc,
    /// Fill or kill
    Fok,
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gtc => write!(f, "GTC"),
            Self::Ioc => write!(f, "IOC"),
            Self::Fok => write!(f, "FOK"),
        }
    }
}

/// New order request
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub symbol: String,
    pub side: OrderSide,
    pub order_type: OrderType,
    pub quantity: Decimal,
    pub price: Option<Decimal>,
    pub time_in_force: Option<TimeInForce>,
    pub new_client_order_id: Option<String>,
    pub stop_price: Option<Decimal>,
    pub iceberg_qty: Option<Decimal>,
    pub recv_window: Option<u64>,
}

impl NewOrder {
    /// Create a market order
    pub fn market(symbol: impl Into<String>, side: OrderSide, quantity: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Market,
            quantity,
            price: None,
            time_in_force: None,
            new_client_order_id: None,
            stop_price: None,
            iceberg_qty: None,
            recv_window: None,
        }
    }

    /// Create a good-till-cancelled limit order
    pub fn limit(
        symbol: impl Into<String>,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            order_type: OrderType::Limit,
            price: Some(price),
            time_in_force: Some(TimeInForce::Gtc),
            ..Self::market(symbol, side, quantity)
        }
    }

    pub fn with_time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    pub fn with_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.new_client_order_id = Some(id.into());
        self
    }

    pub fn with_stop_price(mut self, stop_price: Decimal) -> Self {
        self.stop_price = Some(stop_price);
        self
    }

    pub fn with_iceberg_qty(mut self, qty: Decimal) -> Self {
        self.iceberg_qty = Some(qty);
        self
    }

    pub fn with_recv_window(mut self, ms: u64) -> Self {
        self.recv_window = Some(ms);
        self
    }

    /// Parameters in the order Binance documents them
    pub fn to_params(&self) -> Params {
        Params::new()
            .with("symbol", &self.symbol)
            .with("side", self.side)
            .with("type", self.order_type)
            .with_opt("timeInForce", self.time_in_force)
            .with("quantity", self.quantity)
            .with_opt("price", self.price)
            .with_opt("newClientOrderId", self.new_client_order_id.as_deref())
            .with_opt("stopPrice", self.stop_price)
            .with_opt("icebergQty", self.iceberg_qty)
            .with_opt("recvWindow", self.recv_window)
    }
}

/// Identifies an existing order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderRef {
    /// Exchange-assigned order id
    Id(u64),
    /// Client-assigned order id
    ClientId(String),
}

impl OrderRef {
    pub(crate) fn apply(&self, params: Params) -> Params {
        match self {
            Self::Id(id) => params.with("orderId", id),
            Self::ClientId(id) => params.with("origClientOrderId", id),
        }
    }
}

/// Acknowledgement of a new or cancelled order
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAck {
    pub symbol: String,
    pub order_id: u64,
    pub client_order_id: String,
    pub transact_time: Option<u64>,
}

/// User data stream listen key
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListenKey {
    pub listen_key: String,
}

// ============================================================================
// Helpers
// ============================================================================

fn value_to_string(value: &Value) -> RestResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(RestError::Decode(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

fn value_to_u64(value: &Value) -> RestResult<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| RestError::Decode(format!("expected unsigned integer, got {}", n))),
        Value::String(s) => s
            .parse()
            .map_err(|_| RestError::Decode(format!("expected unsigned integer, got {:?}", s))),
        other => Err(RestError::Decode(format!(
            "expected unsigned integer, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_order_book_reshape() {
        let raw = json!({
            "lastUpdateId": 1,
            "bids": [["4.0", "431.0"]],
            "asks": [["4.0002", "12.0"]]
        });

        let book = OrderBook::from_raw(raw).unwrap();
        assert_eq!(
            serde_json::to_value(&book).unwrap(),
            json!({
                "lastUpdateId": 1,
                "bids": [{"price": "4.0", "quantity": "431.0"}],
                "asks": [{"price": "4.0002", "quantity": "12.0"}]
            })
        );
        assert_eq!(book.spread(), Some(dec!(0.0002)));
    }

    #[test]
    fn test_order_book_ignores_extra_level_fields() {
        let raw = json!({
            "lastUpdateId": 1027024,
            "bids": [["4.00000000", "431.00000000", []]],
            "asks": []
        });

        let book = OrderBook::from_raw(raw).unwrap();
        assert_eq!(book.bids[0], PriceLevel::new("4.00000000", "431.00000000"));
        assert!(book.best_ask().is_none());
        assert!(book.spread().is_none());
    }

    #[test]
    fn test_order_book_rejects_short_level() {
        let raw = json!({"lastUpdateId": 1, "bids": [["4.0"]], "asks": []});
        assert!(matches!(OrderBook::from_raw(raw), Err(RestError::Decode(_))));
    }

    #[test]
    fn test_kline_reshape() {
        let raw = json!([[
            1499040000000u64,
            "0.01634790",
            "0.80000000",
            "0.01575800",
            "0.01577100",
            "148976.11427815",
            1499644799999u64,
            "2434.19055334",
            308,
            "1756.87402397",
            "28.46694368",
            "17928899.62484339"
        ]]);

        let klines = Kline::list_from_raw(raw).unwrap();
        assert_eq!(klines.len(), 1);
        assert_eq!(klines[0].open_time, 1499040000000);
        assert_eq!(klines[0].close, "0.01577100");
        assert_eq!(klines[0].trades, 308);
        assert_eq!(klines[0].taker_buy_quote_asset_volume, "28.46694368");
    }

    #[test]
    fn test_limit_order_params_order() {
        let order = NewOrder::limit("LTCBTC", OrderSide::Buy, dec!(1), dec!(0.1))
            .with_recv_window(5000);

        assert_eq!(
            order.to_params().to_form_string().unwrap(),
            "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000"
        );
    }

    #[test]
    fn test_market_order_has_no_price() {
        let order = NewOrder::market("BTCUSDT", OrderSide::Sell, dec!(0.5));
        let params = order.to_params();
        assert!(!params.contains("price"));
        assert!(!params.contains("timeInForce"));
        assert_eq!(params.get("type"), Some("MARKET"));
    }

    #[test]
    fn test_order_ref_params() {
        let params = OrderRef::Id(7).apply(Params::new().with("symbol", "X"));
        assert_eq!(params.get("orderId"), Some("7"));

        let params = OrderRef::ClientId("abc".into()).apply(Params::new());
        assert_eq!(params.get("origClientOrderId"), Some("abc"));
    }

    #[test]
    fn test_interval_strings() {
        assert_eq!(KlineInterval::OneMinute.to_string(), "1m");
        assert_eq!(KlineInterval::OneMonth.to_string(), "1M");
    }
}
