//! Market data endpoints
//!
//! All of these are public except `historical_trades`, which needs an API key.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::catalog;
use crate::dispatch::{DispatchOptions, Dispatcher};
use crate::error::RestResult;
use crate::params::Params;
use crate::types::{BookTicker, Kline, KlineInterval, OrderBook, ServerTime, SymbolPrice};

/// Market data endpoints
pub struct MarketEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Test connectivity
    #[instrument(skip(self))]
    pub async fn ping(&self) -> RestResult<Value> {
        let response = self
            .dispatcher
            .dispatch(&catalog::PING, &Params::new(), &DispatchOptions::default())
            .await?;
        Ok(response.body)
    }

    /// Get server time
    #[instrument(skip(self))]
    pub async fn server_time(&self) -> RestResult<ServerTime> {
        self.dispatcher
            .dispatch(&catalog::SERVER_TIME, &Params::new(), &DispatchOptions::default())
            .await?
            .decode()
    }

    /// Get exchange trading rules and symbol information
    #[instrument(skip(self))]
    pub async fn exchange_info(&self) -> RestResult<Value> {
        let response = self
            .dispatcher
            .dispatch(&catalog::EXCHANGE_INFO, &Params::new(), &DispatchOptions::default())
            .await?;
        Ok(response.body)
    }

    /// Get order book depth
    ///
    /// # Arguments
    /// * `symbol` - Trading pair (e.g., "BTCUSDT")
    /// * `limit` - Number of levels (5, 10, 20, 50, 100, 500, 1000)
    #[instrument(skip(self))]
    pub async fn depth(&self, symbol: &str, limit: Option<u16>) -> RestResult<OrderBook> {
        let params = Params::new()
            .with("symbol", symbol)
            .with_opt("limit", limit);

        debug!("Fetching order book for {}", symbol);

        let response = self
            .dispatcher
            .dispatch(&catalog::DEPTH, &params, &DispatchOptions::default())
            .await?;
        OrderBook::from_raw(response.body)
    }

    /// Get compressed/aggregate trades
    ///
    /// # Arguments
    /// * `symbol` - Trading pair
    /// * `from_id` - Aggregate trade id to start from (inclusive)
    /// * `start_time` / `end_time` - Millisecond range (at most one hour apart)
    /// * `limit` - Maximum number of trades (default 500)
    #[instrument(skip(self))]
    pub async fn agg_trades(
        &self,
        symbol: &str,
        from_id: Option<u64>,
        start_time: Option<u64>,
        end_time: Option<u64>,
        limit: Option<u16>,
    ) -> RestResult<Value> {
        let params = Params::new()
            .with("symbol", symbol)
            .with_opt("fromId", from_id)
            .with_opt("startTime", start_time)
            .with_opt("endTime", end_time)
            .with_opt("limit", limit);

        let response = self
            .dispatcher
            .dispatch(&catalog::AGG_TRADES, &params, &DispatchOptions::default())
            .await?;
        Ok(response.body)
    }

    /// Get candlesticks
    ///
    /// # Arguments
    /// * `symbol` - Trading pair
    /// * `interval` - Candle interval
    /// * `start_time` / `end_time` - Millisecond range (optional)
    /// * `limit` - Maximum number of candles (default 500)
    #[instrument(skip(self))]
    pub async fn klines(
        &self,
        symbol: &str,
        interval: KlineInterval,
        start_time: Option<u64>,
        end_time: Option<u64>,
        limit: Option<u16>,
    ) -> RestResult<Vec<Kline>> {
        let params = Params::new()
            .with("symbol", symbol)
            .with("interval", interval)
            .with_opt("limit", limit)
            .with_opt("startTime", start_time)
            .with_opt("endTime", end_time);

        debug!("Fetching {} klines for {}", interval, symbol);

        let response = self
            .dispatcher
            .dispatch(&catalog::KLINES, &params, &DispatchOptions::default())
            .await?;
        Kline::list_from_raw(response.body)
    }

    /// Get 24 hour price change statistics
    #[instrument(skip(self))]
    pub async fn ticker_24hr(&self, symbol: &str) -> RestResult<Value> {
        let params = Params::new().with("symbol", symbol);
        let response = self
            .dispatcher
            .dispatch(&catalog::TICKER_24HR, &params, &DispatchOptions::default())
            .await?;
        Ok(response.body)
    }

    /// Get latest price for every symbol
    #[instrument(skip(self))]
    pub async fn all_prices(&self) -> RestResult<Vec<SymbolPrice>> {
        self.dispatcher
            .dispatch(&catalog::ALL_PRICES, &Params::new(), &DispatchOptions::default())
            .await?
            .decode()
    }

    /// Get best bid/ask for every symbol
    #[instrument(skip(self))]
    pub async fn all_book_tickers(&self) -> RestResult<Vec<BookTicker>> {
        self.dispatcher
            .dispatch(&catalog::ALL_BOOK_TICKERS, &Params::new(), &DispatchOptions::default())
            .await?
            .decode()
    }

    /// Get older trades (requires API key)
    ///
    /// # Arguments
    /// * `symbol` - Trading pair
    /// * `limit` - Maximum number of trades (default 500)
    /// * `from_id` - Trade id to fetch from
    #[instrument(skip(self))]
    pub async fn historical_trades(
        &self,
        symbol: &str,
        limit: Option<u16>,
        from_id: Option<u64>,
    ) -> RestResult<Value> {
        let params = Params::new()
            .with("symbol", symbol)
            .with_opt("limit", limit)
            .with_opt("fromId", from_id);

        let response = self
            .dispatcher
            .dispatch(&catalog::HISTORICAL_TRADES, &params, &DispatchOptions::default())
            .await?;
        Ok(response.body)
    }
}
