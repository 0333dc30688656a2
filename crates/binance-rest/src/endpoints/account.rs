//! Private account endpoints
//!
//! These endpoints are signed.

use serde_json::Value;
use tracing::instrument;

use crate::catalog;
use crate::dispatch::{DispatchOptions, Dispatcher};
use crate::error::RestResult;
use crate::params::Params;

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Get account information and balances
    #[instrument(skip(self))]
    pub async fn account(&self, recv_window: Option<u64>) -> RestResult<Value> {
        let params = Params::new().with_opt("recvWindow", recv_window);
        let response = self
            .dispatcher
            .dispatch(&catalog::ACCOUNT, &params, &DispatchOptions::default())
            .await?;
        Ok(response.body)
    }

    /// Get trades for a symbol
    ///
    /// # Arguments
    /// * `symbol` - Trading pair
    /// * `limit` - Maximum number of trades (default 500)
    /// * `from_id` - Trade id to fetch from (optional)
    #[instrument(skip(self))]
    pub async fn my_trades(
        &self,
        symbol: &str,
        limit: Option<u16>,
        from_id: Option<u64>,
        recv_window: Option<u64>,
    ) -> RestResult<Value> {
        let params = Params::new()
            .with("symbol", symbol)
            .with_opt("limit", limit)
            .with_opt("fromId", from_id)
            .with_opt("recvWindow", recv_window);

        let response = self
            .dispatcher
            .dispatch(&catalog::MY_TRADES, &params, &DispatchOptions::default())
            .await?;
        Ok(response.body)
    }
}
