//! Trading endpoints for order management
//!
//! These endpoints are signed and require both an API key and a secret.

use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::catalog;
use crate::dispatch::{DispatchOptions, Dispatcher};
use crate::error::{RestError, RestResult};
use crate::params::Params;
use crate::types::{NewOrder, OrderAck, OrderRef};

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Place a new order
    ///
    /// A [`RestError::RequestResultUnknown`] here means the order may or may
    /// not exist; query it by client order id before retrying.
    #[instrument(skip(self, order), fields(symbol = %order.symbol, side = %order.side, order_type = %order.order_type))]
    pub async fn new_order(&self, order: &NewOrder) -> RestResult<OrderAck> {
        debug!(
            "Placing {} {} order for {} {}",
            order.side, order.order_type, order.quantity, order.symbol
        );

        let result = self
            .dispatcher
            .dispatch(&catalog::NEW_ORDER, &order.to_params(), &DispatchOptions::default())
            .await;

        if let Err(RestError::RequestResultUnknown { .. }) = &result {
            warn!(symbol = %order.symbol, "Order placement outcome unknown");
        }

        result?.decode()
    }

    /// Validate an order without sending it to the matching engine
    #[instrument(skip(self, order), fields(symbol = %order.symbol))]
    pub async fn test_order(&self, order: &NewOrder) -> RestResult<Value> {
        let response = self
            .dispatcher
            .dispatch(&catalog::TEST_ORDER, &order.to_params(), &DispatchOptions::default())
            .await?;
        Ok(response.body)
    }

    /// Check an order's status
    #[instrument(skip(self))]
    pub async fn query_order(
        &self,
        symbol: &str,
        order: &OrderRef,
        recv_window: Option<u64>,
    ) -> RestResult<Value> {
        let params = order
            .apply(Params::new().with("symbol", symbol))
            .with_opt("recvWindow", recv_window);

        let response = self
            .dispatcher
            .dispatch(&catalog::QUERY_ORDER, &params, &DispatchOptions::default())
            .await?;
        Ok(response.body)
    }

    /// Cancel an active order
    #[instrument(skip(self))]
    pub async fn cancel_order(
        &self,
        symbol: &str,
        order: &OrderRef,
        recv_window: Option<u64>,
    ) -> RestResult<Value> {
        let params = order
            .apply(Params::new().with("symbol", symbol))
            .with_opt("recvWindow", recv_window);

        debug!("Cancelling {:?} on {}", order, symbol);

        let response = self
            .dispatcher
            .dispatch(&catalog::CANCEL_ORDER, &params, &DispatchOptions::default())
            .await?;
        Ok(response.body)
    }

    /// Get open orders, for one symbol or all of them
    #[instrument(skip(self))]
    pub async fn open_orders(
        &self,
        symbol: Option<&str>,
        recv_window: Option<u64>,
    ) -> RestResult<Value> {
        let params = Params::new()
            .with_opt("symbol", symbol)
            .with_opt("recvWindow", recv_window);

        let response = self
            .dispatcher
            .dispatch(&catalog::OPEN_ORDERS, &params, &DispatchOptions::default())
            .await?;
        Ok(response.body)
    }

    /// Get all orders for a symbol: active, cancelled or filled
    ///
    /// # Arguments
    /// * `symbol` - Trading pair
    /// * `order_id` - Return orders with id >= this (optional)
    /// * `limit` - Maximum number of orders (default 500)
    #[instrument(skip(self))]
    pub async fn all_orders(
        &self,
        symbol: &str,
        order_id: Option<u64>,
        limit: Option<u16>,
        recv_window: Option<u64>,
    ) -> RestResult<Value> {
        let params = Params::new()
            .with("symbol", symbol)
            .with_opt("orderId", order_id)
            .with_opt("limit", limit)
            .with_opt("recvWindow", recv_window);

        let response = self
            .dispatcher
            .dispatch(&catalog::ALL_ORDERS, &params, &DispatchOptions::default())
            .await?;
        Ok(response.body)
    }
}
