//! Main REST client implementation

use binance_auth::Credentials;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::dispatch::{DispatchOptions, Dispatcher, RawResponse, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::endpoint::EndpointDescriptor;
use crate::endpoints::{AccountEndpoints, MarketEndpoints, TradingEndpoints, UserStreamEndpoints};
use crate::error::{RestError, RestResult};
use crate::hooks::RequestHooks;
use crate::params::Params;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{NewOrder, OrderAck, OrderBook, ServerTime};

/// Binance REST API client
///
/// Provides access to public, API-key and signed endpoints. Cloning is cheap
/// and clones share the same transport.
///
/// # Example
///
/// ```no_run
/// use binance_rest::{BinanceRestClient, Credentials};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = BinanceRestClient::new()?;
///     let book = client.depth("BTCUSDT", Some(5)).await?;
///
///     // With credentials for signed endpoints
///     let auth_client = BinanceRestClient::with_credentials(Credentials::from_env()?)?;
///     let account = auth_client.account().account(None).await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BinanceRestClient {
    dispatcher: Dispatcher,
}

impl BinanceRestClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::default().with_credentials(credentials))
    }

    /// Create a new client with credentials from `BINANCE_API_KEY` / `BINANCE_API_SECRET`
    pub fn from_env() -> RestResult<Self> {
        Self::with_credentials(Credentials::from_env()?)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| concat!("binance-rest/", env!("CARGO_PKG_VERSION")).to_string());
        let transport = ReqwestTransport::with_user_agent(&user_agent)
            .map_err(|e| RestError::InvalidConfig(e.to_string()))?;

        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client over a custom transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let dispatcher = Dispatcher::new(transport, config.credentials)
            .with_base_url(config.base_url)
            .with_timeout(config.timeout)
            .with_hooks(config.hooks);

        info!(
            base_url = dispatcher.base_url(),
            has_credentials = !dispatcher.credentials().is_empty(),
            "Created Binance REST client"
        );

        Self { dispatcher }
    }

    /// Check if the client has an API key configured
    pub fn has_api_key(&self) -> bool {
        self.dispatcher.credentials().api_key().is_some()
    }

    /// Check if the client can sign requests
    pub fn can_sign(&self) -> bool {
        self.dispatcher.credentials().has_secret()
    }

    /// Access the underlying dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Call any endpoint directly
    pub async fn dispatch(
        &self,
        descriptor: &EndpointDescriptor,
        params: &Params,
        options: &DispatchOptions,
    ) -> RestResult<RawResponse> {
        self.dispatcher.dispatch(descriptor, params, options).await
    }

    // ========================================================================
    // Endpoint groups
    // ========================================================================

    /// Get market data endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.dispatcher)
    }

    /// Get user data stream endpoints (requires API key)
    pub fn user_stream(&self) -> UserStreamEndpoints<'_> {
        UserStreamEndpoints::new(&self.dispatcher)
    }

    /// Get trading endpoints (requires API key and secret)
    pub fn trading(&self) -> TradingEndpoints<'_> {
        TradingEndpoints::new(&self.dispatcher)
    }

    /// Get account endpoints (requires API key and secret)
    pub fn account(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(&self.dispatcher)
    }

    // ========================================================================
    // Shortcuts
    // ========================================================================

    /// Test connectivity
    pub async fn ping(&self) -> RestResult<serde_json::Value> {
        self.market().ping().await
    }

    /// Get server time
    pub async fn server_time(&self) -> RestResult<ServerTime> {
        self.market().server_time().await
    }

    /// Get order book depth
    pub async fn depth(&self, symbol: &str, limit: Option<u16>) -> RestResult<OrderBook> {
        self.market().depth(symbol, limit).await
    }

    /// Place a new order
    pub async fn new_order(&self, order: &NewOrder) -> RestResult<OrderAck> {
        self.trading().new_order(order).await
    }
}

impl std::fmt::Debug for BinanceRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinanceRestClient")
            .field("base_url", &self.dispatcher.base_url())
            .field("has_api_key", &self.has_api_key())
            .field("can_sign", &self.can_sign())
            .finish()
    }
}

/// Client configuration
///
/// Overrides are merged onto the defaults once, when the client is built.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (empty by default)
    pub credentials: Credentials,
    /// API base URL
    pub base_url: String,
    /// Default per-request timeout
    pub timeout: Duration,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Request observers
    pub hooks: RequestHooks,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            hooks: RequestHooks::default(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Set base URL (e.g., a testnet)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set default timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set request hooks
    pub fn with_hooks(mut self, hooks: RequestHooks) -> Self {
        self.hooks = hooks;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_timeout(Duration::from_secs(60))
            .with_base_url("https://testnet.binance.vision/api")
            .with_user_agent("test-agent");

        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.base_url, "https://testnet.binance.vision/api");
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
    }

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_millis(15_000));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.credentials.is_empty());
    }

    #[test]
    fn test_client_without_credentials() {
        let client =
            BinanceRestClient::with_transport(ClientConfig::default(), Arc::new(MockTransport::new()));
        assert!(!client.has_api_key());
        assert!(!client.can_sign());
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = ClientConfig::new().with_credentials(Credentials::new("key", "hunter2"));
        let client = BinanceRestClient::with_transport(config, Arc::new(MockTransport::new()));
        let debug = format!("{:?}", client);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("can_sign: true"));
    }

    #[tokio::test]
    async fn test_signed_endpoint_without_credentials() {
        let transport = Arc::new(MockTransport::new());
        let client = BinanceRestClient::with_transport(ClientConfig::default(), transport.clone());

        let result = client.account().account(None).await;
        assert!(matches!(result, Err(RestError::MissingCredentials { field: "apiKey", .. })));
        assert_eq!(transport.request_count(), 0);
    }
}
