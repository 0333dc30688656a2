//! Common test utilities and fixtures for integration tests
//!
//! Contains a scripted transport and sample payloads in the shape Binance
//! returns them.

#![allow(dead_code)]

use async_trait::async_trait;
use binance_rest::transport::{HttpRequest, HttpResponse, Transport, TransportError};
use binance_rest::{BinanceRestClient, ClientConfig, Credentials};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Arc;

pub const API_KEY: &str = "vmPUZE6mv9SD5VNHk4HlWFsOr6aKE2zvsw0MuIgwCIPy6utIco14y7Ju91duEh8A";
pub const API_SECRET: &str = "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j";

/// Raw depth payload
pub fn depth_payload() -> Value {
    json!({
        "lastUpdateId": 1,
        "bids": [["4.0", "431.0"]],
        "asks": [["4.0002", "12.0"]]
    })
}

/// Binance error body for an unknown symbol
pub fn invalid_symbol_payload() -> Value {
    json!({"code": -1121, "msg": "Invalid symbol."})
}

/// Transport that replays scripted responses and records requests
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: Value) {
        self.responses
            .lock()
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    pub fn fail(&self, error: TransportError) {
        self.responses.lock().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::new(200, json!({}))))
    }
}

/// Build a client over a scripted transport
pub fn client_with(credentials: Credentials) -> (Arc<ScriptedTransport>, BinanceRestClient) {
    let transport = ScriptedTransport::new();
    let config = ClientConfig::new().with_credentials(credentials);
    let client = BinanceRestClient::with_transport(config, transport.clone());
    (transport, client)
}

/// Decode a form-encoded string into ordered pairs
pub fn decode_pairs(encoded: &str) -> Vec<(String, String)> {
    serde_urlencoded::from_str(encoded).expect("valid form encoding")
}

/// Keys of a form-encoded string, in order
pub fn keys(encoded: &str) -> Vec<String> {
    decode_pairs(encoded).into_iter().map(|(k, _)| k).collect()
}
