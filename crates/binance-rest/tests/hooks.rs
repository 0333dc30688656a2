//! Integration tests for request hooks and concurrent use

mod common;

use binance_rest::hooks::{RequestInfo, ResponseInfo};
use binance_rest::transport::TransportError;
use binance_rest::{BinanceRestClient, ClientConfig, Credentials, RequestHooks, SecurityTier};
use common::*;
use parking_lot::Mutex;
use serde_json::json;
use std::sync::Arc;

fn recording_hooks() -> (
    Arc<Mutex<Vec<RequestInfo>>>,
    Arc<Mutex<Vec<ResponseInfo>>>,
    RequestHooks,
) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let responses = Arc::new(Mutex::new(Vec::new()));
    let (req_sink, resp_sink) = (requests.clone(), responses.clone());

    let hooks = RequestHooks::new()
        .on_request(move |info| req_sink.lock().push(info.clone()))
        .on_response(move |info| resp_sink.lock().push(info.clone()));

    (requests, responses, hooks)
}

#[tokio::test]
async fn test_hooks_run_once_per_request() {
    let (requests, responses, hooks) = recording_hooks();
    let transport = ScriptedTransport::new();
    transport.respond(200, json!({}));

    let config = ClientConfig::new()
        .with_credentials(Credentials::new(API_KEY, API_SECRET))
        .with_hooks(hooks);
    let client = BinanceRestClient::with_transport(config, transport.clone());

    client.account().account(None).await.unwrap();

    let requests = requests.lock();
    let responses = responses.lock();
    assert_eq!(requests.len(), 1);
    assert_eq!(responses.len(), 1);

    assert_eq!(requests[0].tier, SecurityTier::Signed);
    assert_eq!(requests[0].url, "https://api.binance.com/api/v3/account");
    assert!(!requests[0].url.contains("signature"));
    assert_eq!(responses[0].status, Some(200));
    assert!(responses[0].error.is_none());
}

#[tokio::test]
async fn test_hooks_see_transport_failure() {
    let (_, responses, hooks) = recording_hooks();
    let transport = ScriptedTransport::new();
    transport.fail(TransportError::ConnectionFailed("dns".to_string()));

    let client = BinanceRestClient::with_transport(ClientConfig::new().with_hooks(hooks), transport);

    assert!(client.ping().await.is_err());

    let responses = responses.lock();
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].status, None);
    assert!(responses[0].error.as_deref().unwrap().contains("dns"));
}

#[tokio::test]
async fn test_hooks_not_called_when_credentials_missing() {
    let (requests, responses, hooks) = recording_hooks();
    let client =
        BinanceRestClient::with_transport(ClientConfig::new().with_hooks(hooks), ScriptedTransport::new());

    assert!(client.account().account(None).await.is_err());
    assert!(requests.lock().is_empty());
    assert!(responses.lock().is_empty());
}

#[tokio::test]
async fn test_concurrent_dispatches_are_independent() {
    let (transport, client) = client_with(Credentials::new(API_KEY, API_SECRET));

    let calls = (0..16).map(|i| {
        let client = client.clone();
        async move {
            client
                .trading()
                .open_orders(Some(&format!("SYM{}", i)), None)
                .await
        }
    });

    let results = futures::future::join_all(calls).await;
    assert!(results.iter().all(|r| r.is_ok()));

    let requests = transport.requests();
    assert_eq!(requests.len(), 16);
    for request in &requests {
        let query = request.query.as_deref().unwrap();
        let (signed, signature) = query.rsplit_once("&signature=").unwrap();
        assert_eq!(signature, binance_auth::sign(signed, API_SECRET));
    }
}
