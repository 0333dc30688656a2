//! Demo 2: Signed Requests
//!
//! Showcases: credentials from the environment, signed endpoints, test orders,
//! and handling the "result unknown" outcome
//!
//! Run: BINANCE_API_KEY=... BINANCE_API_SECRET=... cargo run --bin signed_account

use binance_rest::{BinanceRestClient, NewOrder, OrderSide, RestError};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let client = BinanceRestClient::from_env()?;

    let account = client.account().account(Some(5000)).await?;
    if let Some(balances) = account.get("balances").and_then(|b| b.as_array()) {
        let funded = balances
            .iter()
            .filter(|b| b.get("free").and_then(|f| f.as_str()).is_some_and(|f| f.parse::<f64>().unwrap_or(0.0) > 0.0));
        for balance in funded {
            println!("{} free={}", balance["asset"], balance["free"]);
        }
    }

    // Validated by the exchange but never sent to the matching engine
    let order = NewOrder::limit("BTCUSDT", OrderSide::Buy, dec!(0.001), dec!(10000));
    match client.trading().test_order(&order).await {
        Ok(_) => println!("Test order accepted"),
        Err(err @ RestError::MalformedRequest { .. }) => {
            println!(
                "Test order rejected: {} (code {:?}: {:?})",
                err,
                err.api_code(),
                err.api_message()
            );
        }
        Err(err) if err.is_result_unknown() => {
            println!("Outcome unknown, check open orders before retrying: {}", err);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
