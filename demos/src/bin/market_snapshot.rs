//! Demo 1: Market Snapshot
//!
//! Showcases: public endpoints, reshaped order book and klines, request hooks
//!
//! Run: cargo run --bin market_snapshot -- BTCUSDT

use binance_rest::{BinanceRestClient, ClientConfig, KlineInterval, RequestHooks};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let symbol = std::env::args().nth(1).unwrap_or_else(|| "BTCUSDT".to_string());

    let hooks = RequestHooks::new().on_response(|info| {
        info!(url = %info.url, status = ?info.status, elapsed = ?info.elapsed, "request finished");
    });
    let client = BinanceRestClient::with_config(ClientConfig::new().with_hooks(hooks))?;

    client.ping().await?;
    let time = client.server_time().await?;
    println!("Server time: {}", time.server_time);

    let book = client.depth(&symbol, Some(5)).await?;
    println!("\n{} order book (lastUpdateId {})", symbol, book.last_update_id);
    println!("  {:>16}  {:>16}", "BID", "ASK");
    for (bid, ask) in book.bids.iter().zip(book.asks.iter()) {
        println!("  {:>16}  {:>16}", bid.price, ask.price);
    }
    if let Some(spread) = book.spread() {
        println!("  spread: {}", spread);
    }

    let klines = client
        .market()
        .klines(&symbol, KlineInterval::OneHour, None, None, Some(5))
        .await?;
    println!("\nLast {} hourly candles", klines.len());
    for kline in &klines {
        println!(
            "  {}  O {}  H {}  L {}  C {}  trades {}",
            kline.open_time, kline.open, kline.high, kline.low, kline.close, kline.trades
        );
    }

    Ok(())
}
