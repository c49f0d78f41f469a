//! Trading post example.
//!
//! This example uses a non-blocking client from async code: every request
//! is spawned and its outcome delivered to a continuation.
//!
//! Run with: cargo run --example trading_post

use gw2api::{Continuation, ExchangeType, Gw2Client, RequestOptions};
use serde_json::Value;
use tokio::sync::oneshot;

/// Continuation that forwards the outcome to an awaitable receiver.
fn reply() -> (Continuation, oneshot::Receiver<gw2api::Result<Value>>) {
    let (tx, rx) = oneshot::channel();
    (
        Box::new(move |outcome| {
            let _ = tx.send(outcome);
        }),
        rx,
    )
}

#[tokio::main]
async fn main() -> gw2api::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let client = Gw2Client::non_blocking()?;

    // Mithril Ore and Elder Wood Log
    let (prices_done, prices) = reply();
    client.commerce().prices(
        Some(RequestOptions::new().with_ids(vec![19700, 19722])),
        Some(prices_done),
    )?;

    let (exchange_done, exchange) = reply();
    client
        .commerce()
        .exchange(ExchangeType::Coins, 100_000, None, Some(exchange_done))?;

    let prices = prices.await.expect("continuation dropped")?;
    for price in prices.as_array().into_iter().flatten() {
        println!(
            "{}: buy {} / sell {}",
            price["id"], price["buys"]["unit_price"], price["sells"]["unit_price"]
        );
    }

    let exchange = exchange.await.expect("continuation dropped")?;
    println!("10 gold buys {} gems", exchange["quantity"]);

    Ok(())
}
