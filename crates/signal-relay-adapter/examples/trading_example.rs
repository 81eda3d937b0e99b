/*
[INPUT]:  API_KEY / API_SECRET environment variables
[OUTPUT]: Market order with attached stop-loss and take-profit
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use rust_decimal::Decimal;
use signal_relay_adapter::*;
use std::str::FromStr;

/// Example: Futures market order with attached triggers
///
/// Trading endpoints require:
/// 1. API key (X-MBX-APIKEY header)
/// 2. HMAC-SHA256 signature of the query string
#[tokio::main]
async fn main() {
    println!("=== Binance Trading Example ===\n");

    let config = ExchangeConfig {
        api_key: std::env::var("API_KEY").ok(),
        api_secret: std::env::var("API_SECRET").ok(),
        default_type: MarketType::Future,
        ..ExchangeConfig::default()
    };

    let exchange = match ExchangeRegistry::default().create("binance", &config) {
        Ok(exchange) => exchange,
        Err(e) => {
            eprintln!("Failed to create exchange: {}", e);
            return;
        }
    };
    println!("✓ {} client created", exchange.id());

    let order_req = CreateOrderRequest::market(
        "BTC/USDT",
        "buy",
        Decimal::from_str("0.001").unwrap_or_default(),
    )
    .with_stop_loss(Decimal::from_str("60000").unwrap_or_default())
    .with_take_profit(Decimal::from_str("75000").unwrap_or_default());
    println!("\nOrder request:\n  {:?}", order_req);

    if config.credentials().is_none() {
        println!("\nSet API_KEY and API_SECRET to submit the order.");
        return;
    }

    match exchange.create_order(order_req).await {
        Ok(order) => println!("\n✓ Order placed: {} ({:?})", order.id, order.status),
        Err(e) => println!("\n✗ Error: {}", e),
    }
}
