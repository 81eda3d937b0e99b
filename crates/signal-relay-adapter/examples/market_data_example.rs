/*
[INPUT]:  Market type (spot or future) as first argument
[OUTPUT]: Loaded market list from Binance metadata
[POS]:    Examples - public market metadata
[UPDATE]: When adding new market data endpoints
*/

use signal_relay_adapter::*;

/// Example: Load market metadata (no API key required)
#[tokio::main]
async fn main() {
    println!("=== Binance Market Metadata Example ===\n");

    let market_type = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<MarketType>().ok())
        .unwrap_or(MarketType::Future);

    let client = match BinanceClient::new(market_type) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {} markets\n", market_type);

    match client.load_markets().await {
        Ok(markets) => {
            println!("✓ Loaded {} markets", markets.len());
            for market in markets.iter().take(10) {
                println!("  {} -> {} (active: {})", market.id, market.symbol, market.active);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    match client.market_by_id("BTCUSDT").await {
        Some(market) => println!("\n✓ BTCUSDT resolves to {}", market.symbol),
        None => println!("\n✗ BTCUSDT not listed"),
    }
}
