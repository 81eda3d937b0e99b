/*
[INPUT]:  Ticker from a signal (`BTCUSDT` or `BTC/USDT`) and the exchange market cache
[OUTPUT]: Unified `BASE/QUOTE` symbol for order submission
[POS]:    Translation layer - between signal validation and order creation
[UPDATE]: When adding quote assets or changing resolution order
*/

use signal_relay_adapter::{Exchange, Market};
use tracing::debug;

use crate::error::{Result, WebhookError};

/// Quote assets recognised when splitting a bare ticker
const KNOWN_QUOTES: &[&str] = &[
    "FDUSD", "USDT", "USDC", "BUSD", "TUSD", "USD", "DAI", "BTC", "ETH", "BNB", "EUR", "TRY",
    "BRL", "GBP", "AUD", "JPY",
];

/// Width of the quote asset assumed when nothing else matches
const FALLBACK_QUOTE_LEN: usize = 4;

/// Split a bare ticker into `BASE/QUOTE` without market metadata
///
/// Tries the longest known quote suffix first, then treats the last four
/// characters as the quote.
pub fn split_ticker(ticker: &str) -> Option<String> {
    if !ticker.is_ascii() {
        return None;
    }

    let mut quotes = KNOWN_QUOTES.to_vec();
    quotes.sort_by_key(|quote| std::cmp::Reverse(quote.len()));

    if let Some((base, quote)) = quotes.iter().find_map(|quote| {
        ticker
            .strip_suffix(quote)
            .filter(|base| !base.is_empty())
            .map(|base| (base, *quote))
    }) {
        return Some(Market::unified_symbol(base, quote));
    }

    if ticker.len() > FALLBACK_QUOTE_LEN {
        let (base, quote) = ticker.split_at(ticker.len() - FALLBACK_QUOTE_LEN);
        return Some(Market::unified_symbol(base, quote));
    }

    None
}

/// Resolve the signal's ticker to the unified symbol orders are placed with
pub async fn resolve_symbol(exchange: &dyn Exchange, raw: Option<&str>) -> Result<String> {
    let raw = raw.ok_or_else(|| WebhookError::invalid_field("symbol", "field is required"))?;

    if raw.contains('/') {
        return Ok(raw.to_string());
    }

    let ticker = raw.trim().to_ascii_uppercase();
    if ticker.is_empty() {
        return Err(WebhookError::invalid_field("symbol", "ticker is empty"));
    }

    if let Some(market) = exchange.market_by_id(&ticker).await {
        debug!(ticker = %ticker, symbol = %market.symbol, "symbol resolved from market metadata");
        return Ok(market.symbol);
    }

    let symbol = split_ticker(&ticker).ok_or_else(|| {
        WebhookError::invalid_field("symbol", format!("cannot derive a quote asset from '{raw}'"))
    })?;
    debug!(ticker = %ticker, symbol = %symbol, "symbol resolved from ticker suffix");
    Ok(symbol)
}
