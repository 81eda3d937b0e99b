/*
[INPUT]:  Exchange-native market and order payloads
[OUTPUT]: Unified market metadata and order objects
[POS]:    Data layer - exchange-agnostic models returned to callers
[UPDATE]: When the unified order shape changes
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{MarketType, OrderStatus, OrderType, Side};

/// Tradable market as reported by the exchange metadata endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    /// Exchange-native ticker, e.g. `BTCUSDT`
    pub id: String,
    /// Unified symbol, e.g. `BTC/USDT`
    pub symbol: String,
    pub base: String,
    pub quote: String,
    #[serde(rename = "type")]
    pub market_type: MarketType,
    pub active: bool,
}

impl Market {
    pub fn unified_symbol(base: &str, quote: &str) -> String {
        format!("{base}/{quote}")
    }
}

/// Unified order object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub client_order_id: Option<String>,
    pub timestamp: Option<i64>,
    pub datetime: Option<String>,
    pub symbol: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub side: Side,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub filled: Decimal,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub average: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub trigger_price: Option<Decimal>,
    pub reduce_only: bool,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<Box<Order>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<Box<Order>>,
    /// Raw exchange payload
    pub info: serde_json::Value,
}
