/*
[INPUT]:  Order parameters supplied by callers
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for exchange communication
[UPDATE]: When order parameters change or new request types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderType, TriggerKind};

/// Conditional order attached to an entry order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerParams {
    #[serde(rename = "type")]
    pub kind: TriggerKind,
    #[serde(rename = "triggerPrice", with = "rust_decimal::serde::float")]
    pub trigger_price: Decimal,
}

/// Exchange-agnostic order creation request
///
/// `symbol` is the unified `BASE/QUOTE` form. `side` is kept as the caller
/// supplied it and interpreted by the exchange implementation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub symbol: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub side: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "stopLoss", default, skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<TriggerParams>,
    #[serde(rename = "takeProfit", default, skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<TriggerParams>,
}

impl CreateOrderRequest {
    pub fn market(symbol: impl Into<String>, side: impl Into<String>, amount: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            order_type: OrderType::Market,
            side: side.into(),
            amount,
            stop_loss: None,
            take_profit: None,
        }
    }

    pub fn with_stop_loss(mut self, trigger_price: Decimal) -> Self {
        self.stop_loss = Some(TriggerParams {
            kind: TriggerKind::StopMarket,
            trigger_price,
        });
        self
    }

    pub fn with_take_profit(mut self, trigger_price: Decimal) -> Self {
        self.take_profit = Some(TriggerParams {
            kind: TriggerKind::TakeProfitMarket,
            trigger_price,
        });
        self
    }

    /// Attached triggers in placement order
    pub fn triggers(&self) -> impl Iterator<Item = &TriggerParams> {
        self.stop_loss.iter().chain(self.take_profit.iter())
    }

    pub fn has_triggers(&self) -> bool {
        self.stop_loss.is_some() || self.take_profit.is_some()
    }
}
