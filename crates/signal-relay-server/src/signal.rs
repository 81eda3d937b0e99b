/*
[INPUT]:  Decoded JSON webhook body and the configured shared secret
[OUTPUT]: Authorized, type-coerced trading signal
[POS]:    Validation layer - runs before any exchange call
[UPDATE]: When signal fields or coercion rules change
*/

use serde_json::Value;
use subtle::ConstantTimeEq;

use crate::error::{Result, WebhookError};

/// The only action that places an order
pub const ENTER_ACTION: &str = "enter";

/// Check the body's `key` against the shared secret in constant time
pub fn authorize(body: &Value, secret: &str) -> Result<()> {
    let key = body
        .get("key")
        .and_then(Value::as_str)
        .ok_or(WebhookError::Unauthorized)?;

    if bool::from(key.as_bytes().ct_eq(secret.as_bytes())) {
        Ok(())
    } else {
        Err(WebhookError::Unauthorized)
    }
}

/// Trading signal decoded from a webhook body, without the shared secret
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub strategy_id: String,
    pub action: Option<String>,
    pub side: Option<String>,
    pub symbol: Option<String>,
    pub qty: f64,
    pub stop_loss_price: f64,
    pub take_profit_price: f64,
}

impl Signal {
    /// Extract text fields and coerce the numeric ones
    ///
    /// Numeric coercion happens for every action, so a malformed `qty` is an
    /// error even when the action would be ignored.
    pub fn from_value(body: &Value) -> Result<Self> {
        Ok(Self {
            strategy_id: text_field(body, "strategy_id").unwrap_or_else(|| "N/A".to_string()),
            action: text_field(body, "action"),
            side: text_field(body, "side"),
            symbol: text_field(body, "symbol"),
            qty: coerce_float(body, "qty")?,
            stop_loss_price: coerce_float(body, "stop_loss_price")?,
            take_profit_price: coerce_float(body, "take_profit_price")?,
        })
    }

    pub fn is_enter(&self) -> bool {
        self.action.as_deref() == Some(ENTER_ACTION)
    }

    /// Action as shown in the "ignored" message
    pub fn action_label(&self) -> &str {
        self.action.as_deref().unwrap_or("None")
    }
}

/// Strings verbatim, other non-null values as their JSON text
fn text_field(body: &Value, field: &str) -> Option<String> {
    match body.get(field)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Coerce a JSON value to a float: numbers, numeric strings, booleans
pub fn coerce_float(body: &Value, field: &'static str) -> Result<f64> {
    let value = body
        .get(field)
        .ok_or_else(|| WebhookError::invalid_field(field, "field is required"))?;

    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    };

    parsed.ok_or_else(|| {
        WebhookError::invalid_field(field, format!("could not convert {value} to float"))
    })
}
