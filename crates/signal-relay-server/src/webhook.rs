/*
[INPUT]:  Raw webhook request bodies and the shared exchange client
[OUTPUT]: JSON status responses; at most one order submission per request
[POS]:    Request handling layer - authorize, validate, translate, submit
[UPDATE]: When changing the webhook contract or order construction
*/

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use signal_relay_adapter::{CreateOrderRequest, Exchange, Order};
use tracing::{error, info, warn};

use crate::error::{Result, WebhookError};
use crate::signal::{authorize, Signal};
use crate::symbol::resolve_symbol;

pub const WEBHOOK_PATH: &str = "/webhook";

/// Dependencies shared by every request
pub struct AppState {
    pub exchange: Arc<dyn Exchange>,
    pub secret: String,
}

impl AppState {
    pub fn new(exchange: Arc<dyn Exchange>, secret: impl Into<String>) -> Self {
        Self {
            exchange,
            secret: secret.into(),
        }
    }
}

/// Body of every webhook response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WebhookResponse {
    Success { order_details: Order },
    Ignored { message: String },
    Error { message: String },
}

impl WebhookResponse {
    pub fn ignored(action: &str) -> Self {
        Self::Ignored {
            message: format!("Aksi '{action}' tidak didukung"),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(WEBHOOK_PATH, post(handle_webhook))
        .with_state(Arc::new(state))
}

async fn handle_webhook(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    info!(bytes = body.len(), "webhook received");

    match process_signal(&state, &body).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => {
            match &err {
                WebhookError::Unauthorized => warn!("webhook rejected: unauthorized"),
                other => error!(error = %other, "webhook processing failed"),
            }
            err.into_response()
        }
    }
}

/// Run one webhook body through authorization, validation and order submission
pub async fn process_signal(state: &AppState, body: &[u8]) -> Result<WebhookResponse> {
    let payload: serde_json::Value = serde_json::from_slice(body)?;
    authorize(&payload, &state.secret)?;

    let signal = Signal::from_value(&payload)?;
    info!(
        strategy_id = %signal.strategy_id,
        action = %signal.action_label(),
        side = ?signal.side,
        symbol = ?signal.symbol,
        qty = signal.qty,
        stop_loss_price = signal.stop_loss_price,
        take_profit_price = signal.take_profit_price,
        "signal validated"
    );

    if !signal.is_enter() {
        info!(action = %signal.action_label(), "action not supported, ignoring");
        return Ok(WebhookResponse::ignored(signal.action_label()));
    }

    let request = build_order(state.exchange.as_ref(), &signal).await?;
    info!(
        exchange = state.exchange.id(),
        symbol = %request.symbol,
        side = %request.side,
        amount = %request.amount,
        "submitting order"
    );

    let order = state.exchange.create_order(request).await?;
    info!(order_id = %order.id, status = ?order.status, "order submitted");

    Ok(WebhookResponse::Success {
        order_details: order,
    })
}

/// Market order with stop-loss and take-profit triggers attached
async fn build_order(exchange: &dyn Exchange, signal: &Signal) -> Result<CreateOrderRequest> {
    let symbol = resolve_symbol(exchange, signal.symbol.as_deref()).await?;
    let side = signal
        .side
        .clone()
        .ok_or_else(|| WebhookError::invalid_field("side", "field is required"))?;

    Ok(
        CreateOrderRequest::market(symbol, side, to_decimal("qty", signal.qty)?)
            .with_stop_loss(to_decimal("stop_loss_price", signal.stop_loss_price)?)
            .with_take_profit(to_decimal("take_profit_price", signal.take_profit_price)?),
    )
}

/// Shortest round-trip rendering of the float, parsed as a decimal
fn to_decimal(field: &'static str, value: f64) -> Result<Decimal> {
    value.to_string().parse::<Decimal>().map_err(|err| {
        WebhookError::invalid_field(field, format!("{value} is not a valid decimal: {err}"))
    })
}
