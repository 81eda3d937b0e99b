/*
[INPUT]:  Test configuration and mock exchange requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for signal-relay-server tests

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use mockall::mock;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use signal_relay_adapter::{
    CreateOrderRequest, Exchange, Market, MarketType, Order, OrderStatus, OrderType, Result, Side,
};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-webhook-secret";

mock! {
    pub ExchangeClient {}

    #[async_trait]
    impl Exchange for ExchangeClient {
        fn id(&self) -> &'static str;
        fn market_type(&self) -> MarketType;
        async fn load_markets(&self) -> Result<Vec<Market>>;
        async fn market_by_id(&self, id: &str) -> Option<Market>;
        async fn create_order(&self, request: CreateOrderRequest) -> Result<Order>;
    }
}

/// Mock exchange that reports itself as binance futures
pub fn mock_exchange() -> MockExchangeClient {
    let mut exchange = MockExchangeClient::new();
    exchange.expect_id().return_const("binance");
    exchange.expect_market_type().return_const(MarketType::Future);
    exchange
}

pub fn dec(value: &str) -> Decimal {
    value.parse().expect("decimal literal")
}

/// Entry order as the exchange would return it
pub fn filled_order(request: &CreateOrderRequest) -> Order {
    Order {
        id: "1001".to_string(),
        client_order_id: Some("relay-test".to_string()),
        timestamp: Some(1_700_000_000_000),
        datetime: Some("2023-11-14T22:13:20.000Z".to_string()),
        symbol: request.symbol.clone(),
        order_type: OrderType::Market,
        side: request.side.parse().unwrap_or(Side::Buy),
        amount: request.amount,
        filled: request.amount,
        average: Some(dec("65000")),
        trigger_price: None,
        reduce_only: false,
        status: OrderStatus::Closed,
        stop_loss: None,
        take_profit: None,
        info: json!({"orderId": 1001}),
    }
}

pub fn futures_market(id: &str, base: &str, quote: &str) -> Market {
    Market {
        id: id.to_string(),
        symbol: Market::unified_symbol(base, quote),
        base: base.to_string(),
        quote: quote.to_string(),
        market_type: MarketType::Future,
        active: true,
    }
}

/// Valid "enter" signal carrying the test secret
pub fn enter_signal(symbol: &str) -> Value {
    json!({
        "key": TEST_SECRET,
        "strategy_id": "breakout-1",
        "action": "enter",
        "side": "buy",
        "symbol": symbol,
        "qty": 0.01,
        "stop_loss_price": 60000,
        "take_profit_price": 75000
    })
}

/// POST a raw body to /webhook and decode the JSON response
pub async fn post_webhook(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/webhook")
        .header("content-type", "application/json")
        .body(body.into())
        .expect("build request");

    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).expect("response is JSON");
    (status, json)
}

pub async fn post_signal(app: Router, signal: &Value) -> (StatusCode, Value) {
    post_webhook(app, signal.to_string()).await
}
