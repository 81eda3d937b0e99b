/*
[INPUT]:  Concrete exchange clients
[OUTPUT]: Object-safe Exchange trait used by callers
[POS]:    Abstraction seam between callers and exchange implementations
[UPDATE]: When callers need new exchange operations
*/

use async_trait::async_trait;

use crate::http::{BinanceClient, Result};
use crate::types::{CreateOrderRequest, Market, MarketType, Order};

/// Operations a trading front end needs from an exchange
#[async_trait]
pub trait Exchange: Send + Sync {
    /// Registry identifier, e.g. `binance`
    fn id(&self) -> &'static str;

    fn market_type(&self) -> MarketType;

    /// Fetch and cache market metadata
    async fn load_markets(&self) -> Result<Vec<Market>>;

    /// Look up a cached market by exchange-native ticker
    async fn market_by_id(&self, id: &str) -> Option<Market>;

    /// Submit one order; attached triggers travel inside the request
    async fn create_order(&self, request: CreateOrderRequest) -> Result<Order>;
}

#[async_trait]
impl Exchange for BinanceClient {
    fn id(&self) -> &'static str {
        BinanceClient::id(self)
    }

    fn market_type(&self) -> MarketType {
        BinanceClient::market_type(self)
    }

    async fn load_markets(&self) -> Result<Vec<Market>> {
        BinanceClient::load_markets(self).await
    }

    async fn market_by_id(&self, id: &str) -> Option<Market> {
        BinanceClient::market_by_id(self, id).await
    }

    async fn create_order(&self, request: CreateOrderRequest) -> Result<Order> {
        BinanceClient::create_order(self, request).await
    }
}
