/*
[INPUT]:  Market type of the client
[OUTPUT]: Exchange metadata and the cached market list
[POS]:    HTTP layer - public market metadata endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{AdapterError, BinanceClient, Result};
use crate::markets::MarketCache;
use crate::types::{ExchangeInfoResponse, Market, MarketType};
use reqwest::Method;
use tracing::info;

impl BinanceClient {
    /// Query exchange metadata
    ///
    /// GET /api/v3/exchangeInfo (spot) or GET /fapi/v1/exchangeInfo (futures)
    pub async fn fetch_exchange_info(&self) -> Result<ExchangeInfoResponse> {
        let endpoint = match self.market_type() {
            MarketType::Spot => "/api/v3/exchangeInfo",
            MarketType::Future => "/fapi/v1/exchangeInfo",
        };
        let builder = self.public_request(Method::GET, endpoint)?;
        self.send_json(builder).await
    }

    /// Fetch metadata and replace the market cache
    pub async fn load_markets(&self) -> Result<Vec<Market>> {
        let info = self.fetch_exchange_info().await?;
        let cache = MarketCache::from_entries(&info.symbols, self.market_type());
        let markets = cache.markets();

        info!(
            exchange = self.id(),
            market_type = %self.market_type(),
            count = markets.len(),
            "markets loaded"
        );

        *self.markets.write().await = cache;
        Ok(markets)
    }

    /// Resolve a unified symbol, loading markets first if the cache is empty
    pub async fn market(&self, symbol: &str) -> Result<Market> {
        if self.markets.read().await.is_empty() {
            self.load_markets().await?;
        }

        self.markets
            .read()
            .await
            .get(symbol)
            .cloned()
            .ok_or_else(|| AdapterError::BadSymbol(symbol.to_string()))
    }

    /// Look up a cached market by exchange-native ticker
    pub async fn market_by_id(&self, id: &str) -> Option<Market> {
        self.markets.read().await.get_by_id(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{AdapterError, BinanceClient, ClientConfig};
    use crate::types::MarketType;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FUTURES_INFO: &str = r#"{
        "timezone": "UTC",
        "serverTime": 1700000000000,
        "symbols": [
            {
                "symbol": "BTCUSDT",
                "pair": "BTCUSDT",
                "contractType": "PERPETUAL",
                "status": "TRADING",
                "baseAsset": "BTC",
                "quoteAsset": "USDT",
                "marginAsset": "USDT"
            },
            {
                "symbol": "ETHUSDT_250627",
                "pair": "ETHUSDT",
                "contractType": "CURRENT_QUARTER",
                "status": "TRADING",
                "baseAsset": "ETH",
                "quoteAsset": "USDT",
                "marginAsset": "USDT"
            }
        ]
    }"#;

    async fn futures_client(server: &MockServer) -> BinanceClient {
        BinanceClient::with_config_and_base_url(
            ClientConfig::default(),
            MarketType::Future,
            &server.uri(),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_load_markets() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fapi/v1/exchangeInfo"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(FUTURES_INFO, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let client = futures_client(&server).await;
        let markets = client.load_markets().await.expect("load_markets failed");

        assert_eq!(markets.len(), 1);
        assert_eq!(markets[0].symbol, "BTC/USDT");
        assert_eq!(markets[0].id, "BTCUSDT");
        assert!(markets[0].active);

        let by_id = client.market_by_id("btcusdt").await.expect("cached by id");
        assert_eq!(by_id.symbol, "BTC/USDT");
    }

    #[tokio::test]
    async fn test_market_loads_lazily_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fapi/v1/exchangeInfo"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(FUTURES_INFO, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let client = futures_client(&server).await;
        let market = client.market("BTC/USDT").await.expect("market");
        assert_eq!(market.id, "BTCUSDT");

        let err = client.market("DOGE/USDT").await.unwrap_err();
        assert!(matches!(err, AdapterError::BadSymbol(ref s) if s == "DOGE/USDT"));
    }

    #[tokio::test]
    async fn test_spot_uses_spot_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v3/exchangeInfo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "symbols": [
                    {"symbol": "ETHBTC", "status": "TRADING", "baseAsset": "ETH", "quoteAsset": "BTC"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = BinanceClient::with_config_and_base_url(
            ClientConfig::default(),
            MarketType::Spot,
            &server.uri(),
        )
        .expect("client init");

        let markets = client.load_markets().await.expect("load_markets failed");
        assert_eq!(markets[0].symbol, "ETH/BTC");
        assert_eq!(markets[0].market_type, MarketType::Spot);
    }
}
