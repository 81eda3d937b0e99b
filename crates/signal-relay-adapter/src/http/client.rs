/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials, market type)
[OUTPUT]: Configured reqwest client ready for Binance REST calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::{AdapterError, RequestSigner, Result};
use crate::markets::MarketCache;
use crate::types::MarketType;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Base URLs for Binance REST APIs
const SPOT_BASE_URL: &str = "https://api.binance.com";
const FUTURES_BASE_URL: &str = "https://fapi.binance.com";

const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// `recvWindow` sent with signed requests, in milliseconds
    pub recv_window_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            recv_window_ms: 5_000,
        }
    }
}

/// API credentials for signed requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Binance REST client for one market family (spot or USD-M futures)
#[derive(Debug)]
pub struct BinanceClient {
    id: &'static str,
    http_client: Client,
    base_url: Url,
    market_type: MarketType,
    recv_window_ms: u64,
    credentials: Option<Credentials>,
    signer: Option<RequestSigner>,
    pub(crate) markets: RwLock<MarketCache>,
}

impl BinanceClient {
    /// Create a new client with default configuration
    pub fn new(market_type: MarketType) -> Result<Self> {
        Self::with_config(ClientConfig::default(), market_type)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, market_type: MarketType) -> Result<Self> {
        let base_url = match market_type {
            MarketType::Spot => SPOT_BASE_URL,
            MarketType::Future => FUTURES_BASE_URL,
        };
        Self::with_config_and_base_url(config, market_type, base_url)
    }

    /// Create a client against a custom base URL (testnet, mock server)
    pub fn with_config_and_base_url(
        config: ClientConfig,
        market_type: MarketType,
        base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            id: "binance",
            http_client,
            base_url: Url::parse(base_url)?,
            market_type,
            recv_window_ms: config.recv_window_ms,
            credentials: None,
            signer: None,
            markets: RwLock::new(MarketCache::default()),
        })
    }

    /// Override the identifier reported through the `Exchange` trait
    pub fn with_id(mut self, id: &'static str) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn market_type(&self) -> MarketType {
        self.market_type
    }

    /// Set credentials for signed requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.signer = Some(RequestSigner::new(credentials.api_secret.clone()));
        self.credentials = Some(credentials);
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub(crate) fn signer(&self) -> Result<&RequestSigner> {
        self.signer.as_ref().ok_or_else(|| AdapterError::Authentication {
            message: "API key and secret are required for signed endpoints".to_string(),
        })
    }

    /// Build request builder for public endpoints
    pub(crate) fn public_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Build a SIGNED request: params + recvWindow + timestamp, then signature
    pub(crate) fn signed_request(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<RequestBuilder> {
        let signer = self.signer()?;
        let api_key = self
            .credentials
            .as_ref()
            .map(|c| c.api_key.clone())
            .unwrap_or_default();

        let mut query = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in params {
            query.append_pair(key, value);
        }
        query.append_pair("recvWindow", &self.recv_window_ms.to_string());
        query.append_pair("timestamp", &chrono::Utc::now().timestamp_millis().to_string());
        let payload = query.finish();
        let signature = signer.sign(&payload);

        let mut url = self.base_url.join(endpoint)?;
        url.set_query(Some(&format!("{payload}&signature={signature}")));

        Ok(self
            .http_client
            .request(method, url)
            .header(API_KEY_HEADER, api_key))
    }

    /// Send a request and decode the JSON body, mapping error payloads
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), body = %body, "binance request failed");
            return Err(AdapterError::from_response(status, &body));
        }

        debug!(status = status.as_u16(), bytes = body.len(), "binance response received");
        Ok(serde_json::from_str(&body)?)
    }
}
