/*
[INPUT]:  Exchange identifier and connection settings
[OUTPUT]: Shared Exchange instances built by registered constructors
[POS]:    Factory layer - maps exchange ids to concrete clients
[UPDATE]: When adding exchanges or changing construction options
*/

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::exchange::Exchange;
use crate::http::{AdapterError, BinanceClient, ClientConfig, Credentials, Result};
use crate::types::MarketType;

/// Settings shared by every exchange constructor
#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub default_type: MarketType,
    pub client: ClientConfig,
    /// Overrides the exchange's production REST base URL
    pub base_url: Option<String>,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_secret: None,
            default_type: MarketType::Future,
            client: ClientConfig::default(),
            base_url: None,
        }
    }
}

impl ExchangeConfig {
    /// Both key and secret present and non-empty
    pub fn credentials(&self) -> Option<Credentials> {
        match (self.api_key.as_deref(), self.api_secret.as_deref()) {
            (Some(key), Some(secret)) if !key.is_empty() && !secret.is_empty() => {
                Some(Credentials::new(key, secret))
            }
            _ => None,
        }
    }
}

pub type ExchangeConstructor =
    Box<dyn Fn(&ExchangeConfig) -> Result<Arc<dyn Exchange>> + Send + Sync>;

/// Maps exchange identifiers to constructors
pub struct ExchangeRegistry {
    constructors: BTreeMap<String, ExchangeConstructor>,
}

impl ExchangeRegistry {
    /// Registry without any exchanges
    pub fn empty() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    /// Registry with the built-in Binance family
    pub fn with_builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(
            "binance",
            Box::new(|config: &ExchangeConfig| {
                binance_client("binance", config.default_type, config)
            }),
        );
        registry.register(
            "binanceusdm",
            Box::new(|config: &ExchangeConfig| {
                binance_client("binanceusdm", MarketType::Future, config)
            }),
        );
        registry
    }

    pub fn register(&mut self, id: &str, constructor: ExchangeConstructor) {
        self.constructors.insert(normalize_id(id), constructor);
    }

    pub fn ids(&self) -> Vec<&str> {
        self.constructors.keys().map(String::as_str).collect()
    }

    /// Build the exchange registered under `id`
    pub fn create(&self, id: &str, config: &ExchangeConfig) -> Result<Arc<dyn Exchange>> {
        let key = normalize_id(id);
        let constructor = self.constructors.get(&key).ok_or_else(|| {
            AdapterError::Config(format!(
                "unknown exchange '{}', expected one of: {}",
                id,
                self.ids().join(", ")
            ))
        })?;

        debug!(exchange = %key, market_type = %config.default_type, "creating exchange client");
        constructor(config)
    }
}

impl Default for ExchangeRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

fn normalize_id(id: &str) -> String {
    id.trim().to_ascii_lowercase()
}

fn binance_client(
    id: &'static str,
    market_type: MarketType,
    config: &ExchangeConfig,
) -> Result<Arc<dyn Exchange>> {
    let mut client = match config.base_url.as_deref() {
        Some(base_url) => {
            BinanceClient::with_config_and_base_url(config.client.clone(), market_type, base_url)?
        }
        None => BinanceClient::with_config(config.client.clone(), market_type)?,
    }
    .with_id(id);

    if let Some(credentials) = config.credentials() {
        client.set_credentials(credentials);
    }

    Ok(Arc::new(client))
}
