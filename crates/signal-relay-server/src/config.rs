/*
[INPUT]:  Process environment variables
[OUTPUT]: Parsed relay configuration
[POS]:    Configuration layer - startup settings
[UPDATE]: When adding new configuration options
*/

use std::net::SocketAddr;

use anyhow::Context;
use config::{Config, Environment};
use serde::Deserialize;
use signal_relay_adapter::{ExchangeConfig, MarketType};

/// Relay configuration, read from the environment
#[derive(Clone, Deserialize)]
pub struct AppConfig {
    /// Shared secret every webhook body must carry in `key`
    #[serde(default = "default_webhook_secret")]
    pub webhook_secret_key: String,
    /// Exchange API key
    #[serde(default)]
    pub api_key: Option<String>,
    /// Exchange API secret
    #[serde(default)]
    pub api_secret: Option<String>,
    /// Registry identifier of the exchange
    #[serde(default = "default_exchange_id")]
    pub exchange_id: String,
    /// "spot" or "future"
    #[serde(default = "default_trade_type")]
    pub default_trade_type: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("webhook_secret_key", &"<redacted>")
            .field("api_key", &self.api_key.as_ref().map(|_| "<set>"))
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<set>"))
            .field("exchange_id", &self.exchange_id)
            .field("default_trade_type", &self.default_trade_type)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

pub const DEFAULT_WEBHOOK_SECRET: &str = "default-secret-key-change-me";

fn default_webhook_secret() -> String {
    DEFAULT_WEBHOOK_SECRET.to_string()
}

fn default_exchange_id() -> String {
    "binance".to_string()
}

fn default_trade_type() -> String {
    "future".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl AppConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_environment(Environment::default())
    }

    /// Load configuration from an explicit environment source
    pub fn from_environment(environment: Environment) -> anyhow::Result<Self> {
        let config: Self = Config::builder()
            .add_source(environment)
            .build()
            .context("read environment")?
            .try_deserialize()
            .context("deserialize relay configuration")?;
        config.trade_type()?;
        Ok(config)
    }

    pub fn trade_type(&self) -> anyhow::Result<MarketType> {
        self.default_trade_type
            .parse::<MarketType>()
            .map_err(anyhow::Error::msg)
            .context("DEFAULT_TRADE_TYPE")
    }

    pub fn bind_address(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }

    /// Both API key and secret present and non-empty
    pub fn has_credentials(&self) -> bool {
        self.exchange_config()
            .map(|config| config.credentials().is_some())
            .unwrap_or(false)
    }

    pub fn uses_default_secret(&self) -> bool {
        self.webhook_secret_key == DEFAULT_WEBHOOK_SECRET
    }

    pub fn exchange_config(&self) -> anyhow::Result<ExchangeConfig> {
        Ok(ExchangeConfig {
            api_key: self.api_key.clone(),
            api_secret: self.api_secret.clone(),
            default_type: self.trade_type()?,
            ..ExchangeConfig::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Environment::default().source(Some(source))
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_environment(environment(&[])).expect("config");

        assert_eq!(config.webhook_secret_key, DEFAULT_WEBHOOK_SECRET);
        assert!(config.uses_default_secret());
        assert_eq!(config.exchange_id, "binance");
        assert_eq!(config.trade_type().expect("trade type"), MarketType::Future);
        assert_eq!(config.bind_address().expect("addr").port(), 8000);
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_reads_variables() {
        let config = AppConfig::from_environment(environment(&[
            ("WEBHOOK_SECRET_KEY", "s3cret"),
            ("API_KEY", "key"),
            ("API_SECRET", "secret"),
            ("EXCHANGE_ID", "binanceusdm"),
            ("DEFAULT_TRADE_TYPE", "spot"),
            ("PORT", "9090"),
        ]))
        .expect("config");

        assert_eq!(config.webhook_secret_key, "s3cret");
        assert_eq!(config.exchange_id, "binanceusdm");
        assert_eq!(config.trade_type().expect("trade type"), MarketType::Spot);
        assert_eq!(config.port, 9090);
        assert!(config.has_credentials());

        let exchange = config.exchange_config().expect("exchange config");
        assert_eq!(exchange.default_type, MarketType::Spot);
    }

    #[test]
    fn test_rejects_unknown_trade_type() {
        let err = AppConfig::from_environment(environment(&[("DEFAULT_TRADE_TYPE", "margin")]))
            .unwrap_err();
        assert!(format!("{err:#}").contains("margin"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = AppConfig::from_environment(environment(&[
            ("WEBHOOK_SECRET_KEY", "hunter2"),
            ("API_SECRET", "topsecret"),
        ]))
        .expect("config");

        let debug = format!("{config:?}");
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("topsecret"));
    }
}
