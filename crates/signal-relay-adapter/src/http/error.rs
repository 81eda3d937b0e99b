/*
[INPUT]:  Error sources (HTTP, exchange payloads, serialization, configuration)
[OUTPUT]: Structured error types with exchange codes and auth detection
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::BinanceErrorResponse;

/// Binance error codes that indicate bad credentials or signatures
const AUTH_ERROR_CODES: &[i64] = &[-1022, -2014, -2015];

/// Main error type for the exchange adapter
#[derive(Error, Debug)]
pub enum AdapterError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Exchange rejected the request
    #[error("Exchange error (code {code}): {message}")]
    Exchange { code: i64, message: String },

    /// Credentials missing or rejected
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Symbol is not listed in the loaded markets
    #[error("Unknown symbol: {0}")]
    BadSymbol(String),

    /// Order parameters rejected before sending
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    /// Feature not available on this exchange or market type
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// Entry order was placed but an attached trigger order failed
    #[error("Entry order {entry_order_id} placed but attached {trigger} order failed: {source}")]
    TriggerRejected {
        entry_order_id: String,
        trigger: String,
        #[source]
        source: Box<AdapterError>,
    },

    /// Rate limit exceeded or IP banned
    #[error("Rate limit exceeded (HTTP {status}): {message}")]
    RateLimit { status: u16, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AdapterError {
    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(self, AdapterError::Authentication { .. })
    }

    /// Build an error from a non-success HTTP status and its body
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let parsed = serde_json::from_str::<BinanceErrorResponse>(body).ok();

        if status == StatusCode::TOO_MANY_REQUESTS || status.as_u16() == 418 {
            let message = parsed.map(|err| err.msg).unwrap_or_else(|| body.to_string());
            return AdapterError::RateLimit {
                status: status.as_u16(),
                message,
            };
        }

        match parsed {
            Some(err) if AUTH_ERROR_CODES.contains(&err.code) => {
                AdapterError::Authentication { message: err.msg }
            }
            Some(err) => AdapterError::Exchange {
                code: err.code,
                message: err.msg,
            },
            None if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN => {
                AdapterError::Authentication {
                    message: format!("HTTP {}: {}", status.as_u16(), body),
                }
            }
            None => AdapterError::Exchange {
                code: i64::from(status.as_u16()),
                message: body.to_string(),
            },
        }
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, AdapterError>;
