/*
[INPUT]:  Body parsing, authorization, field coercion and exchange failures
[OUTPUT]: Typed webhook errors with per-variant HTTP status
[POS]:    Error handling layer - boundary between handler and HTTP response
[UPDATE]: When adding failure modes or changing status mapping
*/

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use signal_relay_adapter::AdapterError;
use thiserror::Error;

use crate::webhook::WebhookResponse;

#[derive(Error, Debug)]
pub enum WebhookError {
    /// Body is not valid JSON
    #[error("Invalid JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// Shared secret missing or wrong
    #[error("Unauthorized")]
    Unauthorized,

    /// A required field is missing or cannot be coerced
    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// Order submission failed
    #[error(transparent)]
    Exchange(#[from] AdapterError),
}

pub type Result<T> = std::result::Result<T, WebhookError>;

impl WebhookError {
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::MalformedBody(_) | Self::InvalidField { .. } | Self::Exchange(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let body = WebhookResponse::Error {
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
