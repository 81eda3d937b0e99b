/*
[INPUT]:  Public API exports for signal-relay-server crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod error;
pub mod server;
pub mod signal;
pub mod symbol;
pub mod webhook;

// Re-export main types for convenience
pub use config::AppConfig;
pub use error::WebhookError;
pub use signal::Signal;
pub use webhook::{router, AppState, WebhookResponse};
