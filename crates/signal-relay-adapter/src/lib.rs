/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public exchange adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod exchange;
pub mod http;
pub mod markets;
pub mod registry;
pub mod types;

pub use exchange::Exchange;

// Re-export commonly used types from http
pub use http::{
    AdapterError,
    BinanceClient,
    ClientConfig,
    Credentials,
    RequestSigner,
    Result,
};

pub use registry::{ExchangeConfig, ExchangeConstructor, ExchangeRegistry};

// Re-export all types
pub use types::*;
