/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Bittrex adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod config;
pub mod http;
pub mod types;

// Re-export the configuration entry point
pub use config::BittrexConfig;

// Re-export commonly used types from http
pub use http::{
    BittrexClient,
    BittrexError,
    ClientConfig,
    Credentials,
    RequestSigner,
    Result,
};

// Re-export all types
pub use types::*;
