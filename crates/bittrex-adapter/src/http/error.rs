/*
[INPUT]:  Error sources (HTTP transport, JSON decoding, configuration)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Bittrex adapter
#[derive(Error, Debug)]
pub enum BittrexError {
    /// HTTP request failed (connection, timeout or error status)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON for the expected shape
    #[error("Failed to decode response body: {0}")]
    Json(#[from] serde_json::Error),

    /// URL construction failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// A signed endpoint was called on a client without credentials
    #[error("Missing API credentials for signed endpoint")]
    MissingCredentials,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BittrexError {
    /// Check whether the error originated in the HTTP transport
    pub fn is_transport_error(&self) -> bool {
        matches!(self, BittrexError::Http(_))
    }

    /// Check whether the error is a response decoding failure
    pub fn is_decode_error(&self) -> bool {
        matches!(self, BittrexError::Json(_))
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, BittrexError>;
