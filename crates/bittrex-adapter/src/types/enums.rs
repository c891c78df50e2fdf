/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Side filter for the order book endpoint.
///
/// The v1.1 API serializes this as the `type` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBookSide {
    Buy,
    Sell,
    #[default]
    Both,
}

impl OrderBookSide {
    /// Wire value used in the `type` query parameter
    pub fn as_str(self) -> &'static str {
        match self {
            OrderBookSide::Buy => "buy",
            OrderBookSide::Sell => "sell",
            OrderBookSide::Both => "both",
        }
    }
}

impl std::fmt::Display for OrderBookSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
