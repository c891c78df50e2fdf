/*
[INPUT]:  Endpoint parameters supplied by callers
[OUTPUT]: Typed request structs serialized into query strings
[POS]:    Data layer - request definitions for signed endpoints
[UPDATE]: When endpoint parameters change
*/

use rust_decimal::Decimal;

/// Parameters for account/withdraw.
///
/// `payment_id` is only required by currencies that use one (XRP, XMR, ...)
/// and is left out of the query string entirely when `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawRequest {
    pub currency: String,
    pub quantity: Decimal,
    pub address: String,
    pub payment_id: Option<String>,
}

impl WithdrawRequest {
    pub fn new(
        currency: impl Into<String>,
        quantity: Decimal,
        address: impl Into<String>,
    ) -> Self {
        Self {
            currency: currency.into(),
            quantity,
            address: address.into(),
            payment_id: None,
        }
    }

    pub fn with_payment_id(mut self, payment_id: impl Into<String>) -> Self {
        self.payment_id = Some(payment_id.into());
        self
    }
}

/// Parameters for market/buylimit and market/selllimit.
///
/// Field order matches the wire parameter order (market, quantity, rate),
/// which the signature depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct LimitOrderRequest {
    pub market: String,
    pub quantity: Decimal,
    pub rate: Decimal,
}

impl LimitOrderRequest {
    pub fn new(market: impl Into<String>, quantity: Decimal, rate: Decimal) -> Self {
        Self {
            market: market.into(),
            quantity,
            rate,
        }
    }
}
