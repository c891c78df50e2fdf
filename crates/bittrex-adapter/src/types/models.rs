/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Market listed on the exchange
///
/// GET public/getmarkets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Market {
    pub market_currency: String,
    pub base_currency: String,
    pub market_currency_long: String,
    pub base_currency_long: String,
    pub min_trade_size: Decimal,
    pub market_name: String,
    pub is_active: bool,
    pub created: String,
    #[serde(default)]
    pub notice: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Currency supported by the exchange
///
/// GET public/getcurrencies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Currency {
    pub currency: String,
    pub currency_long: String,
    pub min_confirmation: u32,
    pub tx_fee: Decimal,
    pub is_active: bool,
    pub coin_type: String,
    #[serde(default)]
    pub base_address: Option<String>,
    #[serde(default)]
    pub notice: Option<String>,
}

/// Current bid/ask/last for a single market
///
/// GET public/getticker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ticker {
    pub bid: Decimal,
    pub ask: Decimal,
    pub last: Decimal,
}

/// 24h summary for a market
///
/// GET public/getmarketsummaries, public/getmarketsummary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketSummary {
    pub market_name: String,
    pub high: Option<Decimal>,
    pub low: Option<Decimal>,
    pub volume: Option<Decimal>,
    pub last: Option<Decimal>,
    pub base_volume: Option<Decimal>,
    pub time_stamp: String,
    pub bid: Option<Decimal>,
    pub ask: Option<Decimal>,
    pub open_buy_orders: Option<u32>,
    pub open_sell_orders: Option<u32>,
    pub prev_day: Option<Decimal>,
    pub created: String,
}

/// Single price level of the order book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderBookEntry {
    pub quantity: Decimal,
    pub rate: Decimal,
}

/// Order book payload.
///
/// The shape depends on the requested side: `both` returns an object with
/// `buy`/`sell` arrays, a single side returns a bare array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderBook {
    Both {
        buy: Vec<OrderBookEntry>,
        sell: Vec<OrderBookEntry>,
    },
    Single(Vec<OrderBookEntry>),
}

/// Completed trade from the public market history
///
/// GET public/getmarkethistory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TradeHistoryEntry {
    pub id: u64,
    pub time_stamp: String,
    pub quantity: Decimal,
    pub price: Decimal,
    pub total: Decimal,
    pub fill_type: String,
    pub order_type: String,
}

/// Wallet balance for one currency
///
/// GET account/getbalances, account/getbalance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Balance {
    pub currency: String,
    pub balance: Decimal,
    pub available: Decimal,
    pub pending: Decimal,
    #[serde(default)]
    pub crypto_address: Option<String>,
    #[serde(default)]
    pub requested: Option<bool>,
    #[serde(default)]
    pub uuid: Option<Uuid>,
}

/// Deposit address for a currency
///
/// GET account/getdepositaddress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DepositAddress {
    pub currency: String,
    pub address: Option<String>,
}

/// Identifier returned by order-placing, cancel and withdraw endpoints.
///
/// Unlike the rest of the wire format this object uses a lowercase key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderId {
    pub uuid: Uuid,
}

/// Full order detail
///
/// GET account/getorder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    #[serde(default)]
    pub account_id: Option<String>,
    pub order_uuid: Uuid,
    pub exchange: String,
    #[serde(rename = "Type")]
    pub order_type: String,
    pub quantity: Decimal,
    pub quantity_remaining: Decimal,
    pub limit: Decimal,
    pub reserved: Option<Decimal>,
    pub reserve_remaining: Option<Decimal>,
    pub commission_reserved: Option<Decimal>,
    pub commission_reserve_remaining: Option<Decimal>,
    pub commission_paid: Option<Decimal>,
    pub price: Decimal,
    pub price_per_unit: Option<Decimal>,
    pub opened: String,
    pub closed: Option<String>,
    pub is_open: bool,
    #[serde(default)]
    pub sentinel: Option<Uuid>,
    pub cancel_initiated: bool,
    pub immediate_or_cancel: bool,
    pub is_conditional: bool,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub condition_target: Option<Decimal>,
}

/// Open order as listed by market/getopenorders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OpenOrder {
    #[serde(default)]
    pub uuid: Option<Uuid>,
    pub order_uuid: Uuid,
    pub exchange: String,
    pub order_type: String,
    pub quantity: Decimal,
    pub quantity_remaining: Decimal,
    pub limit: Decimal,
    pub commission_paid: Option<Decimal>,
    pub price: Decimal,
    pub price_per_unit: Option<Decimal>,
    pub opened: String,
    pub closed: Option<String>,
    pub cancel_initiated: bool,
    pub immediate_or_cancel: bool,
    pub is_conditional: bool,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub condition_target: Option<Decimal>,
}

/// Settled order as listed by account/getorderhistory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderHistoryEntry {
    pub order_uuid: Uuid,
    pub exchange: String,
    pub time_stamp: String,
    pub order_type: String,
    pub limit: Decimal,
    pub quantity: Decimal,
    pub quantity_remaining: Decimal,
    pub commission: Decimal,
    pub price: Decimal,
    pub price_per_unit: Option<Decimal>,
    pub is_conditional: bool,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub condition_target: Option<Decimal>,
    pub immediate_or_cancel: bool,
}

/// Withdrawal as listed by account/getwithdrawalhistory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WithdrawalRecord {
    pub payment_uuid: Uuid,
    pub currency: String,
    pub amount: Decimal,
    pub address: String,
    pub opened: String,
    pub authorized: bool,
    pub pending_payment: bool,
    pub tx_cost: Decimal,
    #[serde(default)]
    pub tx_id: Option<String>,
    pub canceled: bool,
    pub invalid_address: bool,
}

/// Deposit as listed by account/getdeposithistory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DepositRecord {
    pub id: u64,
    pub amount: Decimal,
    pub currency: String,
    pub confirmations: u32,
    pub last_updated: String,
    #[serde(default)]
    pub tx_id: Option<String>,
    #[serde(default)]
    pub crypto_address: Option<String>,
}
