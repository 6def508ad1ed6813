//! Order models (`GET /orders`, `GET /conditional_orders`).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order side (buy or sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FtxOrderSide {
    Buy,
    Sell,
}

/// Execution type of a plain order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FtxOrderType {
    Limit,
    Market,
}

/// Kind of a conditional (trigger) order: `stop`, `trailing_stop` or
/// `take_profit` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FtxConditionalOrderType {
    Stop,
    TrailingStop,
    TakeProfit,
}

/// Order lifecycle status as reported by the venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FtxOrderStatus {
    New,
    Open,
    Closed,
    Cancelled,
    /// Conditional order whose trigger fired.
    Triggered,
    /// A status introduced after this crate was written.
    #[serde(other)]
    Unknown,
}

/// A plain limit or market order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FtxOrderDto {
    pub id: u64,
    pub client_id: Option<String>,
    pub market: String,
    pub future: Option<String>,
    #[serde(rename = "type")]
    pub order_type: FtxOrderType,
    pub side: FtxOrderSide,
    /// Execution limit; `null` for market orders.
    pub price: Option<Decimal>,
    pub size: Decimal,
    pub filled_size: Decimal,
    pub remaining_size: Decimal,
    pub avg_fill_price: Option<Decimal>,
    pub status: FtxOrderStatus,
    #[serde(default)]
    pub reduce_only: bool,
    #[serde(default)]
    pub ioc: bool,
    #[serde(default)]
    pub post_only: bool,
    pub created_at: DateTime<Utc>,
}

/// A stop, take-profit or trailing-stop order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FtxConditionalOrderDto {
    pub id: u64,
    pub market: String,
    pub future: Option<String>,
    #[serde(rename = "type")]
    pub order_type: FtxConditionalOrderType,
    /// Type of the order placed once triggered.
    #[serde(default, rename = "orderType")]
    pub order_type_on_trigger: Option<FtxOrderType>,
    pub side: FtxOrderSide,
    pub size: Decimal,
    /// `null` for trailing stops.
    pub trigger_price: Option<Decimal>,
    /// Limit of the triggered order; `null` for a market order.
    pub order_price: Option<Decimal>,
    pub trail_value: Option<Decimal>,
    pub trail_start: Option<Decimal>,
    pub filled_size: Decimal,
    pub avg_fill_price: Option<Decimal>,
    pub status: FtxOrderStatus,
    /// Id of the order placed once triggered.
    pub order_id: Option<u64>,
    #[serde(default)]
    pub reduce_only: bool,
    #[serde(default)]
    pub retry_until_filled: bool,
    pub error: Option<String>,
    pub triggered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
