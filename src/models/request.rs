//! Outbound request payloads.
//!
//! Prices and sizes are sent as JSON numbers. Absent prices are sent as an
//! explicit `null`, which the venue reads as "market" (or "unchanged" on a
//! modify).

use rust_decimal::Decimal;
use serde::Serialize;

use super::order::{FtxConditionalOrderType, FtxOrderSide, FtxOrderType};

/// Body of `POST /orders`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FtxOrderRequestPayload {
    pub market: String,
    pub side: FtxOrderSide,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    #[serde(rename = "type")]
    pub order_type: FtxOrderType,
    #[serde(with = "rust_decimal::serde::float")]
    pub size: Decimal,
    pub reduce_only: bool,
    pub ioc: bool,
    pub post_only: bool,
    pub client_id: Option<String>,
}

/// Body of `POST /orders/{id}/modify`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FtxModifyOrderRequestPayload {
    #[serde(with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float")]
    pub size: Decimal,
    pub client_id: Option<String>,
}

/// Body of `POST /conditional_orders`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FtxConditionalOrderRequestPayload {
    pub market: String,
    pub side: FtxOrderSide,
    #[serde(with = "rust_decimal::serde::float")]
    pub size: Decimal,
    #[serde(rename = "type")]
    pub order_type: FtxConditionalOrderType,
    pub reduce_only: bool,
    pub retry_until_filled: bool,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub order_price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float")]
    pub trigger_price: Decimal,
    /// Trailing stops are not supported; always `None`.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub trail_value: Option<Decimal>,
}

/// Body of `POST /conditional_orders/{id}/modify`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FtxModifyConditionalOrderRequestPayload {
    #[serde(with = "rust_decimal::serde::float_option")]
    pub order_price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float")]
    pub trigger_price: Decimal,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub trail_value: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float")]
    pub size: Decimal,
}
