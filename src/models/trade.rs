//! Public trade and private fill models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::order::FtxOrderSide;

/// A public trade (`GET /markets/{name}/trades`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FtxTradeDto {
    pub id: u64,
    #[serde(default)]
    pub liquidation: bool,
    pub price: Decimal,
    pub side: FtxOrderSide,
    pub size: Decimal,
    pub time: DateTime<Utc>,
}

/// A fill of one of the account's orders (`GET /fills`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FtxFillDto {
    pub id: u64,
    pub market: String,
    /// Set on futures fills.
    pub future: Option<String>,
    pub base_currency: Option<String>,
    pub quote_currency: Option<String>,
    pub order_id: u64,
    pub trade_id: Option<u64>,
    pub price: Decimal,
    pub side: FtxOrderSide,
    /// Zero for no-op fill events.
    pub size: Decimal,
    pub fee: Decimal,
    pub fee_currency: String,
    #[serde(default)]
    pub fee_rate: Option<Decimal>,
    /// `"maker"` or `"taker"`.
    #[serde(default)]
    pub liquidity: Option<String>,
    pub time: DateTime<Utc>,
}
