//! Order book models (`GET /markets/{name}/orderbook`).

use rust_decimal::Decimal;
use serde::Deserialize;

/// Best-first ask and bid levels.
#[derive(Debug, Clone, Deserialize)]
pub struct FtxOrderbookDto {
    pub asks: Vec<FtxOrderbookEntry>,
    pub bids: Vec<FtxOrderbookEntry>,
}

/// One price level, sent on the wire as a `[price, size]` array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(Decimal, Decimal)")]
pub struct FtxOrderbookEntry {
    pub price: Decimal,
    pub volume: Decimal,
}

impl From<(Decimal, Decimal)> for FtxOrderbookEntry {
    fn from((price, volume): (Decimal, Decimal)) -> Self {
        Self { price, volume }
    }
}
