//! Market list models (`GET /markets`, `GET /markets/{name}`).

use rust_decimal::Decimal;
use serde::Deserialize;

/// Instrument family of a market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FtxMarketType {
    Spot,
    Future,
    /// Any family this crate does not translate (e.g. prediction markets).
    #[serde(other)]
    Other,
}

/// A single tradable market with its live quote.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FtxMarketDto {
    /// Venue market name: `BTC/USD` for spot, `BTC-PERP` or `BTC-0625` for futures.
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub post_only: bool,
    pub price_increment: Decimal,
    pub size_increment: Decimal,
    #[serde(default)]
    pub min_provide_size: Option<Decimal>,
    pub last: Option<Decimal>,
    pub bid: Option<Decimal>,
    pub ask: Option<Decimal>,
    pub price: Option<Decimal>,
    #[serde(rename = "type")]
    pub market_type: FtxMarketType,
    /// Only present on spot markets.
    pub base_currency: Option<String>,
    /// Only present on spot markets.
    pub quote_currency: Option<String>,
    /// Only present on futures markets.
    pub underlying: Option<String>,
    #[serde(default)]
    pub restricted: bool,
    #[serde(default)]
    pub change_1h: Option<Decimal>,
    #[serde(default)]
    pub change_24h: Option<Decimal>,
    #[serde(default)]
    pub quote_volume_24h: Option<Decimal>,
    #[serde(default)]
    pub volume_usd_24h: Option<Decimal>,
}

/// The full market list.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct FtxMarketsDto {
    pub market_list: Vec<FtxMarketDto>,
}
