//! Ticker adaptation.
//!
//! The venue has no single ticker endpoint carrying both a live quote and
//! session statistics. A ticker is assembled from two responses the caller
//! fetched for the same market: the market snapshot (last, bid, ask) and
//! the historical bars, of which only the most recent is used (open, high,
//! low, volume, timestamp). The two responses are not cross-checked.

use crate::domain::{CurrencyPair, Ticker};
use crate::error::{AdapterError, Result};
use crate::models::{FtxCandleDto, FtxMarketDto};

/// Merges a market snapshot with the last of its historical bars.
///
/// # Errors
///
/// Returns [`AdapterError::EmptyCandles`] if `candles` is empty. Callers
/// must always request at least one bar.
pub fn adapt_ticker(
    market: &FtxMarketDto,
    candles: &[FtxCandleDto],
    pair: &CurrencyPair,
) -> Result<Ticker> {
    let last_candle = candles.last().ok_or_else(|| AdapterError::EmptyCandles {
        market: market.name.clone(),
    })?;

    Ok(Ticker {
        instrument: pair.clone(),
        open: last_candle.open,
        last: market.last,
        bid: market.bid,
        ask: market.ask,
        high: last_candle.high,
        low: last_candle.low,
        volume: last_candle.volume,
        timestamp: last_candle.start_time,
    })
}
