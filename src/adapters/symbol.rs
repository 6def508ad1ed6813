//! Currency pair to venue market name conversion.
//!
//! Spot markets are named `BASE/COUNTER`. Futures markets are named
//! `BASE-EXPIRY` (e.g. `BTC-0625`) or `BASE-PERP` for perpetuals. The counter
//! token alone decides which form applies.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::CurrencyPair;

/// Counter tokens that identify a futures contract.
static FUTURES_COUNTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:PERP|[0-9]+)$").expect("static pattern compiles"));

/// Separator between underlying and expiry in a futures market name.
pub const FUTURES_SEPARATOR: char = '-';

/// Returns `true` when the pair's counter is an expiry code or `PERP`.
#[must_use]
pub fn is_futures_pair(pair: &CurrencyPair) -> bool {
    FUTURES_COUNTER.is_match(pair.counter.code())
}

/// Converts a currency pair into the venue's market name.
///
/// # Examples
/// - `BTC/USD` -> `"BTC/USD"`
/// - `BTC/PERP` -> `"BTC-PERP"`
/// - `ETH/0625` -> `"ETH-0625"`
#[must_use]
pub fn to_market_symbol(pair: &CurrencyPair) -> String {
    if is_futures_pair(pair) {
        format!("{}{FUTURES_SEPARATOR}{}", pair.base, pair.counter)
    } else {
        pair.to_string()
    }
}
