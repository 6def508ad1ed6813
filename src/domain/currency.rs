//! Currencies and currency pairs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdapterError;

/// An upper-cased currency code such as `BTC` or `USD`.
///
/// Futures contracts reuse this type for their expiry token (`PERP`, `0625`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Creates a currency from its code, upper-casing it.
    #[must_use]
    pub fn new(code: &str) -> Self {
        Self(code.trim().to_uppercase())
    }

    /// US dollar, the collateral currency of the margin wallet.
    #[must_use]
    pub fn usd() -> Self {
        Self::new("USD")
    }

    /// Returns the currency code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// An ordered (base, counter) pair of currencies.
///
/// Displays in the canonical spot form `BASE/COUNTER`. Parsing accepts both
/// spot (`BTC/USD`) and futures (`BTC-PERP`, `ETH-0625`) market names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub base: Currency,
    pub counter: Currency,
}

impl CurrencyPair {
    #[must_use]
    pub fn new(base: impl Into<Currency>, counter: impl Into<Currency>) -> Self {
        Self {
            base: base.into(),
            counter: counter.into(),
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.counter)
    }
}

impl FromStr for CurrencyPair {
    type Err = AdapterError;

    /// Splits on the first `/`, falling back to the first `-`.
    fn from_str(market: &str) -> Result<Self, Self::Err> {
        let (base, counter) = market
            .split_once('/')
            .or_else(|| market.split_once('-'))
            .ok_or_else(|| AdapterError::MalformedMarket(market.to_string()))?;

        let base = Currency::new(base);
        let counter = Currency::new(counter);
        if base.code().is_empty() || counter.code().is_empty() || base == counter {
            return Err(AdapterError::MalformedMarket(market.to_string()));
        }

        Ok(Self { base, counter })
    }
}
