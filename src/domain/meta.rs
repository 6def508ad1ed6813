//! Instrument and currency metadata used for order validation.

use std::collections::HashMap;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::{Currency, CurrencyPair};

/// Trading rules for one instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentMetaData {
    pub amount_step_size: Decimal,
    pub minimum_amount: Decimal,
    /// Decimal places of a valid price.
    pub price_scale: u32,
    /// Decimal places of a valid amount.
    pub volume_scale: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyMetaData {
    pub scale: u32,
    /// Not reported by the venue; always zero.
    pub withdrawal_fee: Decimal,
}

/// `calls` requests allowed per `period_secs` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimit {
    pub calls: u32,
    pub period_secs: u64,
}

impl RateLimit {
    #[must_use]
    pub fn new(calls: u32, period_secs: u64) -> Self {
        Self { calls, period_secs }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        Duration::from_secs(self.period_secs)
    }
}

/// Static exchange description derived from the market list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeMetaData {
    pub instruments: HashMap<CurrencyPair, InstrumentMetaData>,
    pub currencies: HashMap<Currency, CurrencyMetaData>,
    pub public_rate_limits: Vec<RateLimit>,
    pub private_rate_limits: Vec<RateLimit>,
    /// Public and private calls count against the same budget.
    pub share_rate_limits: bool,
}
