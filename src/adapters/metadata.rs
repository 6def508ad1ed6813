//! Exchange metadata derived from the market list.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{debug, trace};

use super::symbol::FUTURES_SEPARATOR;
use crate::config::VenueConfig;
use crate::domain::{CurrencyMetaData, CurrencyPair, ExchangeMetaData, InstrumentMetaData};
use crate::models::{FtxMarketDto, FtxMarketType, FtxMarketsDto};

/// Builds instrument and currency metadata in a single pass over the markets.
///
/// Spot markets register their pair and, the first time each currency is
/// seen, its scale. A spot market quoted in its own base is skipped. Futures markets register only the contract, and only if
/// the name contains the futures separator. Other market families are
/// ignored.
#[must_use]
pub fn adapt_exchange_metadata(markets: &FtxMarketsDto, config: &VenueConfig) -> ExchangeMetaData {
    let mut instruments = HashMap::new();
    let mut currencies = HashMap::new();

    for market in &markets.market_list {
        let metadata = adapt_instrument_metadata(market);

        match market.market_type {
            FtxMarketType::Spot => {
                let (Some(base), Some(quote)) = (&market.base_currency, &market.quote_currency)
                else {
                    debug!(market = %market.name, "Skipping spot market without currencies");
                    continue;
                };
                let pair = CurrencyPair::new(base.as_str(), quote.as_str());
                if pair.base == pair.counter {
                    debug!(market = %market.name, "Skipping spot market quoted in its own base");
                    continue;
                }

                currencies
                    .entry(pair.base.clone())
                    .or_insert_with(|| currency_metadata(market.size_increment));
                currencies
                    .entry(pair.counter.clone())
                    .or_insert_with(|| currency_metadata(market.price_increment));
                instruments.insert(pair, metadata);
            }
            FtxMarketType::Future => {
                if !market.name.contains(FUTURES_SEPARATOR) {
                    debug!(market = %market.name, "Skipping futures market without separator");
                    continue;
                }
                match market.name.parse::<CurrencyPair>() {
                    Ok(contract) => {
                        instruments.insert(contract, metadata);
                    }
                    Err(e) => debug!(market = %market.name, error = %e, "Skipping futures market"),
                }
            }
            FtxMarketType::Other => {}
        }
    }

    trace!(
        instruments = instruments.len(),
        currencies = currencies.len(),
        "Adapted exchange metadata"
    );

    ExchangeMetaData {
        instruments,
        currencies,
        public_rate_limits: config.rate_limits.clone(),
        private_rate_limits: config.rate_limits.clone(),
        share_rate_limits: true,
    }
}

/// Order validation rules for a single market.
///
/// The amount scale ignores trailing zeros of the size increment, so `1.0000`
/// has scale 0 and `0.0010` has scale 3.
#[must_use]
pub fn adapt_instrument_metadata(market: &FtxMarketDto) -> InstrumentMetaData {
    InstrumentMetaData {
        amount_step_size: market.size_increment,
        minimum_amount: market.size_increment,
        price_scale: market.price_increment.scale(),
        volume_scale: market.size_increment.normalize().scale(),
    }
}

fn currency_metadata(increment: Decimal) -> CurrencyMetaData {
    CurrencyMetaData {
        scale: increment.scale(),
        withdrawal_fee: Decimal::ZERO,
    }
}
