//! Public trade and private fill adaptation.

use rust_decimal::Decimal;
use tracing::{debug, trace};

use super::enums::side_to_order_type;
use crate::domain::{
    Currency, CurrencyPair, Trade, TradeSortType, Trades, UserTrade, UserTrades,
};
use crate::error::Result;
use crate::models::{FtxFillDto, FtxTradeDto};

/// Converts public trades for one market.
#[must_use]
pub fn adapt_trades(trades: &[FtxTradeDto], pair: &CurrencyPair) -> Trades {
    let trades = trades
        .iter()
        .map(|trade| Trade {
            order_type: side_to_order_type(trade.side),
            original_amount: trade.size,
            instrument: pair.clone(),
            price: trade.price,
            timestamp: trade.time,
            id: trade.id.to_string(),
        })
        .collect();

    Trades {
        trades,
        sort_type: TradeSortType::SortById,
    }
}

/// Converts the account's fills, dropping zero-size fills.
///
/// # Errors
///
/// Returns [`AdapterError::MalformedMarket`](crate::AdapterError::MalformedMarket)
/// if a fill's market name cannot be parsed.
pub fn adapt_user_trades(fills: &[FtxFillDto]) -> Result<UserTrades> {
    let mut trades = Vec::with_capacity(fills.len());

    for fill in fills {
        if fill.size == Decimal::ZERO {
            debug!(fill_id = fill.id, market = %fill.market, "Dropping zero-size fill");
            continue;
        }

        trades.push(UserTrade {
            order_type: side_to_order_type(fill.side),
            original_amount: fill.size,
            instrument: fill.market.parse::<CurrencyPair>()?,
            price: fill.price,
            timestamp: fill.time,
            id: fill.id.to_string(),
            order_id: fill.order_id.to_string(),
            fee_amount: fill.fee,
            fee_currency: Currency::new(&fill.fee_currency),
        });
    }

    trace!(fills = fills.len(), trades = trades.len(), "Adapted user trades");
    Ok(UserTrades {
        trades,
        sort_type: TradeSortType::SortByTimestamp,
    })
}
