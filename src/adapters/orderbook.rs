//! Order book adaptation.

use chrono::Utc;

use crate::domain::{CurrencyPair, LimitOrder, OrderBook, OrderType};
use crate::models::{FtxOrderbookDto, FtxOrderbookEntry};

/// Converts venue levels into an order book stamped with the current time.
///
/// The venue carries no timestamp, so the snapshot is dated at adaptation.
/// Levels keep the venue's best-first order.
#[must_use]
pub fn adapt_order_book(orderbook: &FtxOrderbookDto, pair: &CurrencyPair) -> OrderBook {
    OrderBook {
        timestamp: Utc::now(),
        asks: adapt_levels(&orderbook.asks, pair, OrderType::Ask),
        bids: adapt_levels(&orderbook.bids, pair, OrderType::Bid),
    }
}

/// Converts one price level into an anonymous limit order.
#[must_use]
pub fn adapt_order_book_order(
    entry: &FtxOrderbookEntry,
    pair: &CurrencyPair,
    order_type: OrderType,
) -> LimitOrder {
    LimitOrder::new(order_type, entry.volume, pair.clone(), entry.price)
}

fn adapt_levels(
    levels: &[FtxOrderbookEntry],
    pair: &CurrencyPair,
    order_type: OrderType,
) -> Vec<LimitOrder> {
    levels
        .iter()
        .map(|entry| adapt_order_book_order(entry, pair, order_type))
        .collect()
}
