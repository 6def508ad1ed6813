//! Market data: order books, tickers and public trades.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::{Currency, CurrencyPair};
use super::order::{LimitOrder, OrderType};

/// An order book snapshot. Levels are kept in the order received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    /// When the snapshot was adapted.
    pub timestamp: DateTime<Utc>,
    pub asks: Vec<LimitOrder>,
    pub bids: Vec<LimitOrder>,
}

/// A point-in-time quote for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    pub instrument: CurrencyPair,
    pub open: Decimal,
    pub last: Option<Decimal>,
    pub bid: Option<Decimal>,
    pub ask: Option<Decimal>,
    pub high: Decimal,
    pub low: Decimal,
    pub volume: Decimal,
    pub timestamp: DateTime<Utc>,
}

/// How a trade list is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSortType {
    SortById,
    SortByTimestamp,
}

/// A public trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub order_type: OrderType,
    pub original_amount: Decimal,
    pub instrument: CurrencyPair,
    pub price: Decimal,
    pub timestamp: DateTime<Utc>,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trades {
    pub trades: Vec<Trade>,
    pub sort_type: TradeSortType,
}

/// A fill of one of the account's own orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTrade {
    pub order_type: OrderType,
    pub original_amount: Decimal,
    pub instrument: CurrencyPair,
    pub price: Decimal,
    pub timestamp: DateTime<Utc>,
    pub id: String,
    pub order_id: String,
    pub fee_amount: Decimal,
    pub fee_currency: Currency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTrades {
    pub trades: Vec<UserTrade>,
    pub sort_type: TradeSortType,
}
