//! Venue-agnostic trading objects populated by the adapters.

pub mod account;
pub mod currency;
pub mod market;
pub mod meta;
pub mod order;

pub use account::{
    AccountInfo, Balance, OpenPosition, OpenPositions, PositionType, Wallet, WalletFeature,
};
pub use currency::{Currency, CurrencyPair};
pub use market::{OrderBook, Ticker, Trade, TradeSortType, Trades, UserTrade, UserTrades};
pub use meta::{CurrencyMetaData, ExchangeMetaData, InstrumentMetaData, RateLimit};
pub use order::{
    Intention, LimitOrder, MarketOrder, OpenOrders, OrderFlag, OrderStatus, OrderType, StopOrder,
};
