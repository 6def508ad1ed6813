//! Venue-agnostic orders.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::CurrencyPair;

/// Direction of an order from the account's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Buying order (the trader is providing the counter currency).
    Bid,
    /// Selling order (the trader is providing the base currency).
    Ask,
    /// Closes an open short position.
    ExitBid,
    /// Closes an open long position.
    ExitAsk,
}

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    New,
    Open,
    Closed,
    Canceled,
    /// The venue reported a status with no generic equivalent.
    Unknown,
}

/// Execution modifiers attached to an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrderFlag {
    ReduceOnly,
    Ioc,
    PostOnly,
    RetryUntilFilled,
}

/// Purpose of a stop order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intention {
    StopLoss,
    TakeProfit,
    TrailingStop,
}

/// A limit order, also used for order book levels and inbound venue orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitOrder {
    pub order_type: OrderType,
    pub instrument: CurrencyPair,
    pub original_amount: Decimal,
    /// `None` when the venue reports no price (e.g. a resting market order).
    pub limit_price: Option<Decimal>,
    pub cumulative_amount: Option<Decimal>,
    pub remaining_amount: Option<Decimal>,
    pub average_price: Option<Decimal>,
    pub status: Option<OrderStatus>,
    pub flags: BTreeSet<OrderFlag>,
    pub user_reference: Option<String>,
    pub id: String,
    pub timestamp: Option<DateTime<Utc>>,
}

impl LimitOrder {
    /// Creates a bare limit order with no fill state, flags or id.
    #[must_use]
    pub fn new(
        order_type: OrderType,
        original_amount: Decimal,
        instrument: CurrencyPair,
        limit_price: Decimal,
    ) -> Self {
        Self {
            order_type,
            instrument,
            original_amount,
            limit_price: Some(limit_price),
            cumulative_amount: None,
            remaining_amount: None,
            average_price: None,
            status: None,
            flags: BTreeSet::new(),
            user_reference: None,
            id: String::new(),
            timestamp: None,
        }
    }

    /// Adds an execution modifier.
    #[must_use]
    pub fn with_flag(mut self, flag: OrderFlag) -> Self {
        self.flags.insert(flag);
        self
    }

    /// Sets the client-supplied reference.
    #[must_use]
    pub fn with_user_reference(mut self, user_reference: &str) -> Self {
        self.user_reference = Some(user_reference.to_string());
        self
    }

    #[must_use]
    pub fn has_flag(&self, flag: OrderFlag) -> bool {
        self.flags.contains(&flag)
    }
}

/// An order executed at the best available price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOrder {
    pub order_type: OrderType,
    pub instrument: CurrencyPair,
    pub original_amount: Decimal,
    pub flags: BTreeSet<OrderFlag>,
    pub user_reference: Option<String>,
}

impl MarketOrder {
    #[must_use]
    pub fn new(order_type: OrderType, original_amount: Decimal, instrument: CurrencyPair) -> Self {
        Self {
            order_type,
            instrument,
            original_amount,
            flags: BTreeSet::new(),
            user_reference: None,
        }
    }

    #[must_use]
    pub fn with_flag(mut self, flag: OrderFlag) -> Self {
        self.flags.insert(flag);
        self
    }

    #[must_use]
    pub fn with_user_reference(mut self, user_reference: &str) -> Self {
        self.user_reference = Some(user_reference.to_string());
        self
    }

    #[must_use]
    pub fn has_flag(&self, flag: OrderFlag) -> bool {
        self.flags.contains(&flag)
    }
}

/// An order that activates once the stop price is reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopOrder {
    pub order_type: OrderType,
    pub instrument: CurrencyPair,
    pub original_amount: Decimal,
    pub stop_price: Decimal,
    /// Execution limit once triggered; `None` triggers a market order.
    pub limit_price: Option<Decimal>,
    /// `None` is treated as [`Intention::StopLoss`].
    pub intention: Option<Intention>,
    pub flags: BTreeSet<OrderFlag>,
    pub user_reference: Option<String>,
}

impl StopOrder {
    #[must_use]
    pub fn new(
        order_type: OrderType,
        original_amount: Decimal,
        instrument: CurrencyPair,
        stop_price: Decimal,
    ) -> Self {
        Self {
            order_type,
            instrument,
            original_amount,
            stop_price,
            limit_price: None,
            intention: None,
            flags: BTreeSet::new(),
            user_reference: None,
        }
    }

    #[must_use]
    pub fn with_limit_price(mut self, limit_price: Decimal) -> Self {
        self.limit_price = Some(limit_price);
        self
    }

    #[must_use]
    pub fn with_intention(mut self, intention: Intention) -> Self {
        self.intention = Some(intention);
        self
    }

    #[must_use]
    pub fn with_flag(mut self, flag: OrderFlag) -> Self {
        self.flags.insert(flag);
        self
    }

    #[must_use]
    pub fn has_flag(&self, flag: OrderFlag) -> bool {
        self.flags.contains(&flag)
    }
}

/// The account's resting orders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenOrders {
    pub open_orders: Vec<LimitOrder>,
}
