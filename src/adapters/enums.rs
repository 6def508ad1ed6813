//! Mapping between venue enums and their generic equivalents.

use tracing::debug;

use crate::domain::{Intention, OrderStatus, OrderType};
use crate::error::{AdapterError, Result};
use crate::models::{FtxConditionalOrderType, FtxOrderSide, FtxOrderStatus};

/// Maps a generic order direction to the venue side.
///
/// The venue only knows buy and sell; exit orders are folded onto them:
/// - `Bid`, `ExitAsk` -> `buy`
/// - `Ask`, `ExitBid` -> `sell`
#[must_use]
pub fn order_type_to_side(order_type: OrderType) -> FtxOrderSide {
    match order_type {
        OrderType::Bid | OrderType::ExitAsk => FtxOrderSide::Buy,
        OrderType::Ask | OrderType::ExitBid => FtxOrderSide::Sell,
    }
}

/// Maps a venue side to a generic order direction.
#[must_use]
pub fn side_to_order_type(side: FtxOrderSide) -> OrderType {
    match side {
        FtxOrderSide::Buy => OrderType::Bid,
        FtxOrderSide::Sell => OrderType::Ask,
    }
}

/// Maps a venue order status to the generic status. Never fails.
#[must_use]
pub fn status_to_status(status: FtxOrderStatus) -> OrderStatus {
    match status {
        FtxOrderStatus::New | FtxOrderStatus::Triggered => OrderStatus::New,
        FtxOrderStatus::Closed => OrderStatus::Closed,
        FtxOrderStatus::Cancelled => OrderStatus::Canceled,
        FtxOrderStatus::Open => OrderStatus::Open,
        FtxOrderStatus::Unknown => {
            debug!("Unrecognised venue order status mapped to Unknown");
            OrderStatus::Unknown
        }
    }
}

/// Maps a stop intention to the conditional order type placed on the venue.
///
/// # Errors
///
/// Returns [`AdapterError::UnsupportedIntention`] for intentions the
/// conditional order endpoint cannot express.
pub fn intention_to_conditional_type(intention: Intention) -> Result<FtxConditionalOrderType> {
    match intention {
        Intention::StopLoss => Ok(FtxConditionalOrderType::Stop),
        Intention::TakeProfit => Ok(FtxConditionalOrderType::TakeProfit),
        other => Err(AdapterError::UnsupportedIntention(other)),
    }
}
