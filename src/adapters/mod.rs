//! Conversions between FTX wire models and the generic trading domain.
//!
//! Every function here is a pure, synchronous transform. [`symbol`] and
//! [`enums`] are the leaves; the remaining modules each assemble one domain
//! entity (or one outbound payload) on top of them.

pub mod account;
pub mod enums;
pub mod metadata;
pub mod orderbook;
pub mod orders;
pub mod positions;
pub mod symbol;
pub mod ticker;
pub mod trades;

pub use account::{
    LENDING_SCALE, LEVERAGE_SCALE, adapt_account_info, current_leverage, lending_rounding,
};
pub use enums::{
    intention_to_conditional_type, order_type_to_side, side_to_order_type, status_to_status,
};
pub use metadata::{adapt_exchange_metadata, adapt_instrument_metadata};
pub use orderbook::{adapt_order_book, adapt_order_book_order};
pub use orders::{
    adapt_conditional_limit_order, adapt_limit_order, adapt_limit_order_payload,
    adapt_market_order_payload, adapt_modify_conditional_order_payload,
    adapt_modify_order_payload, adapt_open_orders, adapt_stop_order_payload,
    adapt_trigger_open_orders,
};
pub use positions::adapt_open_positions;
pub use symbol::{FUTURES_SEPARATOR, is_futures_pair, to_market_symbol};
pub use ticker::adapt_ticker;
pub use trades::{adapt_trades, adapt_user_trades};
