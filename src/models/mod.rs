//! Wire models for the FTX REST API.
//!
//! Response DTOs mirror the venue's JSON field names (camelCase) and are
//! decoded by the transport layer; request payloads are serialized back into
//! the same shape. Every REST response is wrapped in [`FtxResponse`].

pub mod account;
pub mod candle;
pub mod market;
pub mod order;
pub mod orderbook;
pub mod request;
pub mod trade;

use serde::Deserialize;

pub use account::{FtxAccountDto, FtxPositionDto, FtxWalletBalanceDto};
pub use candle::FtxCandleDto;
pub use market::{FtxMarketDto, FtxMarketType, FtxMarketsDto};
pub use order::{
    FtxConditionalOrderDto, FtxConditionalOrderType, FtxOrderDto, FtxOrderSide, FtxOrderStatus,
    FtxOrderType,
};
pub use orderbook::{FtxOrderbookDto, FtxOrderbookEntry};
pub use request::{
    FtxConditionalOrderRequestPayload, FtxModifyConditionalOrderRequestPayload,
    FtxModifyOrderRequestPayload, FtxOrderRequestPayload,
};
pub use trade::{FtxFillDto, FtxTradeDto};

/// Envelope around every successful REST response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FtxResponse<T> {
    pub success: bool,
    pub result: T,
    /// Set on paginated endpoints when another page is available.
    #[serde(default)]
    pub has_more_data: bool,
}
