//! Account, wallet and position models.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::order::FtxOrderSide;

/// Margin account summary (`GET /account`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FtxAccountDto {
    pub username: String,
    #[serde(default)]
    pub backstop_provider: bool,
    pub collateral: Decimal,
    pub free_collateral: Decimal,
    pub initial_margin_requirement: Decimal,
    pub maintenance_margin_requirement: Decimal,
    /// Maximum leverage configured for the account.
    pub leverage: Decimal,
    #[serde(default)]
    pub liquidating: bool,
    pub maker_fee: Decimal,
    pub taker_fee: Decimal,
    pub margin_fraction: Option<Decimal>,
    pub open_margin_fraction: Option<Decimal>,
    pub total_account_value: Decimal,
    pub total_position_size: Decimal,
    #[serde(default)]
    pub positions: Vec<FtxPositionDto>,
}

/// Spot balance of one coin (`GET /wallet/balances`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FtxWalletBalanceDto {
    pub coin: String,
    pub free: Decimal,
    pub total: Decimal,
    #[serde(default)]
    pub usd_value: Option<Decimal>,
    #[serde(default)]
    pub available_without_borrow: Option<Decimal>,
}

/// A futures position (`GET /positions`). Closed positions are reported with
/// a zero size.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FtxPositionDto {
    pub future: String,
    pub side: FtxOrderSide,
    /// Absolute position size.
    pub size: Decimal,
    /// Signed size: negative when short.
    pub net_size: Decimal,
    pub cost: Decimal,
    pub entry_price: Option<Decimal>,
    pub estimated_liquidation_price: Option<Decimal>,
    pub initial_margin_requirement: Decimal,
    pub maintenance_margin_requirement: Decimal,
    #[serde(default)]
    pub long_order_size: Decimal,
    #[serde(default)]
    pub short_order_size: Decimal,
    #[serde(default)]
    pub open_size: Decimal,
    pub realized_pnl: Decimal,
    pub unrealized_pnl: Decimal,
    #[serde(default)]
    pub collateral_used: Decimal,
    pub recent_break_even_price: Option<Decimal>,
    pub recent_average_open_price: Option<Decimal>,
    pub recent_pnl: Option<Decimal>,
}
