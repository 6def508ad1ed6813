//! Account and wallet adaptation.

use std::collections::BTreeSet;

use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{trace, warn};

use crate::config::VenueConfig;
use crate::domain::{AccountInfo, Balance, Currency, Wallet, WalletFeature};
use crate::models::{FtxAccountDto, FtxWalletBalanceDto};

/// Decimal places of the derived current leverage (half-even).
pub const LEVERAGE_SCALE: u32 = 3;

/// Decimal places accepted by the lending endpoints (truncated).
pub const LENDING_SCALE: u32 = 4;

/// Merges the margin account summary and the spot balances into two wallets.
///
/// The margin wallet holds a single USD balance (collateral / free
/// collateral) plus leverage. The spot wallet holds one balance per coin.
#[must_use]
pub fn adapt_account_info(
    account: &FtxAccountDto,
    balances: &[FtxWalletBalanceDto],
    config: &VenueConfig,
) -> AccountInfo {
    let collateral = Balance::new(Currency::usd(), account.collateral, account.free_collateral);
    let mut margin_wallet = Wallet::new(
        &config.margin_wallet_id,
        vec![collateral],
        BTreeSet::from([WalletFeature::MarginTrading, WalletFeature::MarginFunding]),
    );
    margin_wallet.max_leverage = Some(account.leverage);
    margin_wallet.current_leverage =
        current_leverage(account.total_position_size, account.total_account_value);

    let spot_balances = balances
        .iter()
        .map(|balance| Balance::new(Currency::new(&balance.coin), balance.total, balance.free))
        .collect();
    let spot_wallet = Wallet::new(
        &config.spot_wallet_id,
        spot_balances,
        BTreeSet::from([WalletFeature::Funding, WalletFeature::Trading]),
    );

    trace!(
        username = %account.username,
        spot_balances = balances.len(),
        "Adapted account info"
    );

    AccountInfo {
        username: account.username.clone(),
        trading_fee: account.taker_fee,
        wallets: vec![margin_wallet, spot_wallet],
        timestamp: Utc::now(),
    }
}

/// Total position size over total account value, rounded half-even to
/// [`LEVERAGE_SCALE`] places. Zero when there are no positions.
///
/// Returns `None` when positions are open but the account value is zero.
#[must_use]
pub fn current_leverage(
    total_position_size: Decimal,
    total_account_value: Decimal,
) -> Option<Decimal> {
    if total_position_size.is_zero() {
        return Some(Decimal::ZERO);
    }

    let leverage = total_position_size
        .checked_div(total_account_value)
        .map(|l| l.round_dp_with_strategy(LEVERAGE_SCALE, RoundingStrategy::MidpointNearestEven));
    if leverage.is_none() {
        warn!(
            %total_position_size,
            %total_account_value,
            "Current leverage undefined for account value"
        );
    }
    leverage
}

/// Truncates an amount to the precision accepted by the lending endpoints.
#[must_use]
pub fn lending_rounding(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(LENDING_SCALE, RoundingStrategy::ToZero)
}
