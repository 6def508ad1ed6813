//! Account balances, wallets and open positions.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::{Currency, CurrencyPair};

/// Total and available holdings of one currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub currency: Currency,
    pub total: Decimal,
    pub available: Decimal,
}

impl Balance {
    #[must_use]
    pub fn new(currency: Currency, total: Decimal, available: Decimal) -> Self {
        Self {
            currency,
            total,
            available,
        }
    }
}

/// What a wallet can be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WalletFeature {
    Trading,
    Funding,
    MarginTrading,
    MarginFunding,
}

/// A named sub-account holding balances keyed by currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: String,
    pub balances: BTreeMap<Currency, Balance>,
    pub features: BTreeSet<WalletFeature>,
    pub max_leverage: Option<Decimal>,
    pub current_leverage: Option<Decimal>,
}

impl Wallet {
    /// Creates a wallet from a list of balances. A later balance for the same
    /// currency replaces an earlier one.
    #[must_use]
    pub fn new(id: &str, balances: Vec<Balance>, features: BTreeSet<WalletFeature>) -> Self {
        Self {
            id: id.to_string(),
            balances: balances
                .into_iter()
                .map(|balance| (balance.currency.clone(), balance))
                .collect(),
            features,
            max_leverage: None,
            current_leverage: None,
        }
    }

    #[must_use]
    pub fn balance(&self, currency: &Currency) -> Option<&Balance> {
        self.balances.get(currency)
    }
}

/// Everything known about the account at capture time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub username: String,
    pub trading_fee: Decimal,
    pub wallets: Vec<Wallet>,
    pub timestamp: DateTime<Utc>,
}

impl AccountInfo {
    /// Looks up a wallet by id.
    #[must_use]
    pub fn wallet(&self, id: &str) -> Option<&Wallet> {
        self.wallets.iter().find(|wallet| wallet.id == id)
    }
}

/// Direction of an open position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionType {
    Long,
    Short,
}

/// A non-empty derivatives position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenPosition {
    pub instrument: CurrencyPair,
    pub position_type: PositionType,
    /// Always strictly positive; direction lives in `position_type`.
    pub size: Decimal,
    /// Break-even price.
    pub price: Option<Decimal>,
    pub liquidation_price: Option<Decimal>,
    pub unrealised_pnl: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenPositions {
    pub open_positions: Vec<OpenPosition>,
}
