use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::address::Address;

/// A lending/borrowing pool for one underlying asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    /// Market token contract; the market's identifier
    pub token: Address,
    pub underlying: Address,
    pub symbol: String,
    pub underlying_symbol: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub supply_apy: Option<Decimal>,
    #[serde(default)]
    pub borrow_apy: Option<Decimal>,
    /// Total liquidity in underlying units
    #[serde(default)]
    pub liquidity: Option<Decimal>,
    /// Key into the price map (a CoinGecko id)
    #[serde(default)]
    pub price_key: Option<String>,
}

impl Market {
    /// Create a market with only its identity filled in
    pub fn new(
        token: impl Into<Address>,
        underlying: impl Into<Address>,
        symbol: &str,
        underlying_symbol: &str,
    ) -> Self {
        Self {
            token: token.into(),
            underlying: underlying.into(),
            symbol: symbol.to_string(),
            underlying_symbol: underlying_symbol.to_string(),
            icon: None,
            supply_apy: None,
            borrow_apy: None,
            liquidity: None,
            price_key: None,
        }
    }
}
