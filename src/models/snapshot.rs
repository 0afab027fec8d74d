use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use super::address::Address;
use super::balance::Balance;
use super::market::Market;
use super::rates::{AccountLiquidity, ExchangeRate, Price};

/// One consistent set of inputs for a render pass.
///
/// Every source is optional: `None` means the source has not resolved yet,
/// which is distinct from an empty or zero value.
#[derive(Debug, Clone, Default)]
pub struct AccountSnapshot {
    pub taken_at: Option<DateTime<Utc>>,
    pub markets: Option<Vec<Market>>,
    pub wallet_balances: Option<Vec<Balance>>,
    pub supply_balances: Option<Vec<Balance>>,
    pub borrow_balances: Option<Vec<Balance>>,
    pub exchange_rates: Option<HashMap<Address, ExchangeRate>>,
    pub prices: Option<HashMap<String, Price>>,
    pub collateral: Option<HashSet<Address>>,
    pub liquidity: Option<AccountLiquidity>,
}

impl AccountSnapshot {
    /// Empty snapshot stamped with the current time
    pub fn new() -> Self {
        Self {
            taken_at: Some(Utc::now()),
            ..Self::default()
        }
    }

    pub fn markets(&self) -> &[Market] {
        self.markets.as_deref().unwrap_or(&[])
    }

    pub fn exchange_rate(&self, market: &Address) -> Option<&ExchangeRate> {
        self.exchange_rates.as_ref()?.get(market)
    }

    pub fn price(&self, key: &str) -> Option<&Price> {
        self.prices.as_ref()?.get(key)
    }

    /// Whether `market` is enrolled as collateral. Unresolved membership reads as not enrolled.
    pub fn is_collateral(&self, market: &Address) -> bool {
        self.collateral
            .as_ref()
            .map(|set| set.contains(market))
            .unwrap_or(false)
    }

    /// Number of sources that have resolved
    pub fn resolved_sources(&self) -> usize {
        [
            self.markets.is_some(),
            self.wallet_balances.is_some(),
            self.supply_balances.is_some(),
            self.borrow_balances.is_some(),
            self.exchange_rates.is_some(),
            self.prices.is_some(),
            self.collateral.is_some(),
            self.liquidity.is_some(),
        ]
        .iter()
        .filter(|resolved| **resolved)
        .count()
    }
}
