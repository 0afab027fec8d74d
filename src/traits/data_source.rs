use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use crate::models::{AccountLiquidity, Address, Balance, ExchangeRate, Market};

/// Read-only account and market sources.
///
/// `Ok(None)` means the source has not resolved yet, which is distinct from an
/// empty collection or a zero balance. Each call is independent; callers must not
/// rely on any ordering between them.
#[async_trait]
pub trait AccountDataSource: Send + Sync {
    /// Optional: pull a fresh copy of the underlying data before a pass
    async fn refresh(&self) -> anyhow::Result<()> {
        // Default implementation does nothing
        Ok(())
    }

    /// Supported markets
    async fn fetch_markets(&self) -> anyhow::Result<Option<Vec<Market>>>;

    /// Underlying-asset balances held in the wallet
    async fn fetch_wallet_balances(&self, account: &Address) -> anyhow::Result<Option<Vec<Balance>>>;

    /// Market-token balances supplied by the account
    async fn fetch_supply_balances(&self, account: &Address) -> anyhow::Result<Option<Vec<Balance>>>;

    /// Amounts borrowed by the account, per market token
    async fn fetch_borrow_balances(&self, account: &Address) -> anyhow::Result<Option<Vec<Balance>>>;

    async fn fetch_exchange_rates(&self) -> anyhow::Result<Option<HashMap<Address, ExchangeRate>>>;

    /// Markets the account has entered as collateral
    async fn fetch_collateral_markets(&self, account: &Address) -> anyhow::Result<Option<HashSet<Address>>>;

    async fn fetch_account_liquidity(&self, account: &Address) -> anyhow::Result<Option<AccountLiquidity>>;
}
