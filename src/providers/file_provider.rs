use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::{AccountLiquidity, Address, Balance, ExchangeRate, Market, Price, SwapToken};
use crate::traits::{AccountDataSource, PriceProvider};

/// Static registry of supported markets and swap listings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketRegistry {
    #[serde(default)]
    pub markets: Vec<Market>,
    #[serde(default)]
    pub swap_tokens: Vec<SwapToken>,
}

impl MarketRegistry {
    pub async fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading market registry {}", path.display()))?;
        let registry: Self = serde_json::from_str(&raw)
            .with_context(|| format!("parsing market registry {}", path.display()))?;
        info!(
            "Loaded {} markets and {} swap tokens from {}",
            registry.markets.len(),
            registry.swap_tokens.len(),
            path.display()
        );
        Ok(registry)
    }
}

/// Per-account section of a snapshot file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub wallet_balances: Option<Vec<Balance>>,
    pub supply_balances: Option<Vec<Balance>>,
    pub borrow_balances: Option<Vec<Balance>>,
    pub collateral: Option<HashSet<Address>>,
    pub liquidity: Option<AccountLiquidity>,
}

/// Snapshot exported by an indexer. Any section may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotFile {
    pub markets: Option<Vec<Market>>,
    pub exchange_rates: Option<HashMap<Address, ExchangeRate>>,
    pub prices: Option<HashMap<String, Price>>,
    #[serde(default)]
    pub accounts: HashMap<Address, AccountRecord>,
}

/// Data source backed by a JSON snapshot file.
///
/// The file is read on `refresh`, so every fetch between two refreshes sees
/// the same contents.
pub struct FileDataSource {
    registry: MarketRegistry,
    snapshot_path: PathBuf,
    current: RwLock<Option<SnapshotFile>>,
}

impl FileDataSource {
    pub fn new(registry: MarketRegistry, snapshot_path: impl Into<PathBuf>) -> Self {
        Self {
            registry,
            snapshot_path: snapshot_path.into(),
            current: RwLock::new(None),
        }
    }

    pub fn registry(&self) -> &MarketRegistry {
        &self.registry
    }

    async fn account_field<T>(
        &self,
        account: &Address,
        field: impl FnOnce(&AccountRecord) -> Option<T>,
    ) -> Option<T> {
        let current = self.current.read().await;
        current.as_ref()?.accounts.get(account).and_then(field)
    }
}

#[async_trait]
impl AccountDataSource for FileDataSource {
    async fn refresh(&self) -> anyhow::Result<()> {
        let raw = match tokio::fs::read_to_string(&self.snapshot_path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Snapshot {} not written yet", self.snapshot_path.display());
                *self.current.write().await = None;
                return Ok(());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading snapshot {}", self.snapshot_path.display()));
            }
        };

        let snapshot: SnapshotFile = serde_json::from_str(&raw)
            .with_context(|| format!("parsing snapshot {}", self.snapshot_path.display()))?;
        debug!("Snapshot reloaded: {} accounts", snapshot.accounts.len());
        *self.current.write().await = Some(snapshot);
        Ok(())
    }

    async fn fetch_markets(&self) -> anyhow::Result<Option<Vec<Market>>> {
        let current = self.current.read().await;
        if let Some(markets) = current.as_ref().and_then(|s| s.markets.clone()) {
            return Ok(Some(markets));
        }
        if self.registry.markets.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.registry.markets.clone()))
    }

    async fn fetch_wallet_balances(&self, account: &Address) -> anyhow::Result<Option<Vec<Balance>>> {
        Ok(self.account_field(account, |r| r.wallet_balances.clone()).await)
    }

    async fn fetch_supply_balances(&self, account: &Address) -> anyhow::Result<Option<Vec<Balance>>> {
        Ok(self.account_field(account, |r| r.supply_balances.clone()).await)
    }

    async fn fetch_borrow_balances(&self, account: &Address) -> anyhow::Result<Option<Vec<Balance>>> {
        Ok(self.account_field(account, |r| r.borrow_balances.clone()).await)
    }

    async fn fetch_exchange_rates(&self) -> anyhow::Result<Option<HashMap<Address, ExchangeRate>>> {
        let current = self.current.read().await;
        Ok(current.as_ref().and_then(|s| s.exchange_rates.clone()))
    }

    async fn fetch_collateral_markets(&self, account: &Address) -> anyhow::Result<Option<HashSet<Address>>> {
        Ok(self.account_field(account, |r| r.collateral.clone()).await)
    }

    async fn fetch_account_liquidity(&self, account: &Address) -> anyhow::Result<Option<AccountLiquidity>> {
        Ok(self.account_field(account, |r| r.liquidity).await)
    }
}

#[async_trait]
impl PriceProvider for FileDataSource {
    async fn get_price(&self, key: &str) -> Option<Price> {
        let current = self.current.read().await;
        current.as_ref()?.prices.as_ref()?.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "exchangeRates": { "0xAAA": { "mantissa": 20000000000000000 } },
        "prices": { "dai": { "usd": "1.00" } },
        "accounts": {
            "0xFEED": {
                "walletBalances": [ { "address": "0xDAI", "symbol": "DAI", "balance": "150.004" } ],
                "collateral": [ "0xAAA" ]
            }
        }
    }"#;

    fn registry() -> MarketRegistry {
        MarketRegistry {
            markets: vec![Market::new("0xaaa", "0xdai", "bDAI", "DAI")],
            swap_tokens: Vec::new(),
        }
    }

    #[tokio::test]
    async fn unresolved_before_refresh() {
        let source = FileDataSource::new(registry(), "/nonexistent/snapshot.json");
        source.refresh().await.unwrap();

        let account = Address::new("0xfeed");
        assert!(source.fetch_wallet_balances(&account).await.unwrap().is_none());
        assert!(source.fetch_exchange_rates().await.unwrap().is_none());
        assert_eq!(source.fetch_markets().await.unwrap().unwrap().len(), 1);
        assert!(source.get_price("dai").await.is_none());
    }

    #[tokio::test]
    async fn reads_sections_per_account() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let source = FileDataSource::new(registry(), file.path());
        source.refresh().await.unwrap();

        let account = Address::new("0xfeed");
        let wallet = source.fetch_wallet_balances(&account).await.unwrap().unwrap();
        assert_eq!(wallet[0].balance, dec!(150.004));
        assert_eq!(wallet[0].address, Address::new("0xdai"));

        // Section absent from the file stays unresolved
        assert!(source.fetch_supply_balances(&account).await.unwrap().is_none());

        let collateral = source.fetch_collateral_markets(&account).await.unwrap().unwrap();
        assert!(collateral.contains(&Address::new("0xaaa")));

        let rates = source.fetch_exchange_rates().await.unwrap().unwrap();
        assert_eq!(rates[&Address::new("0xaaa")].to_decimal(), Some(dec!(0.02)));

        assert_eq!(source.get_price("dai").await, Some(Price::usd(dec!(1))));

        let other = Address::new("0xbeef");
        assert!(source.fetch_account_liquidity(&other).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn malformed_snapshot_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let source = FileDataSource::new(registry(), file.path());
        assert!(source.refresh().await.is_err());
    }
}
