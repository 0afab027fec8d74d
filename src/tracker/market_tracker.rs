use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::models::{AccountSnapshot, AccountTables, Address};
use crate::traits::{AccountDataSource, PriceProvider, ViewEventHandler};
use crate::view::build_tables;

/// Polls the data sources for one account and renders its tables
pub struct MarketTracker {
    account: Address,
    data_source: Arc<dyn AccountDataSource>,
    price_provider: Arc<dyn PriceProvider>,
    event_handler: Arc<dyn ViewEventHandler>,
    last_tables: Arc<Mutex<Option<AccountTables>>>,
}

/// Resolved value, or `None` after logging why the source is unavailable
fn resolved<T>(source: &str, result: anyhow::Result<Option<T>>) -> Option<T> {
    match result {
        Ok(Some(value)) => Some(value),
        Ok(None) => {
            debug!("{} not available yet", source);
            None
        }
        Err(e) => {
            warn!("{} unavailable: {:#}", source, e);
            None
        }
    }
}

impl MarketTracker {
    /// Create a new market tracker
    pub fn new(
        account: Address,
        data_source: Arc<dyn AccountDataSource>,
        price_provider: Arc<dyn PriceProvider>,
        event_handler: Arc<dyn ViewEventHandler>,
    ) -> Self {
        Self {
            account,
            data_source,
            price_provider,
            event_handler,
            last_tables: Arc::new(Mutex::new(None)),
        }
    }

    pub fn account(&self) -> &Address {
        &self.account
    }

    /// Tables produced by the most recent pass
    pub async fn last_tables(&self) -> Option<AccountTables> {
        self.last_tables.lock().await.clone()
    }

    /// Gather every source once. Sources resolve independently; a failing
    /// source leaves its slot empty instead of failing the snapshot.
    pub async fn take_snapshot(&self) -> anyhow::Result<AccountSnapshot> {
        if let Err(e) = self.data_source.refresh().await {
            warn!("Data source refresh failed, using last good data: {:#}", e);
            self.event_handler.handle_error(&e).await;
        }

        let account = &self.account;
        let source = self.data_source.as_ref();
        let (markets, wallet, supplied, borrowed, rates, collateral, liquidity) = tokio::join!(
            source.fetch_markets(),
            source.fetch_wallet_balances(account),
            source.fetch_supply_balances(account),
            source.fetch_borrow_balances(account),
            source.fetch_exchange_rates(),
            source.fetch_collateral_markets(account),
            source.fetch_account_liquidity(account),
        );

        let mut snapshot = AccountSnapshot::new();
        snapshot.markets = resolved("markets", markets);
        snapshot.wallet_balances = resolved("wallet balances", wallet);
        snapshot.supply_balances = resolved("supply balances", supplied);
        snapshot.borrow_balances = resolved("borrow balances", borrowed);
        snapshot.exchange_rates = resolved("exchange rates", rates);
        snapshot.collateral = resolved("collateral markets", collateral);
        snapshot.liquidity = resolved("account liquidity", liquidity);

        let price_keys: Vec<String> = snapshot
            .markets()
            .iter()
            .filter_map(|m| m.price_key.clone())
            .collect();
        if !price_keys.is_empty() {
            let prices = self.price_provider.get_batch_prices(&price_keys).await;
            if prices.is_empty() {
                debug!("No prices resolved for {} keys", price_keys.len());
            } else {
                snapshot.prices = Some(prices);
            }
        }

        debug!("Snapshot resolved {}/8 sources", snapshot.resolved_sources());
        Ok(snapshot)
    }

    /// Take a snapshot, build all tables and hand them to the event handler
    pub async fn refresh(&self) -> anyhow::Result<AccountTables> {
        let snapshot = self.take_snapshot().await?;
        let tables = build_tables(&self.account, &snapshot);

        self.event_handler.handle_tables(&tables).await;
        *self.last_tables.lock().await = Some(tables.clone());
        Ok(tables)
    }

    /// Start polling-based tracking
    pub async fn start_tracking_polling(&self, tick_interval_ms: u64) -> anyhow::Result<()> {
        info!(
            "Starting polling for {} with interval: {}ms",
            self.account.short(),
            tick_interval_ms
        );

        let mut timedelta = Instant::now();

        loop {
            if let Err(e) = self.refresh().await {
                self.event_handler.handle_error(&e).await;
            }

            let sleep_ms = tick_interval_ms as i128 - timedelta.elapsed().as_millis() as i128;
            if sleep_ms > 0 {
                tokio::time::sleep(Duration::from_millis(sleep_ms as u64)).await;
            }
            timedelta = Instant::now();
        }
    }
}

impl Clone for MarketTracker {
    fn clone(&self) -> Self {
        Self {
            account: self.account.clone(),
            data_source: self.data_source.clone(),
            price_provider: self.price_provider.clone(),
            event_handler: self.event_handler.clone(),
            last_tables: self.last_tables.clone(),
        }
    }
}
