use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

use crate::models::Address;
use crate::providers::DEFAULT_COINGECKO_API_URL;

/// Runtime configuration read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub account: Address,
    pub markets_file: PathBuf,
    pub snapshot_file: PathBuf,
    pub poll_interval_ms: u64,
    /// Live prices are used only when this is set
    pub coingecko_api_url: Option<String>,
    pub price_cache_ttl: Duration,
}

impl Config {
    /// Load from process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let account = lookup("ACCOUNT_ADDRESS").context("ACCOUNT_ADDRESS must be set")?;

        let poll_interval_ms = match lookup("POLL_INTERVAL_MS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("POLL_INTERVAL_MS is not a number: {}", raw))?,
            None => 15_000,
        };

        let price_cache_ttl_secs: u64 = match lookup("PRICE_CACHE_TTL_SECS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PRICE_CACHE_TTL_SECS is not a number: {}", raw))?,
            None => 60,
        };

        let coingecko_api_url = lookup("COINGECKO_API_URL").map(|url| {
            if url.is_empty() {
                DEFAULT_COINGECKO_API_URL.to_string()
            } else {
                url
            }
        });

        Ok(Self {
            account: Address::new(account),
            markets_file: lookup("MARKETS_FILE").unwrap_or_else(|| "markets.json".to_string()).into(),
            snapshot_file: lookup("SNAPSHOT_FILE").unwrap_or_else(|| "snapshot.json".to_string()).into(),
            poll_interval_ms,
            coingecko_api_url,
            price_cache_ttl: Duration::from_secs(price_cache_ttl_secs),
        })
    }
}
