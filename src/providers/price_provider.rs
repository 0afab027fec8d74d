use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::models::Price;
use crate::traits::PriceProvider;

pub const DEFAULT_COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";

#[derive(Debug, Deserialize)]
struct SimplePriceQuote {
    usd: Option<Decimal>,
}

/// CoinGecko `simple/price` provider with a TTL cache
pub struct CoinGeckoPriceProvider {
    client: reqwest::Client,
    base_url: String,
    ttl: Duration,
    price_cache: Arc<DashMap<String, (Price, Instant)>>,
}

impl CoinGeckoPriceProvider {
    pub fn new(base_url: impl Into<String>, ttl: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ttl,
            price_cache: Arc::new(DashMap::new()),
        })
    }

    fn cached(&self, key: &str) -> Option<Price> {
        let entry = self.price_cache.get(key)?;
        let (price, fetched_at) = *entry;
        (fetched_at.elapsed() < self.ttl).then_some(price)
    }

    /// Fetch quotes for `ids` in one request
    async fn fetch_external_prices(&self, ids: &[String]) -> anyhow::Result<HashMap<String, Price>> {
        let url = format!("{}/simple/price", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("ids", ids.join(",")), ("vs_currencies", "usd".to_string())])
            .send()
            .await?
            .error_for_status()?;

        let quotes: HashMap<String, SimplePriceQuote> = response.json().await?;
        Ok(parse_quotes(quotes))
    }
}

fn parse_quotes(quotes: HashMap<String, SimplePriceQuote>) -> HashMap<String, Price> {
    quotes
        .into_iter()
        .filter_map(|(id, quote)| quote.usd.map(|usd| (id, Price::usd(usd))))
        .collect()
}

#[async_trait]
impl PriceProvider for CoinGeckoPriceProvider {
    async fn get_price(&self, key: &str) -> Option<Price> {
        self.get_batch_prices(&[key.to_string()]).await.remove(key)
    }

    async fn get_batch_prices(&self, keys: &[String]) -> HashMap<String, Price> {
        let mut prices = HashMap::with_capacity(keys.len());
        let mut to_fetch = Vec::new();

        // Check cache first
        for key in keys {
            match self.cached(key) {
                Some(price) => {
                    prices.insert(key.clone(), price);
                }
                None => to_fetch.push(key.clone()),
            }
        }

        if to_fetch.is_empty() {
            return prices;
        }

        match self.fetch_external_prices(&to_fetch).await {
            Ok(fetched) => {
                debug!("Fetched {} of {} prices from CoinGecko", fetched.len(), to_fetch.len());
                let now = Instant::now();
                for (key, price) in fetched {
                    self.price_cache.insert(key.clone(), (price, now));
                    prices.insert(key, price);
                }
            }
            Err(e) => {
                warn!("Failed to fetch prices for {}: {}", to_fetch.join(","), e);
            }
        }

        prices
    }
}
