use std::collections::HashMap;

use async_trait::async_trait;

use crate::models::Price;

/// Trait for price feed providers
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Get USD price for a price key; `None` until the key resolves
    async fn get_price(&self, key: &str) -> Option<Price>;

    /// Get prices for multiple keys. Unresolved keys are left out of the map.
    async fn get_batch_prices(&self, keys: &[String]) -> HashMap<String, Price> {
        let mut prices = HashMap::with_capacity(keys.len());
        for key in keys {
            if let Some(price) = self.get_price(key).await {
                prices.insert(key.clone(), price);
            }
        }
        prices
    }
}
