//! Data source and price provider implementations

pub mod file_provider;
pub mod price_provider;

// Re-export for convenience
pub use file_provider::{AccountRecord, FileDataSource, MarketRegistry, SnapshotFile};
pub use price_provider::{CoinGeckoPriceProvider, DEFAULT_COINGECKO_API_URL};
