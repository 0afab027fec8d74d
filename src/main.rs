use std::sync::Arc;

use tracing::level_filters::LevelFilter;
use tracing::{error, info};

use market_view::providers::{CoinGeckoPriceProvider, FileDataSource, MarketRegistry};
use market_view::traits::{PriceProvider, ViewEventHandler};
use market_view::view::swap_list_rows;
use market_view::{Config, ConsoleEventHandler, MarketTracker};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_level(true)
        .with_target(false)
        .with_max_level(LevelFilter::INFO)
        .with_file(true)
        .with_line_number(true)
        .init();

    dotenvy::dotenv().ok();

    tokio::runtime::Runtime::new()?.block_on(async {
        let config = Config::from_env()?;

        info!("Initializing market view...");
        info!("Account: {}", config.account);
        info!("Markets file: {}", config.markets_file.display());
        info!("Snapshot file: {}", config.snapshot_file.display());

        let registry = MarketRegistry::load(&config.markets_file).await?;
        for row in swap_list_rows(&registry.swap_tokens) {
            info!("Swap {} on {}: {}", row.token_name, row.platform, row.url);
        }

        let data_source = Arc::new(FileDataSource::new(registry, &config.snapshot_file));
        let price_provider: Arc<dyn PriceProvider> = match &config.coingecko_api_url {
            Some(url) => {
                info!("Using CoinGecko prices from {}", url);
                Arc::new(CoinGeckoPriceProvider::new(url.clone(), config.price_cache_ttl)?)
            }
            None => data_source.clone(),
        };
        let event_handler: Arc<dyn ViewEventHandler> = Arc::new(ConsoleEventHandler::new());

        let tracker = MarketTracker::new(config.account.clone(), data_source, price_provider, event_handler);
        let poll_interval_ms = config.poll_interval_ms;

        tokio::spawn(async move {
            if let Err(e) = tracker.start_tracking_polling(poll_interval_ms).await {
                error!("Tracking error: {}", e);
            }
        });

        info!("Market view is running. Press Ctrl+C to stop.");

        // Keep the program running
        tokio::signal::ctrl_c().await?;

        info!("Shutting down...");

        Ok(())
    })
}
