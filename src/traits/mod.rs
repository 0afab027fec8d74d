//! Core traits at the data source, chain and presentation seams

pub mod contracts;
pub mod data_source;
pub mod event_handler;
pub mod price_provider;

// Re-export for convenience
pub use contracts::{ComptrollerClient, RewardClient};
pub use data_source::AccountDataSource;
pub use event_handler::{ActionEventHandler, ViewEventHandler};
pub use price_provider::PriceProvider;
