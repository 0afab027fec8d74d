//! Market View Library
//!
//! Joins lending-market metadata with account balances, exchange rates,
//! prices and collateral membership into display tables, and dispatches
//! collateral toggles and reward claims.

// Public modules - these are the API surface
pub mod config;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod models;
pub mod providers;
pub mod tracker;
pub mod traits;
pub mod view;

// Re-export commonly used items for easier access
pub use config::Config;
pub use dispatch::ActionDispatcher;
pub use error::SubmissionError;
pub use handlers::{CompositeEventHandler, ConsoleEventHandler};
pub use models::{
    AccountLiquidity, AccountSnapshot, AccountTables, Action, ActionReceipt, Address, Balance, DisplayRow,
    ExchangeRate, Market, Price, TableKind, TableView, TxHash,
};
pub use providers::{CoinGeckoPriceProvider, FileDataSource, MarketRegistry};
pub use tracker::MarketTracker;
pub use traits::{
    AccountDataSource, ActionEventHandler, ComptrollerClient, PriceProvider, RewardClient, ViewEventHandler,
};
pub use view::{build_display_rows, build_tables, ViewInputs};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for library functions
pub type Result<T> = std::result::Result<T, anyhow::Error>;
