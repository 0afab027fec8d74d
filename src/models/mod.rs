//! Data models for market views

pub mod action;
pub mod address;
pub mod balance;
pub mod display;
pub mod market;
pub mod rates;
pub mod snapshot;
pub mod swap;

// Re-export for convenience
pub use action::{Action, ActionReceipt, TxHash};
pub use address::Address;
pub use balance::Balance;
pub use display::{AccountTables, Align, Cell, ColumnKey, DisplayRow, TableKind, TableView};
pub use market::Market;
pub use rates::{AccountLiquidity, ExchangeRate, Price};
pub use snapshot::AccountSnapshot;
pub use swap::{SwapPlatform, SwapToken};
