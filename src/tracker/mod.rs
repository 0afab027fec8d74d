//! Polling tracker that turns data source snapshots into tables

pub mod market_tracker;

pub use market_tracker::MarketTracker;
