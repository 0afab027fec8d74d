//! Action Dispatcher for collateral toggles and reward claims

pub mod dispatcher;

pub use dispatcher::ActionDispatcher;
