use async_trait::async_trait;

use crate::error::SubmissionError;
use crate::models::{AccountTables, ActionReceipt};

/// Handler for freshly built account tables
#[async_trait]
pub trait ViewEventHandler: Send + Sync {
    async fn handle_tables(&self, tables: &AccountTables);

    async fn handle_error(&self, error: &anyhow::Error);
}

/// Handler for submission outcomes. Failures must reach the user, never be dropped.
#[async_trait]
pub trait ActionEventHandler: Send + Sync {
    async fn on_submitted(&self, receipt: &ActionReceipt);

    async fn on_failed(&self, error: &SubmissionError);
}
