use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SubmissionError;
use crate::models::{AccountTables, ActionReceipt};
use crate::traits::{ActionEventHandler, ViewEventHandler};

/// Composite event handler that can combine multiple handlers
pub struct CompositeEventHandler {
    view_handlers: Vec<Arc<dyn ViewEventHandler>>,
    action_handlers: Vec<Arc<dyn ActionEventHandler>>,
}

impl CompositeEventHandler {
    /// Create a new composite event handler
    pub fn new() -> Self {
        Self {
            view_handlers: Vec::new(),
            action_handlers: Vec::new(),
        }
    }

    pub fn add_view_handler(&mut self, handler: Arc<dyn ViewEventHandler>) {
        self.view_handlers.push(handler);
    }

    pub fn add_action_handler(&mut self, handler: Arc<dyn ActionEventHandler>) {
        self.action_handlers.push(handler);
    }

    /// Check if there are any handlers
    pub fn is_empty(&self) -> bool {
        self.view_handlers.is_empty() && self.action_handlers.is_empty()
    }

    /// Number of handlers
    pub fn len(&self) -> usize {
        self.view_handlers.len() + self.action_handlers.len()
    }
}

impl Default for CompositeEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ViewEventHandler for CompositeEventHandler {
    async fn handle_tables(&self, tables: &AccountTables) {
        for handler in &self.view_handlers {
            handler.handle_tables(tables).await;
        }
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        for handler in &self.view_handlers {
            handler.handle_error(error).await;
        }
    }
}

#[async_trait]
impl ActionEventHandler for CompositeEventHandler {
    async fn on_submitted(&self, receipt: &ActionReceipt) {
        for handler in &self.action_handlers {
            handler.on_submitted(receipt).await;
        }
    }

    async fn on_failed(&self, error: &SubmissionError) {
        for handler in &self.action_handlers {
            handler.on_failed(error).await;
        }
    }
}
