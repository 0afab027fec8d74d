use async_trait::async_trait;
use tracing::{error, info};

use crate::error::SubmissionError;
use crate::models::{AccountTables, ActionReceipt, Align, TableView};
use crate::traits::{ActionEventHandler, ViewEventHandler};

const COLUMN_WIDTH: usize = 18;

/// Console logging event handler
pub struct ConsoleEventHandler;

impl ConsoleEventHandler {
    /// Create a new console event handler
    pub fn new() -> Self {
        Self
    }

    /// Lay a table out as fixed-width text lines
    pub fn render_table(table: &TableView) -> Vec<String> {
        let mut lines = Vec::with_capacity(table.rows.len() + 2);
        lines.push(
            table
                .headers
                .iter()
                .map(|(header, align)| pad(header, *align))
                .collect::<Vec<_>>()
                .join(" "),
        );
        lines.push("-".repeat((COLUMN_WIDTH + 1) * table.headers.len()));

        if table.rows.is_empty() {
            lines.push(table.empty_message.unwrap_or("(none)").to_string());
            return lines;
        }

        for row in &table.rows {
            lines.push(
                row.cells
                    .iter()
                    .zip(&table.headers)
                    .map(|(cell, (_, align))| pad(&cell.text, *align))
                    .collect::<Vec<_>>()
                    .join(" "),
            );
        }
        lines
    }
}

fn pad(text: &str, align: Align) -> String {
    match align {
        Align::Start => format!("{:<width$}", text, width = COLUMN_WIDTH),
        Align::Center => format!("{:^width$}", text, width = COLUMN_WIDTH),
        Align::End => format!("{:>width$}", text, width = COLUMN_WIDTH),
    }
}

impl Default for ConsoleEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ViewEventHandler for ConsoleEventHandler {
    async fn handle_tables(&self, tables: &AccountTables) {
        info!("{}", "=".repeat(80));
        info!("Account: {}", tables.account);

        for table in tables.iter() {
            info!("");
            info!("{}", table.kind.title().to_uppercase());
            for line in Self::render_table(table) {
                info!("{}", line);
            }
        }

        info!("{}", "=".repeat(80));
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        error!("Market view error: {:#}", error);
    }
}

#[async_trait]
impl ActionEventHandler for ConsoleEventHandler {
    async fn on_submitted(&self, receipt: &ActionReceipt) {
        info!(
            "Transaction submitted: {} ({}) at {}",
            receipt.action,
            receipt.tx_hash,
            receipt.submitted_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    async fn on_failed(&self, error: &SubmissionError) {
        error!("Transaction failed: {}", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cell, ColumnKey, DisplayRow, TableKind};

    #[test]
    fn empty_table_shows_message() {
        let table = TableView {
            kind: TableKind::Borrowed,
            headers: vec![("Asset", Align::Start)],
            rows: Vec::new(),
            empty_message: Some("You don't have any borrowed assets."),
        };

        let lines = ConsoleEventHandler::render_table(&table);
        assert_eq!(lines.last().map(String::as_str), Some("You don't have any borrowed assets."));
    }

    #[test]
    fn cells_are_aligned_per_column() {
        let table = TableView {
            kind: TableKind::Supply,
            headers: vec![("Asset", Align::Start), ("Wallet", Align::End)],
            rows: vec![DisplayRow {
                market: "0xa".into(),
                icon: None,
                cells: vec![
                    Cell { key: ColumnKey::Asset, text: "DAI".to_string() },
                    Cell { key: ColumnKey::Wallet, text: "150.00 DAI".to_string() },
                ],
                collateral_enabled: false,
            }],
            empty_message: None,
        };

        let lines = ConsoleEventHandler::render_table(&table);
        assert_eq!(lines.len(), 3);
        assert!(lines[2].starts_with("DAI "));
        assert!(lines[2].ends_with(" 150.00 DAI"));
    }
}
