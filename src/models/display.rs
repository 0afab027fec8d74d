use std::fmt;

use super::address::Address;

/// Which account table a set of rows belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Markets,
    Supply,
    Borrow,
    Supplied,
    Borrowed,
}

impl TableKind {
    pub fn title(&self) -> &'static str {
        match self {
            TableKind::Markets => "Markets",
            TableKind::Supply => "Supply",
            TableKind::Borrow => "Borrow",
            TableKind::Supplied => "Supplied",
            TableKind::Borrowed => "Borrowed",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    Asset,
    Apy,
    Apr,
    Wallet,
    Liquidity,
    Balance,
    Collateral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub key: ColumnKey,
    pub text: String,
}

/// Derived row for one market. Recomputed on every pass, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub market: Address,
    pub icon: Option<String>,
    pub cells: Vec<Cell>,
    pub collateral_enabled: bool,
}

impl DisplayRow {
    pub fn cell(&self, key: ColumnKey) -> Option<&str> {
        self.cells
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.text.as_str())
    }

    pub fn symbol(&self) -> Option<&str> {
        self.cell(ColumnKey::Asset)
    }
}

/// Rendered table: headers in column order, rows in market order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub kind: TableKind,
    pub headers: Vec<(&'static str, Align)>,
    pub rows: Vec<DisplayRow>,
    /// Shown instead of the rows when the table is withheld
    pub empty_message: Option<&'static str>,
}

impl TableView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// All tables for one account snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountTables {
    pub account: Address,
    pub markets: TableView,
    pub supply: TableView,
    pub borrow: TableView,
    pub supplied: TableView,
    pub borrowed: TableView,
}

impl AccountTables {
    pub fn iter(&self) -> impl Iterator<Item = &TableView> {
        [&self.markets, &self.supply, &self.borrow, &self.supplied, &self.borrowed].into_iter()
    }
}
