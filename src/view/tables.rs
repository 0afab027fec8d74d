//! Table definitions for the account views

use crate::models::{Address, Balance, Market, TableKind};

use super::columns::{above_dust, ColumnSpec, RowFilter};

/// Which balance list drives a table, and how a market finds its entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSource {
    /// Every market is listed; no balance lookup
    Markets,
    /// Wallet balance of the underlying asset
    Wallet,
    /// Supplied market-token balance
    Supplied,
    /// Borrowed balance, keyed by market token
    Borrowed,
}

/// Result of looking a market up in a balance list
#[derive(Debug, Clone, Copy)]
pub enum Lookup<'a> {
    NotNeeded,
    Found(&'a Balance),
    Missing,
}

impl RowSource {
    pub fn lookup<'a>(&self, market: &Market, balances: Option<&'a [Balance]>) -> Lookup<'a> {
        let balances = match (self, balances) {
            (RowSource::Markets, _) => return Lookup::NotNeeded,
            (_, None) => return Lookup::Missing,
            (_, Some(balances)) => balances,
        };

        let find = |address: &Address| balances.iter().find(|b| &b.address == address);
        let found = match self {
            RowSource::Wallet => find(&market.underlying).or_else(|| find(&market.token)),
            _ => find(&market.token),
        };

        found.map(Lookup::Found).unwrap_or(Lookup::Missing)
    }
}

pub struct TableSpec {
    pub kind: TableKind,
    pub source: RowSource,
    pub columns: Vec<ColumnSpec>,
    pub filter: Option<RowFilter>,
    /// Shown when the table is withheld because account liquidity is unknown
    pub empty_message: Option<&'static str>,
    pub requires_liquidity: bool,
}

impl TableSpec {
    /// Plain market listing; never drops rows
    pub fn markets() -> Self {
        Self {
            kind: TableKind::Markets,
            source: RowSource::Markets,
            columns: vec![
                ColumnSpec::market_symbol(),
                ColumnSpec::supply_apy(),
                ColumnSpec::borrow_apr(),
            ],
            filter: None,
            empty_message: None,
            requires_liquidity: false,
        }
    }

    pub fn supply() -> Self {
        Self {
            kind: TableKind::Supply,
            source: RowSource::Wallet,
            columns: vec![
                ColumnSpec::balance_symbol(),
                ColumnSpec::supply_apy(),
                ColumnSpec::wallet_amount(),
            ],
            filter: None,
            empty_message: None,
            requires_liquidity: false,
        }
    }

    pub fn borrow() -> Self {
        Self {
            kind: TableKind::Borrow,
            source: RowSource::Wallet,
            columns: vec![
                ColumnSpec::balance_symbol(),
                ColumnSpec::borrow_apr(),
                ColumnSpec::liquidity(),
            ],
            filter: None,
            empty_message: None,
            requires_liquidity: false,
        }
    }

    pub fn supplied() -> Self {
        Self {
            kind: TableKind::Supplied,
            source: RowSource::Supplied,
            columns: vec![
                ColumnSpec::underlying_symbol(),
                ColumnSpec::supply_apy(),
                ColumnSpec::supplied_amount(),
                ColumnSpec::collateral(),
            ],
            filter: Some(above_dust),
            empty_message: None,
            requires_liquidity: false,
        }
    }

    pub fn borrowed() -> Self {
        Self {
            kind: TableKind::Borrowed,
            source: RowSource::Borrowed,
            columns: vec![
                ColumnSpec::market_symbol(),
                ColumnSpec::borrow_apr(),
                ColumnSpec::borrowed_amount(),
            ],
            filter: Some(above_dust),
            empty_message: Some("You don't have any borrowed assets."),
            requires_liquidity: true,
        }
    }
}
