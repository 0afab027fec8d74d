//! Joins markets with account sources into display rows

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::models::{
    AccountSnapshot, AccountTables, Address, Balance, Cell, DisplayRow, ExchangeRate, Market, Price, TableView,
};

use super::columns::RowContext;
use super::tables::{Lookup, RowSource, TableSpec};

/// Borrowed inputs for one derivation pass. Absent sources are `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewInputs<'a> {
    pub markets: &'a [Market],
    pub balances: Option<&'a [Balance]>,
    pub exchange_rates: Option<&'a HashMap<Address, ExchangeRate>>,
    pub prices: Option<&'a HashMap<String, Price>>,
    pub collateral: Option<&'a HashSet<Address>>,
}

impl<'a> ViewInputs<'a> {
    /// Inputs for `source` drawn from a snapshot
    pub fn from_snapshot(snapshot: &'a AccountSnapshot, source: RowSource) -> Self {
        let balances = match source {
            RowSource::Markets => None,
            RowSource::Wallet => snapshot.wallet_balances.as_deref(),
            RowSource::Supplied => snapshot.supply_balances.as_deref(),
            RowSource::Borrowed => snapshot.borrow_balances.as_deref(),
        };

        Self {
            markets: snapshot.markets(),
            balances,
            exchange_rates: snapshot.exchange_rates.as_ref(),
            prices: snapshot.prices.as_ref(),
            collateral: snapshot.collateral.as_ref(),
        }
    }

    fn context(&self, market: &'a Market, balance: Option<&'a Balance>) -> RowContext<'a> {
        let exchange_rate = self.exchange_rates.and_then(|rates| rates.get(&market.token));
        let price = market
            .price_key
            .as_deref()
            .zip(self.prices)
            .and_then(|(key, prices)| prices.get(key));
        let collateral_enabled = self
            .collateral
            .map(|set| set.contains(&market.token))
            .unwrap_or(false);

        RowContext {
            market,
            balance,
            exchange_rate,
            price,
            collateral_enabled,
        }
    }
}

/// Build rows for one table, one per surviving market, in market order
pub fn build_rows(spec: &TableSpec, inputs: &ViewInputs<'_>) -> Vec<DisplayRow> {
    let mut rows = Vec::with_capacity(inputs.markets.len());

    for market in inputs.markets {
        let balance = match spec.source.lookup(market, inputs.balances) {
            Lookup::NotNeeded => None,
            Lookup::Found(balance) => Some(balance),
            Lookup::Missing => {
                debug!("{}: no balance for {}, row skipped", spec.kind, market.token.short());
                continue;
            }
        };

        let ctx = inputs.context(market, balance);
        if let Some(filter) = spec.filter {
            if !filter(&ctx) {
                continue;
            }
        }

        rows.push(DisplayRow {
            market: market.token.clone(),
            icon: market.icon.clone(),
            cells: spec
                .columns
                .iter()
                .map(|column| Cell {
                    key: column.key,
                    text: column.render(&ctx),
                })
                .collect(),
            collateral_enabled: ctx.collateral_enabled,
        });
    }

    rows
}

/// Wallet-driven rows with APY, wallet amount and collateral flag
pub fn build_display_rows(inputs: &ViewInputs<'_>) -> Vec<DisplayRow> {
    build_rows(&TableSpec::supply(), inputs)
}

pub fn build_table(spec: &TableSpec, snapshot: &AccountSnapshot) -> TableView {
    let headers = spec.columns.iter().map(|c| (c.header, c.align)).collect();

    if spec.requires_liquidity && snapshot.liquidity.is_none() {
        return TableView {
            kind: spec.kind,
            headers,
            rows: Vec::new(),
            empty_message: spec.empty_message,
        };
    }

    let inputs = ViewInputs::from_snapshot(snapshot, spec.source);
    TableView {
        kind: spec.kind,
        headers,
        rows: build_rows(spec, &inputs),
        empty_message: None,
    }
}

/// Every account table for one snapshot
pub fn build_tables(account: &Address, snapshot: &AccountSnapshot) -> AccountTables {
    AccountTables {
        account: account.clone(),
        markets: build_table(&TableSpec::markets(), snapshot),
        supply: build_table(&TableSpec::supply(), snapshot),
        borrow: build_table(&TableSpec::borrow(), snapshot),
        supplied: build_table(&TableSpec::supplied(), snapshot),
        borrowed: build_table(&TableSpec::borrowed(), snapshot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountLiquidity, ColumnKey};
    use rust_decimal_macros::dec;

    const UNIT_RATE: u128 = 1_000_000_000_000_000_000;

    fn dai_market() -> Market {
        let mut market = Market::new("0xA", "0xA", "DAI", "DAI");
        market.supply_apy = Some(dec!(3.14159));
        market.borrow_apy = Some(dec!(5.5));
        market.liquidity = Some(dec!(2500000));
        market.price_key = Some("dai".to_string());
        market
    }

    fn markets() -> Vec<Market> {
        vec![
            dai_market(),
            Market::new("0xB", "0xB0", "bETH", "ETH"),
            Market::new("0xC", "0xC0", "bUSDC", "USDC"),
        ]
    }

    #[test]
    fn wallet_row_end_to_end() {
        let markets = vec![Market::new("0xA", "0xA", "DAI", "DAI")];
        let balances = vec![Balance::new("0xA", "DAI", dec!(150.004))];

        let rows = build_display_rows(&ViewInputs {
            markets: &markets,
            balances: Some(balances.as_slice()),
            ..ViewInputs::default()
        });

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].symbol(), Some("DAI"));
        assert_eq!(rows[0].cell(ColumnKey::Wallet), Some("150.00 DAI"));
        assert_eq!(rows[0].cell(ColumnKey::Apy), Some("-"));
        assert!(!rows[0].collateral_enabled);
    }

    #[test]
    fn rows_follow_market_order_and_skip_unmatched() {
        let markets = markets();
        let balances = vec![
            Balance::new("0xc0", "USDC", dec!(3)),
            Balance::new("0xA", "DAI", dec!(1)),
        ];

        let rows = build_display_rows(&ViewInputs {
            markets: &markets,
            balances: Some(balances.as_slice()),
            ..ViewInputs::default()
        });

        let order: Vec<&str> = rows.iter().map(|r| r.market.as_str()).collect();
        assert_eq!(order, vec!["0xa", "0xc"]);
        assert!(rows.len() <= markets.len());
    }

    #[test]
    fn collateral_flag_follows_membership() {
        let markets = markets();
        let balances = vec![
            Balance::new("0xA", "DAI", dec!(1)),
            Balance::new("0xB0", "ETH", dec!(1)),
        ];
        let collateral: HashSet<Address> = [Address::new("0xa")].into_iter().collect();

        let rows = build_display_rows(&ViewInputs {
            markets: &markets,
            balances: Some(balances.as_slice()),
            collateral: Some(&collateral),
            ..ViewInputs::default()
        });

        assert_eq!(rows.len(), 2);
        assert!(rows[0].collateral_enabled);
        assert!(!rows[1].collateral_enabled);
    }

    #[test]
    fn missing_price_and_rate_render_placeholders() {
        let snapshot = AccountSnapshot {
            markets: Some(markets()),
            wallet_balances: Some(vec![Balance::new("0xA", "DAI", dec!(10))]),
            supply_balances: Some(vec![Balance::new("0xA", "DAI", dec!(10))]),
            ..AccountSnapshot::default()
        };

        let borrow = build_table(&TableSpec::borrow(), &snapshot);
        assert_eq!(borrow.rows.len(), 1);
        assert_eq!(borrow.rows[0].cell(ColumnKey::Liquidity), Some("-"));
        assert_eq!(borrow.rows[0].cell(ColumnKey::Apr), Some("5.50%"));

        // No exchange rate resolved yet: nothing can pass the dust check
        let supplied = build_table(&TableSpec::supplied(), &snapshot);
        assert!(supplied.is_empty());
    }

    #[test]
    fn borrow_table_prices_liquidity() {
        let snapshot = AccountSnapshot {
            markets: Some(markets()),
            wallet_balances: Some(vec![Balance::new("0xA", "DAI", dec!(10))]),
            prices: Some([("dai".to_string(), Price::usd(dec!(1.00)))].into_iter().collect()),
            ..AccountSnapshot::default()
        };

        let borrow = build_table(&TableSpec::borrow(), &snapshot);
        assert_eq!(borrow.rows[0].cell(ColumnKey::Liquidity), Some("$2.50M"));
    }

    #[test]
    fn supplied_table_applies_dust_filter() {
        let snapshot = AccountSnapshot {
            markets: Some(markets()),
            supply_balances: Some(vec![
                Balance::new("0xA", "bDAI", dec!(0.009999)),
                Balance::new("0xB", "bETH", dec!(0.0100001)),
                Balance::new("0xC", "bUSDC", dec!(50)),
            ]),
            exchange_rates: Some(
                [
                    (Address::new("0xA"), ExchangeRate::from_mantissa(UNIT_RATE)),
                    (Address::new("0xB"), ExchangeRate::from_mantissa(UNIT_RATE)),
                    (Address::new("0xC"), ExchangeRate::from_mantissa(UNIT_RATE / 50)),
                ]
                .into_iter()
                .collect(),
            ),
            collateral: Some([Address::new("0xC")].into_iter().collect()),
            ..AccountSnapshot::default()
        };

        let supplied = build_table(&TableSpec::supplied(), &snapshot);
        let order: Vec<&str> = supplied.rows.iter().map(|r| r.market.as_str()).collect();
        assert_eq!(order, vec!["0xb", "0xc"]);
        assert_eq!(supplied.rows[1].cell(ColumnKey::Balance), Some("1.00 USDC"));
        assert_eq!(supplied.rows[1].cell(ColumnKey::Collateral), Some("enabled"));
        assert_eq!(supplied.rows[0].cell(ColumnKey::Collateral), Some("disabled"));
    }

    #[test]
    fn borrowed_table_waits_for_liquidity() {
        let mut snapshot = AccountSnapshot {
            markets: Some(markets()),
            borrow_balances: Some(vec![Balance::new("0xB", "bETH", dec!(2))]),
            exchange_rates: Some([(Address::new("0xB"), ExchangeRate::from_mantissa(UNIT_RATE))].into_iter().collect()),
            ..AccountSnapshot::default()
        };

        let withheld = build_table(&TableSpec::borrowed(), &snapshot);
        assert!(withheld.is_empty());
        assert_eq!(withheld.empty_message, Some("You don't have any borrowed assets."));

        snapshot.liquidity = Some(AccountLiquidity {
            liquidity_usd: dec!(1000),
            shortfall_usd: dec!(0),
        });
        let shown = build_table(&TableSpec::borrowed(), &snapshot);
        assert_eq!(shown.rows.len(), 1);
        assert_eq!(shown.rows[0].cell(ColumnKey::Balance), Some("2.00 bETH"));
        assert_eq!(shown.empty_message, None);
    }

    #[test]
    fn markets_listing_keeps_every_market() {
        let snapshot = AccountSnapshot {
            markets: Some(markets()),
            ..AccountSnapshot::default()
        };

        let listing = build_table(&TableSpec::markets(), &snapshot);
        assert_eq!(listing.rows.len(), 3);
        assert_eq!(listing.rows[0].cell(ColumnKey::Apy), Some("3.14%"));
        assert_eq!(listing.rows[1].cell(ColumnKey::Apy), Some("-"));
        assert_eq!(listing.rows[1].symbol(), Some("bETH"));
    }

    #[test]
    fn building_twice_is_identical() {
        let snapshot = AccountSnapshot {
            markets: Some(markets()),
            wallet_balances: Some(vec![Balance::new("0xA", "DAI", dec!(10))]),
            prices: Some([("dai".to_string(), Price::usd(dec!(1)))].into_iter().collect()),
            ..AccountSnapshot::default()
        };
        let account = Address::new("0xfeed");

        assert_eq!(build_tables(&account, &snapshot), build_tables(&account, &snapshot));
    }
}
