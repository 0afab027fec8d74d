//! Declarative column specs evaluated uniformly by the builder

use rust_decimal::Decimal;

use crate::models::{Align, Balance, ColumnKey, ExchangeRate, Market, Price};

use super::format::{format_amount, format_liquidity, format_rate, PLACEHOLDER};

/// Minimum underlying value a position must reach to be listed
pub const DUST_THRESHOLD: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Everything a formatter or filter may look at for one market
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    pub market: &'a Market,
    /// Balance matched for the table, if the table is balance-driven
    pub balance: Option<&'a Balance>,
    pub exchange_rate: Option<&'a ExchangeRate>,
    pub price: Option<&'a Price>,
    pub collateral_enabled: bool,
}

impl RowContext<'_> {
    /// Matched balance converted to underlying units
    pub fn underlying_balance(&self) -> Option<Decimal> {
        self.exchange_rate?.underlying(self.balance?.balance)
    }
}

pub type Formatter = fn(&RowContext<'_>) -> String;
pub type RowFilter = fn(&RowContext<'_>) -> bool;

#[derive(Clone, Copy)]
pub struct ColumnSpec {
    pub key: ColumnKey,
    pub header: &'static str,
    pub align: Align,
    pub formatter: Formatter,
}

impl ColumnSpec {
    pub const fn new(key: ColumnKey, header: &'static str, align: Align, formatter: Formatter) -> Self {
        Self {
            key,
            header,
            align,
            formatter,
        }
    }

    pub fn render(&self, ctx: &RowContext<'_>) -> String {
        (self.formatter)(ctx)
    }

    /// Asset symbol taken from the matched wallet balance
    pub fn balance_symbol() -> Self {
        Self::new(ColumnKey::Asset, "Asset", Align::Start, |ctx| {
            ctx.balance
                .map(|b| b.symbol.clone())
                .unwrap_or_else(|| PLACEHOLDER.to_string())
        })
    }

    pub fn market_symbol() -> Self {
        Self::new(ColumnKey::Asset, "Asset", Align::Start, |ctx| ctx.market.symbol.clone())
    }

    pub fn underlying_symbol() -> Self {
        Self::new(ColumnKey::Asset, "Asset", Align::Start, |ctx| {
            ctx.market.underlying_symbol.clone()
        })
    }

    pub fn supply_apy() -> Self {
        Self::new(ColumnKey::Apy, "APY", Align::Center, |ctx| format_rate(ctx.market.supply_apy))
    }

    pub fn borrow_apr() -> Self {
        Self::new(ColumnKey::Apr, "APR", Align::Center, |ctx| format_rate(ctx.market.borrow_apy))
    }

    /// Raw wallet balance with the balance's own symbol
    pub fn wallet_amount() -> Self {
        Self::new(ColumnKey::Wallet, "Wallet", Align::End, |ctx| match ctx.balance {
            Some(b) => format_amount(b.balance, &b.symbol),
            None => PLACEHOLDER.to_string(),
        })
    }

    pub fn liquidity() -> Self {
        Self::new(ColumnKey::Liquidity, "Liquidity", Align::End, |ctx| {
            format_liquidity(ctx.market.liquidity, ctx.price)
        })
    }

    /// Supplied shares converted through the exchange rate
    pub fn supplied_amount() -> Self {
        Self::new(ColumnKey::Balance, "Balance", Align::End, |ctx| {
            match ctx.underlying_balance() {
                Some(amount) => format_amount(amount, &ctx.market.underlying_symbol),
                None => PLACEHOLDER.to_string(),
            }
        })
    }

    /// Borrowed amount as reported, no conversion
    pub fn borrowed_amount() -> Self {
        Self::new(ColumnKey::Balance, "Balance", Align::End, |ctx| match ctx.balance {
            Some(b) => format_amount(b.balance, &ctx.market.symbol),
            None => PLACEHOLDER.to_string(),
        })
    }

    pub fn collateral() -> Self {
        Self::new(ColumnKey::Collateral, "Collateral", Align::Center, |ctx| {
            let state = if ctx.collateral_enabled { "enabled" } else { "disabled" };
            state.to_string()
        })
    }
}

/// Keep positions whose underlying value reaches the dust threshold.
///
/// A missing balance or exchange rate excludes the row, the same as a zero balance.
pub fn above_dust(ctx: &RowContext<'_>) -> bool {
    ctx.underlying_balance()
        .map(|value| value >= DUST_THRESHOLD)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ctx<'a>(market: &'a Market, balance: Option<&'a Balance>, rate: Option<&'a ExchangeRate>) -> RowContext<'a> {
        RowContext {
            market,
            balance,
            exchange_rate: rate,
            price: None,
            collateral_enabled: false,
        }
    }

    #[test]
    fn dust_threshold_is_one_cent() {
        assert_eq!(DUST_THRESHOLD, dec!(0.01));
    }

    #[test]
    fn dust_filter_boundary() {
        let market = Market::new("0xc", "0xu", "bDAI", "DAI");
        let unit = ExchangeRate::from_mantissa(1_000_000_000_000_000_000);

        let below = Balance::new("0xc", "bDAI", dec!(0.009999));
        let above = Balance::new("0xc", "bDAI", dec!(0.0100001));
        let exact = Balance::new("0xc", "bDAI", dec!(0.01));

        assert!(!above_dust(&ctx(&market, Some(&below), Some(&unit))));
        assert!(above_dust(&ctx(&market, Some(&above), Some(&unit))));
        assert!(above_dust(&ctx(&market, Some(&exact), Some(&unit))));
    }

    #[test]
    fn dust_filter_rejects_missing_inputs() {
        let market = Market::new("0xc", "0xu", "bDAI", "DAI");
        let balance = Balance::new("0xc", "bDAI", dec!(100));
        let unit = ExchangeRate::from_mantissa(1_000_000_000_000_000_000);

        assert!(!above_dust(&ctx(&market, Some(&balance), None)));
        assert!(!above_dust(&ctx(&market, None, Some(&unit))));
    }

    #[test]
    fn supplied_amount_uses_underlying_symbol() {
        let market = Market::new("0xc", "0xu", "bDAI", "DAI");
        let balance = Balance::new("0xc", "bDAI", dec!(500));
        let rate = ExchangeRate::from_mantissa(20_000_000_000_000_000);

        let column = ColumnSpec::supplied_amount();
        assert_eq!(column.render(&ctx(&market, Some(&balance), Some(&rate))), "10.00 DAI");
        assert_eq!(column.render(&ctx(&market, Some(&balance), None)), "-");
    }
}
