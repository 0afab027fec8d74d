use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Decimal exponent market exchange rates are scaled by on-chain
pub const EXCHANGE_RATE_DECIMALS: u32 = 18;

/// Fixed-point factor converting market shares to underlying units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub mantissa: u128,
    #[serde(default = "default_rate_decimals")]
    pub decimals: u32,
}

fn default_rate_decimals() -> u32 {
    EXCHANGE_RATE_DECIMALS
}

impl ExchangeRate {
    /// Rate as stored on-chain, scaled by 10^18
    pub fn from_mantissa(mantissa: u128) -> Self {
        Self {
            mantissa,
            decimals: EXCHANGE_RATE_DECIMALS,
        }
    }

    /// Decimated rate. `None` when the mantissa or scale does not fit a `Decimal`.
    pub fn to_decimal(&self) -> Option<Decimal> {
        let mantissa = i128::try_from(self.mantissa).ok()?;
        Decimal::try_from_i128_with_scale(mantissa, self.decimals).ok()
    }

    /// Underlying amount for `shares` of the market token
    pub fn underlying(&self, shares: Decimal) -> Option<Decimal> {
        shares.checked_mul(self.to_decimal()?)
    }
}

/// USD quote for one price key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub usd: Decimal,
}

impl Price {
    pub fn usd(usd: Decimal) -> Self {
        Self { usd }
    }
}

/// Borrowing headroom of the active account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountLiquidity {
    pub liquidity_usd: Decimal,
    #[serde(default)]
    pub shortfall_usd: Decimal,
}
