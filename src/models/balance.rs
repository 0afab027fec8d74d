use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::address::Address;

/// Token balance held by the active account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub address: Address,
    pub symbol: String,
    pub balance: Decimal,
}

impl Balance {
    pub fn new(address: impl Into<Address>, symbol: &str, balance: Decimal) -> Self {
        Self {
            address: address.into(),
            symbol: symbol.to_string(),
            balance,
        }
    }
}
