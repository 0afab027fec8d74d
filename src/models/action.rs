use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::address::Address;

/// Chain-assigned transaction identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxHash(pub String);

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// State-changing call issued on behalf of the account
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    EnterMarket(Address),
    ExitMarket(Address),
    ClaimReward { pool_id: u64, account: Address },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::EnterMarket(market) => write!(f, "enter market {}", market.short()),
            Action::ExitMarket(market) => write!(f, "exit market {}", market.short()),
            Action::ClaimReward { pool_id, account } => {
                write!(f, "claim reward from pool {} for {}", pool_id, account.short())
            }
        }
    }
}

/// Accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReceipt {
    pub action: Action,
    pub tx_hash: TxHash,
    pub submitted_at: DateTime<Utc>,
}

impl ActionReceipt {
    pub fn new(action: Action, tx_hash: TxHash) -> Self {
        Self {
            action,
            tx_hash,
            submitted_at: Utc::now(),
        }
    }
}
