use async_trait::async_trait;

use crate::models::{Address, TxHash};

/// Collateral membership calls on the comptroller contract
#[async_trait]
pub trait ComptrollerClient: Send + Sync {
    async fn enter_markets(&self, markets: &[Address]) -> anyhow::Result<TxHash>;

    async fn exit_market(&self, market: &Address) -> anyhow::Result<TxHash>;
}

/// Reward harvesting on the farming contract
#[async_trait]
pub trait RewardClient: Send + Sync {
    async fn harvest(&self, pool_id: u64, account: &Address) -> anyhow::Result<TxHash>;
}
