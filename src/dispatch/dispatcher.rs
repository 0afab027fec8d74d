use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::error::SubmissionError;
use crate::models::{Action, ActionReceipt, Address, TxHash};
use crate::traits::{ActionEventHandler, ComptrollerClient, RewardClient};

/// Issues state-changing calls and reports every outcome.
///
/// Submissions are single-shot: no retry, no confirmation tracking. Refreshed
/// state arrives through the data sources' own polling.
pub struct ActionDispatcher {
    comptroller: Arc<dyn ComptrollerClient>,
    rewards: Arc<dyn RewardClient>,
    event_handler: Arc<dyn ActionEventHandler>,
}

impl ActionDispatcher {
    pub fn new(
        comptroller: Arc<dyn ComptrollerClient>,
        rewards: Arc<dyn RewardClient>,
        event_handler: Arc<dyn ActionEventHandler>,
    ) -> Self {
        Self {
            comptroller,
            rewards,
            event_handler,
        }
    }

    /// Exit `market` if it is enabled as collateral, enter it otherwise.
    ///
    /// Fire-and-forget: the returned handle may be dropped. The outcome is
    /// reported to the event handler either way.
    pub fn toggle_collateral(
        &self,
        market: &Address,
        currently_enabled: bool,
    ) -> JoinHandle<Result<TxHash, SubmissionError>> {
        let action = if currently_enabled {
            Action::ExitMarket(market.clone())
        } else {
            Action::EnterMarket(market.clone())
        };

        let market = market.clone();
        let comptroller = self.comptroller.clone();
        let event_handler = self.event_handler.clone();

        tokio::spawn(async move {
            let result = if currently_enabled {
                comptroller.exit_market(&market).await
            } else {
                comptroller.enter_markets(std::slice::from_ref(&market)).await
            };
            Self::report(event_handler.as_ref(), action, result).await
        })
    }

    /// Harvest rewards from `pool_id` and return the transaction hash
    pub async fn claim_reward(&self, pool_id: u64, account: &Address) -> Result<TxHash, SubmissionError> {
        let action = Action::ClaimReward {
            pool_id,
            account: account.clone(),
        };
        let result = self.rewards.harvest(pool_id, account).await;
        Self::report(self.event_handler.as_ref(), action, result).await
    }

    async fn report(
        event_handler: &dyn ActionEventHandler,
        action: Action,
        result: anyhow::Result<TxHash>,
    ) -> Result<TxHash, SubmissionError> {
        match result {
            Ok(tx_hash) => {
                info!("Submitted {}: {}", action, tx_hash);
                let receipt = ActionReceipt::new(action, tx_hash.clone());
                event_handler.on_submitted(&receipt).await;
                Ok(tx_hash)
            }
            Err(e) => {
                let err = SubmissionError::rejected(action, &e);
                error!("{}", err);
                event_handler.on_failed(&err).await;
                Err(err)
            }
        }
    }
}
