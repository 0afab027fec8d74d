use thiserror::Error;

use crate::models::action::Action;

/// Failure of a state-changing submission.
///
/// Missing or partial read data is never an error; only submissions fail outward.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("{action} rejected: {reason}")]
    Rejected { action: Action, reason: String },

    #[error("{action} aborted before completion: {reason}")]
    Aborted { action: Action, reason: String },
}

impl SubmissionError {
    pub fn rejected(action: Action, error: &anyhow::Error) -> Self {
        Self::Rejected {
            action,
            reason: format!("{:#}", error),
        }
    }

    pub fn action(&self) -> &Action {
        match self {
            SubmissionError::Rejected { action, .. } | SubmissionError::Aborted { action, .. } => action,
        }
    }
}
