//! Error types for reconnect sync reconciliation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("governance error during sync: {0}")]
    Governance(#[from] scbe_governance::GovernanceError),
}

pub type SyncResult<T> = std::result::Result<T, SyncError>;
