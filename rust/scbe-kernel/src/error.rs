//! Error types for the decision kernel.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KernelError {
    #[error("governance error: {0}")]
    Governance(#[from] scbe_governance::GovernanceError),

    #[error("ledger error: {0}")]
    Ledger(#[from] scbe_ledger::LedgerError),

    #[error("failed to canonicalize payload: {0}")]
    Canonicalize(#[from] scbe_platform::CanonicalError),

    #[error("signing failed: {0}")]
    SigningFailed(#[from] scbe_pqc::SigError),

    #[error("failed to encode capsule: {0}")]
    CapsuleEncoding(#[from] serde_json::Error),
}

pub type KernelResult<T> = std::result::Result<T, KernelError>;
