//! Governance error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GovernanceError {
    #[error("failed to canonicalize payload: {0}")]
    Canonicalize(#[from] scbe_platform::CanonicalError),

    #[error("signing failed: {0}")]
    SigningFailed(#[from] scbe_pqc::SigError),

    #[error("both laws and manifest are invalid; governance cannot proceed")]
    BothInvalid,
}

pub type GovernanceResult<T> = std::result::Result<T, GovernanceError>;
