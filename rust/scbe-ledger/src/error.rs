//! Ledger error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("signing failed: {0}")]
    SigningFailed(#[from] scbe_pqc::SigError),

    #[error("index {index} out of range (ledger has {len} events)")]
    IndexOutOfRange { index: u64, len: u64 },
}

pub type LedgerResult<T> = std::result::Result<T, LedgerError>;
