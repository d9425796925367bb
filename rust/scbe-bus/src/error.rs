//! Error types for topic parsing, message signing, and bus dispatch.

use thiserror::Error;

pub type BusResult<T> = Result<T, BusError>;

#[derive(Error, Debug)]
pub enum BusError {
    #[error("invalid topic string: {0}")]
    InvalidTopic(String),
    #[error("subscriber channel closed")]
    ChannelClosed,
    #[error("canonicalization failed: {0}")]
    Canonicalize(#[from] scbe_platform::CanonicalError),
    #[error("signing failed: {0}")]
    SigningFailed(#[from] scbe_pqc::SigError),
    #[error("message envelope encoding failed: {0}")]
    Envelope(#[from] serde_json::Error),
}
