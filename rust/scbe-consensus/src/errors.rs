//! Error types for consensus vote tallying.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConsensusError>;

#[derive(Error, Debug)]
pub enum ConsensusError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
