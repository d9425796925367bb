//! Error types for replay storage backends.

use thiserror::Error;

pub type ReplayResult<T> = Result<T, ReplayError>;

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("backing store unavailable: {0}")]
    StoreUnavailable(String),
}
