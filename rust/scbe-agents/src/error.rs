//! Error types for the agent model.

use thiserror::Error;

pub type AgentResult<T> = Result<T, AgentError>;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("agent not found: {0}")]
    AgentNotFound(String),

    #[error("agent initialization failed: {0}")]
    InitializationFailed(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("keygen failed: {0}")]
    KeygenFailed(#[from] scbe_pqc::SigError),

    #[error("health check failed: {0}")]
    HealthCheckFailed(String),

    #[error("replayed nonce")]
    ReplayedNonce,

    #[error("shutdown hook timed out")]
    ShutdownTimeout,

    #[error("internal error: {0}")]
    Internal(String),
}
