//! Distributed replay store backed by an async NX+TTL key-value store
//! (e.g. Redis `SET key value EX ttl NX`).

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::error::ReplayError;
use crate::store::{format_key, ReplayStore, DEFAULT_KEY_PREFIX};

/// The minimal KV contract this store needs: set-if-absent with a TTL.
#[async_trait]
pub trait AsyncKvStore: Send + Sync {
    /// Returns `true` if `key` was newly set, `false` if it already existed.
    async fn set_nx_ex(&self, key: &str, value: &[u8], ttl_secs: u64) -> Result<bool, ReplayError>;
}

pub struct KvReplayStore<S: AsyncKvStore> {
    backend: Arc<S>,
    ttl_secs: u64,
    prefix: String,
}

impl<S: AsyncKvStore> KvReplayStore<S> {
    pub fn new(backend: Arc<S>, ttl_secs: u64) -> Self {
        Self { backend, ttl_secs, prefix: DEFAULT_KEY_PREFIX.to_string() }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// The real, async check-and-set. Returns `true` iff the pair was not
    /// already present.
    pub async fn check_and_set_async(&self, provider_id: &str, request_id: &str) -> bool {
        let key = format_key(&self.prefix, provider_id, request_id);
        match self.backend.set_nx_ex(&key, b"1", self.ttl_secs).await {
            Ok(newly_set) => newly_set,
            Err(err) => {
                warn!("replay store backend error, failing closed: {err}");
                false
            }
        }
    }
}

/// The synchronous `ReplayStore` contract cannot drive an async backend
/// without an executor to block on, so any synchronous call site MUST
/// fail closed: reject the request and log a warning, rather than risk
/// silently accepting a replay.
impl<S: AsyncKvStore> ReplayStore for KvReplayStore<S> {
    fn check_and_set(&self, provider_id: &str, request_id: &str, _now: u64) -> bool {
        warn!(
            "synchronous replay check against an async-only KV store for {}::{}; failing closed",
            provider_id, request_id
        );
        false
    }
}
