//! The replay guard contract and its key format.

/// `"<prefix><provider>::<request_id>"`.
pub const DEFAULT_KEY_PREFIX: &str = "scbe:replay:";

pub fn format_key(prefix: &str, provider_id: &str, request_id: &str) -> String {
    format!("{prefix}{provider_id}::{request_id}")
}

/// Synchronous replay guard contract. `check_and_set` must be atomic: the
/// first caller for a given `(provider_id, request_id)` pair within its
/// TTL wins, every later caller for the same pair is rejected.
pub trait ReplayStore: Send + Sync {
    /// Returns `true` iff the pair has not been observed within its TTL.
    fn check_and_set(&self, provider_id: &str, request_id: &str, now: u64) -> bool;
}
