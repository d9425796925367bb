//! Replay guard: atomic `(provider_id, request_id)` dedup with TTL, behind
//! a small trait so the backing store can be swapped without touching
//! call sites.
//!
//! - `store`: the `ReplayStore` contract and key format
//! - `memory`: bounded, LRU-evicting in-process implementation
//! - `kv`: async NX+TTL key-value backend, fail-closed at any sync call site

pub mod error;
pub mod kv;
pub mod memory;
pub mod store;

pub use error::{ReplayError, ReplayResult};
pub use kv::{AsyncKvStore, KvReplayStore};
pub use memory::InMemoryReplayStore;
pub use store::{format_key, ReplayStore, DEFAULT_KEY_PREFIX};
