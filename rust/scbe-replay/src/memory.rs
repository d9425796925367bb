//! In-memory replay store: bounded map, LRU-style eviction, lazy expiry.

use std::collections::{HashMap, VecDeque};

use parking_lot::Mutex;

use crate::store::{format_key, ReplayStore, DEFAULT_KEY_PREFIX};

struct Inner {
    expires_at: HashMap<String, u64>,
    /// Insertion/touch order, oldest at the front. Used for LRU eviction
    /// once `max_size` is exceeded, not for expiry (expiry is TTL-based).
    order: VecDeque<String>,
}

/// A single-process replay guard. Expired entries are removed lazily when
/// their key is next looked up; entries beyond `max_size` are evicted
/// oldest-first regardless of whether they've expired.
pub struct InMemoryReplayStore {
    ttl_nanos: u64,
    max_size: usize,
    prefix: String,
    inner: Mutex<Inner>,
}

impl InMemoryReplayStore {
    pub fn new(ttl_nanos: u64, max_size: usize) -> Self {
        Self {
            ttl_nanos,
            max_size,
            prefix: DEFAULT_KEY_PREFIX.to_string(),
            inner: Mutex::new(Inner { expires_at: HashMap::new(), order: VecDeque::new() }),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn len(&self) -> usize {
        self.inner.lock().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReplayStore for InMemoryReplayStore {
    fn check_and_set(&self, provider_id: &str, request_id: &str, now: u64) -> bool {
        let key = format_key(&self.prefix, provider_id, request_id);
        let mut inner = self.inner.lock();

        if let Some(&expiry) = inner.expires_at.get(&key) {
            if expiry > now {
                return false;
            }
            inner.expires_at.remove(&key);
            inner.order.retain(|k| k != &key);
        }

        inner.expires_at.insert(key.clone(), now + self.ttl_nanos);
        inner.order.push_back(key);

        while inner.order.len() > self.max_size {
            if let Some(oldest) = inner.order.pop_front() {
                inner.expires_at.remove(&oldest);
            }
        }

        true
    }
}
