//! SHA-256 and SHA-512, synchronous and async wrappers.
//!
//! The async variants exist for large buffers (e.g. ledger snapshot
//! verification) so callers on a cooperative runtime don't block their
//! executor thread; they spawn the hash onto `tokio::task::spawn_blocking`
//! and await it.

use sha2::{Digest, Sha256, Sha512};

/// SHA-256 of `data`.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// SHA-512 of `data`.
pub fn sha512(data: &[u8]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// SHA-256 on a background blocking thread.
pub async fn sha256_async(data: Vec<u8>) -> [u8; 32] {
    tokio::task::spawn_blocking(move || sha256(&data))
        .await
        .expect("hash task panicked")
}

/// SHA-512 on a background blocking thread.
pub async fn sha512_async(data: Vec<u8>) -> [u8; 64] {
    tokio::task::spawn_blocking(move || sha512(&data))
        .await
        .expect("hash task panicked")
}
