//! A single signed, hash-chained ledger entry.

use sha2::{Digest, Sha512};

/// The chain's starting point: 64 zero bytes.
pub const ZERO_HEAD: [u8; 64] = [0u8; 64];

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AuditEvent {
    pub event_id: u64,
    pub prev_hash: [u8; 64],
    pub event_data: Vec<u8>,
    pub event_hash: [u8; 64],
    pub signature: Vec<u8>,
}

/// `SHA512(prev_hash ‖ event_data)`.
pub fn compute_event_hash(prev_hash: &[u8; 64], event_data: &[u8]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    hasher.update(prev_hash);
    hasher.update(event_data);
    let digest = hasher.finalize();
    let mut out = [0u8; 64];
    out.copy_from_slice(&digest);
    out
}
