//! Random identifiers and secure random byte generation.

use rand::RngCore;
use uuid::Uuid;

/// Generate an RFC 4122 version 4 UUID.
pub fn random_uuid() -> Uuid {
    Uuid::new_v4()
}

/// Fill a buffer of `len` bytes from the platform's secure RNG.
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut buf);
    buf
}
