//! Immutable laws: the system's "physics", hash-locked so any tamper is
//! detectable independent of who is asking.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};
use subtle::ConstantTimeEq;

use crate::error::GovernanceResult;

/// Everything a law covers, excluding the hash itself — the hash is always
/// computed over exactly this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawsPayload {
    pub metric_signature: String,
    pub tongues_set: Vec<String>,
    pub geometry_model: String,
    pub layer_behaviors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImmutableLaws {
    pub payload: LawsPayload,
    pub laws_hash: [u8; 64],
}

fn hash_payload(payload: &LawsPayload) -> GovernanceResult<[u8; 64]> {
    let canonical = scbe_platform::canonicalize(payload)?;
    let mut hasher = Sha512::new();
    hasher.update(&canonical);
    let digest = hasher.finalize();
    let mut out = [0u8; 64];
    out.copy_from_slice(&digest);
    Ok(out)
}

/// `laws_hash = SHA512(canonical(payload))`.
pub fn create_immutable_laws(payload: LawsPayload) -> GovernanceResult<ImmutableLaws> {
    let laws_hash = hash_payload(&payload)?;
    Ok(ImmutableLaws { payload, laws_hash })
}

/// Recomputes the hash over `laws.payload` and compares it, in constant
/// time, to the stored `laws_hash`.
pub fn verify_immutable_laws_hash(laws: &ImmutableLaws) -> GovernanceResult<bool> {
    let recomputed = hash_payload(&laws.payload)?;
    Ok(bool::from(recomputed.ct_eq(&laws.laws_hash)))
}
