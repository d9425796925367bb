//! Step 7 of DECIDE: the signed proof object every `authorize` call
//! produces before it is appended to the ledger as the next event.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};

use scbe_governance::FluxManifest;
use scbe_pqc::QuantumSig;

use crate::decision::Decision;
use crate::error::KernelResult;
use crate::request::EnforcementRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capsule {
    pub inputs_hash: [u8; 64],
    pub laws_hash: [u8; 64],
    pub manifest_hash: [u8; 64],
    pub state_root: [u8; 64],
    pub decision: Decision,
    pub reasons: Vec<String>,
    pub timestamp: u64,
    pub signature: Vec<u8>,
}

/// Everything the capsule's own signature covers — everything but the
/// signature itself.
#[derive(Serialize)]
struct SignedCapsuleBody<'a> {
    inputs_hash: [u8; 64],
    laws_hash: [u8; 64],
    manifest_hash: [u8; 64],
    state_root: [u8; 64],
    decision: Decision,
    reasons: &'a [String],
    timestamp: u64,
}

#[derive(Serialize)]
struct InputsContext<'a> {
    request: &'a EnforcementRequest,
    now_mono: u64,
    voxel_root: &'a [u8],
}

fn sha512(bytes: &[u8]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    let mut out = [0u8; 64];
    out.copy_from_slice(&digest);
    out
}

/// `inputs_hash = SHA512(canonical({request, context}))`,
/// `manifest_hash = SHA512(canonical(manifest))` (zero hash when no
/// manifest survived the gate), `state_root = SHA512(ledger_root ‖
/// voxel_root)`; signs `SHA512(canonical({inputs_hash, laws_hash,
/// manifest_hash, state_root, decision, reasons, timestamp}))`.
#[allow(clippy::too_many_arguments)]
pub fn build_capsule<S: QuantumSig>(
    request: &EnforcementRequest,
    now_mono: u64,
    voxel_root: &[u8],
    laws_hash: [u8; 64],
    manifest: Option<&FluxManifest>,
    ledger_root: [u8; 64],
    decision: Decision,
    reasons: Vec<String>,
    timestamp: u64,
    signer: &S,
    signer_secret: &[u8],
) -> KernelResult<Capsule> {
    let inputs_hash = sha512(&scbe_platform::canonicalize(&InputsContext { request, now_mono, voxel_root })?);
    let manifest_hash = match manifest {
        Some(m) => sha512(&scbe_platform::canonicalize(m)?),
        None => [0u8; 64],
    };
    let state_root = sha512(&[ledger_root.as_slice(), voxel_root].concat());

    let body =
        SignedCapsuleBody { inputs_hash, laws_hash, manifest_hash, state_root, decision, reasons: &reasons, timestamp };
    let body_hash = sha512(&scbe_platform::canonicalize(&body)?);
    let signature = signer.sign(signer_secret, &body_hash)?;

    Ok(Capsule { inputs_hash, laws_hash, manifest_hash, state_root, decision, reasons, timestamp, signature })
}

/// Checks a capsule's own signature over its canonical body — independent
/// of ledger-level verification.
pub fn verify_capsule<S: QuantumSig>(capsule: &Capsule, signer: &S, signer_pub: &[u8]) -> KernelResult<bool> {
    let body = SignedCapsuleBody {
        inputs_hash: capsule.inputs_hash,
        laws_hash: capsule.laws_hash,
        manifest_hash: capsule.manifest_hash,
        state_root: capsule.state_root,
        decision: capsule.decision,
        reasons: &capsule.reasons,
        timestamp: capsule.timestamp,
    };
    let body_hash = sha512(&scbe_platform::canonicalize(&body)?);
    Ok(signer.verify(signer_pub, &body_hash, &capsule.signature).unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scbe_pqc::DilithiumSig;

    fn sample_request() -> EnforcementRequest {
        EnforcementRequest {
            action: "data.write".to_string(),
            subject: "agent-1".to_string(),
            object: "voxel-7".to_string(),
            payload_hash: [7u8; 64],
        }
    }

    #[test]
    fn a_freshly_built_capsule_verifies() {
        let sig = DilithiumSig::new();
        let (pk, sk) = sig.keygen().expect("keygen");
        let capsule = build_capsule(
            &sample_request(),
            1_000,
            b"voxel-root",
            [1u8; 64],
            None,
            [0u8; 64],
            Decision::Allow,
            Vec::new(),
            1_000,
            &sig,
            &sk,
        )
        .expect("build");

        assert!(verify_capsule(&capsule, &sig, &pk).expect("verify"));
    }

    #[test]
    fn tampering_with_the_decision_invalidates_the_signature() {
        let sig = DilithiumSig::new();
        let (pk, sk) = sig.keygen().expect("keygen");
        let mut capsule = build_capsule(
            &sample_request(),
            1_000,
            b"voxel-root",
            [1u8; 64],
            None,
            [0u8; 64],
            Decision::Allow,
            Vec::new(),
            1_000,
            &sig,
            &sk,
        )
        .expect("build");

        capsule.decision = Decision::Deny;
        assert!(!verify_capsule(&capsule, &sig, &pk).expect("verify"));
    }
}
