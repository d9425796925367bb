//! The read-only view the decision kernel consults for a single
//! `authorize` call: laws, manifest, key state, ledger, voxel root, the
//! current time, and the scoring seam.

use scbe_governance::{FluxManifest, ImmutableLaws};
use scbe_ledger::Ledger;
use scbe_pqc::QuantumSig;

use crate::mmx::MmxScorer;

/// Key-material state feeding both the fail-closed gate's "keys present"
/// check and the trust-state derivation's `keys_valid`/
/// `key_rotation_needed` inputs.
#[derive(Debug, Clone, Copy)]
pub struct KeyState {
    pub present: bool,
    pub valid: bool,
    pub rotation_needed: bool,
}

pub struct OfflineRuntime<'a, S: QuantumSig, M: MmxScorer> {
    pub laws: Option<&'a ImmutableLaws>,
    pub manifest: Option<&'a FluxManifest>,
    pub manifest_signer: &'a S,
    pub manifest_signer_pub: &'a [u8],
    pub keys: KeyState,
    pub time_trusted: bool,
    pub ledger: &'a Ledger<S>,
    pub ledger_signer_pub: &'a [u8],
    pub voxel_root: &'a [u8],
    pub now_mono: u64,
    /// Signs the capsule's own proof — may be the same keypair the ledger
    /// was constructed with, or a distinct governance signer.
    pub capsule_signer: &'a S,
    pub capsule_signer_secret: &'a [u8],
    pub mmx: &'a M,
}
