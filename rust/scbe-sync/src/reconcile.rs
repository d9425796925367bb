//! Responder-side reconciliation of an incoming `SyncPayload`.

use subtle::ConstantTimeEq;
use tracing::{info, instrument};

use scbe_governance::{resolve_manifest_conflict, verify_manifest, FluxManifest, ManifestChoice};
use scbe_ledger::compute_event_hash;
use scbe_pqc::QuantumSig;

use crate::error::SyncResult;
use crate::payload::SyncPayload;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SyncResponse {
    pub accepted_event_count: usize,
    pub accepted_capsule_count: usize,
    /// `Some` iff the incoming manifest won the conflict against the
    /// responder's current one.
    pub newer_manifest: Option<FluxManifest>,
}

/// Walks `payload.events` from the responder's current head, accepting a
/// contiguous, correctly-chained, correctly-signed run; stops at the
/// first gap, break in the hash chain, or bad signature.
fn accept_events<S: QuantumSig>(
    payload: &SyncPayload,
    local_head: [u8; 64],
    local_next_event_id: u64,
    ledger_signer: &S,
    ledger_signer_pub: &[u8],
) -> usize {
    let mut expected_prev = local_head;
    let mut expected_id = local_next_event_id;
    let mut accepted = 0;

    for event in &payload.events {
        if event.event_id != expected_id {
            break;
        }
        let recomputed = compute_event_hash(&expected_prev, &event.event_data);
        let hash_ok: bool = recomputed.ct_eq(&event.event_hash).into();
        let links_to_prev: bool = expected_prev.ct_eq(&event.prev_hash).into();
        let sig_ok = ledger_signer.verify(ledger_signer_pub, &event.event_hash, &event.signature).unwrap_or(false);

        if !(hash_ok & links_to_prev & sig_ok) {
            break;
        }

        accepted += 1;
        expected_prev = event.event_hash;
        expected_id += 1;
    }

    accepted
}

/// Verifies both manifests (when present) and resolves a conflict between
/// the responder's current manifest and the one the initiator offered.
/// Returns `Ok(None)` when nothing changes, `Ok(Some(m))` when the
/// initiator's manifest wins, and `Err` only when both are present and
/// both fail verification.
fn resolve_incoming_manifest<G: QuantumSig>(
    local_manifest: Option<&FluxManifest>,
    incoming: Option<&FluxManifest>,
    manifest_signer: &G,
    manifest_signer_pub: &[u8],
) -> SyncResult<Option<FluxManifest>> {
    let incoming = match incoming {
        None => return Ok(None),
        Some(m) => m,
    };

    let local = match local_manifest {
        None => {
            let incoming_valid = verify_manifest(incoming, manifest_signer, manifest_signer_pub)?;
            return Ok(if incoming_valid { Some(incoming.clone()) } else { None });
        }
        Some(m) => m,
    };

    let local_valid = verify_manifest(local, manifest_signer, manifest_signer_pub)?;
    let incoming_valid = verify_manifest(incoming, manifest_signer, manifest_signer_pub)?;

    match resolve_manifest_conflict(local_valid, incoming_valid, local, incoming)? {
        ManifestChoice::First => Ok(None),
        ManifestChoice::Second => Ok(Some(incoming.clone())),
    }
}

/// Reconciles an incoming `SyncPayload` against the responder's local
/// state. Capsules are opaque to sync and are accepted as a count only —
/// their own signatures are checked when the decision kernel replays them.
#[instrument(skip(payload, ledger_signer, manifest_signer))]
#[allow(clippy::too_many_arguments)]
pub fn reconcile_sync<S: QuantumSig, G: QuantumSig>(
    payload: &SyncPayload,
    local_head: [u8; 64],
    local_next_event_id: u64,
    ledger_signer: &S,
    ledger_signer_pub: &[u8],
    local_manifest: Option<&FluxManifest>,
    manifest_signer: &G,
    manifest_signer_pub: &[u8],
) -> SyncResult<SyncResponse> {
    let accepted_event_count = accept_events(payload, local_head, local_next_event_id, ledger_signer, ledger_signer_pub);
    let newer_manifest = resolve_incoming_manifest(local_manifest, payload.manifest_request.as_ref(), manifest_signer, manifest_signer_pub)?;

    info!(
        accepted_event_count,
        accepted_capsule_count = payload.capsules.len(),
        manifest_changed = newer_manifest.is_some(),
        "reconciled sync payload"
    );

    Ok(SyncResponse { accepted_event_count, accepted_capsule_count: payload.capsules.len(), newer_manifest })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use scbe_governance::{sign_manifest, CurvatureParams, PolicyWeights};
    use scbe_ledger::{Ledger, ZERO_HEAD};
    use scbe_pqc::DilithiumSig;

    use crate::payload::build_sync_payload;

    fn sample_manifest(epoch_id: &str) -> scbe_governance::FluxManifest {
        scbe_governance::FluxManifest {
            manifest_id: "m-1".to_string(),
            epoch_id: epoch_id.to_string(),
            valid_from: 0,
            valid_until: 1_000_000,
            policy_weights: PolicyWeights { w_h: 0.4, w_s: 0.35, w_g: 0.25 },
            thresholds: None,
            curvature_params: CurvatureParams { curvature: -1.0, boundary_epsilon: 1e-6 },
            required_keys: vec!["governance-signer".to_string()],
            signature: Vec::new(),
        }
    }

    #[test]
    fn a_clean_delta_from_the_zero_head_is_fully_accepted() {
        let ledger_sig = DilithiumSig::new();
        let (ledger_pk, ledger_sk) = ledger_sig.keygen().unwrap();
        let ledger = Ledger::new(Arc::new(ledger_sig), ledger_sk);
        for i in 0..3 {
            ledger.append(format!("event-{i}").into_bytes()).unwrap();
        }

        let manifest_sig = DilithiumSig::new();
        let (manifest_pk, _manifest_sk) = manifest_sig.keygen().unwrap();

        let payload = build_sync_payload(&ledger, 0, vec![b"capsule-1".to_vec()], Vec::new(), None);
        let response =
            reconcile_sync(&payload, ZERO_HEAD, 0, &ledger_sig, &ledger_pk, None, &manifest_sig, &manifest_pk).unwrap();

        assert_eq!(response.accepted_event_count, 3);
        assert_eq!(response.accepted_capsule_count, 1);
        assert!(response.newer_manifest.is_none());
    }

    #[test]
    fn a_gap_before_the_expected_event_id_stops_acceptance() {
        let ledger_sig = DilithiumSig::new();
        let (ledger_pk, ledger_sk) = ledger_sig.keygen().unwrap();
        let ledger = Ledger::new(Arc::new(ledger_sig), ledger_sk);
        for i in 0..3 {
            ledger.append(format!("event-{i}").into_bytes()).unwrap();
        }

        let manifest_sig = DilithiumSig::new();
        let (manifest_pk, _manifest_sk) = manifest_sig.keygen().unwrap();

        // Responder is already at event id 1, but the payload starts its
        // delta from the zero head (event id 0) — a gap from the
        // responder's point of view.
        let payload = build_sync_payload(&ledger, 0, Vec::new(), Vec::new(), None);
        let response = reconcile_sync(
            &payload,
            ledger.events_since(0)[0].event_hash,
            1,
            &ledger_sig,
            &ledger_pk,
            None,
            &manifest_sig,
            &manifest_pk,
        )
        .unwrap();

        assert_eq!(response.accepted_event_count, 0);
    }

    #[test]
    fn an_unverifiable_incoming_manifest_with_no_local_manifest_is_rejected() {
        let ledger_sig = DilithiumSig::new();
        let (ledger_pk, ledger_sk) = ledger_sig.keygen().unwrap();
        let ledger = Ledger::new(Arc::new(ledger_sig), ledger_sk);

        let manifest_sig = DilithiumSig::new();
        let (manifest_pk, _sk) = manifest_sig.keygen().unwrap();
        let unsigned_manifest = sample_manifest("epoch-1");

        let payload = build_sync_payload(&ledger, 0, Vec::new(), Vec::new(), Some(unsigned_manifest));
        let response =
            reconcile_sync(&payload, ZERO_HEAD, 0, &ledger_sig, &ledger_pk, None, &manifest_sig, &manifest_pk).unwrap();

        assert!(response.newer_manifest.is_none());
    }

    #[test]
    fn a_verified_incoming_manifest_with_a_higher_epoch_wins() {
        let ledger_sig = DilithiumSig::new();
        let (ledger_pk, ledger_sk) = ledger_sig.keygen().unwrap();
        let ledger = Ledger::new(Arc::new(ledger_sig), ledger_sk);

        let manifest_sig = DilithiumSig::new();
        let (manifest_pk, manifest_sk) = manifest_sig.keygen().unwrap();

        let local = sign_manifest(sample_manifest("epoch-1"), &manifest_sig, &manifest_sk).unwrap();
        let incoming = sign_manifest(sample_manifest("epoch-2"), &manifest_sig, &manifest_sk).unwrap();

        let payload = build_sync_payload(&ledger, 0, Vec::new(), Vec::new(), Some(incoming.clone()));
        let response =
            reconcile_sync(&payload, ZERO_HEAD, 0, &ledger_sig, &ledger_pk, Some(&local), &manifest_sig, &manifest_pk)
                .unwrap();

        assert_eq!(response.newer_manifest, Some(incoming));
    }

    #[test]
    fn both_manifests_invalid_is_a_hard_error() {
        let ledger_sig = DilithiumSig::new();
        let (ledger_pk, ledger_sk) = ledger_sig.keygen().unwrap();
        let ledger = Ledger::new(Arc::new(ledger_sig), ledger_sk);

        let manifest_sig = DilithiumSig::new();
        let (manifest_pk, _sk) = manifest_sig.keygen().unwrap();

        let local = sample_manifest("epoch-1");
        let incoming = sample_manifest("epoch-2");

        let payload = build_sync_payload(&ledger, 0, Vec::new(), Vec::new(), Some(incoming));
        let result =
            reconcile_sync(&payload, ZERO_HEAD, 0, &ledger_sig, &ledger_pk, Some(&local), &manifest_sig, &manifest_pk);

        assert!(result.is_err());
    }
}
