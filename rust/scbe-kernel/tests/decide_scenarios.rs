//! The concrete end-to-end DECIDE scenarios: S1 (allow), S2 (deny on two
//! violations), S3 (quarantine on one), S4 (defer on stale manifest), S5
//! (fail-closed on tampered laws).

use std::sync::Arc;

use scbe_governance::{create_immutable_laws, sign_manifest, CurvatureParams, FluxManifest, LawsPayload, PolicyWeights};
use scbe_kernel::{audit, authorize, EnforcementRequest, FixedScalars, GovernanceScalars, KeyState, OfflineRuntime};
use scbe_ledger::Ledger;
use scbe_pqc::{DilithiumSig, QuantumSig};

fn sample_laws_payload() -> LawsPayload {
    LawsPayload {
        metric_signature: "poincare-ball-v1".to_string(),
        tongues_set: vec!["ko".to_string(), "av".to_string()],
        geometry_model: "hyperbolic".to_string(),
        layer_behaviors: vec!["repel-on-anomaly".to_string()],
    }
}

fn sample_manifest(valid_until: u64) -> FluxManifest {
    FluxManifest {
        manifest_id: "m-1".to_string(),
        epoch_id: "epoch-1".to_string(),
        valid_from: 0,
        valid_until,
        policy_weights: PolicyWeights { w_h: 0.4, w_s: 0.35, w_g: 0.25 },
        thresholds: None,
        curvature_params: CurvatureParams { curvature: -1.0, boundary_epsilon: 1e-6 },
        required_keys: vec!["governance-signer".to_string()],
        signature: Vec::new(),
    }
}

fn sample_request() -> EnforcementRequest {
    EnforcementRequest {
        action: "data.write".to_string(),
        subject: "agent-1".to_string(),
        object: "voxel-7".to_string(),
        payload_hash: [9u8; 64],
    }
}

#[test]
fn s1_allow_happy_path() {
    let sig = DilithiumSig::new();
    let (pk, sk) = sig.keygen().expect("keygen");

    let laws = create_immutable_laws(sample_laws_payload()).expect("laws");
    let manifest = sign_manifest(sample_manifest(u64::MAX), &sig, &sk).expect("sign manifest");
    let ledger = Ledger::new(Arc::new(sig), sk.clone());
    let keys = KeyState { present: true, valid: true, rotation_needed: false };
    let scorer = FixedScalars(GovernanceScalars { coherence: 0.9, conflict: 0.1, drift: 0.05, wall_cost: 0.3 });

    let runtime = OfflineRuntime {
        laws: Some(&laws),
        manifest: Some(&manifest),
        manifest_signer: &sig,
        manifest_signer_pub: &pk,
        keys,
        time_trusted: true,
        ledger: &ledger,
        ledger_signer_pub: &pk,
        voxel_root: b"\x01voxel-root",
        now_mono: 1_000,
        capsule_signer: &sig,
        capsule_signer_secret: &sk,
        mmx: &scorer,
    };

    let result = authorize(&sample_request(), &runtime).expect("authorize");
    assert_eq!(result.decision, scbe_kernel::Decision::Allow);
    assert!(result.reason_codes.is_empty());
    assert_eq!(ledger.len(), 1);
    assert!(ledger.verify(&pk));
}

#[test]
fn s2_deny_on_two_violations_in_order() {
    let sig = DilithiumSig::new();
    let (pk, sk) = sig.keygen().expect("keygen");

    let laws = create_immutable_laws(sample_laws_payload()).expect("laws");
    let manifest = sign_manifest(sample_manifest(u64::MAX), &sig, &sk).expect("sign manifest");
    let ledger = Ledger::new(Arc::new(sig), sk.clone());
    let keys = KeyState { present: true, valid: true, rotation_needed: false };
    let scorer = FixedScalars(GovernanceScalars { coherence: 0.4, conflict: 0.6, drift: 0.05, wall_cost: 0.3 });

    let runtime = OfflineRuntime {
        laws: Some(&laws),
        manifest: Some(&manifest),
        manifest_signer: &sig,
        manifest_signer_pub: &pk,
        keys,
        time_trusted: true,
        ledger: &ledger,
        ledger_signer_pub: &pk,
        voxel_root: b"\x01voxel-root",
        now_mono: 1_000,
        capsule_signer: &sig,
        capsule_signer_secret: &sk,
        mmx: &scorer,
    };

    let result = authorize(&sample_request(), &runtime).expect("authorize");
    assert_eq!(result.decision, scbe_kernel::Decision::Deny);
    assert_eq!(result.reason_codes, vec!["LOW_COHERENCE".to_string(), "HIGH_CONFLICT".to_string()]);
}

#[test]
fn s3_quarantine_on_single_violation() {
    let sig = DilithiumSig::new();
    let (pk, sk) = sig.keygen().expect("keygen");

    let laws = create_immutable_laws(sample_laws_payload()).expect("laws");
    let manifest = sign_manifest(sample_manifest(u64::MAX), &sig, &sk).expect("sign manifest");
    let ledger = Ledger::new(Arc::new(sig), sk.clone());
    let keys = KeyState { present: true, valid: true, rotation_needed: false };
    let scorer = FixedScalars(GovernanceScalars { coherence: 0.55, conflict: 0.1, drift: 0.05, wall_cost: 0.3 });

    let runtime = OfflineRuntime {
        laws: Some(&laws),
        manifest: Some(&manifest),
        manifest_signer: &sig,
        manifest_signer_pub: &pk,
        keys,
        time_trusted: true,
        ledger: &ledger,
        ledger_signer_pub: &pk,
        voxel_root: b"\x01voxel-root",
        now_mono: 1_000,
        capsule_signer: &sig,
        capsule_signer_secret: &sk,
        mmx: &scorer,
    };

    let result = authorize(&sample_request(), &runtime).expect("authorize");
    assert_eq!(result.decision, scbe_kernel::Decision::Quarantine);
    assert_eq!(result.reason_codes, vec!["LOW_COHERENCE".to_string()]);
}

#[test]
fn s4_defer_on_stale_manifest_with_zero_violations() {
    let sig = DilithiumSig::new();
    let (pk, sk) = sig.keygen().expect("keygen");

    let laws = create_immutable_laws(sample_laws_payload()).expect("laws");
    // valid_until is in the past relative to now_mono, so the manifest is
    // stale -- but the gate only checks the signature, not staleness, so
    // the request still passes the gate and reaches T2 trust state.
    let manifest = sign_manifest(sample_manifest(500), &sig, &sk).expect("sign manifest");
    let ledger = Ledger::new(Arc::new(sig), sk.clone());
    let keys = KeyState { present: true, valid: true, rotation_needed: false };
    let scorer = FixedScalars(GovernanceScalars { coherence: 0.9, conflict: 0.1, drift: 0.05, wall_cost: 0.3 });

    let runtime = OfflineRuntime {
        laws: Some(&laws),
        manifest: Some(&manifest),
        manifest_signer: &sig,
        manifest_signer_pub: &pk,
        keys,
        time_trusted: true,
        ledger: &ledger,
        ledger_signer_pub: &pk,
        voxel_root: b"\x01voxel-root",
        now_mono: 1_000,
        capsule_signer: &sig,
        capsule_signer_secret: &sk,
        mmx: &scorer,
    };

    let result = authorize(&sample_request(), &runtime).expect("authorize");
    assert_eq!(result.decision, scbe_kernel::Decision::Defer);
    assert_eq!(result.reason_codes, vec!["MANIFEST_STALE".to_string()]);
}

#[test]
fn s5_fail_closed_on_tampered_laws() {
    let sig = DilithiumSig::new();
    let (pk, sk) = sig.keygen().expect("keygen");

    let mut laws = create_immutable_laws(sample_laws_payload()).expect("laws");
    laws.laws_hash[0] ^= 0xFF;

    let manifest = sign_manifest(sample_manifest(u64::MAX), &sig, &sk).expect("sign manifest");
    let ledger = Ledger::new(Arc::new(sig), sk.clone());
    let keys = KeyState { present: true, valid: true, rotation_needed: false };
    let scorer = FixedScalars(GovernanceScalars { coherence: 0.9, conflict: 0.1, drift: 0.05, wall_cost: 0.3 });

    let runtime = OfflineRuntime {
        laws: Some(&laws),
        manifest: Some(&manifest),
        manifest_signer: &sig,
        manifest_signer_pub: &pk,
        keys,
        time_trusted: true,
        ledger: &ledger,
        ledger_signer_pub: &pk,
        voxel_root: b"\x01voxel-root",
        now_mono: 1_000,
        capsule_signer: &sig,
        capsule_signer_secret: &sk,
        mmx: &scorer,
    };

    let mut request = sample_request();
    request.action = "data.write".to_string();

    let result = authorize(&request, &runtime).expect("authorize");
    assert_eq!(result.decision, scbe_kernel::Decision::Deny);
    assert_eq!(result.reason_codes, vec!["LAWS_MISSING_OR_CORRUPT".to_string()]);
    assert_eq!(ledger.len(), 1);
}

#[test]
fn audit_looks_up_the_capsule_a_prior_decision_appended() {
    let sig = DilithiumSig::new();
    let (pk, sk) = sig.keygen().expect("keygen");

    let laws = create_immutable_laws(sample_laws_payload()).expect("laws");
    let manifest = sign_manifest(sample_manifest(u64::MAX), &sig, &sk).expect("sign manifest");
    let ledger = Ledger::new(Arc::new(sig), sk.clone());
    let keys = KeyState { present: true, valid: true, rotation_needed: false };
    let scorer = FixedScalars(GovernanceScalars { coherence: 0.9, conflict: 0.1, drift: 0.05, wall_cost: 0.3 });

    let runtime = OfflineRuntime {
        laws: Some(&laws),
        manifest: Some(&manifest),
        manifest_signer: &sig,
        manifest_signer_pub: &pk,
        keys,
        time_trusted: true,
        ledger: &ledger,
        ledger_signer_pub: &pk,
        voxel_root: b"\x01voxel-root",
        now_mono: 1_000,
        capsule_signer: &sig,
        capsule_signer_secret: &sk,
        mmx: &scorer,
    };

    let result = authorize(&sample_request(), &runtime).expect("authorize");
    let proof = result.proof.expect("allow decisions still produce a capsule");

    let looked_up = audit(&ledger, 0).expect("audit").expect("event 0 exists");
    assert_eq!(looked_up.decision, proof.decision);
    assert_eq!(looked_up.signature, proof.signature);

    assert!(audit(&ledger, 1).expect("audit").is_none(), "no second decision was ever appended");
}

#[test]
fn invalid_input_is_rejected_before_the_gate_and_never_touches_the_ledger() {
    let sig = DilithiumSig::new();
    let (pk, sk) = sig.keygen().expect("keygen");

    let laws = create_immutable_laws(sample_laws_payload()).expect("laws");
    let manifest = sign_manifest(sample_manifest(u64::MAX), &sig, &sk).expect("sign manifest");
    let ledger = Ledger::new(Arc::new(sig), sk.clone());
    let keys = KeyState { present: true, valid: true, rotation_needed: false };
    let scorer = FixedScalars(GovernanceScalars { coherence: 0.9, conflict: 0.1, drift: 0.05, wall_cost: 0.3 });

    let runtime = OfflineRuntime {
        laws: Some(&laws),
        manifest: Some(&manifest),
        manifest_signer: &sig,
        manifest_signer_pub: &pk,
        keys,
        time_trusted: true,
        ledger: &ledger,
        ledger_signer_pub: &pk,
        voxel_root: b"\x01voxel-root",
        now_mono: 1_000,
        capsule_signer: &sig,
        capsule_signer_secret: &sk,
        mmx: &scorer,
    };

    let mut request = sample_request();
    request.subject = String::new();

    let result = authorize(&request, &runtime).expect("authorize");
    assert_eq!(result.decision, scbe_kernel::Decision::Deny);
    assert_eq!(result.reason_codes, vec!["INVALID_INPUT".to_string()]);
    assert!(result.proof.is_none());
    assert_eq!(ledger.len(), 0);
}

#[test]
fn a_safe_op_allow_passes_through_a_tampered_gate() {
    let sig = DilithiumSig::new();
    let (pk, sk) = sig.keygen().expect("keygen");

    let mut laws = create_immutable_laws(sample_laws_payload()).expect("laws");
    laws.laws_hash[0] ^= 0xFF;

    let manifest = sign_manifest(sample_manifest(u64::MAX), &sig, &sk).expect("sign manifest");
    let ledger = Ledger::new(Arc::new(sig), sk.clone());
    let keys = KeyState { present: true, valid: true, rotation_needed: false };
    let scorer = FixedScalars(GovernanceScalars { coherence: 0.9, conflict: 0.1, drift: 0.05, wall_cost: 0.3 });

    let runtime = OfflineRuntime {
        laws: Some(&laws),
        manifest: Some(&manifest),
        manifest_signer: &sig,
        manifest_signer_pub: &pk,
        keys,
        time_trusted: true,
        ledger: &ledger,
        ledger_signer_pub: &pk,
        voxel_root: b"\x01voxel-root",
        now_mono: 1_000,
        capsule_signer: &sig,
        capsule_signer_secret: &sk,
        mmx: &scorer,
    };

    let mut request = sample_request();
    request.action = "diagnostics.run".to_string();

    let result = authorize(&request, &runtime).expect("authorize");
    assert_eq!(result.decision, scbe_kernel::Decision::Allow);
    assert!(result.reason_codes.is_empty());
    assert_eq!(ledger.len(), 0);
}
