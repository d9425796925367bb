//! `authorize`: the single DECIDE entry point, executed as one critical
//! section covering the gate, scoring, capsule signing, and ledger
//! append.

use tracing::{info, instrument, warn};

use scbe_governance::{derive_trust_state, is_manifest_stale, thresholds_for, TrustInputs};
use scbe_pqc::QuantumSig;

use crate::capsule::{build_capsule, Capsule};
use crate::decision::{decide_policy, violated_thresholds, Decision};
use crate::error::KernelResult;
use crate::gate::{run_gate, GateCheck};
use crate::mmx::{GovernanceScalars, MmxScorer};
use crate::reason::ReasonCode;
use crate::request::{is_safe_op, validate_request, EnforcementRequest};
use crate::runtime::OfflineRuntime;

#[derive(Debug, Clone)]
pub struct DecideResult {
    pub decision: Decision,
    pub reason_codes: Vec<String>,
    pub governance_scalars: Option<GovernanceScalars>,
    pub proof: Option<Capsule>,
}

fn append_capsule<S: QuantumSig>(ledger: &scbe_ledger::Ledger<S>, capsule: &Capsule) -> KernelResult<()> {
    let encoded = serde_json::to_vec(capsule)?;
    ledger.append(encoded)?;
    Ok(())
}

#[instrument(skip(runtime), fields(action = %request.action))]
pub fn authorize<S: QuantumSig, M: MmxScorer>(
    request: &EnforcementRequest,
    runtime: &OfflineRuntime<'_, S, M>,
) -> KernelResult<DecideResult> {
    if let Err(reason) = validate_request(request) {
        warn!(%reason, "request failed input validation");
        return Ok(DecideResult {
            decision: Decision::Deny,
            reason_codes: vec![reason.to_string()],
            governance_scalars: None,
            proof: None,
        });
    }

    if let GateCheck::Fail(reason) = run_gate(runtime)? {
        if is_safe_op(&request.action) {
            info!(%reason, "gate failure allow-passed for safe op");
            return Ok(DecideResult { decision: Decision::Allow, reason_codes: Vec::new(), governance_scalars: None, proof: None });
        }

        warn!(%reason, "fail-closed gate rejected request");
        let laws_hash = runtime.laws.map(|l| l.laws_hash).unwrap_or([0u8; 64]);
        let (_, ledger_root) = runtime.ledger.snapshot();
        let capsule = build_capsule(
            request,
            runtime.now_mono,
            runtime.voxel_root,
            laws_hash,
            runtime.manifest,
            ledger_root,
            Decision::Deny,
            vec![reason.to_string()],
            runtime.now_mono,
            runtime.capsule_signer,
            runtime.capsule_signer_secret,
        )?;
        append_capsule(runtime.ledger, &capsule)?;

        return Ok(DecideResult {
            decision: Decision::Deny,
            reason_codes: vec![reason.to_string()],
            governance_scalars: None,
            proof: Some(capsule),
        });
    }

    let laws = runtime.laws.expect("gate pass implies laws present and hash-valid");
    let manifest = runtime.manifest.expect("gate pass implies manifest present and signature-valid");

    let trust_state = derive_trust_state(TrustInputs {
        keys_valid: runtime.keys.valid,
        time_trusted: runtime.time_trusted,
        manifest_current: !is_manifest_stale(manifest, runtime.now_mono),
        key_rotation_needed: runtime.keys.rotation_needed,
        integrity_ok: runtime.ledger.is_empty() || runtime.ledger.verify(runtime.ledger_signer_pub),
    });

    let scalars = runtime.mmx.compute_mmx(request);
    let thresholds = thresholds_for(trust_state, manifest.thresholds);
    let violations = violated_thresholds(scalars, thresholds);
    let (decision, reasons) = decide_policy(trust_state, violations);
    let reason_strings: Vec<String> = reasons.iter().map(ReasonCode::to_string).collect();

    let (_, ledger_root) = runtime.ledger.snapshot();
    let capsule = build_capsule(
        request,
        runtime.now_mono,
        runtime.voxel_root,
        laws.laws_hash,
        Some(manifest),
        ledger_root,
        decision,
        reason_strings.clone(),
        runtime.now_mono,
        runtime.capsule_signer,
        runtime.capsule_signer_secret,
    )?;
    append_capsule(runtime.ledger, &capsule)?;

    info!(?decision, reasons = ?reason_strings, "decided");
    Ok(DecideResult { decision, reason_codes: reason_strings, governance_scalars: Some(scalars), proof: Some(capsule) })
}

/// Read-only ledger lookup: a `decision_id` is the `event_id` the ledger
/// assigned when `authorize` appended that decision's capsule. Returns
/// `None` rather than an error when no event has that id — an unknown id is
/// a normal outcome for a read-only query, not a failure.
pub fn audit<S: QuantumSig>(ledger: &scbe_ledger::Ledger<S>, decision_id: u64) -> KernelResult<Option<Capsule>> {
    let event = ledger.events_since(decision_id).into_iter().find(|event| event.event_id == decision_id);
    match event {
        Some(event) => Ok(Some(serde_json::from_slice(&event.event_data)?)),
        None => Ok(None),
    }
}
