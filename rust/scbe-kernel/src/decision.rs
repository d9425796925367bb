//! The four-way decision outcome, threshold-violation collection, and the
//! decision policy table that turns a trust state and a violation list
//! into one.

use serde::{Deserialize, Serialize};

use scbe_governance::{ThresholdSet, TrustState};

use crate::mmx::GovernanceScalars;
use crate::reason::ReasonCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Allow,
    Deny,
    Quarantine,
    Defer,
}

/// One reason code per scalar that fails its threshold, in
/// coherence/conflict/drift/wall_cost order.
pub fn violated_thresholds(scalars: GovernanceScalars, thresholds: ThresholdSet) -> Vec<ReasonCode> {
    let mut reasons = Vec::new();
    if scalars.coherence < thresholds.coherence_min {
        reasons.push(ReasonCode::LowCoherence);
    }
    if scalars.conflict > thresholds.conflict_max {
        reasons.push(ReasonCode::HighConflict);
    }
    if scalars.drift > thresholds.drift_max {
        reasons.push(ReasonCode::HighDrift);
    }
    if scalars.wall_cost > thresholds.wall_cost_max {
        reasons.push(ReasonCode::HighWallCost);
    }
    reasons
}

/// T4 ⇒ QUARANTINE; T3 with any violation ⇒ DENY; ≥2 violations ⇒ DENY;
/// exactly 1 ⇒ QUARANTINE; zero violations and trust_state ≥ T2 (T2 or T3)
/// ⇒ DEFER; otherwise ⇒ ALLOW. The trust_state ≥ T2 bound (rather than
/// `== T2`) keeps the policy monotonic: T3's fixed thresholds can pass even
/// when T2's looser, manifest-staleness-triggered DEFER already fired for
/// the same scalars, and ALLOW must not reappear once trust has worsened.
pub fn decide_policy(trust_state: TrustState, violations: Vec<ReasonCode>) -> (Decision, Vec<ReasonCode>) {
    if trust_state == TrustState::T4 {
        return (Decision::Quarantine, vec![ReasonCode::IntegrityDegraded]);
    }
    if trust_state == TrustState::T3 && !violations.is_empty() {
        return (Decision::Deny, vec![ReasonCode::KeyRolloverRequired]);
    }
    if violations.len() >= 2 {
        return (Decision::Deny, violations);
    }
    if violations.len() == 1 {
        return (Decision::Quarantine, violations);
    }
    // T3 only ever reaches this point with an empty violation set (a
    // non-empty one already returned above), so this also covers "T3,
    // zero violations" -- without it, perfect scalars could pass T3's
    // fixed near-absolute thresholds and relax back to ALLOW after T2
    // demoted the same scalars to DEFER, breaking monotonicity.
    if violations.is_empty() && trust_state >= TrustState::T2 {
        return (Decision::Defer, vec![ReasonCode::ManifestStale]);
    }
    (Decision::Allow, Vec::new())
}
