//! Threshold lookup: `{coherence_min, conflict_max, drift_max,
//! wall_cost_max}` scaled by trust state.

use serde::{Deserialize, Serialize};

use crate::trust::TrustState;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    pub coherence_min: f64,
    pub conflict_max: f64,
    pub drift_max: f64,
    pub wall_cost_max: f64,
}

/// The defaults used when the manifest carries no override.
pub const DEFAULT_BASE: ThresholdSet = ThresholdSet { coherence_min: 0.6, conflict_max: 0.3, drift_max: 0.2, wall_cost_max: 0.8 };

const T3_NEAR_ABSOLUTE: ThresholdSet = ThresholdSet { coherence_min: 0.99, conflict_max: 0.01, drift_max: 0.01, wall_cost_max: 0.05 };

fn tighten(base: ThresholdSet, factor: f64) -> ThresholdSet {
    ThresholdSet {
        coherence_min: base.coherence_min * factor,
        conflict_max: base.conflict_max / factor,
        drift_max: base.drift_max / factor,
        wall_cost_max: base.wall_cost_max / factor,
    }
}

/// Thresholds that no scalar can ever satisfy.
fn impossible() -> ThresholdSet {
    ThresholdSet {
        coherence_min: f64::INFINITY,
        conflict_max: f64::NEG_INFINITY,
        drift_max: f64::NEG_INFINITY,
        wall_cost_max: f64::NEG_INFINITY,
    }
}

/// `manifest_base` is the manifest's own threshold override, if present;
/// otherwise [`DEFAULT_BASE`] is used for T0/T1/T2.
pub fn thresholds_for(trust_state: TrustState, manifest_base: Option<ThresholdSet>) -> ThresholdSet {
    let base = manifest_base.unwrap_or(DEFAULT_BASE);
    match trust_state {
        TrustState::T0 => base,
        TrustState::T1 => tighten(base, 1.25),
        TrustState::T2 => tighten(base, 1.5),
        TrustState::T3 => T3_NEAR_ABSOLUTE,
        TrustState::T4 => impossible(),
    }
}
