//! Fused trust scoring between an anchor agent and a candidate.

use scbe_hyperbolic::hyperbolic_distance;

use crate::types::{MixedAgent, Phase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Allow,
    Quarantine,
    Deny,
}

#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    pub w_h: f64,
    pub w_s: f64,
    pub w_g: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self { w_h: 0.4, w_s: 0.35, w_g: 0.25 }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FusedScore {
    pub s_h: f64,
    pub s_s: f64,
    pub s_g: f64,
    pub trust: f64,
    pub anomaly: bool,
}

/// Phase deviation between anchor and candidate. An unknown phase on
/// either side is maximal deviation (1.0).
pub fn phase_deviation(anchor: &MixedAgent, candidate: &MixedAgent) -> f64 {
    match (anchor.phase, candidate.phase) {
        (Phase::Known(a), Phase::Known(b)) => {
            let diff = (a - b).abs() % (2.0 * std::f64::consts::PI);
            let wrapped = diff.min(2.0 * std::f64::consts::PI - diff);
            (wrapped / std::f64::consts::PI).min(1.0)
        }
        _ => 1.0,
    }
}

/// Proximity, phase-alignment, and certainty scores, fused into a single
/// trust value with the default (0.4, 0.35, 0.25) weighting unless
/// overridden.
pub fn fused_score(anchor: &MixedAgent, candidate: &MixedAgent, weights: ScoreWeights) -> FusedScore {
    let distance = hyperbolic_distance(&anchor.position, &candidate.position);
    let s_h = 1.0 / (1.0 + distance);
    let s_s = 1.0 - phase_deviation(anchor, candidate);
    let s_g = 1.0 / (1.0 + candidate.sigma);

    let trust = weights.w_h * s_h + weights.w_s * s_s + weights.w_g * s_g;
    let anomaly = s_s < 0.5 || s_g < 0.5;

    FusedScore { s_h, s_s, s_g, trust, anomaly }
}

pub fn classify(trust: f64) -> Action {
    if trust >= 0.7 {
        Action::Allow
    } else if trust >= 0.3 {
        Action::Quarantine
    } else {
        Action::Deny
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AgentId, AgentKeys, AgentStatus, NonceSet};
    use scbe_hyperbolic::Position;
    use scbe_mnemonic::Tongue;
    use std::collections::HashMap;

    fn agent(id: &str, pos: Position, phase: Phase, sigma: f64) -> MixedAgent {
        MixedAgent {
            id: AgentId::new(id),
            position: pos,
            phase,
            sigma,
            tongue: Tongue::Ko,
            coherence: 1.0,
            status: AgentStatus::Active,
            last_heartbeat: 0,
            used_nonces: NonceSet::new(),
            suspicion_count: HashMap::new(),
            keys: AgentKeys { public_key: vec![], secret_key: vec![] },
            created_at: 0,
        }
    }

    #[test]
    fn identical_position_and_phase_scores_high_trust() {
        let anchor = agent("a", Position::origin(), Phase::Known(0.0), 0.0);
        let candidate = agent("b", Position::new(0.01, 0.0, 0.0), Phase::Known(0.0), 0.0);
        let score = fused_score(&anchor, &candidate, ScoreWeights::default());
        assert_eq!(classify(score.trust), Action::Allow);
        assert!(!score.anomaly);
    }

    #[test]
    fn unknown_phase_candidate_is_flagged_anomalous() {
        let anchor = agent("a", Position::origin(), Phase::Known(0.0), 0.0);
        let candidate = agent("b", Position::new(0.01, 0.0, 0.0), Phase::Unknown, 0.0);
        let score = fused_score(&anchor, &candidate, ScoreWeights::default());
        assert!(score.anomaly);
    }

    #[test]
    fn high_sigma_drags_trust_down() {
        let anchor = agent("a", Position::origin(), Phase::Known(0.0), 0.0);
        let low_sigma = agent("b", Position::new(0.01, 0.0, 0.0), Phase::Known(0.0), 0.0);
        let high_sigma = agent("c", Position::new(0.01, 0.0, 0.0), Phase::Known(0.0), 5.0);
        let s_low = fused_score(&anchor, &low_sigma, ScoreWeights::default());
        let s_high = fused_score(&anchor, &high_sigma, ScoreWeights::default());
        assert!(s_high.trust < s_low.trust);
        assert!(s_high.anomaly);
    }

    #[test]
    fn distant_candidate_classifies_as_deny() {
        let anchor = agent("a", Position::origin(), Phase::Known(0.0), 0.0);
        let candidate = agent("b", Position::new(0.95, 0.0, 0.0), Phase::Unknown, 3.0);
        let score = fused_score(&anchor, &candidate, ScoreWeights::default());
        assert_eq!(classify(score.trust), Action::Deny);
    }

    #[test]
    fn opposite_phase_is_maximal_deviation() {
        let anchor = agent("a", Position::origin(), Phase::Known(0.0), 0.0);
        let candidate = agent("b", Position::origin(), Phase::Known(std::f64::consts::PI), 0.0);
        assert!((phase_deviation(&anchor, &candidate) - 1.0).abs() < 1e-9);
    }
}
