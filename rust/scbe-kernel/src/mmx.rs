//! The four governance scalars MMX scoring produces, and the seam
//! through which the geometric/agentic substrate (C6/C7/C12) supplies
//! them. `computeMMX` is deterministic given its inputs; the kernel never
//! interprets what went into it.

use serde::{Deserialize, Serialize};

use scbe_agents::{swarm_centroid, AgentId, Swarm};
use scbe_consensus::{tally_unweighted, ConsensusConfig, TallyOutcome, Vote};
use scbe_hyperbolic::{harmonic_wall_cost, hyperbolic_distance};

use crate::request::EnforcementRequest;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GovernanceScalars {
    pub coherence: f64,
    pub conflict: f64,
    pub drift: f64,
    pub wall_cost: f64,
}

pub trait MmxScorer: Send + Sync {
    fn compute_mmx(&self, request: &EnforcementRequest) -> GovernanceScalars;
}

/// Lets a plain closure act as a scorer — the shape every S1–S5 scenario
/// test uses to supply literal scalars.
impl<F> MmxScorer for F
where
    F: Fn(&EnforcementRequest) -> GovernanceScalars + Send + Sync,
{
    fn compute_mmx(&self, request: &EnforcementRequest) -> GovernanceScalars {
        self(request)
    }
}

/// Always returns the same scalars regardless of the request.
#[derive(Debug, Clone, Copy)]
pub struct FixedScalars(pub GovernanceScalars);

impl MmxScorer for FixedScalars {
    fn compute_mmx(&self, _request: &EnforcementRequest) -> GovernanceScalars {
        self.0
    }
}

/// Composes the live swarm (C7), the anchor agent's distance to the swarm
/// centroid (C6), and the outstanding BFT vote set (C12) into the four
/// scalars for one anchor agent.
pub struct SwarmMmxScorer<'a> {
    pub swarm: &'a Swarm,
    pub anchor_id: AgentId,
    pub votes: &'a [Vote],
    pub consensus_config: ConsensusConfig,
    pub now_nanos: u64,
}

impl<'a> MmxScorer for SwarmMmxScorer<'a> {
    fn compute_mmx(&self, _request: &EnforcementRequest) -> GovernanceScalars {
        let anchor = self.swarm.get(&self.anchor_id);
        let coherence = anchor.map(|a| a.coherence).unwrap_or(0.0);

        let centroid = swarm_centroid(self.swarm);
        let distance = anchor.map(|a| hyperbolic_distance(&a.position, &centroid)).unwrap_or(1.0);
        let drift = distance.min(1.0);

        let conflict = match tally_unweighted(self.votes, self.now_nanos, &self.consensus_config) {
            TallyOutcome::Decided(_) => 0.0,
            TallyOutcome::NoQuorum => 1.0,
        };

        let phase_dev = if anchor.map(|a| a.phase.is_unknown()).unwrap_or(true) { 1.0 } else { 0.0 };
        let wall_cost = harmonic_wall_cost(distance, phase_dev).min(1.0);

        GovernanceScalars { coherence, conflict, drift, wall_cost }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> EnforcementRequest {
        EnforcementRequest {
            action: "data.write".to_string(),
            subject: "agent-1".to_string(),
            object: "voxel-7".to_string(),
            payload_hash: [0u8; 64],
        }
    }

    #[test]
    fn a_closure_can_act_as_a_scorer() {
        let fixed = GovernanceScalars { coherence: 0.9, conflict: 0.1, drift: 0.05, wall_cost: 0.3 };
        let scorer = move |_: &EnforcementRequest| fixed;
        assert_eq!(scorer.compute_mmx(&sample_request()), fixed);
    }

    #[test]
    fn fixed_scalars_ignores_the_request() {
        let fixed = GovernanceScalars { coherence: 0.4, conflict: 0.6, drift: 0.05, wall_cost: 0.3 };
        let scorer = FixedScalars(fixed);
        assert_eq!(scorer.compute_mmx(&sample_request()), fixed);
    }

    #[test]
    fn an_empty_swarm_scores_zero_coherence_and_full_drift() {
        let swarm = Swarm::new();
        let scorer = SwarmMmxScorer {
            swarm: &swarm,
            anchor_id: AgentId::new("missing"),
            votes: &[],
            consensus_config: ConsensusConfig { total_agents: 1, timeout_ms: 1000 },
            now_nanos: 0,
        };
        let scalars = scorer.compute_mmx(&sample_request());
        assert_eq!(scalars.coherence, 0.0);
        assert_eq!(scalars.drift, 1.0);
        assert_eq!(scalars.conflict, 1.0);
    }
}
