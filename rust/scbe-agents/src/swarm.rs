//! Swarm-wide integration step: repulsion, suspicion, quarantine, trust.

use std::collections::HashMap;

use scbe_hyperbolic::clamp_to_ball;
use serde::{Deserialize, Serialize};

use crate::repulsion::repulsion_force;
use crate::scoring::{fused_score, ScoreWeights};
use crate::types::{AgentId, MixedAgent};

/// A neighbor's suspicion entry must reach this before it counts toward
/// quarantine.
pub const QUARANTINE_SUSPICION_THRESHOLD: u64 = 3;

/// This many neighbors must each report suspicion at or above the
/// threshold before an agent is quarantined.
pub const QUARANTINE_NEIGHBOR_THRESHOLD: usize = 3;

/// Sigma moves by this much per step, up when flagged, down when calm.
const SIGMA_STEP: f64 = 0.1;

/// Divides total incoming suspicion to produce a [0,1]-bounded trust score.
pub const TRUST_DENOMINATOR: f64 = 10.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SwarmConfig {
    pub weights: ScoreWeightsConfig,
    pub repulsion_strength: f64,
    pub drift_rate: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreWeightsConfig {
    pub w_h: f64,
    pub w_s: f64,
    pub w_g: f64,
}

impl Default for ScoreWeightsConfig {
    fn default() -> Self {
        Self { w_h: 0.4, w_s: 0.35, w_g: 0.25 }
    }
}

impl From<ScoreWeightsConfig> for ScoreWeights {
    fn from(c: ScoreWeightsConfig) -> Self {
        ScoreWeights { w_h: c.w_h, w_s: c.w_s, w_g: c.w_g }
    }
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self { weights: ScoreWeightsConfig::default(), repulsion_strength: 1.0, drift_rate: 0.1 }
    }
}

/// `max(0, 1 - total_incoming_suspicion / TRUST_DENOMINATOR)`.
pub fn trust_score(agent: &MixedAgent) -> f64 {
    (1.0 - agent.total_incoming_suspicion() as f64 / TRUST_DENOMINATOR).max(0.0)
}

/// The live set of agents and the per-step integration over them.
#[derive(Default)]
pub struct Swarm {
    agents: HashMap<AgentId, MixedAgent>,
}

impl Swarm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, agent: MixedAgent) {
        self.agents.insert(agent.id.clone(), agent);
    }

    pub fn remove(&mut self, id: &AgentId) -> Option<MixedAgent> {
        self.agents.remove(id)
    }

    pub fn get(&self, id: &AgentId) -> Option<&MixedAgent> {
        self.agents.get(id)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MixedAgent> {
        self.agents.values()
    }

    /// Every agent sums repulsion from every other agent, integrates with
    /// `drift_rate`, reclamps into the ball, updates per-neighbor suspicion
    /// from this step's anomaly reports, and adjusts its own sigma and
    /// quarantine status. Quarantined agents are pinned at the origin and
    /// skip integration, matching the quarantine invariant.
    pub fn step(&mut self, config: &SwarmConfig) {
        let weights: ScoreWeights = config.weights.into();
        let ids: Vec<AgentId> = self.agents.keys().cloned().collect();
        let snapshot: HashMap<AgentId, MixedAgent> = self.agents.clone();

        // observed id -> observer id -> anomaly flag this step
        let mut anomaly_reports: HashMap<AgentId, HashMap<AgentId, bool>> = HashMap::new();
        let mut forces: HashMap<AgentId, scbe_hyperbolic::Position> = HashMap::new();

        for observer_id in &ids {
            let observer = &snapshot[observer_id];
            let mut total_force = scbe_hyperbolic::Position::origin();
            for observed_id in &ids {
                if observed_id == observer_id {
                    continue;
                }
                let observed = &snapshot[observed_id];
                let score = fused_score(observer, observed, weights);
                anomaly_reports.entry(observed_id.clone()).or_default().insert(observer_id.clone(), score.anomaly);
                total_force = total_force.add(&repulsion_force(observer, observed, config.repulsion_strength));
            }
            forces.insert(observer_id.clone(), total_force);
        }

        for id in &ids {
            let agent = self.agents.get_mut(id).expect("id came from this map's own keys");
            if agent.is_quarantined() {
                continue;
            }

            if let Some(reports) = anomaly_reports.get(id) {
                for (observer_id, &anomaly) in reports {
                    let entry = agent.suspicion_count.entry(observer_id.clone()).or_insert(0);
                    if anomaly {
                        *entry = entry.saturating_add(1);
                    } else if *entry > 0 {
                        *entry -= 1;
                    }
                }
            }

            if let Some(force) = forces.get(id) {
                let moved = agent.position.add(&force.scale(config.drift_rate));
                agent.position = clamp_to_ball(&moved);
            }

            let incoming = agent.total_incoming_suspicion();
            if incoming > 3 {
                agent.sigma += SIGMA_STEP;
            } else if agent.sigma > 0.0 {
                agent.sigma = (agent.sigma - SIGMA_STEP).max(0.0);
            }

            let flagged_neighbors =
                agent.suspicion_count.values().filter(|&&v| v >= QUARANTINE_SUSPICION_THRESHOLD).count();
            if flagged_neighbors >= QUARANTINE_NEIGHBOR_THRESHOLD {
                agent.enter_quarantine();
            }
        }
    }
}
