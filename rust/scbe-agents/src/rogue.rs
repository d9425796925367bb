//! Rogue detector and quarantine recommendation.

use scbe_hyperbolic::{hyperbolic_centroid, hyperbolic_distance, Position};

use crate::swarm::Swarm;
use crate::types::{AgentStatus, MixedAgent};

const FAR_FROM_CENTROID_THRESHOLD: f64 = 2.0;
const DEVIATED_POSITION_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    None,
    Monitor,
    Quarantine,
    Terminate,
}

pub fn recommend(score: f64) -> Recommendation {
    if score >= 0.9 {
        Recommendation::Terminate
    } else if score >= 0.8 {
        Recommendation::Quarantine
    } else if score >= 0.4 {
        Recommendation::Monitor
    } else {
        Recommendation::None
    }
}

/// Weighted indicator score in `[0,1]`: low coherence (+0.30), far from the
/// swarm centroid (+0.25), deviated from the tongue-expected position
/// (+0.20), already degraded (+0.15) or quarantined (+0.40), coherence
/// below half the swarm mean (+0.10).
pub fn rogue_score(
    agent: &MixedAgent,
    centroid: &Position,
    expected_position: &Position,
    swarm_mean_coherence: f64,
) -> f64 {
    let mut score = 0.0;

    if agent.coherence < 0.5 {
        score += 0.30;
    }
    if hyperbolic_distance(&agent.position, centroid) > FAR_FROM_CENTROID_THRESHOLD {
        score += 0.25;
    }
    if hyperbolic_distance(&agent.position, expected_position) > DEVIATED_POSITION_THRESHOLD {
        score += 0.20;
    }
    if agent.status == AgentStatus::Degraded {
        score += 0.15;
    }
    if agent.is_quarantined() {
        score += 0.40;
    }
    if agent.coherence < swarm_mean_coherence / 2.0 {
        score += 0.10;
    }

    score.clamp(0.0, 1.0)
}

/// Weighted hyperbolic centroid of every agent currently in the swarm.
pub fn swarm_centroid(swarm: &Swarm) -> Position {
    let positions: Vec<Position> = swarm.iter().map(|a| a.position).collect();
    let weights: Vec<f64> = swarm.iter().map(|a| a.weight()).collect();
    hyperbolic_centroid(&positions, &weights)
}

pub fn swarm_mean_coherence(swarm: &Swarm) -> f64 {
    let coherences: Vec<f64> = swarm.iter().map(|a| a.coherence).collect();
    if coherences.is_empty() {
        return 0.0;
    }
    coherences.iter().sum::<f64>() / coherences.len() as f64
}

/// Returns a new agent state with `status = quarantine`, `coherence = 0`,
/// `position = origin`, leaving `agent` itself untouched.
pub fn quarantine_agent(agent: &MixedAgent) -> MixedAgent {
    let mut quarantined = agent.clone();
    quarantined.enter_quarantine();
    quarantined
}
