//! A single agent's vote on an authorization decision.

use scbe_mnemonic::Tongue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Allow,
    Deny,
    Quarantine,
}

/// Check order for a weight tie: `ALLOW → DENY → QUARANTINE`.
pub const TIEBREAK_ORDER: [Decision; 3] = [Decision::Allow, Decision::Deny, Decision::Quarantine];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vote {
    pub agent_id: String,
    pub tongue: Tongue,
    pub decision: Decision,
    pub confidence: f64,
    pub timestamp_nanos: u64,
    pub signature: Vec<u8>,
}

/// `{totalAgents, maxFaulty = ⌊(n−1)/3⌋, quorum = 2·maxFaulty+1, timeoutMs}`.
#[derive(Debug, Clone, Copy)]
pub struct ConsensusConfig {
    pub total_agents: usize,
    pub timeout_ms: u64,
}

impl ConsensusConfig {
    pub fn max_faulty(&self) -> usize {
        self.total_agents.saturating_sub(1) / 3
    }

    pub fn quorum(&self) -> usize {
        2 * self.max_faulty() + 1
    }
}
