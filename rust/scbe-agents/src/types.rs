//! Core types for the mixed-geometry agent model.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use scbe_hyperbolic::Position;
use scbe_mnemonic::Tongue;
use serde::{Deserialize, Serialize};

/// Retain at most this many of an agent's most recently consumed nonces.
pub const MAX_USED_NONCES: usize = 10_000;

/// Opaque, unique agent identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub String);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh random agent id, for tests and ad-hoc spawning.
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

/// Lifecycle status of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentStatus {
    Initializing,
    Active,
    Degraded,
    Offline,
    Quarantine,
}

/// An agent's phase is either a known angle in `[0, 2*pi)` or the
/// distinguished `Unknown` value, which marks the agent as a rogue
/// candidate and is always treated as maximal phase deviation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    Known(f64),
    Unknown,
}

impl Phase {
    /// `(cos phi, sin phi)`, re-derived whenever the phase changes. `None`
    /// for an unknown phase, which has no direction.
    pub fn phase_vec(&self) -> Option<(f64, f64)> {
        match self {
            Phase::Known(phi) => Some((phi.cos(), phi.sin())),
            Phase::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Phase::Unknown)
    }
}

/// Bounded, insertion-ordered set of consumed nonces. Pruned to the most
/// recent `MAX_USED_NONCES` entries once that bound is exceeded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NonceSet {
    order: VecDeque<u64>,
    members: HashSet<u64>,
}

impl NonceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, nonce: u64) -> bool {
        self.members.contains(&nonce)
    }

    /// Records a nonce as consumed. Returns `false` if it was already
    /// present (a replay), `true` if newly recorded.
    pub fn consume(&mut self, nonce: u64) -> bool {
        if !self.members.insert(nonce) {
            return false;
        }
        self.order.push_back(nonce);
        while self.order.len() > MAX_USED_NONCES {
            if let Some(oldest) = self.order.pop_front() {
                self.members.remove(&oldest);
            }
        }
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Public/secret keypair issued to an agent at initialization (C2).
#[derive(Clone, Serialize, Deserialize)]
pub struct AgentKeys {
    pub public_key: Vec<u8>,
    pub secret_key: Vec<u8>,
}

impl fmt::Debug for AgentKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentKeys")
            .field("public_key_len", &self.public_key.len())
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// The composite agent record: position, phase, uncertainty, tongue,
/// coherence, status, heartbeat, nonces, suspicion, and keys.
#[derive(Debug, Clone)]
pub struct MixedAgent {
    pub id: AgentId,
    pub position: Position,
    pub phase: Phase,
    pub sigma: f64,
    pub tongue: Tongue,
    pub coherence: f64,
    pub status: AgentStatus,
    pub last_heartbeat: u64,
    pub used_nonces: NonceSet,
    pub suspicion_count: HashMap<AgentId, u64>,
    pub keys: AgentKeys,
    pub created_at: u64,
}

impl MixedAgent {
    /// `phi ^ tongue_index`, the golden-ratio weight tied to this agent's
    /// tongue.
    pub fn weight(&self) -> f64 {
        self.tongue.weight()
    }

    pub fn is_quarantined(&self) -> bool {
        matches!(self.status, AgentStatus::Quarantine)
    }

    /// Total suspicion reported about this agent by its neighbors.
    pub fn total_incoming_suspicion(&self) -> u64 {
        self.suspicion_count.values().sum()
    }

    /// An agent in quarantine must have zero coherence and sit at the
    /// origin; this enforces that invariant after a status transition.
    pub fn enter_quarantine(&mut self) {
        self.status = AgentStatus::Quarantine;
        self.coherence = 0.0;
        self.position = Position::origin();
    }
}
