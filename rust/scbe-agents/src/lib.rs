//! Mixed-geometry agent model: fused trust scoring, repulsion-driven swarm
//! dynamics, rogue detection and quarantine, and agent lifecycle.
//!
//! - `types`: `MixedAgent` and its supporting newtypes
//! - `scoring`: fused trust (sH/sS/sG) and the ALLOW/QUARANTINE/DENY classifier
//! - `repulsion`: pairwise repulsion force and its phase/uncertainty amplification
//! - `swarm`: the per-step integration over a live agent set
//! - `rogue`: indicator-weighted rogue scoring and quarantine transitions
//! - `lifecycle`: initialization, heartbeat/decay timers, shutdown, nonce replay guard, monitor

pub mod error;
pub mod lifecycle;
pub mod repulsion;
pub mod rogue;
pub mod scoring;
pub mod swarm;
pub mod types;

pub use error::{AgentError, AgentResult};
pub use lifecycle::{
    consume_nonce, heartbeat, initialize, random_shell_position, shutdown, start_timers, sweep_offline,
    AgentInitConfig, AgentTimers, JoinAnnouncer, MonotonicClock, SecretStoreHandler, SystemClock,
    AGENT_TIMEOUT_NANOS,
};
pub use repulsion::repulsion_force;
pub use rogue::{quarantine_agent, recommend, rogue_score, swarm_centroid, swarm_mean_coherence, Recommendation};
pub use scoring::{classify, fused_score, phase_deviation, Action, FusedScore, ScoreWeights};
pub use swarm::{trust_score, Swarm, SwarmConfig};
pub use types::{AgentId, AgentKeys, AgentStatus, MixedAgent, NonceSet, Phase, MAX_USED_NONCES};
