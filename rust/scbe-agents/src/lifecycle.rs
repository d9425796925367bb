//! Agent lifecycle: initialization, heartbeat/coherence timers, shutdown,
//! nonce replay guard, and the peer monitor.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use scbe_hyperbolic::Position;
use scbe_mnemonic::Tongue;
use scbe_pqc::{DilithiumSig, QuantumSig};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

use crate::error::{AgentError, AgentResult};
use crate::types::{AgentId, AgentKeys, AgentStatus, MixedAgent, NonceSet, Phase};

/// An agent silent for longer than this is marked offline by the monitor.
pub const AGENT_TIMEOUT_NANOS: u64 = 30_000_000_000;

pub const DEFAULT_HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);
pub const COHERENCE_DECAY_INTERVAL: Duration = Duration::from_secs(1);
const COHERENCE_DECAY_RATE: f64 = 0.01;

const SHELL_MIN_RADIUS: f64 = 0.3;
const SHELL_MAX_RADIUS: f64 = 0.6;

/// A source of monotonic timestamps, injected so timers are testable
/// without depending on wall-clock time.
pub trait MonotonicClock: Send + Sync {
    fn now_mono(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl MonotonicClock for SystemClock {
    fn now_mono(&self) -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos() as u64
    }
}

/// Registers a freshly generated keypair with the governance secret store.
/// Optional: agents may initialize without one (tests, isolated demos).
pub trait SecretStoreHandler: Send + Sync {
    fn register(&self, id: &AgentId, keys: &AgentKeys) -> AgentResult<()>;
}

/// Swarm-wide join/leave announcements.
pub trait JoinAnnouncer: Send + Sync {
    fn announce_joined(&self, id: &AgentId);
    fn announce_leaving(&self, id: &AgentId);
}

#[derive(Debug, Clone)]
pub struct AgentInitConfig {
    pub id: AgentId,
    pub tongue: Tongue,
    pub phase: Phase,
    pub now: u64,
}

/// A position on the 0.3-0.6 radius shell, aligned to `phase` when known,
/// on the positive x-axis otherwise.
pub fn random_shell_position(phase: Phase) -> Position {
    let mut rng = rand::thread_rng();
    let radius: f64 = rng.gen_range(SHELL_MIN_RADIUS..=SHELL_MAX_RADIUS);
    match phase.phase_vec() {
        Some((cos, sin)) => Position::new(radius * cos, radius * sin, 0.0),
        None => Position::new(radius, 0.0, 0.0),
    }
}

/// Generates a PQC keypair, registers it with the secret store if one is
/// given, places the agent on its tongue-aligned shell, and announces it
/// joined. Returns the agent already in `Active` status — initializing is
/// an instantaneous transition here, not an observable intermediate state.
#[instrument(skip(secret_store, announcer))]
pub fn initialize(
    cfg: AgentInitConfig,
    secret_store: Option<&dyn SecretStoreHandler>,
    announcer: Option<&dyn JoinAnnouncer>,
) -> AgentResult<MixedAgent> {
    let signer = DilithiumSig::new();
    let (public_key, secret_key) = signer.keygen()?;
    let keys = AgentKeys { public_key, secret_key };

    if let Some(store) = secret_store {
        store.register(&cfg.id, &keys)?;
    }

    let position = random_shell_position(cfg.phase);

    let agent = MixedAgent {
        id: cfg.id.clone(),
        position,
        phase: cfg.phase,
        sigma: 0.0,
        tongue: cfg.tongue,
        coherence: 1.0,
        status: AgentStatus::Active,
        last_heartbeat: cfg.now,
        used_nonces: NonceSet::new(),
        suspicion_count: HashMap::new(),
        keys,
        created_at: cfg.now,
    };

    if let Some(a) = announcer {
        a.announce_joined(&agent.id);
    }

    info!("agent {} initialized on tongue {:?}", agent.id, agent.tongue);
    Ok(agent)
}

/// `lastHeartbeat` is monotone non-decreasing: a stale or reordered
/// heartbeat is silently dropped rather than moving time backwards.
pub fn heartbeat(agent: &mut MixedAgent, now: u64) {
    if now > agent.last_heartbeat {
        agent.last_heartbeat = now;
    }
}

pub fn decay_coherence(agent: &mut MixedAgent) {
    agent.coherence = (agent.coherence - COHERENCE_DECAY_RATE).max(0.0);
}

/// Rejects a replayed nonce; otherwise records it (and prunes the oldest
/// beyond `MAX_USED_NONCES`, per `NonceSet`).
pub fn consume_nonce(agent: &mut MixedAgent, nonce: u64) -> AgentResult<()> {
    if agent.used_nonces.consume(nonce) {
        Ok(())
    } else {
        Err(AgentError::ReplayedNonce)
    }
}

pub struct AgentTimers {
    heartbeat_task: JoinHandle<()>,
    decay_task: JoinHandle<()>,
}

/// Starts the heartbeat and 1 Hz coherence decay timers against a shared
/// agent handle.
pub fn start_timers(
    agent: Arc<RwLock<MixedAgent>>,
    clock: Arc<dyn MonotonicClock>,
    heartbeat_interval: Duration,
) -> AgentTimers {
    let heartbeat_agent = agent.clone();
    let heartbeat_task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(heartbeat_interval);
        loop {
            ticker.tick().await;
            let now = clock.now_mono();
            heartbeat(&mut *heartbeat_agent.write().await, now);
        }
    });

    let decay_agent = agent.clone();
    let decay_task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(COHERENCE_DECAY_INTERVAL);
        loop {
            ticker.tick().await;
            decay_coherence(&mut *decay_agent.write().await);
        }
    });

    AgentTimers { heartbeat_task, decay_task }
}

/// Stops the timers, announces the agent leaving, awaits the optional
/// shutdown hook up to `timeout`, and marks the agent offline regardless
/// of whether the hook finished in time.
#[instrument(skip(agent, timers, announcer, shutdown_hook))]
pub async fn shutdown<F>(
    agent: &Arc<RwLock<MixedAgent>>,
    timers: AgentTimers,
    announcer: Option<&dyn JoinAnnouncer>,
    shutdown_hook: Option<F>,
    timeout: Duration,
) where
    F: Future<Output = ()>,
{
    timers.heartbeat_task.abort();
    timers.decay_task.abort();

    let id = agent.read().await.id.clone();
    if let Some(a) = announcer {
        a.announce_leaving(&id);
    }

    if let Some(hook) = shutdown_hook {
        if tokio::time::timeout(timeout, hook).await.is_err() {
            warn!("shutdown hook for {} timed out after {:?}", id, timeout);
        }
    }

    agent.write().await.status = AgentStatus::Offline;
    info!("agent {} marked offline", id);
}

/// Marks every agent whose `now - lastHeartbeat` exceeds `AGENT_TIMEOUT_NANOS`
/// offline, invoking `on_offline` for each one newly marked.
pub fn sweep_offline<'a>(
    agents: impl Iterator<Item = &'a mut MixedAgent>,
    now: u64,
    mut on_offline: impl FnMut(&AgentId),
) {
    for agent in agents {
        if agent.status == AgentStatus::Offline {
            continue;
        }
        if now.saturating_sub(agent.last_heartbeat) > AGENT_TIMEOUT_NANOS {
            agent.status = AgentStatus::Offline;
            on_offline(&agent.id);
        }
    }
}
