//! S8: a swarm of six agents, one per tongue, on a ring formation, with a
//! seventh rogue agent injected near the centroid. Within 20 swarm steps
//! every peer's suspicion of the rogue should cross the quarantine
//! threshold.

use std::collections::HashMap;

use scbe_agents::{AgentId, AgentKeys, AgentStatus, MixedAgent, NonceSet, Phase, Swarm, SwarmConfig};
use scbe_hyperbolic::{euclidean_norm, ring, Position};
use scbe_mnemonic::Tongue;

const TONGUES: [Tongue; 6] = [Tongue::Ko, Tongue::Av, Tongue::Ru, Tongue::Ca, Tongue::Um, Tongue::Dr];
const TONGUE_PHASE_OFFSETS_DEGREES: [f64; 6] = [0.0, 60.0, 120.0, 180.0, 240.0, 300.0];

fn ring_agent(id: &str, position: Position, phase_degrees: f64, tongue: Tongue) -> MixedAgent {
    MixedAgent {
        id: AgentId::new(id),
        position,
        phase: Phase::Known(phase_degrees.to_radians()),
        sigma: 0.0,
        tongue,
        coherence: 1.0,
        status: AgentStatus::Active,
        last_heartbeat: 0,
        used_nonces: NonceSet::new(),
        suspicion_count: HashMap::new(),
        keys: AgentKeys { public_key: vec![], secret_key: vec![] },
        created_at: 0,
    }
}

fn rogue_agent(position: Position) -> MixedAgent {
    MixedAgent {
        id: AgentId::new("rogue"),
        position,
        phase: Phase::Unknown,
        sigma: 1.2,
        tongue: Tongue::Dr,
        coherence: 0.1,
        status: AgentStatus::Active,
        last_heartbeat: 0,
        used_nonces: NonceSet::new(),
        suspicion_count: HashMap::new(),
        keys: AgentKeys { public_key: vec![], secret_key: vec![] },
        created_at: 0,
    }
}

#[test]
fn an_injected_rogue_is_quarantined_within_twenty_steps() {
    let mut swarm = Swarm::new();

    let positions = ring(0.5, &TONGUE_PHASE_OFFSETS_DEGREES);
    for (i, tongue) in TONGUES.into_iter().enumerate() {
        swarm.insert(ring_agent(&format!("peer-{i}"), positions[i], TONGUE_PHASE_OFFSETS_DEGREES[i], tongue));
    }

    // Near the centroid (the ring is centered on the origin), but offset
    // enough to break the perfect symmetry that would otherwise cancel the
    // net repulsion force to zero.
    swarm.insert(rogue_agent(Position::new(0.05, 0.0, 0.0)));

    let config = SwarmConfig::default();
    let mut max_observed_norm = 0.0_f64;

    for _ in 0..20 {
        swarm.step(&config);
        let rogue = swarm.get(&AgentId::new("rogue")).expect("rogue still present");
        max_observed_norm = max_observed_norm.max(euclidean_norm(&rogue.position));
    }

    let rogue = swarm.get(&AgentId::new("rogue")).expect("rogue still present");
    assert!(rogue.is_quarantined(), "an always-anomalous unknown-phase agent must be quarantined within 20 steps");
    assert_eq!(rogue.coherence, 0.0);
    assert_eq!(rogue.position, Position::origin());

    // Every known-phase peer scores the unknown-phase rogue as anomalous
    // every step (phase deviation against an unknown phase is maximal), so
    // the rogue is also driven outward by amplified repulsion before its
    // accumulated suspicion crosses the quarantine threshold and resets it
    // to the origin.
    assert!(
        max_observed_norm > 0.3,
        "rogue should be pushed well outward by amplified repulsion before quarantine resets it, got {max_observed_norm}"
    );

    for peer_index in 0..6 {
        let peer = swarm.get(&AgentId::new(format!("peer-{peer_index}"))).expect("peer still present");
        assert!(!peer.is_quarantined(), "well-behaved peers must not be quarantined by the rogue's presence");
    }
}
