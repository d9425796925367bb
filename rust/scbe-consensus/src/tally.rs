//! Unweighted and weighted vote tallying.

use tracing::{debug, instrument};

use crate::vote::{ConsensusConfig, Decision, Vote, TIEBREAK_ORDER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TallyOutcome {
    Decided(Decision),
    NoQuorum,
}

fn count_of(votes: &[&Vote], decision: Decision) -> usize {
    votes.iter().filter(|v| v.decision == decision).count()
}

fn weight_of(votes: &[&Vote], decision: Decision) -> f64 {
    votes.iter().filter(|v| v.decision == decision).map(|v| v.tongue.weight() * v.confidence).sum()
}

/// Votes whose `timestamp_nanos` is within `timeout_ms` of `now_nanos`.
pub fn drop_stale(votes: &[Vote], now_nanos: u64, timeout_ms: u64) -> Vec<&Vote> {
    let timeout_nanos = timeout_ms.saturating_mul(1_000_000);
    votes.iter().filter(|v| now_nanos.saturating_sub(v.timestamp_nanos) <= timeout_nanos).collect()
}

/// First class (in `ALLOW → DENY → QUARANTINE` order) whose vote count
/// reaches `config.quorum()`.
#[instrument(skip(votes))]
pub fn tally_unweighted(votes: &[Vote], now_nanos: u64, config: &ConsensusConfig) -> TallyOutcome {
    let live = drop_stale(votes, now_nanos, config.timeout_ms);
    let quorum = config.quorum();

    for decision in TIEBREAK_ORDER {
        let count = count_of(&live, decision);
        if count >= quorum {
            debug!(?decision, count, quorum, "unweighted quorum reached");
            return TallyOutcome::Decided(decision);
        }
    }
    TallyOutcome::NoQuorum
}

/// Each vote contributes `tongue.weight() * confidence` (φ^tongue_index ·
/// confidence). A class wins when its weight strictly exceeds 50% of the
/// total weight cast.
#[instrument(skip(votes))]
pub fn tally_weighted(votes: &[Vote], now_nanos: u64, config: &ConsensusConfig) -> TallyOutcome {
    let live = drop_stale(votes, now_nanos, config.timeout_ms);
    let total_weight: f64 = live.iter().map(|v| v.tongue.weight() * v.confidence).sum();

    if total_weight <= 0.0 {
        return TallyOutcome::NoQuorum;
    }

    for decision in TIEBREAK_ORDER {
        let weight = weight_of(&live, decision);
        if weight > total_weight / 2.0 {
            debug!(?decision, weight, total_weight, "weighted majority reached");
            return TallyOutcome::Decided(decision);
        }
    }
    TallyOutcome::NoQuorum
}
