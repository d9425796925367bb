//! Pairwise repulsion force driving the swarm step.

use scbe_hyperbolic::{hyperbolic_distance, Position};

use crate::scoring::{fused_score, ScoreWeights};
use crate::types::MixedAgent;

/// Avoids a division blow-up when two agents coincide.
const EPSILON: f64 = 1e-6;

/// Phase deviation beyond this, while still known on both sides, counts as
/// "near and large" for the v1 amplification rule.
const NEAR_LARGE_DEVIATION_THRESHOLD: f64 = 0.5;

/// Force exerted on `source` by `target`: direction away from `target`,
/// scaled by `strength`, the inverse hyperbolic distance, and an
/// amplification combining v1 phase rules with v2 uncertainty rules.
///
/// v1: unknown phase on either side -> 2.0x; known but large deviation ->
/// `1.5 + deviation`; quarantined target -> an additional 1.5x.
/// v2: target sigma > 0.5 adds +0.5; a fused anomaly computed from `source`
/// (when its phase is known) against `target` adds +0.25.
pub fn repulsion_force(source: &MixedAgent, target: &MixedAgent, strength: f64) -> Position {
    let d_h = hyperbolic_distance(&source.position, &target.position);
    let direction = source.position.sub(&target.position);
    let dir_norm = scbe_hyperbolic::euclidean_norm(&direction);

    let unit = if dir_norm > EPSILON { direction.scale(1.0 / dir_norm) } else { Position::origin() };

    let amplification = amplification_factor(source, target);
    let magnitude = strength / (d_h + EPSILON) * amplification;

    unit.scale(magnitude)
}

fn amplification_factor(source: &MixedAgent, target: &MixedAgent) -> f64 {
    let mut factor = 1.0_f64;

    match (source.phase.phase_vec(), target.phase.phase_vec()) {
        (None, _) | (_, None) => factor *= 2.0,
        _ => {
            let deviation = crate::scoring::phase_deviation(source, target);
            if deviation > NEAR_LARGE_DEVIATION_THRESHOLD {
                factor *= 1.5 + deviation;
            }
        }
    }

    if target.is_quarantined() {
        factor *= 1.5;
    }

    if target.sigma > 0.5 {
        factor += 0.5;
    }

    if !source.phase.is_unknown() {
        let score = fused_score(source, target, ScoreWeights::default());
        if score.anomaly {
            factor += 0.25;
        }
    }

    factor
}
