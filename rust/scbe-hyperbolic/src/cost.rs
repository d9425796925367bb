//! Harmonic wall cost: the repulsion potential feeding C7's force model.

/// `exp(d + 2 * phase_dev)`. Grows with both hyperbolic distance and phase
/// deviation, so agents far away in either space are cheap to ignore and
/// near-and-misaligned agents are expensive.
pub fn harmonic_wall_cost(d: f64, phase_dev: f64) -> f64 {
    (d + 2.0 * phase_dev).exp()
}
