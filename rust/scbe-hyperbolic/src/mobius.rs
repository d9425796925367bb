//! Möbius addition and scaling, and the weighted hyperbolic centroid built
//! from them.

use crate::position::{euclidean_norm, Position};

const DEGENERATE_DENOM: f64 = 1e-10;

/// Closed-form Möbius sum from the Poincaré-ball model. A near-zero
/// denominator (the antipodal-point degeneracy) returns the origin rather
/// than dividing by (near) zero.
pub fn mobius_add(u: &Position, v: &Position) -> Position {
    let u_sq = u.dot(u);
    let v_sq = v.dot(v);
    let uv = u.dot(v);

    let denom = 1.0 + 2.0 * uv + u_sq * v_sq;
    if denom.abs() < DEGENERATE_DENOM {
        return Position::origin();
    }

    let u_coeff = 1.0 + 2.0 * uv + v_sq;
    let v_coeff = 1.0 - u_sq;

    u.scale(u_coeff).add(&v.scale(v_coeff)).scale(1.0 / denom)
}

/// `tanh(t * atanh(||v||)) * v/||v||`. A degenerate (zero) norm returns the
/// origin since the direction `v/||v||` is undefined.
pub fn mobius_scale(t: f64, v: &Position) -> Position {
    let norm = euclidean_norm(v);
    if norm < DEGENERATE_DENOM {
        return Position::origin();
    }
    let scaled_norm = (t * norm.atanh()).tanh();
    v.scale(scaled_norm / norm)
}

/// Weighted scale-then-Möbius-sum fold: each point is Möbius-scaled by its
/// (normalized) weight, then the results are folded together with Möbius
/// addition. An empty point set returns the origin.
pub fn hyperbolic_centroid(points: &[Position], weights: &[f64]) -> Position {
    if points.is_empty() {
        return Position::origin();
    }

    let total_weight: f64 = weights.iter().sum();
    if total_weight.abs() < DEGENERATE_DENOM {
        return Position::origin();
    }

    let mut acc = Position::origin();
    for (point, &weight) in points.iter().zip(weights.iter()) {
        let scaled = mobius_scale(weight / total_weight, point);
        acc = mobius_add(&acc, &scaled);
    }
    acc
}
