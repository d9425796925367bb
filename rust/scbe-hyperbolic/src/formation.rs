//! Swarm starting formations.

use rand::Rng;

use crate::position::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Formation {
    Ring,
    Dispersed,
    Convergent,
}

/// Place `phase_offsets_degrees.len()` points on a circle of `radius` in
/// the xy-plane, one per phase offset. Built for the six tongues' 0/60/
/// .../300 degree offsets, but takes any angle set.
pub fn ring(radius: f64, phase_offsets_degrees: &[f64]) -> Vec<Position> {
    phase_offsets_degrees
        .iter()
        .map(|&deg| {
            let rad = deg.to_radians();
            Position::new(radius * rad.cos(), radius * rad.sin(), 0.0)
        })
        .collect()
}

/// Distribute `count` points on a sphere of `radius` using the Fibonacci
/// sphere construction, for a roughly even, non-clustered spread.
pub fn dispersed(count: usize, radius: f64) -> Vec<Position> {
    if count == 0 {
        return Vec::new();
    }
    let golden_angle = std::f64::consts::PI * (3.0 - 5.0f64.sqrt());
    (0..count)
        .map(|i| {
            let y = 1.0 - 2.0 * (i as f64 + 0.5) / count as f64;
            let radius_at_y = (1.0 - y * y).max(0.0).sqrt();
            let theta = golden_angle * i as f64;
            Position::new(radius * theta.cos() * radius_at_y, radius * y, radius * theta.sin() * radius_at_y)
        })
        .collect()
}

/// A small random cluster of `count` points within `cluster_radius` of the
/// origin, for swarms that start converged rather than spread out.
pub fn convergent(count: usize, cluster_radius: f64) -> Vec<Position> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let x = rng.gen_range(-cluster_radius..=cluster_radius);
            let y = rng.gen_range(-cluster_radius..=cluster_radius);
            let z = rng.gen_range(-cluster_radius..=cluster_radius);
            Position::new(x, y, z)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::euclidean_norm;

    #[test]
    fn ring_places_points_at_the_requested_radius() {
        let points = ring(0.5, &[0.0, 60.0, 120.0, 180.0, 240.0, 300.0]);
        assert_eq!(points.len(), 6);
        for p in &points {
            assert!((euclidean_norm(p) - 0.5).abs() < 1e-9);
        }
    }

    #[test]
    fn ring_first_point_is_on_the_positive_x_axis() {
        let points = ring(0.5, &[0.0]);
        assert!((points[0].x() - 0.5).abs() < 1e-9);
        assert!(points[0].y().abs() < 1e-9);
    }

    #[test]
    fn dispersed_produces_the_requested_count_within_radius() {
        let points = dispersed(12, 0.8);
        assert_eq!(points.len(), 12);
        for p in &points {
            assert!(euclidean_norm(p) <= 0.8 + 1e-9);
        }
    }

    #[test]
    fn dispersed_of_zero_is_empty() {
        assert!(dispersed(0, 0.5).is_empty());
    }

    #[test]
    fn convergent_points_stay_within_the_cluster_radius() {
        let points = convergent(20, 0.05);
        for p in &points {
            assert!(p.x().abs() <= 0.05);
            assert!(p.y().abs() <= 0.05);
            assert!(p.z().abs() <= 0.05);
        }
    }
}
