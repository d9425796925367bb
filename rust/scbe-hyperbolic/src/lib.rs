//! Poincaré-ball hyperbolic geometry: positions, distance, Möbius algebra,
//! swarm formations, and the harmonic wall cost used by C7's repulsion model.
//!
//! Every operation here assumes (and where possible enforces) that
//! positions live strictly inside the open unit ball; `Position` itself
//! cannot be constructed from a NaN or non-finite coordinate.

pub mod cost;
pub mod distance;
pub mod formation;
pub mod mobius;
pub mod position;

pub use cost::harmonic_wall_cost;
pub use distance::hyperbolic_distance;
pub use formation::{convergent, dispersed, ring, Formation};
pub use mobius::{hyperbolic_centroid, mobius_add, mobius_scale};
pub use position::{clamp_to_ball, euclidean_norm, Position};
