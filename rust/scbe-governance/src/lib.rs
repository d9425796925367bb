//! Immutable laws, the flux manifest layered on top of them, and the
//! trust-state-scaled threshold lookup that the decision kernel consults.
//!
//! - `laws`: hash-locked `ImmutableLaws`
//! - `manifest`: signed, time-bounded `FluxManifest` and conflict resolution
//! - `trust`: the T0–T4 trust-state lattice
//! - `threshold`: `{coherence_min, conflict_max, drift_max, wall_cost_max}`
//!   scaled by trust state

pub mod error;
pub mod laws;
pub mod manifest;
pub mod threshold;
pub mod trust;

pub use error::{GovernanceError, GovernanceResult};
pub use laws::{create_immutable_laws, verify_immutable_laws_hash, ImmutableLaws, LawsPayload};
pub use manifest::{
    epoch_number, is_manifest_stale, resolve_manifest_conflict, sign_manifest, verify_manifest, CurvatureParams, FluxManifest,
    ManifestChoice, PolicyWeights,
};
pub use threshold::{thresholds_for, ThresholdSet, DEFAULT_BASE};
pub use trust::{derive_trust_state, TrustInputs, TrustState};
