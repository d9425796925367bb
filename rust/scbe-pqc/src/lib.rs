//! Post-quantum algorithm catalog, registry, TriStitch combiner, and
//! geometric key binding.
//!
//! - `catalog`: immutable descriptors (family, NIST level, sizes) keyed by name
//! - `registry`: process-wide name → implementation dispatch, fail-closed stubs
//! - `kem` / `sig`: concrete and stub KEM/signature implementations
//! - `tristitch`: combines 1-4 KEM shared secrets into one 32-byte secret
//! - `geobind`: binds a 32-byte secret to a 21-D geometric state

pub mod catalog;
pub mod geobind;
pub mod kem;
pub mod registry;
pub mod sig;
pub mod tristitch;

pub use catalog::{AlgorithmDescriptor, AlgorithmFamily, AlgorithmKind, NistLevel};
pub use geobind::{bind_key_to_geometry, geometric_fingerprint, verify_geometric_binding, BindOptions, BoundKey, GeoBindError};
pub use kem::{KemError, KyberKem, QuantumKem, StubKem};
pub use registry::{Registry, RegistryError};
pub use sig::{DilithiumSig, QuantumSig, SigError, StubSig};
pub use tristitch::{combine, KemContribution, KemResult, StitchError, StitchResult};
