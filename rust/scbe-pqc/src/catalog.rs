//! Immutable catalog of algorithm descriptors.
//!
//! The catalog is data, not behavior: it says what sizes and security level
//! an algorithm name promises. The registry (`registry.rs`) is what actually
//! dispatches to an implementation.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlgorithmFamily {
    Lattice,
    HashBased,
    CodeBased,
    Isogeny,
    Multivariate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlgorithmKind {
    Kem,
    Signature,
}

/// NIST PQC security category, 1 (weakest) through 5 (strongest).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NistLevel(pub u8);

impl NistLevel {
    pub const LEVEL1: NistLevel = NistLevel(1);
    pub const LEVEL2: NistLevel = NistLevel(2);
    pub const LEVEL3: NistLevel = NistLevel(3);
    pub const LEVEL4: NistLevel = NistLevel(4);
    pub const LEVEL5: NistLevel = NistLevel(5);
}

/// Exact byte sizes an implementation of this descriptor must produce.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AlgorithmSizes {
    pub public_key: usize,
    pub secret_key: usize,
    /// Ciphertext size for a KEM, signature size for a signature scheme.
    pub artifact: usize,
    /// Shared secret size; unused (0) for signature descriptors.
    pub shared_secret: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AlgorithmDescriptor {
    pub name: &'static str,
    pub family: AlgorithmFamily,
    pub nist_level: NistLevel,
    pub kind: AlgorithmKind,
    pub sizes: AlgorithmSizes,
}

impl AlgorithmDescriptor {
    pub fn kyber768() -> Self {
        Self {
            name: "kyber768",
            family: AlgorithmFamily::Lattice,
            nist_level: NistLevel::LEVEL1,
            kind: AlgorithmKind::Kem,
            sizes: AlgorithmSizes {
                public_key: 1184,
                secret_key: 2400,
                artifact: 1088,
                shared_secret: 32,
            },
        }
    }

    pub fn dilithium3() -> Self {
        Self {
            name: "dilithium3",
            family: AlgorithmFamily::Lattice,
            nist_level: NistLevel::LEVEL2,
            kind: AlgorithmKind::Signature,
            sizes: AlgorithmSizes {
                public_key: 1952,
                secret_key: 4016,
                artifact: 3293,
                shared_secret: 0,
            },
        }
    }
}

/// The fixed set of algorithms this build knows descriptors for. The
/// catalog itself never changes at runtime; only the registry's backing
/// implementations do.
pub fn builtin_catalog() -> Vec<AlgorithmDescriptor> {
    vec![AlgorithmDescriptor::kyber768(), AlgorithmDescriptor::dilithium3()]
}

pub fn lookup(name: &str) -> Option<AlgorithmDescriptor> {
    builtin_catalog().into_iter().find(|d| d.name == name)
}
