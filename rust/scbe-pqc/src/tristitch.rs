//! TriStitch: multi-algorithm KEM combiner.
//!
//! Combines the shared secrets from 1-4 independently run KEMs into a single
//! 32-byte secret: concatenate with a fixed domain separator, hash with
//! SHA-256, take all 32 output bytes. An optional classical (X25519-style)
//! contribution can be XOR-mixed into the result before hashing, for
//! defense-in-depth during a classical-to-quantum migration window.

use thiserror::Error;

use crate::catalog::{AlgorithmDescriptor, AlgorithmFamily};

const DOMAIN_SEPARATOR: &[u8] = b"scbe-tristitch-v1";

#[derive(Error, Debug)]
pub enum StitchError {
    #[error("tristitch requires at least one KEM contribution")]
    Empty,
    #[error("tristitch accepts at most 4 KEM contributions, got {0}")]
    TooMany(usize),
}

pub type Result<T> = std::result::Result<T, StitchError>;

/// Audit record for a single KEM's contribution to a stitched secret.
#[derive(Clone, Debug)]
pub struct KemResult {
    pub algorithm_name: &'static str,
    pub family: AlgorithmFamily,
    pub nist_level: u8,
    pub public_key_size: usize,
    pub secret_key_size: usize,
}

/// One KEM's already-performed encapsulation, ready to be stitched.
#[derive(Clone, Debug)]
pub struct KemContribution {
    pub descriptor: AlgorithmDescriptor,
    pub shared_secret: Vec<u8>,
}

#[derive(Clone, Debug)]
pub struct StitchResult {
    pub combined_secret: [u8; 32],
    pub family_count: usize,
    pub kem_results: Vec<KemResult>,
    pub classical_mixed: bool,
}

/// Combine 1-4 KEM contributions (and an optional classical secret) into a
/// single 32-byte secret. Any failure upstream in producing a contribution's
/// shared secret is fatal for the whole stitch — callers must not pass in a
/// partially-failed encapsulation.
pub fn combine(contributions: &[KemContribution], classical_secret: Option<&[u8]>) -> Result<StitchResult> {
    if contributions.is_empty() {
        return Err(StitchError::Empty);
    }
    if contributions.len() > 4 {
        return Err(StitchError::TooMany(contributions.len()));
    }

    let mut buf = Vec::new();
    buf.extend_from_slice(DOMAIN_SEPARATOR);
    for contribution in contributions {
        buf.extend_from_slice(&contribution.shared_secret);
    }

    let classical_mixed = if let Some(classical) = classical_secret {
        buf = xor_extend(&buf, classical);
        true
    } else {
        false
    };

    let digest = scbe_platform::sha256(&buf);

    let mut families: Vec<AlgorithmFamily> = contributions.iter().map(|c| c.descriptor.family).collect();
    families.dedup_by(|a, b| a == b);
    families.sort_by_key(family_rank);
    families.dedup();

    let kem_results = contributions
        .iter()
        .map(|c| KemResult {
            algorithm_name: c.descriptor.name,
            family: c.descriptor.family,
            nist_level: c.descriptor.nist_level.0,
            public_key_size: c.descriptor.sizes.public_key,
            secret_key_size: c.descriptor.sizes.secret_key,
        })
        .collect();

    Ok(StitchResult {
        combined_secret: digest,
        family_count: families.len(),
        kem_results,
        classical_mixed,
    })
}

fn family_rank(family: &AlgorithmFamily) -> u8 {
    match family {
        AlgorithmFamily::Lattice => 0,
        AlgorithmFamily::HashBased => 1,
        AlgorithmFamily::CodeBased => 2,
        AlgorithmFamily::Isogeny => 3,
        AlgorithmFamily::Multivariate => 4,
    }
}

fn xor_extend(buf: &[u8], classical: &[u8]) -> Vec<u8> {
    let mut out = buf.to_vec();
    for (i, byte) in classical.iter().enumerate() {
        let slot = i % out.len().max(1);
        if let Some(existing) = out.get_mut(slot) {
            *existing ^= byte;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AlgorithmDescriptor;

    fn contribution(secret: &[u8]) -> KemContribution {
        KemContribution {
            descriptor: AlgorithmDescriptor::kyber768(),
            shared_secret: secret.to_vec(),
        }
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(combine(&[], None), Err(StitchError::Empty)));
    }

    #[test]
    fn rejects_more_than_four_contributions() {
        let contributions: Vec<_> = (0..5).map(|i| contribution(&[i as u8; 32])).collect();
        assert!(matches!(combine(&contributions, None), Err(StitchError::TooMany(5))));
    }

    #[test]
    fn single_contribution_produces_32_byte_secret() {
        let result = combine(&[contribution(&[1u8; 32])], None).unwrap();
        assert_eq!(result.combined_secret.len(), 32);
        assert_eq!(result.family_count, 1);
        assert!(!result.classical_mixed);
    }

    #[test]
    fn different_secrets_produce_different_output() {
        let a = combine(&[contribution(&[1u8; 32])], None).unwrap();
        let b = combine(&[contribution(&[2u8; 32])], None).unwrap();
        assert_ne!(a.combined_secret, b.combined_secret);
    }

    #[test]
    fn classical_mix_changes_output_and_is_recorded() {
        let without = combine(&[contribution(&[1u8; 32])], None).unwrap();
        let with = combine(&[contribution(&[1u8; 32])], Some(&[9u8; 32])).unwrap();
        assert_ne!(without.combined_secret, with.combined_secret);
        assert!(with.classical_mixed);
    }

    #[test]
    fn four_contributions_from_the_same_family_report_one_family() {
        let contributions: Vec<_> = (0..4).map(|i| contribution(&[i as u8; 32])).collect();
        let result = combine(&contributions, None).unwrap();
        assert_eq!(result.family_count, 1);
        assert_eq!(result.kem_results.len(), 4);
    }
}
