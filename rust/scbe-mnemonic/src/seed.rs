//! Derive KDF seed material from an AetherLex phrase.

use hkdf::Hkdf;
use sha2::Sha256;
use thiserror::Error;

use crate::phrase::ParsedPhrase;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("requested seed length {0} is not supported (must be 1..=8160 bytes)")]
    InvalidLength(usize),
    #[error("ML-KEM split requires a 64-byte seed, got {0}")]
    InvalidMlKemSeedLength(usize),
    #[error("ML-DSA split requires a seed of at least 32 bytes, got {0}")]
    InvalidMlDsaSeedLength(usize),
}

pub type Result<T> = std::result::Result<T, SeedError>;

#[derive(Clone, Debug, Default)]
pub struct SeedOptions<'a> {
    /// Domain-separation tag, e.g. `"scbe-agent-seed-v1"`.
    pub tag: &'a str,
    /// Extra entropy (e.g. from a hardware RNG) mixed into the derivation.
    pub supplemental_entropy: Option<&'a [u8]>,
    /// Output length in bytes.
    pub length: usize,
}

/// Derive `opts.length` bytes of seed material from a parsed phrase.
/// `tag` domain-separates unrelated uses of the same phrase; supplemental
/// entropy, if present, is mixed into the HKDF info alongside the tag.
pub fn derive_seed(phrase: &ParsedPhrase, opts: &SeedOptions) -> Result<Vec<u8>> {
    if opts.length == 0 || opts.length > 255 * 32 {
        return Err(SeedError::InvalidLength(opts.length));
    }

    let ikm = phrase.to_phrase_string();
    let mut info = Vec::new();
    info.extend_from_slice(opts.tag.as_bytes());
    if let Some(supplemental) = opts.supplemental_entropy {
        info.extend_from_slice(supplemental);
    }

    let hk = Hkdf::<Sha256>::new(None, ikm.as_bytes());
    let mut okm = vec![0u8; opts.length];
    hk.expand(&info, &mut okm)
        .map_err(|_| SeedError::InvalidLength(opts.length))?;
    Ok(okm)
}

/// Split a 64-byte seed into the `(d, z)` pair ML-KEM keygen expects.
pub fn split_for_ml_kem(seed: &[u8]) -> Result<([u8; 32], [u8; 32])> {
    if seed.len() != 64 {
        return Err(SeedError::InvalidMlKemSeedLength(seed.len()));
    }
    let mut d = [0u8; 32];
    let mut z = [0u8; 32];
    d.copy_from_slice(&seed[..32]);
    z.copy_from_slice(&seed[32..]);
    Ok((d, z))
}

/// Take the leading 32 bytes of a seed as ML-DSA's `xi`.
pub fn split_for_ml_dsa(seed: &[u8]) -> Result<[u8; 32]> {
    if seed.len() < 32 {
        return Err(SeedError::InvalidMlDsaSeedLength(seed.len()));
    }
    let mut xi = [0u8; 32];
    xi.copy_from_slice(&seed[..32]);
    Ok(xi)
}
