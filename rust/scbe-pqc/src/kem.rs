//! Key Encapsulation Mechanism (KEM) implementations.
//!
//! `QuantumKEM` is the seam the registry dispatches through; `KyberKEM` is
//! the only real backend wired in, but any algorithm with fixed-size keys,
//! ciphertexts, and shared secrets can implement the trait.

use pqcrypto_kyber::kyber768;
use pqcrypto_traits::kem::{Ciphertext, PublicKey, SecretKey, SharedSecret};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KemError {
    #[error("encapsulation failed: {0}")]
    EncapsulationFailed(String),
    #[error("decapsulation failed: {0}")]
    DecapsulationFailed(String),
    #[error("invalid key format: {0}")]
    InvalidKeyFormat(String),
    #[error("invalid ciphertext")]
    InvalidCiphertext,
    #[error("stub implementation refuses to decapsulate")]
    StubUnimplemented,
}

pub type Result<T> = std::result::Result<T, KemError>;

/// A post-quantum (or classical-fallback) key encapsulation mechanism.
pub trait QuantumKem: Send + Sync {
    fn keygen(&self) -> Result<(Vec<u8>, Vec<u8>)>;
    fn encapsulate(&self, pk: &[u8]) -> Result<(Vec<u8>, Vec<u8>)>;
    fn decapsulate(&self, sk: &[u8], ct: &[u8]) -> Result<Vec<u8>>;
}

/// Kyber768 (ML-KEM), NIST level 1, lattice-based.
#[derive(Clone, Copy, Debug, Default)]
pub struct KyberKem;

impl KyberKem {
    pub fn new() -> Self {
        Self
    }
}

impl QuantumKem for KyberKem {
    fn keygen(&self) -> Result<(Vec<u8>, Vec<u8>)> {
        let (pk, sk) = kyber768::keypair();
        Ok((pk.as_bytes().to_vec(), sk.as_bytes().to_vec()))
    }

    fn encapsulate(&self, pk_bytes: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
        let pk = kyber768::PublicKey::from_bytes(pk_bytes)
            .map_err(|_| KemError::InvalidKeyFormat("kyber768 public key".into()))?;
        let (ss, ct) = kyber768::encapsulate(&pk);
        Ok((ss.as_bytes().to_vec(), ct.as_bytes().to_vec()))
    }

    fn decapsulate(&self, sk_bytes: &[u8], ct_bytes: &[u8]) -> Result<Vec<u8>> {
        let sk = kyber768::SecretKey::from_bytes(sk_bytes)
            .map_err(|_| KemError::InvalidKeyFormat("kyber768 secret key".into()))?;
        let ct = kyber768::Ciphertext::from_bytes(ct_bytes).map_err(|_| KemError::InvalidCiphertext)?;
        let ss = kyber768::decapsulate(&ct, &sk);
        Ok(ss.as_bytes().to_vec())
    }
}

/// Fail-closed stand-in for an algorithm the registry knows about but has no
/// real backend for. Produces correctly-sized, deterministic-zero artifacts
/// so callers that only check sizes don't choke, but `decapsulate` always
/// errors: a stub must never silently agree with any ciphertext.
#[derive(Clone, Debug)]
pub struct StubKem {
    pub public_key_size: usize,
    pub secret_key_size: usize,
    pub ciphertext_size: usize,
    pub shared_secret_size: usize,
}

impl QuantumKem for StubKem {
    fn keygen(&self) -> Result<(Vec<u8>, Vec<u8>)> {
        Ok((vec![0u8; self.public_key_size], vec![0u8; self.secret_key_size]))
    }

    fn encapsulate(&self, pk: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
        if pk.len() != self.public_key_size {
            return Err(KemError::InvalidKeyFormat("stub public key size".into()));
        }
        Ok((vec![0u8; self.shared_secret_size], vec![0u8; self.ciphertext_size]))
    }

    fn decapsulate(&self, _sk: &[u8], _ct: &[u8]) -> Result<Vec<u8>> {
        Err(KemError::StubUnimplemented)
    }
}
