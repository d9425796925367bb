//! Digital signature implementations.
//!
//! `QuantumSig` is the seam the registry dispatches through; `DilithiumSig`
//! is the only real backend wired in.

use pqcrypto_dilithium::dilithium3;
use pqcrypto_traits::sign::{PublicKey, SecretKey};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SigError {
    #[error("signing failed: {0}")]
    SigningFailed(String),
    #[error("invalid key format: {0}")]
    InvalidKeyFormat(String),
    #[error("stub implementation refuses to verify")]
    StubUnimplemented,
}

pub type Result<T> = std::result::Result<T, SigError>;

/// A post-quantum (or classical-fallback) digital signature scheme.
pub trait QuantumSig: Send + Sync {
    fn keygen(&self) -> Result<(Vec<u8>, Vec<u8>)>;
    fn sign(&self, sk: &[u8], msg: &[u8]) -> Result<Vec<u8>>;
    fn verify(&self, pk: &[u8], msg: &[u8], sig: &[u8]) -> Result<bool>;
}

/// Dilithium3 (ML-DSA), NIST level 2, lattice-based.
#[derive(Clone, Copy, Debug, Default)]
pub struct DilithiumSig;

impl DilithiumSig {
    pub fn new() -> Self {
        Self
    }
}

impl QuantumSig for DilithiumSig {
    fn keygen(&self) -> Result<(Vec<u8>, Vec<u8>)> {
        let (pk, sk) = dilithium3::keypair();
        Ok((pk.as_bytes().to_vec(), sk.as_bytes().to_vec()))
    }

    fn sign(&self, sk_bytes: &[u8], msg: &[u8]) -> Result<Vec<u8>> {
        let sk = dilithium3::SecretKey::from_bytes(sk_bytes)
            .map_err(|_| SigError::InvalidKeyFormat("dilithium3 secret key".into()))?;
        Ok(dilithium3::sign(msg, &sk))
    }

    fn verify(&self, pk_bytes: &[u8], msg: &[u8], sig_bytes: &[u8]) -> Result<bool> {
        let pk = dilithium3::PublicKey::from_bytes(pk_bytes)
            .map_err(|_| SigError::InvalidKeyFormat("dilithium3 public key".into()))?;
        Ok(dilithium3::open(sig_bytes, &pk)
            .map(|opened| opened == msg)
            .unwrap_or(false))
    }
}

/// Fail-closed stand-in for an algorithm the registry knows about but has no
/// real backend for. `verify` always returns `false`; a stub must never
/// vouch for a signature it cannot actually check.
#[derive(Clone, Debug)]
pub struct StubSig {
    pub public_key_size: usize,
    pub secret_key_size: usize,
    pub signature_size: usize,
}

impl QuantumSig for StubSig {
    fn keygen(&self) -> Result<(Vec<u8>, Vec<u8>)> {
        Ok((vec![0u8; self.public_key_size], vec![0u8; self.secret_key_size]))
    }

    fn sign(&self, sk: &[u8], _msg: &[u8]) -> Result<Vec<u8>> {
        if sk.len() != self.secret_key_size {
            return Err(SigError::InvalidKeyFormat("stub secret key size".into()));
        }
        Ok(vec![0u8; self.signature_size])
    }

    fn verify(&self, _pk: &[u8], _msg: &[u8], _sig: &[u8]) -> Result<bool> {
        Ok(false)
    }
}
