//! Process-wide registry mapping algorithm names to implementations.
//!
//! Missing implementations are auto-materialized as fail-closed stubs sized
//! from the catalog descriptor, so `get_kem`/`get_signature` never fail on
//! a known name even before a real backend is injected. `register_kem` and
//! `register_signature` replace a stub (or a previously registered real
//! backend) without touching any caller holding an `Arc`.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use crate::catalog::{self, AlgorithmKind};
use crate::kem::{KyberKem, QuantumKem, StubKem};
use crate::sig::{DilithiumSig, QuantumSig, StubSig};

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
    #[error("algorithm {0} is not a KEM")]
    NotAKem(String),
    #[error("algorithm {0} is not a signature scheme")]
    NotASignature(String),
}

pub type Result<T> = std::result::Result<T, RegistryError>;

struct Entry {
    kem: Option<Arc<dyn QuantumKem>>,
    sig: Option<Arc<dyn QuantumSig>>,
}

/// Process-wide catalog-backed dispatch table.
pub struct Registry {
    entries: RwLock<HashMap<String, Entry>>,
}

impl Registry {
    pub fn new() -> Self {
        let registry = Self {
            entries: RwLock::new(HashMap::new()),
        };
        registry.seed_builtins();
        registry
    }

    fn seed_builtins(&self) {
        let mut map = self.entries.write();
        for descriptor in catalog::builtin_catalog() {
            let entry = match descriptor.kind {
                AlgorithmKind::Kem => Entry {
                    kem: Some(default_kem_impl(descriptor.name)),
                    sig: None,
                },
                AlgorithmKind::Signature => Entry {
                    kem: None,
                    sig: Some(default_sig_impl(descriptor.name)),
                },
            };
            map.insert(descriptor.name.to_string(), entry);
        }
    }

    fn stub_entry(&self, name: &str) -> Result<Entry> {
        let descriptor = catalog::lookup(name).ok_or_else(|| RegistryError::UnknownAlgorithm(name.to_string()))?;
        Ok(match descriptor.kind {
            AlgorithmKind::Kem => Entry {
                kem: Some(Arc::new(StubKem {
                    public_key_size: descriptor.sizes.public_key,
                    secret_key_size: descriptor.sizes.secret_key,
                    ciphertext_size: descriptor.sizes.artifact,
                    shared_secret_size: descriptor.sizes.shared_secret,
                })),
                sig: None,
            },
            AlgorithmKind::Signature => Entry {
                kem: None,
                sig: Some(Arc::new(StubSig {
                    public_key_size: descriptor.sizes.public_key,
                    secret_key_size: descriptor.sizes.secret_key,
                    signature_size: descriptor.sizes.artifact,
                })),
            },
        })
    }

    pub fn get_kem(&self, name: &str) -> Result<Arc<dyn QuantumKem>> {
        if let Some(entry) = self.entries.read().get(name) {
            return entry.kem.clone().ok_or_else(|| RegistryError::NotAKem(name.to_string()));
        }
        let entry = self.stub_entry(name)?;
        let kem = entry.kem.clone().ok_or_else(|| RegistryError::NotAKem(name.to_string()))?;
        self.entries.write().insert(name.to_string(), entry);
        Ok(kem)
    }

    pub fn get_signature(&self, name: &str) -> Result<Arc<dyn QuantumSig>> {
        if let Some(entry) = self.entries.read().get(name) {
            return entry.sig.clone().ok_or_else(|| RegistryError::NotASignature(name.to_string()));
        }
        let entry = self.stub_entry(name)?;
        let sig = entry.sig.clone().ok_or_else(|| RegistryError::NotASignature(name.to_string()))?;
        self.entries.write().insert(name.to_string(), entry);
        Ok(sig)
    }

    pub fn register_kem(&self, name: &str, implementation: Arc<dyn QuantumKem>) {
        let mut map = self.entries.write();
        map.entry(name.to_string())
            .and_modify(|e| e.kem = Some(implementation.clone()))
            .or_insert(Entry {
                kem: Some(implementation),
                sig: None,
            });
    }

    pub fn register_signature(&self, name: &str, implementation: Arc<dyn QuantumSig>) {
        let mut map = self.entries.write();
        map.entry(name.to_string())
            .and_modify(|e| e.sig = Some(implementation.clone()))
            .or_insert(Entry {
                kem: None,
                sig: Some(implementation),
            });
    }

    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn clear(&self) {
        self.entries.write().clear();
        self.seed_builtins();
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn default_kem_impl(name: &str) -> Arc<dyn QuantumKem> {
    match name {
        "kyber768" => Arc::new(KyberKem::new()),
        _ => unreachable!("builtin catalog entry without a wired default: {name}"),
    }
}

fn default_sig_impl(name: &str) -> Arc<dyn QuantumSig> {
    match name {
        "dilithium3" => Arc::new(DilithiumSig::new()),
        _ => unreachable!("builtin catalog entry without a wired default: {name}"),
    }
}
