//! Append-only, hash-chained audit ledger.
//!
//! Single writer per partition; readers take a snapshot of the chain
//! length and head before reading, so a concurrent append is always
//! either fully before or fully after what a reader observes.

use std::sync::Arc;

use parking_lot::RwLock;
use subtle::ConstantTimeEq;
use tracing::{info, instrument, warn};

use scbe_pqc::QuantumSig;

use crate::error::LedgerResult;
use crate::event::{compute_event_hash, AuditEvent, ZERO_HEAD};

struct Inner {
    events: Vec<AuditEvent>,
    head: [u8; 64],
}

pub struct Ledger<S: QuantumSig> {
    signer: Arc<S>,
    signer_secret: Vec<u8>,
    inner: RwLock<Inner>,
}

impl<S: QuantumSig> Ledger<S> {
    pub fn new(signer: Arc<S>, signer_secret: Vec<u8>) -> Self {
        Self {
            signer,
            signer_secret,
            inner: RwLock::new(Inner { events: Vec::new(), head: ZERO_HEAD }),
        }
    }

    /// `event_hash = SHA512(prev_hash ‖ event_data)`, signs the hash, then
    /// advances the head.
    #[instrument(skip(self, event_data))]
    pub fn append(&self, event_data: Vec<u8>) -> LedgerResult<AuditEvent> {
        let mut inner = self.inner.write();
        let prev_hash = inner.head;
        let event_hash = compute_event_hash(&prev_hash, &event_data);
        let signature = self.signer.sign(&self.signer_secret, &event_hash)?;
        let event = AuditEvent { event_id: inner.events.len() as u64, prev_hash, event_data, event_hash, signature };

        inner.head = event_hash;
        inner.events.push(event.clone());
        info!(event_id = event.event_id, "appended audit event");
        Ok(event)
    }

    /// Chain length and head hash, read atomically under one lock
    /// acquisition.
    pub fn snapshot(&self) -> (u64, [u8; 64]) {
        let inner = self.inner.read();
        (inner.events.len() as u64, inner.head)
    }

    pub fn len(&self) -> u64 {
        self.inner.read().events.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Events with `event_id >= index`, for replication.
    pub fn events_since(&self, index: u64) -> Vec<AuditEvent> {
        let inner = self.inner.read();
        let start = index.min(inner.events.len() as u64) as usize;
        inner.events[start..].to_vec()
    }

    /// Walks the chain from the zero head, recomputing every hash and
    /// verifying every signature. Every event is checked regardless of
    /// earlier failures, so the position of a tampered event is never
    /// observable from how long verification takes.
    #[instrument(skip(self, signer_pub))]
    pub fn verify(&self, signer_pub: &[u8]) -> bool {
        let inner = self.inner.read();
        let mut prev_hash = ZERO_HEAD;
        let mut all_ok = true;

        for event in inner.events.iter() {
            let expected_hash = compute_event_hash(&prev_hash, &event.event_data);
            let hash_ok: bool = expected_hash.ct_eq(&event.event_hash).into();
            let links_to_prev: bool = prev_hash.ct_eq(&event.prev_hash).into();
            let sig_ok = self.signer.verify(signer_pub, &event.event_hash, &event.signature).unwrap_or(false);

            let event_ok = hash_ok & links_to_prev & sig_ok;
            if !event_ok {
                warn!(event_id = event.event_id, "audit event failed verification");
            }
            all_ok &= event_ok;
            prev_hash = event.event_hash;
        }

        all_ok
    }
}
