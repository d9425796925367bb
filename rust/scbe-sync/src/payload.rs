//! The shape exchanged on reconnect: everything the initiator has
//! accumulated since its last sync with this peer.

use serde::{Deserialize, Serialize};

use scbe_governance::FluxManifest;
use scbe_ledger::AuditEvent;

/// An opaque voxel-state delta. Sync ships these without interpreting
/// their contents — that belongs to the geometric trust model (C6).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoxelDelta {
    pub voxel_id: String,
    pub payload: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncPayload {
    /// The ledger index this delta is relative to.
    pub since_cursor: u64,
    /// Opaque signed decision capsules (C11); sync ships and counts them
    /// without decoding their contents.
    pub capsules: Vec<Vec<u8>>,
    /// Audit ledger events appended since `since_cursor`.
    pub events: Vec<AuditEvent>,
    pub voxel_deltas: Vec<VoxelDelta>,
    /// The initiator's currently-known manifest, offered for conflict
    /// resolution against whatever the responder is running.
    pub manifest_request: Option<FluxManifest>,
}

/// Builds the outbound payload for a reconnect: everything the ledger has
/// recorded since `since_cursor`, plus whatever capsules/voxel deltas the
/// caller has queued locally.
pub fn build_sync_payload<S: scbe_pqc::QuantumSig>(
    ledger: &scbe_ledger::Ledger<S>,
    since_cursor: u64,
    capsules: Vec<Vec<u8>>,
    voxel_deltas: Vec<VoxelDelta>,
    manifest_request: Option<FluxManifest>,
) -> SyncPayload {
    SyncPayload { since_cursor, capsules, events: ledger.events_since(since_cursor), voxel_deltas, manifest_request }
}
