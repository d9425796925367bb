//! Reconnect sync: reconciling a ledger/capsule/voxel delta and resolving
//! any manifest conflict surfaced along the way.
//!
//! - `payload`: the `SyncPayload`/`VoxelDelta` wire shapes and
//!   `build_sync_payload`
//! - `reconcile`: responder-side acceptance of the delta and manifest
//!   conflict resolution, composing `scbe-ledger` + `scbe-governance`

pub mod error;
pub mod payload;
pub mod reconcile;

pub use error::{SyncError, SyncResult};
pub use payload::{build_sync_payload, SyncPayload, VoxelDelta};
pub use reconcile::{reconcile_sync, SyncResponse};
