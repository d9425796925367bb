//! Append-only, hash-chained audit ledger of signed events.
//!
//! - `event`: the `AuditEvent` shape and its hash function
//! - `ledger`: the chain itself — append, verify, replicate

pub mod error;
pub mod event;
pub mod ledger;

pub use error::{LedgerError, LedgerResult};
pub use event::{compute_event_hash, AuditEvent, ZERO_HEAD};
pub use ledger::Ledger;
