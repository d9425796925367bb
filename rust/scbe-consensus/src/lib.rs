//! Byzantine fault-tolerant vote tallying across the agent fleet.
//!
//! - `vote`: the `Vote`/`Decision` shapes and `ConsensusConfig`'s
//!   `maxFaulty`/`quorum` derivation
//! - `tally`: drop-stale-by-timeout, unweighted quorum-count tally, and
//!   tongue-weighted majority tally, both resolving exact ties via a
//!   fixed `ALLOW → DENY → QUARANTINE` order

pub mod errors;
pub mod tally;
pub mod vote;

pub use errors::{ConsensusError, Result};
pub use tally::{drop_stale, tally_unweighted, tally_weighted, TallyOutcome};
pub use vote::{ConsensusConfig, Decision, Vote, TIEBREAK_ORDER};
