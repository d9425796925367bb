//! The decision kernel: DECIDE's single entry point, `authorize`, wiring
//! every other `scbe-*` crate into one fail-closed, capsule-producing
//! authorization pipeline.
//!
//! - `request`: `EnforcementRequest` and the always-reachable safe ops
//! - `reason`: the stable, public `ReasonCode` vocabulary
//! - `runtime`: `OfflineRuntime`, the read-only view `authorize` consults
//! - `mmx`: `GovernanceScalars` and the `MmxScorer` seam (C6/C7/C12)
//! - `gate`: step 1, the fail-closed gate
//! - `decision`: the four-way `Decision`, threshold violations, policy
//! - `capsule`: step 7, the signed proof object appended to the ledger
//! - `kernel`: `authorize`, composing every step into one critical section

pub mod capsule;
pub mod decision;
pub mod error;
pub mod gate;
pub mod kernel;
pub mod mmx;
pub mod reason;
pub mod request;
pub mod runtime;

pub use capsule::{build_capsule, verify_capsule, Capsule};
pub use decision::{decide_policy, violated_thresholds, Decision};
pub use error::{KernelError, KernelResult};
pub use gate::{run_gate, GateCheck};
pub use kernel::{audit, authorize, DecideResult};
pub use mmx::{FixedScalars, GovernanceScalars, MmxScorer, SwarmMmxScorer};
pub use reason::ReasonCode;
pub use request::{is_safe_op, validate_request, EnforcementRequest, MAX_FIELD_LEN, SAFE_OPS};
pub use runtime::{KeyState, OfflineRuntime};
