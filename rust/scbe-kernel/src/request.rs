//! The single authorization request shape, and the diagnostic actions
//! that stay reachable even when the fail-closed gate would otherwise
//! reject everything.

use serde::{Deserialize, Serialize};

use crate::reason::ReasonCode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnforcementRequest {
    pub action: String,
    pub subject: String,
    pub object: String,
    pub payload_hash: [u8; 64],
}

/// Actions the fail-closed gate allow-passes even when laws, manifest,
/// keys, ledger, or voxel root are unavailable.
pub const SAFE_OPS: [&str; 3] = ["config.read", "audit.export", "diagnostics.run"];

pub fn is_safe_op(action: &str) -> bool {
    SAFE_OPS.contains(&action)
}

/// Upper bound on `action`/`subject`/`object`, in bytes. Large enough for any
/// realistic identifier, small enough that a malformed or hostile request
/// can't force unbounded allocation before it ever reaches the gate.
pub const MAX_FIELD_LEN: usize = 512;

/// Size-checked before any crypto runs, per the error-handling design: an
/// oversized or empty field is rejected with `INVALID_INPUT` and never
/// reaches the gate, the scorer, or the ledger.
pub fn validate_request(request: &EnforcementRequest) -> Result<(), ReasonCode> {
    let fields = [&request.action, &request.subject, &request.object];
    if fields.iter().any(|field| field.is_empty() || field.len() > MAX_FIELD_LEN) {
        return Err(ReasonCode::InvalidInput);
    }
    Ok(())
}

#[cfg(test)]
mod validate_tests {
    use super::*;

    fn sample_request() -> EnforcementRequest {
        EnforcementRequest {
            action: "data.read".to_string(),
            subject: "agent-1".to_string(),
            object: "voxel-42".to_string(),
            payload_hash: [0u8; 64],
        }
    }

    #[test]
    fn a_well_formed_request_validates() {
        assert!(validate_request(&sample_request()).is_ok());
    }

    #[test]
    fn an_empty_action_is_rejected() {
        let mut request = sample_request();
        request.action = String::new();
        assert_eq!(validate_request(&request), Err(ReasonCode::InvalidInput));
    }

    #[test]
    fn an_oversized_subject_is_rejected() {
        let mut request = sample_request();
        request.subject = "x".repeat(MAX_FIELD_LEN + 1);
        assert_eq!(validate_request(&request), Err(ReasonCode::InvalidInput));
    }

    #[test]
    fn a_field_at_exactly_the_limit_validates() {
        let mut request = sample_request();
        request.object = "x".repeat(MAX_FIELD_LEN);
        assert!(validate_request(&request).is_ok());
    }
}
