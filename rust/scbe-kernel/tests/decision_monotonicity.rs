//! Property 8 (spec.md §8): for the same scalars, moving from T0 through
//! T1/T2/T3/T4 never relaxes the decision back to ALLOW once it has left
//! ALLOW.

use proptest::prelude::*;

use scbe_governance::{thresholds_for, TrustState};
use scbe_kernel::{decide_policy, violated_thresholds, Decision, GovernanceScalars};

const ASCENDING_TRUST_STATES: [TrustState; 5] =
    [TrustState::T0, TrustState::T1, TrustState::T2, TrustState::T3, TrustState::T4];

proptest! {
    #[test]
    fn decision_never_relaxes_back_to_allow_as_trust_worsens(
        coherence in 0.0f64..=1.0,
        conflict in 0.0f64..=1.0,
        drift in 0.0f64..=1.0,
        wall_cost in 0.0f64..=1.0,
    ) {
        let scalars = GovernanceScalars { coherence, conflict, drift, wall_cost };
        let mut left_allow = false;

        for &trust_state in &ASCENDING_TRUST_STATES {
            let thresholds = thresholds_for(trust_state, None);
            let violations = violated_thresholds(scalars, thresholds);
            let (decision, _) = decide_policy(trust_state, violations);

            if decision == Decision::Allow {
                prop_assert!(!left_allow, "decision relaxed back to ALLOW at {:?} after leaving ALLOW at a lower trust state", trust_state);
            } else {
                left_allow = true;
            }
        }
    }
}
