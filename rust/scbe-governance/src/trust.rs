//! Trust state: the lattice from fully trusted to integrity-degraded that
//! governs how hard the threshold lookup squeezes.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TrustState {
    /// Fully trusted.
    T0,
    /// Time source is not trusted.
    T1,
    /// Active manifest is stale.
    T2,
    /// A key rotation is required.
    T3,
    /// Integrity is degraded.
    T4,
}

#[derive(Debug, Clone, Copy)]
pub struct TrustInputs {
    pub keys_valid: bool,
    pub time_trusted: bool,
    pub manifest_current: bool,
    pub key_rotation_needed: bool,
    pub integrity_ok: bool,
}

/// Priority order T4 > T3 > T2 > T1 > T0: the worst applicable condition
/// wins.
pub fn derive_trust_state(inputs: TrustInputs) -> TrustState {
    if !inputs.integrity_ok {
        TrustState::T4
    } else if inputs.key_rotation_needed {
        TrustState::T3
    } else if !inputs.manifest_current {
        TrustState::T2
    } else if !inputs.time_trusted {
        TrustState::T1
    } else {
        let _ = inputs.keys_valid;
        TrustState::T0
    }
}
