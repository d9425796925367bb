//! Reason codes: the stable, public vocabulary explaining every decision.
//! A code's meaning is fixed for good once assigned — new behavior gets a
//! new code, never a repurposed one.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasonCode {
    LawsMissingOrCorrupt,
    ManifestInvalid,
    KeysMissing,
    LedgerCorrupt,
    VoxelRootMissing,
    LowCoherence,
    HighConflict,
    HighDrift,
    HighWallCost,
    ManifestStale,
    KeyRolloverRequired,
    IntegrityDegraded,
    InvalidInput,
}

impl ReasonCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ReasonCode::LawsMissingOrCorrupt => "LAWS_MISSING_OR_CORRUPT",
            ReasonCode::ManifestInvalid => "MANIFEST_INVALID",
            ReasonCode::KeysMissing => "KEYS_MISSING",
            ReasonCode::LedgerCorrupt => "LEDGER_CORRUPT",
            ReasonCode::VoxelRootMissing => "VOXEL_ROOT_MISSING",
            ReasonCode::LowCoherence => "LOW_COHERENCE",
            ReasonCode::HighConflict => "HIGH_CONFLICT",
            ReasonCode::HighDrift => "HIGH_DRIFT",
            ReasonCode::HighWallCost => "HIGH_WALL_COST",
            ReasonCode::ManifestStale => "MANIFEST_STALE",
            ReasonCode::KeyRolloverRequired => "KEY_ROLLOVER_REQUIRED",
            ReasonCode::IntegrityDegraded => "INTEGRITY_DEGRADED",
            ReasonCode::InvalidInput => "INVALID_INPUT",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
