//! Step 1 of DECIDE: the fail-closed gate. Laws, manifest, keys, ledger,
//! and voxel root must all check out, in that order, or the request is
//! rejected (unless it names a safe op).

use scbe_governance::{verify_immutable_laws_hash, verify_manifest};
use scbe_pqc::QuantumSig;

use crate::error::KernelResult;
use crate::reason::ReasonCode;
use crate::runtime::OfflineRuntime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateCheck {
    Pass,
    Fail(ReasonCode),
}

pub fn run_gate<S: QuantumSig, M: crate::mmx::MmxScorer>(runtime: &OfflineRuntime<'_, S, M>) -> KernelResult<GateCheck> {
    let laws_ok = match runtime.laws {
        Some(laws) => verify_immutable_laws_hash(laws)?,
        None => false,
    };
    if !laws_ok {
        return Ok(GateCheck::Fail(ReasonCode::LawsMissingOrCorrupt));
    }

    let manifest_ok = match runtime.manifest {
        Some(manifest) => verify_manifest(manifest, runtime.manifest_signer, runtime.manifest_signer_pub)?,
        None => false,
    };
    if !manifest_ok {
        return Ok(GateCheck::Fail(ReasonCode::ManifestInvalid));
    }

    if !runtime.keys.present {
        return Ok(GateCheck::Fail(ReasonCode::KeysMissing));
    }

    let ledger_ok = runtime.ledger.is_empty() || runtime.ledger.verify(runtime.ledger_signer_pub);
    if !ledger_ok {
        return Ok(GateCheck::Fail(ReasonCode::LedgerCorrupt));
    }

    if runtime.voxel_root.is_empty() {
        return Ok(GateCheck::Fail(ReasonCode::VoxelRootMissing));
    }

    Ok(GateCheck::Pass)
}
