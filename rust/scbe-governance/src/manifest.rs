//! Flux manifest: the time-bounded policy layered on top of the immutable
//! laws — weights, thresholds, curvature parameters — signed by the
//! governance signer and subject to staleness and epoch-ordered conflict
//! resolution.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};

use scbe_pqc::QuantumSig;

use crate::error::GovernanceResult;
use crate::threshold::ThresholdSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyWeights {
    pub w_h: f64,
    pub w_s: f64,
    pub w_g: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvatureParams {
    pub curvature: f64,
    pub boundary_epsilon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluxManifest {
    pub manifest_id: String,
    pub epoch_id: String,
    pub valid_from: u64,
    pub valid_until: u64,
    pub policy_weights: PolicyWeights,
    pub thresholds: Option<ThresholdSet>,
    pub curvature_params: CurvatureParams,
    pub required_keys: Vec<String>,
    pub signature: Vec<u8>,
}

/// The fields the signature actually covers — everything but the
/// signature itself.
#[derive(Serialize)]
struct SignedManifestBody<'a> {
    manifest_id: &'a str,
    epoch_id: &'a str,
    valid_from: u64,
    valid_until: u64,
    policy_weights: &'a PolicyWeights,
    thresholds: &'a Option<ThresholdSet>,
    curvature_params: &'a CurvatureParams,
    required_keys: &'a [String],
}

fn signed_body(manifest: &FluxManifest) -> SignedManifestBody<'_> {
    SignedManifestBody {
        manifest_id: &manifest.manifest_id,
        epoch_id: &manifest.epoch_id,
        valid_from: manifest.valid_from,
        valid_until: manifest.valid_until,
        policy_weights: &manifest.policy_weights,
        thresholds: &manifest.thresholds,
        curvature_params: &manifest.curvature_params,
        required_keys: &manifest.required_keys,
    }
}

fn hash_body(manifest: &FluxManifest) -> GovernanceResult<[u8; 64]> {
    let canonical = scbe_platform::canonicalize(&signed_body(manifest))?;
    let mut hasher = Sha512::new();
    hasher.update(&canonical);
    let digest = hasher.finalize();
    let mut out = [0u8; 64];
    out.copy_from_slice(&digest);
    Ok(out)
}

/// Signs the manifest body (everything but `signature`) and fills in
/// `signature`.
pub fn sign_manifest<S: QuantumSig>(
    mut manifest: FluxManifest,
    signer: &S,
    signer_secret: &[u8],
) -> GovernanceResult<FluxManifest> {
    let hash = hash_body(&manifest)?;
    manifest.signature = signer.sign(signer_secret, &hash)?;
    Ok(manifest)
}

/// Checks the manifest's signature over its canonical body.
pub fn verify_manifest<S: QuantumSig>(manifest: &FluxManifest, signer: &S, signer_pub: &[u8]) -> GovernanceResult<bool> {
    let hash = hash_body(manifest)?;
    Ok(signer.verify(signer_pub, &hash, &manifest.signature).unwrap_or(false))
}

pub fn is_manifest_stale(manifest: &FluxManifest, now: u64) -> bool {
    now > manifest.valid_until
}

/// Numeric suffix of an epoch id such as `"epoch-42"` → `42`. Manifests
/// whose epoch id has no trailing digits never win a conflict against one
/// that does.
pub fn epoch_number(epoch_id: &str) -> Option<u64> {
    let digits_start = epoch_id.rfind(|c: char| !c.is_ascii_digit()).map(|i| i + 1).unwrap_or(0);
    if digits_start == epoch_id.len() {
        return None;
    }
    epoch_id[digits_start..].parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestChoice {
    First,
    Second,
}

/// Picks between two candidate manifests: prefer the verified one; if
/// both verify, prefer the higher epoch number; both invalid is fatal.
pub fn resolve_manifest_conflict(first_valid: bool, second_valid: bool, first: &FluxManifest, second: &FluxManifest) -> GovernanceResult<ManifestChoice> {
    match (first_valid, second_valid) {
        (false, false) => Err(crate::error::GovernanceError::BothInvalid),
        (true, false) => Ok(ManifestChoice::First),
        (false, true) => Ok(ManifestChoice::Second),
        (true, true) => {
            let first_epoch = epoch_number(&first.epoch_id).unwrap_or(0);
            let second_epoch = epoch_number(&second.epoch_id).unwrap_or(0);
            if second_epoch > first_epoch {
                Ok(ManifestChoice::Second)
            } else {
                Ok(ManifestChoice::First)
            }
        }
    }
}
