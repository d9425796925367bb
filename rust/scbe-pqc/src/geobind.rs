//! Geometric key binding.
//!
//! Ties a derived secret to the 21-D brain state of the agent that derived
//! it, so a bound key is only valid for the geometry it was minted under.
//! Any bit of drift in any coordinate — including sub-femtometer floating
//! point noise — must produce an unrelated bound key.

use hkdf::Hkdf;
use sha2::Sha256;
use thiserror::Error;

const FINGERPRINT_DOMAIN: &[u8] = b"scbe-geofingerprint-v1";
const BIND_DOMAIN: &[u8] = b"scbe-geobind-v1";

#[derive(Error, Debug)]
pub enum GeoBindError {
    #[error("state vector invalidated by a non-finite coordinate")]
    NonFiniteState,
    #[error("secret must be exactly 32 bytes, got {0}")]
    InvalidSecretLength(usize),
    #[error("HKDF expand failed: output length exceeds 255 * hash length")]
    ExpandFailed,
}

pub type Result<T> = std::result::Result<T, GeoBindError>;

/// Optional context mixed into the HKDF info alongside the fingerprint.
#[derive(Clone, Copy, Debug, Default)]
pub struct BindOptions {
    pub include_norm: bool,
    pub phase: Option<f64>,
}

#[derive(Clone, Debug)]
pub struct BoundKey {
    pub bound_key: [u8; 32],
    pub geo_fingerprint: [u8; 32],
    pub key_id: String,
    pub state_norm: f64,
}

fn validate_state(state: &[f64; 21]) -> Result<()> {
    if state.iter().any(|c| !c.is_finite()) {
        return Err(GeoBindError::NonFiniteState);
    }
    Ok(())
}

/// Hash a fixed-precision binary encoding of all 21 coordinates. Uses each
/// float's IEEE-754 bit pattern directly, so any bit change in any
/// coordinate changes the digest.
pub fn geometric_fingerprint(state: &[f64; 21]) -> Result<[u8; 32]> {
    validate_state(state)?;
    let mut buf = Vec::with_capacity(FINGERPRINT_DOMAIN.len() + 21 * 8);
    buf.extend_from_slice(FINGERPRINT_DOMAIN);
    for coord in state {
        buf.extend_from_slice(&coord.to_bits().to_le_bytes());
    }
    Ok(scbe_platform::sha256(&buf))
}

fn euclidean_norm(state: &[f64; 21]) -> f64 {
    state.iter().map(|c| c * c).sum::<f64>().sqrt()
}

/// Bind a 32-byte secret to a brain state via HKDF-Expand, treating the
/// secret itself as the pseudorandom key (no extract step).
pub fn bind_key_to_geometry(secret: &[u8], state: &[f64; 21], opts: BindOptions) -> Result<BoundKey> {
    if secret.len() != 32 {
        return Err(GeoBindError::InvalidSecretLength(secret.len()));
    }
    validate_state(state)?;

    let geo_fingerprint = geometric_fingerprint(state)?;
    let state_norm = euclidean_norm(state);

    let mut info = Vec::new();
    info.extend_from_slice(BIND_DOMAIN);
    info.extend_from_slice(&geo_fingerprint);
    if opts.include_norm {
        info.extend_from_slice(&state_norm.to_bits().to_le_bytes());
    }
    if let Some(phase) = opts.phase {
        info.extend_from_slice(&phase.to_bits().to_le_bytes());
    }

    let hk = Hkdf::<Sha256>::from_prk(secret).map_err(|_| GeoBindError::ExpandFailed)?;
    let mut bound_key = [0u8; 32];
    hk.expand(&info, &mut bound_key).map_err(|_| GeoBindError::ExpandFailed)?;

    let digest = scbe_platform::sha256(&bound_key);
    let key_id = hex::encode(&digest[..8]);

    Ok(BoundKey {
        bound_key,
        geo_fingerprint,
        key_id,
        state_norm,
    })
}

/// Recompute the binding from `secret` and `state` and compare it to
/// `bound_key` in constant time.
pub fn verify_geometric_binding(bound_key: &[u8; 32], secret: &[u8], state: &[f64; 21], opts: BindOptions) -> Result<bool> {
    let recomputed = bind_key_to_geometry(secret, state, opts)?;
    Ok(scbe_platform::constant_time_eq(bound_key, &recomputed.bound_key))
}
