//! Platform primitives shared by every SCBE governance component.
//!
//! - `ids`: RFC 4122 v4 UUIDs and secure random byte generation
//! - `hash`: SHA-256 and SHA-512 (sync, with an async wrapper for large buffers)
//! - `compare`: constant-time equality
//! - `canonical`: stable, order-preserving encoding for hashing and signing
//!
//! Every other crate in this workspace that hashes or signs structured data
//! routes through `canonical` first; nothing here assumes a particular wire
//! format beyond "deterministic bytes in, deterministic bytes out".

pub mod canonical;
pub mod compare;
pub mod hash;
pub mod ids;

pub use canonical::{canonicalize, CanonicalError};
pub use compare::constant_time_eq;
pub use hash::{sha256, sha256_async, sha512, sha512_async};
pub use ids::{random_bytes, random_uuid};
