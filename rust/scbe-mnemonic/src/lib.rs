//! AetherLex v1: a tokenized high-entropy mnemonic phrase scheme and the
//! KDF seed derivation built on top of it.
//!
//! - `tongue`: the six symbolic tongues, their phase offsets and φ-weights
//! - `token`: the 1536-token vocabulary and lossless byte <-> token mapping
//! - `phrase`: parsing, entropy/LWS scoring, profile-constrained generation
//! - `seed`: phrase -> KDF seed material, split for ML-KEM / ML-DSA

pub mod phrase;
pub mod seed;
pub mod token;
pub mod tongue;

pub use phrase::{generate_phrase, parse_phrase, ParsedPhrase, Profile, PhraseError};
pub use seed::{derive_seed, split_for_ml_dsa, split_for_ml_kem, SeedOptions};
pub use token::{byte_to_token, token_to_aether, Token, TokenError};
pub use tongue::{Tongue, TONGUES};
