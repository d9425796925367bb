//! The AetherLex v1 token vocabulary: 6 tongues x 256 bytes = 1536 tokens.
//!
//! A token is `<prefix>'<suffix>`, drawn from a 16-entry per-tongue prefix
//! alphabet and a 16-entry shared suffix alphabet. `byteValue =
//! prefixIndex*16 + suffixIndex`; prefixes are tongue-exclusive strings, so
//! every token string in the full 1536-entry vocabulary is unique and the
//! mapping back to `(tongue, byte)` is unambiguous.

use thiserror::Error;

use crate::tongue::Tongue;

const SYLLABLES: [&str; 16] = [
    "val", "ren", "tho", "mir", "sel", "kaa", "dun", "fen", "gor", "nys", "pel", "quo", "rha", "syl", "tek", "vor",
];

const SUFFIXES: [&str; 16] = [
    "ah", "en", "ir", "ol", "ys", "ae", "io", "ux", "ez", "an", "or", "une", "yx", "og", "ith", "eth",
];

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("token is not well-formed (expected <prefix>'<suffix>): {0}")]
    Malformed(String),
    #[error("unrecognized prefix: {0}")]
    UnknownPrefix(String),
    #[error("unrecognized suffix: {0}")]
    UnknownSuffix(String),
}

pub type Result<T> = std::result::Result<T, TokenError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub tongue: Tongue,
    pub byte: u8,
}

fn prefix_for(tongue: Tongue, prefix_index: usize) -> String {
    format!("{}{}", tongue.code().to_lowercase(), SYLLABLES[prefix_index])
}

fn prefix_index(tongue: Tongue, prefix: &str) -> Option<usize> {
    (0..16).find(|&i| prefix_for(tongue, i) == prefix)
}

/// Encode a single byte in `tongue`'s alphabet as a token.
pub fn byte_to_token(tongue: Tongue, byte: u8) -> Token {
    let prefix_index = (byte as usize) / 16;
    let suffix_index = (byte as usize) % 16;
    let text = format!("{}'{}", prefix_for(tongue, prefix_index), SUFFIXES[suffix_index]);
    Token { text, tongue, byte }
}

/// Decode a token string back to its tongue and byte value. The tongue is
/// recovered from the tongue-exclusive prefix, so no external hint is
/// needed.
pub fn token_to_aether(text: &str) -> Result<Token> {
    let (prefix, suffix) = text
        .split_once('\'')
        .ok_or_else(|| TokenError::Malformed(text.to_string()))?;

    let suffix_index = SUFFIXES
        .iter()
        .position(|s| *s == suffix)
        .ok_or_else(|| TokenError::UnknownSuffix(suffix.to_string()))?;

    for tongue in crate::tongue::TONGUES {
        if let Some(prefix_index) = prefix_index(tongue, prefix) {
            let byte = (prefix_index * 16 + suffix_index) as u8;
            return Ok(Token {
                text: text.to_string(),
                tongue,
                byte,
            });
        }
    }

    Err(TokenError::UnknownPrefix(prefix.to_string()))
}

/// Global index into the full 1536-token space: `tongue_offset*256 + byte`.
pub fn global_index(token: &Token) -> usize {
    token.tongue.token_offset() + token.byte as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tongue::TONGUES;

    #[test]
    fn round_trips_every_byte_in_every_tongue() {
        for tongue in TONGUES {
            for byte in 0u16..256 {
                let byte = byte as u8;
                let token = byte_to_token(tongue, byte);
                let decoded = token_to_aether(&token.text).unwrap();
                assert_eq!(decoded.tongue, tongue);
                assert_eq!(decoded.byte, byte);
            }
        }
    }

    #[test]
    fn all_1536_global_indices_are_unique_and_contiguous() {
        let mut indices: Vec<usize> = Vec::with_capacity(1536);
        for tongue in TONGUES {
            for byte in 0u16..256 {
                indices.push(global_index(&byte_to_token(tongue, byte as u8)));
            }
        }
        indices.sort_unstable();
        let expected: Vec<usize> = (0..1536).collect();
        assert_eq!(indices, expected);
    }

    #[test]
    fn malformed_token_is_rejected() {
        assert!(token_to_aether("no-apostrophe-here").is_err());
    }

    #[test]
    fn unknown_prefix_is_rejected() {
        assert!(token_to_aether("zzzzz'ah").is_err());
    }
}
