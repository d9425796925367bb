//! Phrase parsing, entropy/LWS scoring, and profile-constrained generation.

use std::collections::HashMap;

use rand::Rng;
use thiserror::Error;

use crate::token::{byte_to_token, token_to_aether, Token, TokenError};
use crate::tongue::{Tongue, TONGUES};

const TOKEN_SPACE_SIZE: f64 = 1536.0;

#[derive(Error, Debug)]
pub enum PhraseError {
    #[error("token error: {0}")]
    Token(#[from] TokenError),
    #[error("phrase has no tokens")]
    Empty,
    #[error("profile requires at least {required} tokens, phrase has {actual}")]
    InsufficientTokens { required: usize, actual: usize },
    #[error("profile requires at least {required} tokens from tongue {tongue}, phrase has {actual}")]
    InsufficientTongueCount { tongue: &'static str, required: usize, actual: usize },
    #[error("profile requires at least {required:.2} bits of entropy, phrase has {actual:.2}")]
    InsufficientEntropy { required: f64, actual: f64 },
}

pub type Result<T> = std::result::Result<T, PhraseError>;

#[derive(Clone, Debug)]
pub struct ParsedPhrase {
    pub tokens: Vec<Token>,
    pub entropy_bits: f64,
    pub lws: f64,
}

/// Split a phrase on whitespace and decode each word as a token.
pub fn parse_phrase(phrase: &str) -> Result<ParsedPhrase> {
    let tokens: Vec<Token> = phrase
        .split_whitespace()
        .map(token_to_aether)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if tokens.is_empty() {
        return Err(PhraseError::Empty);
    }

    let entropy_bits = tokens.len() as f64 * TOKEN_SPACE_SIZE.log2();
    let lws = language_weighted_score(&tokens);

    Ok(ParsedPhrase {
        tokens,
        entropy_bits,
        lws,
    })
}

/// Average φ^tongueIndex weight across the phrase's tokens: phrases leaning
/// on later tongues (by index) score higher.
fn language_weighted_score(tokens: &[Token]) -> f64 {
    let total: f64 = tokens.iter().map(|t| t.tongue.weight()).sum();
    total / tokens.len() as f64
}

/// Minimum shape a phrase must satisfy to be accepted as a seed source.
#[derive(Clone, Debug)]
pub struct Profile {
    pub min_total_tokens: usize,
    pub min_entropy_bits: f64,
    pub min_per_tongue: HashMap<Tongue, usize>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            min_total_tokens: 12,
            min_entropy_bits: 120.0,
            min_per_tongue: HashMap::new(),
        }
    }
}

impl Profile {
    pub fn validate(&self, parsed: &ParsedPhrase) -> Result<()> {
        if parsed.tokens.len() < self.min_total_tokens {
            return Err(PhraseError::InsufficientTokens {
                required: self.min_total_tokens,
                actual: parsed.tokens.len(),
            });
        }
        if parsed.entropy_bits < self.min_entropy_bits {
            return Err(PhraseError::InsufficientEntropy {
                required: self.min_entropy_bits,
                actual: parsed.entropy_bits,
            });
        }
        for (&tongue, &required) in &self.min_per_tongue {
            let actual = parsed.tokens.iter().filter(|t| t.tongue == tongue).count();
            if actual < required {
                return Err(PhraseError::InsufficientTongueCount {
                    tongue: tongue.code(),
                    required,
                    actual,
                });
            }
        }
        Ok(())
    }
}

/// Generate a phrase satisfying `profile` using cryptographically secure
/// randomness. Tokens from tongues with a per-tongue minimum are placed
/// first to guarantee the count, then the phrase is padded with random
/// tokens (any tongue) up to `min_total_tokens`.
pub fn generate_phrase(profile: &Profile) -> ParsedPhrase {
    let mut rng = rand::thread_rng();
    let mut tokens = Vec::new();

    for (&tongue, &count) in &profile.min_per_tongue {
        for _ in 0..count {
            let byte: u8 = rng.gen();
            tokens.push(byte_to_token(tongue, byte));
        }
    }

    while tokens.len() < profile.min_total_tokens {
        let tongue = TONGUES[rng.gen_range(0..TONGUES.len())];
        let byte: u8 = rng.gen();
        tokens.push(byte_to_token(tongue, byte));
    }

    // Entropy only grows with token count, so pad further if the profile's
    // entropy floor demands more tokens than min_total_tokens alone covers.
    while (tokens.len() as f64 * TOKEN_SPACE_SIZE.log2()) < profile.min_entropy_bits {
        let tongue = TONGUES[rng.gen_range(0..TONGUES.len())];
        let byte: u8 = rng.gen();
        tokens.push(byte_to_token(tongue, byte));
    }

    let entropy_bits = tokens.len() as f64 * TOKEN_SPACE_SIZE.log2();
    let lws = language_weighted_score(&tokens);

    ParsedPhrase {
        tokens,
        entropy_bits,
        lws,
    }
}

impl ParsedPhrase {
    pub fn to_phrase_string(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>().join(" ")
    }
}
