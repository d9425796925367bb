//! The six sacred tongues: fixed phase offsets and golden-ratio weights.

use serde::{Deserialize, Serialize};

const PHI: f64 = 1.618_033_988_749_895;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tongue {
    Ko,
    Av,
    Ru,
    Ca,
    Um,
    Dr,
}

/// All six tongues in their canonical (phase-ascending) order.
pub const TONGUES: [Tongue; 6] = [Tongue::Ko, Tongue::Av, Tongue::Ru, Tongue::Ca, Tongue::Um, Tongue::Dr];

impl Tongue {
    pub fn index(&self) -> usize {
        match self {
            Tongue::Ko => 0,
            Tongue::Av => 1,
            Tongue::Ru => 2,
            Tongue::Ca => 3,
            Tongue::Um => 4,
            Tongue::Dr => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Tongue> {
        TONGUES.get(index).copied()
    }

    pub fn code(&self) -> &'static str {
        match self {
            Tongue::Ko => "KO",
            Tongue::Av => "AV",
            Tongue::Ru => "RU",
            Tongue::Ca => "CA",
            Tongue::Um => "UM",
            Tongue::Dr => "DR",
        }
    }

    pub fn from_code(code: &str) -> Option<Tongue> {
        TONGUES.iter().copied().find(|t| t.code() == code)
    }

    /// Fixed phase offset in degrees: 0, 60, 120, 180, 240, 300.
    pub fn phase_offset_degrees(&self) -> f64 {
        60.0 * self.index() as f64
    }

    /// φ^index — later tongues (by index) carry exponentially more weight.
    pub fn weight(&self) -> f64 {
        PHI.powi(self.index() as i32)
    }

    /// Offset of this tongue's 256-byte block within the 1536-token space.
    pub fn token_offset(&self) -> usize {
        self.index() * 256
    }
}
