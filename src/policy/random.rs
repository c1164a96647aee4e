//! Uniform random seat.

use super::{GameInfo, Policy};
use crate::cards::CardValue;
use crate::core::{GameRng, LegalityMask};

/// Chooses uniformly among the legal codes.
///
/// Seeded, so a game of random seats replays exactly from its seeds.
#[derive(Clone, Debug)]
pub struct UniformRandomPolicy {
    rng: GameRng,
}

impl UniformRandomPolicy {
    /// Create a random seat with its own stream.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a random seat from an existing stream.
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Policy for UniformRandomPolicy {
    fn decide(&mut self, mask: &LegalityMask, _info: &GameInfo, _card: Option<CardValue>) -> u8 {
        let legal = mask.legal_codes();
        self.rng.choose(legal.as_slice()).copied().unwrap_or(0)
    }
}
