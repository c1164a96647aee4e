//! The shared draw pile and discard pile.
//!
//! The discard pile is split into a distinguished top card and a body.
//! Pushing a new top demotes the previous top into the body. When a draw
//! finds the draw pile empty, the whole body (never the top) is shuffled
//! into a new draw pile.

use tracing::debug;

use super::deck::{full_deck, CardValue, Census};
use crate::core::{GameError, GameRng};

/// Draw pile plus discard pile for one round.
#[derive(Clone, Debug)]
pub struct CardSupply {
    draw_pile: Vec<CardValue>,
    discard_body: Vec<CardValue>,
    discard_top: Option<CardValue>,
    rng: GameRng,
    reshuffles: u32,
}

impl CardSupply {
    /// A freshly shuffled full deck with an empty discard pile.
    pub fn shuffled(mut rng: GameRng) -> Self {
        let mut draw_pile = full_deck();
        rng.shuffle(&mut draw_pile);
        Self::from_piles(draw_pile, Vec::new(), None, rng)
    }

    /// Build a supply from explicit piles. The draw pile is consumed from
    /// the front.
    pub fn from_piles(
        mut draw_pile: Vec<CardValue>,
        discard_body: Vec<CardValue>,
        discard_top: Option<CardValue>,
        rng: GameRng,
    ) -> Self {
        draw_pile.reverse();
        Self {
            draw_pile,
            discard_body,
            discard_top,
            rng,
            reshuffles: 0,
        }
    }

    /// Take the next card from the draw pile, reshuffling the discard body
    /// into a new draw pile first if needed.
    pub fn draw(&mut self) -> Result<CardValue, GameError> {
        if self.draw_pile.is_empty() {
            self.reshuffle()?;
        }
        // Stored reversed: the front of the pile is the end of the vector.
        self.draw_pile.pop().ok_or(GameError::SupplyExhausted)
    }

    fn reshuffle(&mut self) -> Result<(), GameError> {
        if self.discard_body.is_empty() {
            return Err(GameError::SupplyExhausted);
        }
        self.draw_pile = std::mem::take(&mut self.discard_body);
        self.rng.shuffle(&mut self.draw_pile);
        self.reshuffles += 1;
        debug!(
            cards = self.draw_pile.len(),
            reshuffles = self.reshuffles,
            "discard pile reshuffled into draw pile"
        );
        Ok(())
    }

    /// Push `value` as the new discard top.
    pub fn discard(&mut self, value: CardValue) {
        if let Some(previous) = self.discard_top.replace(value) {
            self.discard_body.push(previous);
        }
    }

    /// Remove and return the discard top.
    pub fn take_discard_top(&mut self) -> Option<CardValue> {
        self.discard_top.take()
    }

    /// Current discard top.
    #[must_use]
    pub fn discard_top(&self) -> Option<CardValue> {
        self.discard_top
    }

    /// Cards remaining in the draw pile.
    #[must_use]
    pub fn draw_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Cards in the discard body (excluding the top).
    #[must_use]
    pub fn discard_body_len(&self) -> usize {
        self.discard_body.len()
    }

    /// How many times the discard body has been reshuffled.
    #[must_use]
    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }

    /// Add every card held by the supply to `census`.
    pub fn count_into(&self, census: &mut Census) {
        let top = self.discard_top.iter();
        for &value in self.draw_pile.iter().chain(&self.discard_body).chain(top) {
            *census.entry(value).or_insert(0) += 1;
        }
    }
}
