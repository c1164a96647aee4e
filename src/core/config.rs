//! Game configuration.
//!
//! The defaults are the standard rules: two seats, the game stops once
//! any seat's cumulative score reaches 100 or after 20 rounds, and every
//! seat opens the round by revealing slots 4 and 7.

use serde::{Deserialize, Serialize};

use crate::board::SLOT_COUNT;

/// Smallest supported seat count.
pub const MIN_SEATS: usize = 2;

/// Largest supported seat count. Eight boards plus the opening discard
/// use 97 of the 150 cards, leaving a workable draw pile.
pub const MAX_SEATS: usize = 8;

/// Configuration for a full game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats at the table.
    pub player_count: usize,

    /// Cumulative score at which the game stops after the current round.
    pub finish_threshold: i32,

    /// Maximum number of rounds played.
    pub max_rounds: u32,

    /// Hard turn cap per round is `player_count * turn_cap_per_player`.
    pub turn_cap_per_player: u32,

    /// Slots every seat reveals before the first turn.
    pub start_slots: [usize; 2],

    /// Seed for deck shuffling.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            finish_threshold: 100,
            max_rounds: 20,
            turn_cap_per_player: 100,
            start_slots: [4, 7],
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of seats.
    pub fn with_player_count(mut self, count: usize) -> Self {
        assert!(
            (MIN_SEATS..=MAX_SEATS).contains(&count),
            "Player count must be {MIN_SEATS}-{MAX_SEATS}"
        );
        self.player_count = count;
        self
    }

    /// Set the cumulative score that ends the game.
    pub fn with_finish_threshold(mut self, threshold: i32) -> Self {
        self.finish_threshold = threshold;
        self
    }

    /// Set the round cap.
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        assert!(rounds > 0, "Round cap must be positive");
        self.max_rounds = rounds;
        self
    }

    /// Set the per-seat turn allowance used for the hard turn cap.
    pub fn with_turn_cap_per_player(mut self, turns: u32) -> Self {
        assert!(turns > 0, "Turn cap must be positive");
        self.turn_cap_per_player = turns;
        self
    }

    /// Set the two opening reveal slots.
    pub fn with_start_slots(mut self, slots: [usize; 2]) -> Self {
        assert_start_slots(slots);
        self.start_slots = slots;
        self
    }

    /// Set the shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Re-check the builder invariants on a config that may have been
    /// assembled field by field.
    ///
    /// # Panics
    ///
    /// If the seat count is outside `MIN_SEATS..=MAX_SEATS`, either cap is
    /// zero, or the start slots are not two distinct board slots.
    pub fn validate(&self) {
        assert!(
            (MIN_SEATS..=MAX_SEATS).contains(&self.player_count),
            "Player count must be {MIN_SEATS}-{MAX_SEATS}"
        );
        assert!(self.max_rounds > 0, "Round cap must be positive");
        assert!(self.turn_cap_per_player > 0, "Turn cap must be positive");
        assert_start_slots(self.start_slots);
    }

    /// Runaway-prevention turn cap for a single round.
    #[must_use]
    pub fn turn_cap(&self) -> u32 {
        self.player_count as u32 * self.turn_cap_per_player
    }
}

fn assert_start_slots(slots: [usize; 2]) {
    assert!(
        slots.iter().all(|&s| s < SLOT_COUNT) && slots[0] != slots[1],
        "Start slots must be two distinct board slots"
    );
}
