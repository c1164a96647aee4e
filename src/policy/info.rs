//! Observable game information handed to a deciding seat.

use serde::{Deserialize, Serialize};

use crate::board::{SlotStatus, SLOT_COUNT};
use crate::cards::CardValue;
use crate::core::{SeatId, SeatMap};

/// What a seat may see when asked for a decision.
///
/// Values are zero wherever a slot is not revealed, for every seat
/// including the viewer, so no hidden card leaks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    /// The seat being asked.
    pub seat: SeatId,

    /// Visible board values per seat.
    pub values: SeatMap<[CardValue; SLOT_COUNT]>,

    /// Slot statuses per seat.
    pub statuses: SeatMap<[SlotStatus; SLOT_COUNT]>,

    /// Current top of the discard pile.
    pub discard_top: Option<CardValue>,

    /// Turn number within the round.
    pub turn: u32,

    /// Round number within the game (0-based).
    pub round: u32,

    /// Whether some seat has already finished and the round is counting down.
    pub finishing: bool,
}

impl GameInfo {
    /// Number of seats at the table.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.values.seat_count()
    }

    /// The asking seat's visible values.
    #[must_use]
    pub fn own_values(&self) -> &[CardValue; SLOT_COUNT] {
        &self.values[self.seat]
    }

    /// The asking seat's statuses.
    #[must_use]
    pub fn own_statuses(&self) -> &[SlotStatus; SLOT_COUNT] {
        &self.statuses[self.seat]
    }

    /// Lowest-indexed hidden slot of the asking seat.
    #[must_use]
    pub fn first_hidden(&self) -> Option<usize> {
        self.own_statuses()
            .iter()
            .position(|s| *s == SlotStatus::Hidden)
    }

    /// Lowest-indexed slot of the asking seat that is not gone.
    #[must_use]
    pub fn first_present(&self) -> Option<usize> {
        self.own_statuses()
            .iter()
            .position(|s| *s != SlotStatus::Gone)
    }
}
