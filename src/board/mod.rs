//! A seat's 12-slot board.
//!
//! Slots are grouped into 4 columns of 3 consecutive slots
//! (`0..3`, `3..6`, `6..9`, `9..12`). A column clears when all three
//! slots are revealed and hold the same value: the slots become
//! [`SlotStatus::Gone`] with value 0, and the shared value goes to the
//! discard pile three times.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardValue, Census};

/// Slots per board.
pub const SLOT_COUNT: usize = 12;

/// Slots per column.
pub const COLUMN_HEIGHT: usize = 3;

/// Columns per board.
pub const COLUMN_COUNT: usize = SLOT_COUNT / COLUMN_HEIGHT;

/// Visibility of a board slot.
///
/// `Hidden -> Revealed -> Gone`; `Gone` is terminal until the next round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotStatus {
    #[default]
    Hidden,
    Revealed,
    Gone,
}

impl SlotStatus {
    /// Numeric encoding: Hidden 0, Revealed 1, Gone 2.
    #[must_use]
    pub fn ordinal(self) -> u8 {
        match self {
            SlotStatus::Hidden => 0,
            SlotStatus::Revealed => 1,
            SlotStatus::Gone => 2,
        }
    }
}

/// Values of the columns cleared by one [`Board::clear_triplets`] pass,
/// one entry per column. Each value must be discarded three times.
pub type TripletClear = SmallVec<[CardValue; COLUMN_COUNT]>;

/// One seat's board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    values: [CardValue; SLOT_COUNT],
    statuses: [SlotStatus; SLOT_COUNT],
}

impl Board {
    /// A freshly dealt board with every slot hidden.
    #[must_use]
    pub fn new(values: [CardValue; SLOT_COUNT]) -> Self {
        Self {
            values,
            statuses: [SlotStatus::Hidden; SLOT_COUNT],
        }
    }

    /// A placeholder board holding no cards, used before the deal.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            values: [0; SLOT_COUNT],
            statuses: [SlotStatus::Gone; SLOT_COUNT],
        }
    }

    /// Value in a slot, visible or not.
    #[must_use]
    pub fn value(&self, slot: usize) -> CardValue {
        self.values[slot]
    }

    /// Status of a slot.
    #[must_use]
    pub fn status(&self, slot: usize) -> SlotStatus {
        self.statuses[slot]
    }

    /// All slot statuses in board order.
    #[must_use]
    pub fn statuses(&self) -> &[SlotStatus; SLOT_COUNT] {
        &self.statuses
    }

    /// Values as another seat sees them: zero wherever the slot is not
    /// revealed.
    #[must_use]
    pub fn visible_values(&self) -> [CardValue; SLOT_COUNT] {
        let mut out = [0; SLOT_COUNT];
        for (slot, v) in out.iter_mut().enumerate() {
            if self.statuses[slot] == SlotStatus::Revealed {
                *v = self.values[slot];
            }
        }
        out
    }

    /// Turn a hidden slot face up. Slots that are not hidden are left alone.
    pub fn reveal(&mut self, slot: usize) {
        if self.statuses[slot] == SlotStatus::Hidden {
            self.statuses[slot] = SlotStatus::Revealed;
        }
    }

    /// Turn every hidden slot face up without changing values.
    pub fn reveal_all(&mut self) {
        for status in &mut self.statuses {
            if *status == SlotStatus::Hidden {
                *status = SlotStatus::Revealed;
            }
        }
    }

    /// Place `value` face up in `slot`, returning the displaced value.
    ///
    /// Callers must not swap into a gone slot; the legality mask forbids it.
    pub fn swap(&mut self, slot: usize, value: CardValue) -> CardValue {
        debug_assert_ne!(self.statuses[slot], SlotStatus::Gone, "swap into gone slot");
        self.statuses[slot] = SlotStatus::Revealed;
        std::mem::replace(&mut self.values[slot], value)
    }

    /// Number of slots still hidden.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.statuses
            .iter()
            .filter(|s| **s == SlotStatus::Hidden)
            .count()
    }

    /// Whether every slot has been revealed or cleared.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.hidden_count() == 0
    }

    /// Sum of all slots that are not gone, hidden ones included.
    #[must_use]
    pub fn sum(&self) -> i32 {
        self.values
            .iter()
            .zip(&self.statuses)
            .filter(|(_, s)| **s != SlotStatus::Gone)
            .map(|(v, _)| *v)
            .sum()
    }

    /// Sum of the revealed slots only.
    #[must_use]
    pub fn revealed_sum(&self) -> i32 {
        self.visible_values().iter().sum()
    }

    /// Clear every column whose three slots are revealed and equal.
    ///
    /// Re-running on a board with nothing to clear is a no-op.
    pub fn clear_triplets(&mut self) -> TripletClear {
        let mut cleared = TripletClear::new();
        for column in 0..COLUMN_COUNT {
            let slots = column * COLUMN_HEIGHT..(column + 1) * COLUMN_HEIGHT;
            let first = self.values[slots.start];
            let matched = slots
                .clone()
                .all(|s| self.statuses[s] == SlotStatus::Revealed && self.values[s] == first);
            if matched {
                for s in slots {
                    self.statuses[s] = SlotStatus::Gone;
                    self.values[s] = 0;
                }
                cleared.push(first);
            }
        }
        cleared
    }

    /// Add the cards physically on this board (gone slots excluded) to
    /// `census`.
    pub fn count_into(&self, census: &mut Census) {
        for (v, s) in self.values.iter().zip(&self.statuses) {
            if *s != SlotStatus::Gone {
                *census.entry(*v).or_insert(0) += 1;
            }
        }
    }
}
