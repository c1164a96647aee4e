//! Action codes and legality masks.
//!
//! Every decision is one code in `0..26`:
//!
//! | code     | action                                |
//! |----------|---------------------------------------|
//! | `0`      | draw a fresh card from the draw pile  |
//! | `1`      | take the top of the discard pile      |
//! | `2..14`  | swap the held card into slot `code-2` |
//! | `14..26` | discard the held card and reveal slot `code-14` |
//!
//! A [`LegalityMask`] marks which codes are permitted in the current phase.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::seat::SeatId;
use crate::board::{Board, SlotStatus, SLOT_COUNT};

/// Size of the action code space.
pub const ACTION_COUNT: usize = 26;

/// Code produced for a swap or reveal naming a slot off the board. It
/// decodes to nothing, so the round rejects it as illegal.
pub const INVALID_CODE: u8 = u8::MAX;

const SWAP_BASE: u8 = 2;
const REVEAL_BASE: u8 = SWAP_BASE + SLOT_COUNT as u8;

/// A decoded action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Draw the next card from the draw pile.
    Draw,
    /// Take the current top of the discard pile.
    TakeDiscard,
    /// Replace the card in a slot with the held card.
    Swap(usize),
    /// Discard the held card and turn a hidden slot face up.
    Reveal(usize),
}

impl Action {
    /// Decode an action code. Returns `None` outside `0..26`.
    ///
    /// ```
    /// use skyjo_engine::core::Action;
    ///
    /// assert_eq!(Action::from_code(0), Some(Action::Draw));
    /// assert_eq!(Action::from_code(5), Some(Action::Swap(3)));
    /// assert_eq!(Action::from_code(25), Some(Action::Reveal(11)));
    /// assert_eq!(Action::from_code(26), None);
    /// ```
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Action::Draw),
            1 => Some(Action::TakeDiscard),
            c if c < REVEAL_BASE => Some(Action::Swap((c - SWAP_BASE) as usize)),
            c if (c as usize) < ACTION_COUNT => Some(Action::Reveal((c - REVEAL_BASE) as usize)),
            _ => None,
        }
    }

    /// Encode this action, or `None` if it names a slot off the board.
    #[must_use]
    pub fn checked_code(self) -> Option<u8> {
        match self {
            Action::Draw => Some(0),
            Action::TakeDiscard => Some(1),
            Action::Swap(slot) if slot < SLOT_COUNT => Some(SWAP_BASE + slot as u8),
            Action::Reveal(slot) if slot < SLOT_COUNT => Some(REVEAL_BASE + slot as u8),
            Action::Swap(_) | Action::Reveal(_) => None,
        }
    }

    /// Encode this action. Off-board slots encode as [`INVALID_CODE`].
    ///
    /// ```
    /// use skyjo_engine::core::{Action, INVALID_CODE};
    ///
    /// assert_eq!(Action::Swap(11).code(), 13);
    /// assert_eq!(Action::Swap(12).code(), INVALID_CODE);
    /// ```
    #[must_use]
    pub fn code(self) -> u8 {
        self.checked_code().unwrap_or(INVALID_CODE)
    }

    /// Whether this is one of the two draw-phase actions.
    #[must_use]
    pub fn is_draw_phase(self) -> bool {
        matches!(self, Action::Draw | Action::TakeDiscard)
    }
}

/// Indicator over the 26 action codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalityMask {
    bits: [bool; ACTION_COUNT],
}

impl LegalityMask {
    /// A mask with nothing permitted.
    #[must_use]
    pub fn none() -> Self {
        Self {
            bits: [false; ACTION_COUNT],
        }
    }

    /// Draw phase: only "draw" and "take discard" are legal.
    #[must_use]
    pub fn draw_phase() -> Self {
        let mut mask = Self::none();
        mask.bits[Action::Draw.code() as usize] = true;
        mask.bits[Action::TakeDiscard.code() as usize] = true;
        mask
    }

    /// Action phase for the given board: swap into any slot that is not
    /// gone, reveal any slot that is still hidden.
    #[must_use]
    pub fn action_phase(board: &Board) -> Self {
        let mut mask = Self::none();
        for (slot, status) in board.statuses().iter().enumerate() {
            if *status != SlotStatus::Gone {
                mask.bits[Action::Swap(slot).code() as usize] = true;
            }
            if *status == SlotStatus::Hidden {
                mask.bits[Action::Reveal(slot).code() as usize] = true;
            }
        }
        mask
    }

    /// Whether `code` is permitted. Out-of-range codes never are.
    #[must_use]
    pub fn is_legal(&self, code: u8) -> bool {
        self.bits.get(code as usize).copied().unwrap_or(false)
    }

    /// All permitted codes in ascending order.
    #[must_use]
    pub fn legal_codes(&self) -> SmallVec<[u8; ACTION_COUNT]> {
        (0..ACTION_COUNT as u8).filter(|&c| self.is_legal(c)).collect()
    }

    /// Number of permitted codes.
    #[must_use]
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }
}

/// An applied action with the context it was taken in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Seat that acted.
    pub seat: SeatId,

    /// The action taken.
    pub action: Action,

    /// Turn number within the round.
    pub turn: u32,

    /// Round number within the game (0-based).
    pub round: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(seat: SeatId, action: Action, turn: u32, round: u32) -> Self {
        Self {
            seat,
            action,
            turn,
            round,
        }
    }
}
