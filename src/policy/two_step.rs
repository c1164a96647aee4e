//! Two-decision adapter for human-facing or simpler seats.
//!
//! Instead of picking one of 26 codes, a [`TwoStepPolicy`] answers two
//! narrower questions: whether to take the discard top, and then where to
//! put the held card. [`TwoStep`] translates the answers back into codes.

use serde::{Deserialize, Serialize};

use super::{GameInfo, Policy};
use crate::cards::CardValue;
use crate::core::{Action, LegalityMask};

/// Where the held card goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Swap the held card into a slot.
    Swap(usize),
    /// Discard the held card and reveal a hidden slot.
    Reveal(usize),
}

impl From<Placement> for Action {
    fn from(placement: Placement) -> Self {
        match placement {
            Placement::Swap(slot) => Action::Swap(slot),
            Placement::Reveal(slot) => Action::Reveal(slot),
        }
    }
}

/// A seat that decides in two narrower steps.
pub trait TwoStepPolicy: Send {
    /// `true` to take the discard top, `false` to draw a fresh card.
    fn take_discard(&mut self, info: &GameInfo) -> bool;

    /// Where to put the held `card`.
    fn place(&mut self, info: &GameInfo, card: CardValue) -> Placement;
}

/// Adapts a [`TwoStepPolicy`] into a [`Policy`].
///
/// Illegal answers (for example a reveal on a slot already face up) are
/// re-requested rather than aborting the game.
#[derive(Clone, Debug, Default)]
pub struct TwoStep<P> {
    inner: P,
}

impl<P: TwoStepPolicy> TwoStep<P> {
    /// Wrap a two-step seat.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped seat.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: TwoStepPolicy> Policy for TwoStep<P> {
    fn decide(&mut self, _mask: &LegalityMask, info: &GameInfo, card: Option<CardValue>) -> u8 {
        let action = match card {
            None if self.inner.take_discard(info) => Action::TakeDiscard,
            None => Action::Draw,
            Some(card) => self.inner.place(info, card).into(),
        };
        action.code()
    }

    fn retry_on_illegal(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{SlotStatus, SLOT_COUNT};
    use crate::core::{SeatId, SeatMap};

    /// Takes the discard when it is low, keeps low cards, reveals otherwise.
    struct Threshold;

    impl TwoStepPolicy for Threshold {
        fn take_discard(&mut self, info: &GameInfo) -> bool {
            info.discard_top.is_some_and(|v| v <= 2)
        }

        fn place(&mut self, info: &GameInfo, card: CardValue) -> Placement {
            if card <= 2 {
                Placement::Swap(0)
            } else {
                Placement::Reveal(info.first_hidden().unwrap_or(0))
            }
        }
    }

    fn info(discard_top: Option<CardValue>) -> GameInfo {
        GameInfo {
            seat: SeatId::new(0),
            values: SeatMap::with_value(2, [0; SLOT_COUNT]),
            statuses: SeatMap::with_value(2, [SlotStatus::Hidden; SLOT_COUNT]),
            discard_top,
            turn: 0,
            round: 0,
            finishing: false,
        }
    }

    #[test]
    fn test_draw_decision_codes() {
        let mut seat = TwoStep::new(Threshold);
        let mask = LegalityMask::draw_phase();

        assert_eq!(seat.decide(&mask, &info(Some(1)), None), 1);
        assert_eq!(seat.decide(&mask, &info(Some(9)), None), 0);
    }

    #[test]
    fn test_placement_codes() {
        let mut seat = TwoStep::new(Threshold);
        let mask = LegalityMask::none();

        assert_eq!(seat.decide(&mask, &info(None), Some(-2)), 2);
        assert_eq!(seat.decide(&mask, &info(None), Some(11)), 14);
        assert!(seat.retry_on_illegal());
    }
}
