//! Deterministic policies.

use std::collections::VecDeque;

use super::{GameInfo, Policy};
use crate::cards::CardValue;
use crate::core::{Action, LegalityMask};

/// Replays a fixed sequence of codes, then falls back to the lowest legal
/// code once the script runs out.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPolicy {
    codes: VecDeque<u8>,
    retry: bool,
}

impl ScriptedPolicy {
    /// Create a policy replaying `codes` in order.
    pub fn new(codes: impl IntoIterator<Item = u8>) -> Self {
        Self {
            codes: codes.into_iter().collect(),
            retry: false,
        }
    }

    /// Ask the engine to re-request after an illegal code, as a human seat
    /// would.
    #[must_use]
    pub fn interactive(mut self) -> Self {
        self.retry = true;
        self
    }

    /// Codes not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.codes.len()
    }
}

impl Policy for ScriptedPolicy {
    fn decide(&mut self, mask: &LegalityMask, _info: &GameInfo, _card: Option<CardValue>) -> u8 {
        self.codes
            .pop_front()
            .or_else(|| mask.legal_codes().first().copied())
            .unwrap_or(0)
    }

    fn retry_on_illegal(&self) -> bool {
        self.retry
    }
}

/// Always draws a fresh card and reveals the lowest-indexed hidden slot.
///
/// With no hidden slot left it swaps into the lowest slot still on the
/// board.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstHiddenPolicy;

impl Policy for FirstHiddenPolicy {
    fn decide(&mut self, _mask: &LegalityMask, info: &GameInfo, card: Option<CardValue>) -> u8 {
        if card.is_none() {
            return Action::Draw.code();
        }
        match info.first_hidden() {
            Some(slot) => Action::Reveal(slot).code(),
            None => Action::Swap(info.first_present().unwrap_or(0)).code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{SlotStatus, SLOT_COUNT};
    use crate::core::{SeatId, SeatMap};

    fn info(statuses: [SlotStatus; SLOT_COUNT]) -> GameInfo {
        GameInfo {
            seat: SeatId::new(0),
            values: SeatMap::with_value(2, [0; SLOT_COUNT]),
            statuses: SeatMap::with_value(2, statuses),
            discard_top: Some(0),
            turn: 0,
            round: 0,
            finishing: false,
        }
    }

    #[test]
    fn test_script_then_fallback() {
        let mut policy = ScriptedPolicy::new([1, 20]);
        let info = info([SlotStatus::Hidden; SLOT_COUNT]);
        let draw = LegalityMask::draw_phase();

        assert_eq!(policy.decide(&draw, &info, None), 1);
        assert_eq!(policy.decide(&draw, &info, None), 20);
        assert_eq!(policy.remaining(), 0);
        assert_eq!(policy.decide(&draw, &info, None), 0);
        assert!(!policy.retry_on_illegal());
        assert!(ScriptedPolicy::default().interactive().retry_on_illegal());
    }

    #[test]
    fn test_first_hidden_draws_then_reveals() {
        let mut statuses = [SlotStatus::Hidden; SLOT_COUNT];
        statuses[0] = SlotStatus::Revealed;
        statuses[1] = SlotStatus::Gone;
        let info = info(statuses);
        let mut policy = FirstHiddenPolicy;

        assert_eq!(policy.decide(&LegalityMask::draw_phase(), &info, None), 0);
        assert_eq!(
            policy.decide(&LegalityMask::none(), &info, Some(3)),
            Action::Reveal(2).code()
        );
    }

    #[test]
    fn test_first_hidden_swaps_when_nothing_hidden() {
        let mut statuses = [SlotStatus::Revealed; SLOT_COUNT];
        statuses[0] = SlotStatus::Gone;
        let info = info(statuses);

        assert_eq!(
            FirstHiddenPolicy.decide(&LegalityMask::none(), &info, Some(3)),
            Action::Swap(1).code()
        );
    }
}
