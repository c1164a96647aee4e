//! Engine errors.

use thiserror::Error;

use super::seat::SeatId;

/// Errors raised by the round and game engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A decision violated the current legality mask. The state did not
    /// advance.
    #[error("illegal action code {code} ({reason})")]
    IllegalAction {
        /// Seat that was asked, if the round was awaiting one.
        seat: Option<SeatId>,
        code: u8,
        reason: &'static str,
    },

    /// Both the draw pile and the discard body were empty when a card was
    /// needed. The 150-card accounting is broken.
    #[error("card supply exhausted: draw pile and discard body are both empty")]
    SupplyExhausted,
}

impl GameError {
    /// Whether this is the recoverable illegal-action kind.
    #[must_use]
    pub fn is_illegal_action(&self) -> bool {
        matches!(self, GameError::IllegalAction { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GameError::IllegalAction {
            seat: Some(SeatId::new(1)),
            code: 7,
            reason: "slot is gone",
        };
        assert_eq!(err.to_string(), "illegal action code 7 (slot is gone)");
        assert!(err.is_illegal_action());
        assert!(!GameError::SupplyExhausted.is_illegal_action());
    }
}
