//! Decision-making seats.
//!
//! The round engine asks one [`Policy`] per seat for an action code
//! whenever that seat must decide. Policies are independent variants of
//! a single trait:
//!
//! - [`ScriptedPolicy`]: replays a fixed list of codes (tests, replays)
//! - [`FirstHiddenPolicy`]: always draws, always reveals the lowest hidden slot
//! - [`UniformRandomPolicy`]: uniform over the legal codes
//! - [`TwoStep`]: adapts a [`TwoStepPolicy`] (take-discard?, then
//!   swap-or-reveal at which slot) into the code space
//! - [`crate::nn::NetworkPolicy`]: model-driven, masked argmax

pub mod info;
pub mod random;
pub mod scripted;
pub mod two_step;

pub use info::GameInfo;
pub use random::UniformRandomPolicy;
pub use scripted::{FirstHiddenPolicy, ScriptedPolicy};
pub use two_step::{Placement, TwoStep, TwoStepPolicy};

use crate::cards::CardValue;
use crate::core::LegalityMask;

/// A seat's decision capability.
pub trait Policy: Send {
    /// Return one action code given the current mask, the observable
    /// information, and the held card (`None` in the draw phase).
    fn decide(&mut self, mask: &LegalityMask, info: &GameInfo, card: Option<CardValue>) -> u8;

    /// Whether an illegal code should be re-requested instead of
    /// aborting the game. Only interactive seats return `true`.
    fn retry_on_illegal(&self) -> bool {
        false
    }
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn decide(&mut self, mask: &LegalityMask, info: &GameInfo, card: Option<CardValue>) -> u8 {
        (**self).decide(mask, info, card)
    }

    fn retry_on_illegal(&self) -> bool {
        (**self).retry_on_illegal()
    }
}
