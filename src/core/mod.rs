//! Core engine types: seats, RNG, configuration, actions, errors.

pub mod seat;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use seat::{SeatId, SeatMap};
pub use rng::GameRng;
pub use config::{GameConfig, MAX_SEATS, MIN_SEATS};
pub use action::{Action, ActionRecord, LegalityMask, ACTION_COUNT, INVALID_CODE};
pub use error::GameError;
