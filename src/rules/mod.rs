//! Game rules: the round state machine, scoring, and the game loop.

pub mod round;
pub mod scoring;
pub mod game;

pub use round::{Round, RoundPhase};
pub use scoring::score_round;
pub use game::{Game, GameOutcome, ScoreTable};
