//! # skyjo-engine
//!
//! Rules engine for a Skyjo-style card game, built for self-play and
//! policy evaluation.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: every per-seat value lives in a [`SeatMap`]
//!    sized by the configured player count (2-8).
//!
//! 2. **Explicit State Machine**: a [`Round`] moves through
//!    [`RoundPhase`]s; decisions are only accepted while a seat is being
//!    asked, and an illegal code leaves the round untouched.
//!
//! 3. **Deterministic**: all randomness flows from one seeded [`GameRng`],
//!    forked once per round.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, configuration, action codes, errors
//! - `cards`: card values, the 150-card deck, the draw/discard supply
//! - `board`: a seat's 12-slot board and column clearing
//! - `rules`: round state machine, scoring, multi-round game
//! - `policy`: the [`Policy`] trait and its built-in seats
//! - `nn`: observation encoding and network-driven seats
//!
//! ## Example
//!
//! ```rust,ignore
//! use skyjo_engine::{FirstHiddenPolicy, Game, GameConfig};
//!
//! let config = GameConfig::new().with_player_count(3).with_seed(7);
//! let mut game = Game::new(config, vec![FirstHiddenPolicy; 3]);
//! let outcome = game.play()?;
//! println!("winner: {}", outcome.winner());
//! ```

pub mod core;
pub mod cards;
pub mod board;
pub mod rules;
pub mod policy;
pub mod nn;

pub use crate::core::{
    Action, ActionRecord, GameConfig, GameError, GameRng, LegalityMask, SeatId, SeatMap,
    ACTION_COUNT, MAX_SEATS, MIN_SEATS,
};

pub use crate::cards::{CardSupply, CardValue, Census, DECK_SIZE};

pub use crate::board::{Board, SlotStatus, SLOT_COUNT};

pub use crate::rules::{score_round, Game, GameOutcome, Round, RoundPhase, ScoreTable};

pub use crate::policy::{
    FirstHiddenPolicy, GameInfo, Placement, Policy, ScriptedPolicy, TwoStep, TwoStepPolicy,
    UniformRandomPolicy,
};

pub use crate::nn::{DuelEncoder, LinearNetwork, NetworkPolicy, ObservationEncoder, PolicyNetwork};
