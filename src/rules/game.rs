//! Multi-round game loop.
//!
//! Rounds are played back to back until some seat's cumulative score
//! reaches the finish threshold or the round cap is hit, whichever comes
//! first. The final result is the per-seat sum over all rounds.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::round::Round;
use crate::core::{GameConfig, GameError, GameRng, SeatId, SeatMap};
use crate::policy::Policy;

/// Append-only table of per-round scores, one row per completed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTable {
    player_count: usize,
    rows: Vec<SeatMap<i32>>,
}

impl ScoreTable {
    /// An empty table for `player_count` seats.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            rows: Vec::new(),
        }
    }

    /// Append a completed round.
    pub fn push(&mut self, row: SeatMap<i32>) {
        assert_eq!(row.seat_count(), self.player_count, "row width must match seats");
        self.rows.push(row);
    }

    #[must_use]
    pub fn rows(&self) -> &[SeatMap<i32>] {
        &self.rows
    }

    /// Number of completed rounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cumulative score per seat.
    #[must_use]
    pub fn totals(&self) -> SeatMap<i32> {
        let mut totals = SeatMap::with_value(self.player_count, 0);
        for row in &self.rows {
            for (seat, score) in row.iter() {
                totals[seat] += score;
            }
        }
        totals
    }
}

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Every round's scores.
    pub table: ScoreTable,
    /// Cumulative score per seat.
    pub totals: SeatMap<i32>,
}

impl GameOutcome {
    /// Seat with the lowest total; ties go to the lowest index.
    #[must_use]
    pub fn winner(&self) -> SeatId {
        self.totals.argmin()
    }

    /// Number of rounds played.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.table.len()
    }
}

/// A full game between one policy per seat.
pub struct Game<P> {
    config: GameConfig,
    seats: Vec<P>,
    rng: GameRng,
    table: ScoreTable,
}

impl<P: Policy> Game<P> {
    /// Create a game. There must be exactly one policy per seat.
    pub fn new(config: GameConfig, seats: Vec<P>) -> Self {
        config.validate();
        assert_eq!(
            seats.len(),
            config.player_count,
            "Need one policy per seat"
        );
        let rng = GameRng::new(config.seed);
        let table = ScoreTable::new(config.player_count);
        Self {
            config,
            seats,
            rng,
            table,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Scores of the rounds played so far.
    #[must_use]
    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    /// The seats' policies, in seat order.
    pub fn seats(&self) -> &[P] {
        &self.seats
    }

    /// Whether the stopping rule has been met.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.table.len() >= self.config.max_rounds as usize
            || self
                .table
                .totals()
                .values()
                .any(|&total| total >= self.config.finish_threshold)
    }

    /// Play one round on a fresh shuffle and record its scores.
    ///
    /// Returns the concluded round so callers can inspect its history.
    pub fn play_round(&mut self) -> Result<Round, GameError> {
        let number = self.table.len() as u32;
        let mut round = Round::new(&self.config, number, self.rng.fork());
        let scores = round.run(&mut self.seats)?;
        self.table.push(scores);
        Ok(round)
    }

    /// Play rounds until the stopping rule is met.
    pub fn play(&mut self) -> Result<GameOutcome, GameError> {
        while !self.is_over() {
            self.play_round()?;
        }
        let outcome = GameOutcome {
            table: self.table.clone(),
            totals: self.table.totals(),
        };
        info!(
            rounds = outcome.rounds(),
            totals = ?outcome.totals.as_slice(),
            winner = %outcome.winner(),
            "game over"
        );
        Ok(outcome)
    }
}
