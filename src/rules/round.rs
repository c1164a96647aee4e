//! One round: deal, opening reveals, alternating draw/action turns,
//! finishing countdown, and scoring.
//!
//! The round is an explicit state machine:
//!
//! ```text
//! NotStarted -> Dealing -> DeterminingStart -> AwaitingDraw(seat)
//!     AwaitingDraw(seat) -> AwaitingAction(seat, card)
//!     AwaitingAction(seat, card) -> AwaitingDraw(next seat) | Concluded
//! ```
//!
//! Each seat's decision is one action code checked against the current
//! [`LegalityMask`]. An illegal code leaves the round untouched.
//!
//! When a seat ends its turn with no hidden slot left, it is recorded as
//! the finisher and the turn cap drops to `turn + player_count`, so every
//! other seat gets exactly one more turn. A hard cap of
//! `player_count * turn_cap_per_player` guards against runaway rounds.

use tracing::{debug, trace, warn};

use super::scoring::score_round;
use crate::board::{Board, SlotStatus, COLUMN_HEIGHT, SLOT_COUNT};
use crate::cards::{CardSupply, CardValue, Census};
use crate::core::{Action, ActionRecord, GameConfig, GameError, GameRng, LegalityMask, SeatId, SeatMap};
use crate::policy::{GameInfo, Policy};

/// Where a round is in its lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    NotStarted,
    Dealing,
    DeterminingStart,
    /// `seat` must choose between drawing and taking the discard top.
    AwaitingDraw { seat: SeatId },
    /// `seat` holds `card` and must swap it in or discard it and reveal.
    AwaitingAction { seat: SeatId, card: CardValue },
    /// Final per-seat scores for the round.
    Concluded { scores: SeatMap<i32> },
}

impl RoundPhase {
    /// The seat being asked for a decision, if any.
    #[must_use]
    pub fn seat(&self) -> Option<SeatId> {
        match self {
            RoundPhase::AwaitingDraw { seat } | RoundPhase::AwaitingAction { seat, .. } => Some(*seat),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_concluded(&self) -> bool {
        matches!(self, RoundPhase::Concluded { .. })
    }
}

fn illegal(seat: SeatId, code: u8, reason: &'static str) -> GameError {
    GameError::IllegalAction {
        seat: Some(seat),
        code,
        reason,
    }
}

/// State of one round.
#[derive(Clone, Debug)]
pub struct Round {
    player_count: usize,
    start_slots: [usize; 2],
    number: u32,
    supply: CardSupply,
    boards: SeatMap<Board>,
    phase: RoundPhase,
    turn: u32,
    turn_cap: u32,
    finisher: Option<SeatId>,
    history: Vec<ActionRecord>,
}

impl Round {
    /// A round dealt from a freshly shuffled full deck.
    pub fn new(config: &GameConfig, number: u32, rng: GameRng) -> Self {
        Self::with_supply(config, number, CardSupply::shuffled(rng))
    }

    /// A round dealt from the given supply, front of the draw pile first.
    ///
    /// # Panics
    ///
    /// If `config` fails [`GameConfig::validate`].
    pub fn with_supply(config: &GameConfig, number: u32, supply: CardSupply) -> Self {
        config.validate();
        Self {
            player_count: config.player_count,
            start_slots: config.start_slots,
            number,
            supply,
            boards: SeatMap::new(config.player_count, |_| Board::empty()),
            phase: RoundPhase::NotStarted,
            turn: 0,
            turn_cap: config.turn_cap(),
            finisher: None,
            history: Vec::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> &RoundPhase {
        &self.phase
    }

    /// Round number within the game (0-based).
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Turns completed so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Turn number at which the round concludes.
    #[must_use]
    pub fn turn_cap(&self) -> u32 {
        self.turn_cap
    }

    /// Seat that emptied its hidden slots first.
    #[must_use]
    pub fn finisher(&self) -> Option<SeatId> {
        self.finisher
    }

    /// Whether the finishing countdown has started.
    #[must_use]
    pub fn is_finishing(&self) -> bool {
        self.finisher.is_some()
    }

    /// Seat on turn, if the round is awaiting a decision.
    #[must_use]
    pub fn active_seat(&self) -> Option<SeatId> {
        self.phase.seat()
    }

    /// The card held by the seat on turn.
    #[must_use]
    pub fn held_card(&self) -> Option<CardValue> {
        match self.phase {
            RoundPhase::AwaitingAction { card, .. } => Some(card),
            _ => None,
        }
    }

    #[must_use]
    pub fn board(&self, seat: SeatId) -> &Board {
        &self.boards[seat]
    }

    #[must_use]
    pub fn boards(&self) -> &SeatMap<Board> {
        &self.boards
    }

    #[must_use]
    pub fn supply(&self) -> &CardSupply {
        &self.supply
    }

    /// Every action applied this round, in order.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Final scores once concluded.
    #[must_use]
    pub fn scores(&self) -> Option<&SeatMap<i32>> {
        match &self.phase {
            RoundPhase::Concluded { scores } => Some(scores),
            _ => None,
        }
    }

    /// Multiset of every card the round accounts for: draw pile, discard
    /// pile (cleared columns included), held card, and cards on boards.
    #[must_use]
    pub fn card_census(&self) -> Census {
        let mut census = Census::default();
        self.supply.count_into(&mut census);
        for board in self.boards.values() {
            board.count_into(&mut census);
        }
        if let Some(card) = self.held_card() {
            *census.entry(card).or_insert(0) += 1;
        }
        census
    }

    // === Setup ===

    /// Deal and pick the start seat, leaving the round awaiting the first
    /// draw. Does nothing once the round is under way.
    pub fn start(&mut self) -> Result<(), GameError> {
        loop {
            let next = match self.phase {
                RoundPhase::NotStarted => RoundPhase::Dealing,
                RoundPhase::Dealing => self.deal()?,
                RoundPhase::DeterminingStart => self.determine_start(),
                _ => return Ok(()),
            };
            self.phase = next;
        }
    }

    fn deal(&mut self) -> Result<RoundPhase, GameError> {
        for seat in SeatId::all(self.player_count) {
            let mut values = [0; SLOT_COUNT];
            for value in &mut values {
                *value = self.supply.draw()?;
            }
            self.boards[seat] = Board::new(values);
        }
        let first = self.supply.draw()?;
        self.supply.discard(first);
        Ok(RoundPhase::DeterminingStart)
    }

    fn determine_start(&mut self) -> RoundPhase {
        let slots = self.start_slots;
        for (_, board) in self.boards.iter_mut() {
            for slot in slots {
                board.reveal(slot);
            }
        }
        // Ties go to the lowest seat; no further reveals.
        let revealed = self.boards.map(|_, b| b.revealed_sum());
        let seat = revealed.argmax();
        debug!(
            round = self.number,
            start_seat = %seat,
            revealed = ?revealed.as_slice(),
            "round dealt"
        );
        RoundPhase::AwaitingDraw { seat }
    }

    // === Decisions ===

    /// The mask for the current phase. Empty outside the two decision phases.
    #[must_use]
    pub fn legal_mask(&self) -> LegalityMask {
        match &self.phase {
            RoundPhase::AwaitingDraw { .. } => LegalityMask::draw_phase(),
            RoundPhase::AwaitingAction { seat, .. } => LegalityMask::action_phase(&self.boards[*seat]),
            _ => LegalityMask::none(),
        }
    }

    /// What `viewer` may observe right now.
    #[must_use]
    pub fn observe(&self, viewer: SeatId) -> GameInfo {
        GameInfo {
            seat: viewer,
            values: self.boards.map(|_, b| b.visible_values()),
            statuses: self.boards.map(|_, b| *b.statuses()),
            discard_top: self.supply.discard_top(),
            turn: self.turn,
            round: self.number,
            finishing: self.is_finishing(),
        }
    }

    /// Apply the active seat's decision.
    ///
    /// On `IllegalAction` nothing changes and the same seat should be asked
    /// again. `SupplyExhausted` is fatal.
    pub fn apply(&mut self, code: u8) -> Result<(), GameError> {
        match self.phase {
            RoundPhase::AwaitingDraw { seat } => self.apply_draw(seat, code),
            RoundPhase::AwaitingAction { seat, card } => self.apply_placement(seat, card, code),
            _ => Err(GameError::IllegalAction {
                seat: None,
                code,
                reason: "round is not awaiting a decision",
            }),
        }
    }

    fn apply_draw(&mut self, seat: SeatId, code: u8) -> Result<(), GameError> {
        let (action, card) = match Action::from_code(code) {
            Some(Action::Draw) => (Action::Draw, self.supply.draw()?),
            Some(Action::TakeDiscard) => {
                let card = self
                    .supply
                    .take_discard_top()
                    .ok_or_else(|| illegal(seat, code, "discard pile is empty"))?;
                (Action::TakeDiscard, card)
            }
            _ => return Err(illegal(seat, code, "expected draw or take-discard")),
        };
        self.record(seat, action);
        self.phase = RoundPhase::AwaitingAction { seat, card };
        Ok(())
    }

    fn apply_placement(&mut self, seat: SeatId, card: CardValue, code: u8) -> Result<(), GameError> {
        let action = Action::from_code(code).ok_or_else(|| illegal(seat, code, "code out of range"))?;
        match action {
            Action::Swap(slot) => {
                if self.boards[seat].status(slot) == SlotStatus::Gone {
                    return Err(illegal(seat, code, "slot is gone"));
                }
                let displaced = self.boards[seat].swap(slot, card);
                self.supply.discard(displaced);
            }
            Action::Reveal(slot) => {
                if self.boards[seat].status(slot) != SlotStatus::Hidden {
                    return Err(illegal(seat, code, "slot is not hidden"));
                }
                self.boards[seat].reveal(slot);
                self.supply.discard(card);
            }
            Action::Draw | Action::TakeDiscard => {
                return Err(illegal(seat, code, "a card is already held"));
            }
        }
        self.record(seat, action);
        self.clear_triplets(seat);
        self.end_turn(seat);
        Ok(())
    }

    fn record(&mut self, seat: SeatId, action: Action) {
        trace!(round = self.number, turn = self.turn, %seat, ?action, "action applied");
        self.history
            .push(ActionRecord::new(seat, action, self.turn, self.number));
    }

    fn clear_triplets(&mut self, seat: SeatId) {
        for value in self.boards[seat].clear_triplets() {
            debug!(round = self.number, %seat, value, "column cleared");
            for _ in 0..COLUMN_HEIGHT {
                self.supply.discard(value);
            }
        }
    }

    fn end_turn(&mut self, seat: SeatId) {
        if self.finisher.is_none() && self.boards[seat].is_finished() {
            self.finisher = Some(seat);
            self.turn_cap = self.turn + self.player_count as u32;
            debug!(
                round = self.number,
                turn = self.turn,
                %seat,
                turn_cap = self.turn_cap,
                "seat finished, final turns begin"
            );
        }

        self.turn += 1;
        if self.turn >= self.turn_cap {
            if self.finisher.is_none() {
                warn!(round = self.number, turn = self.turn, "hard turn cap reached");
            }
            self.conclude();
        } else {
            self.phase = RoundPhase::AwaitingDraw {
                seat: seat.next(self.player_count),
            };
        }
    }

    fn conclude(&mut self) {
        for (_, board) in self.boards.iter_mut() {
            board.reveal_all();
        }
        for seat in SeatId::all(self.player_count) {
            self.clear_triplets(seat);
        }

        let sums = self.boards.map(|_, b| b.sum());
        let scores = score_round(&sums, self.finisher);
        debug!(
            round = self.number,
            turns = self.turn,
            finisher = ?self.finisher,
            scores = ?scores.as_slice(),
            "round concluded"
        );
        self.phase = RoundPhase::Concluded { scores };
    }

    // === Driver ===

    /// Play the round to completion, asking `seats[i]` for seat `i`'s
    /// decisions. Returns the round's scores.
    ///
    /// Illegal codes from seats that do not retry are returned as errors.
    pub fn run<P: Policy>(&mut self, seats: &mut [P]) -> Result<SeatMap<i32>, GameError> {
        assert_eq!(seats.len(), self.player_count, "one policy per seat");
        self.start()?;

        while let Some(seat) = self.phase.seat() {
            let mask = self.legal_mask();
            let info = self.observe(seat);
            let policy = &mut seats[seat.index()];
            let code = policy.decide(&mask, &info, self.held_card());

            match self.apply(code) {
                Ok(()) => {}
                Err(err) if err.is_illegal_action() && policy.retry_on_illegal() => {
                    warn!(round = self.number, %seat, code, %err, "illegal action, asking again");
                }
                Err(err) => return Err(err),
            }
        }

        match &self.phase {
            RoundPhase::Concluded { scores } => Ok(scores.clone()),
            phase => unreachable!("round loop exited in {phase:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::composition;
    use crate::policy::{FirstHiddenPolicy, ScriptedPolicy};

    fn config() -> GameConfig {
        GameConfig::new()
    }

    /// Supply whose deal gives seat 0 all 1s, seat 1 all 2s, then flips a 0,
    /// with `rest` left in the draw pile.
    fn rigged(rest: &[CardValue]) -> CardSupply {
        let mut pile = vec![1; SLOT_COUNT];
        pile.extend([2; SLOT_COUNT]);
        pile.push(0);
        pile.extend_from_slice(rest);
        CardSupply::from_piles(pile, Vec::new(), None, GameRng::new(1))
    }

    fn started(rest: &[CardValue]) -> Round {
        let mut round = Round::with_supply(&config(), 0, rigged(rest));
        round.start().unwrap();
        round
    }

    #[test]
    fn test_start_deals_and_picks_highest_revealed() {
        let round = started(&[5, 6, 7]);

        assert_eq!(round.board(SeatId::new(0)).value(0), 1);
        assert_eq!(round.board(SeatId::new(1)).value(11), 2);
        assert_eq!(round.supply().discard_top(), Some(0));
        for seat in SeatId::all(2) {
            let board = round.board(seat);
            assert_eq!(board.status(4), SlotStatus::Revealed);
            assert_eq!(board.status(7), SlotStatus::Revealed);
            assert_eq!(board.hidden_count(), 10);
        }
        // Seat 1 revealed 2 + 2 against seat 0's 1 + 1.
        assert_eq!(round.phase(), &RoundPhase::AwaitingDraw { seat: SeatId::new(1) });
    }

    #[test]
    #[should_panic(expected = "distinct board slots")]
    fn test_off_board_start_slot_rejected_at_construction() {
        let config = GameConfig {
            start_slots: [4, 12],
            ..GameConfig::default()
        };
        let _ = Round::new(&config, 0, GameRng::new(1));
    }

    #[test]
    fn test_start_tie_goes_to_lowest_seat() {
        let supply = CardSupply::from_piles(vec![3; 40], Vec::new(), None, GameRng::new(1));
        let mut round = Round::with_supply(&config().with_player_count(3), 0, supply);
        round.start().unwrap();
        assert_eq!(round.active_seat(), Some(SeatId::new(0)));
    }

    #[test]
    fn test_draw_phase_rejects_other_codes() {
        let mut round = started(&[5]);
        let before = round.clone();

        for code in 2..=30 {
            let err = round.apply(code).unwrap_err();
            assert!(err.is_illegal_action());
        }
        assert_eq!(round.phase(), before.phase());
        assert_eq!(round.supply().draw_len(), before.supply().draw_len());
        assert!(round.history().is_empty());
    }

    #[test]
    fn test_draw_then_reveal() {
        let mut round = started(&[9]);
        let seat = SeatId::new(1);

        round.apply(Action::Draw.code()).unwrap();
        assert_eq!(round.held_card(), Some(9));
        assert_eq!(round.legal_mask().count(), 12 + 10);

        round.apply(Action::Reveal(0).code()).unwrap();

        assert_eq!(round.board(seat).status(0), SlotStatus::Revealed);
        assert_eq!(round.board(seat).value(0), 2);
        assert_eq!(round.supply().discard_top(), Some(9));
        assert_eq!(round.held_card(), None);
        assert_eq!(round.turn(), 1);
        assert_eq!(round.active_seat(), Some(SeatId::new(0)));
    }

    #[test]
    fn test_take_discard_then_swap() {
        let mut round = started(&[]);
        let seat = SeatId::new(1);

        round.apply(Action::TakeDiscard.code()).unwrap();
        assert_eq!(round.held_card(), Some(0));
        assert_eq!(round.supply().discard_top(), None);

        round.apply(Action::Swap(3).code()).unwrap();

        assert_eq!(round.board(seat).value(3), 0);
        assert_eq!(round.board(seat).status(3), SlotStatus::Revealed);
        assert_eq!(round.supply().discard_top(), Some(2));
        assert_eq!(round.supply().discard_body_len(), 0);
    }

    #[test]
    fn test_action_phase_rejects_illegal_targets() {
        let mut round = started(&[4]);
        round.apply(Action::Draw.code()).unwrap();

        // Slot 4 was revealed at the start.
        let err = round.apply(Action::Reveal(4).code()).unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalAction {
                seat: Some(SeatId::new(1)),
                code: Action::Reveal(4).code(),
                reason: "slot is not hidden",
            }
        );
        assert!(round.apply(Action::Draw.code()).is_err());
        assert!(round.apply(26).is_err());
        assert_eq!(round.held_card(), Some(4));
        assert_eq!(round.turn(), 0);
    }

    #[test]
    fn test_swap_into_gone_slot_rejected() {
        let mut round = started(&[2; 6]);
        let seat = SeatId::new(1);
        // Seat 1 reveals its first column of 2s while seat 0 reveals slots 1..4.
        for slot in 0..3 {
            round.apply(Action::Draw.code()).unwrap();
            round.apply(Action::Reveal(slot).code()).unwrap();
            round.apply(Action::Draw.code()).unwrap();
            round.apply(Action::Reveal(slot + 1).code()).unwrap();
        }
        assert_eq!(round.board(seat).status(0), SlotStatus::Gone);
        assert_eq!(round.board(seat).status(2), SlotStatus::Gone);

        round.apply(Action::TakeDiscard.code()).unwrap();
        let err = round.apply(Action::Swap(1).code()).unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalAction {
                seat: Some(seat),
                code: Action::Swap(1).code(),
                reason: "slot is gone",
            }
        );
        assert!(round.apply(Action::Swap(3).code()).is_ok());
    }

    #[test]
    fn test_triplet_clear_discards_three_copies() {
        let mut round = started(&[7, 7, 7]);
        let seat = SeatId::new(1);

        for slot in [0, 1] {
            round.apply(Action::Draw.code()).unwrap();
            round.apply(Action::Reveal(slot).code()).unwrap();
            // Seat 0 passes by revealing its own slots.
            round.apply(Action::TakeDiscard.code()).unwrap();
            round.apply(Action::Swap(slot).code()).unwrap();
        }
        round.apply(Action::Draw.code()).unwrap();
        round.apply(Action::Reveal(2).code()).unwrap();

        let board = round.board(seat);
        for slot in 0..3 {
            assert_eq!(board.status(slot), SlotStatus::Gone);
        }
        assert_eq!(board.sum(), 2 * 9);
        // Opening 0, two displaced 1s, the last 7, then two of the three 2s;
        // the third 2 is the top.
        assert_eq!(round.supply().discard_top(), Some(2));
        assert_eq!(round.supply().discard_body_len(), 6);
    }

    #[test]
    fn test_census_holds_full_deck_throughout() {
        let mut round = Round::new(&config(), 0, GameRng::new(3));
        assert_eq!(round.card_census(), composition());
        round.start().unwrap();

        let mut seats = [FirstHiddenPolicy, FirstHiddenPolicy];
        while let Some(seat) = round.active_seat() {
            assert_eq!(round.card_census(), composition());
            let info = round.observe(seat);
            let code = seats[seat.index()].decide(&round.legal_mask(), &info, round.held_card());
            round.apply(code).unwrap();
        }
        assert_eq!(round.card_census(), composition());
    }

    #[test]
    fn test_finish_countdown_gives_each_other_seat_one_turn() {
        let mut round = Round::new(&config().with_player_count(3), 0, GameRng::new(8));
        round.start().unwrap();
        let mut seats = [FirstHiddenPolicy; 3];
        let mut trigger_turn = None;
        let mut final_turns = Vec::new();

        while let Some(seat) = round.active_seat() {
            let was_finishing = round.is_finishing();
            let turn = round.turn();
            let info = round.observe(seat);
            let code = seats[seat.index()].decide(&round.legal_mask(), &info, round.held_card());
            round.apply(code).unwrap();

            if !was_finishing && round.is_finishing() {
                trigger_turn = Some(turn);
            }
            if was_finishing && round.held_card().is_none() {
                final_turns.push(seat);
            }
        }

        let finisher = round.finisher().unwrap();
        let trigger_turn = trigger_turn.unwrap();
        assert_eq!(round.turn(), trigger_turn + 3);
        assert_eq!(final_turns, vec![finisher.next(3), finisher.next(3).next(3)]);
        assert!(round.phase().is_concluded());
    }

    #[test]
    fn test_observe_hides_unrevealed_values() {
        let round = started(&[]);
        let info = round.observe(SeatId::new(0));

        assert_eq!(info.seat, SeatId::new(0));
        assert_eq!(info.discard_top, Some(0));
        assert!(!info.finishing);
        let opponent = info.values[SeatId::new(1)];
        assert_eq!(opponent[4], 2);
        assert_eq!(opponent[0], 0);
        assert_eq!(info.statuses[SeatId::new(1)][0], SlotStatus::Hidden);
    }

    #[test]
    fn test_concluded_round_rejects_actions() {
        let mut round = Round::new(&config(), 0, GameRng::new(5));
        round.run(&mut [FirstHiddenPolicy, FirstHiddenPolicy]).unwrap();

        assert!(round.phase().is_concluded());
        assert_eq!(round.legal_mask().count(), 0);
        let err = round.apply(0).unwrap_err();
        assert!(matches!(err, GameError::IllegalAction { seat: None, .. }));
        for board in round.boards().values() {
            assert_eq!(board.hidden_count(), 0);
        }
    }

    #[test]
    fn test_not_started_rejects_actions() {
        let mut round = Round::new(&config(), 0, GameRng::new(5));
        assert!(round.apply(0).is_err());
        assert_eq!(round.phase(), &RoundPhase::NotStarted);
    }

    #[test]
    fn test_automated_illegal_action_is_fatal() {
        let mut round = Round::new(&config(), 0, GameRng::new(5));
        let mut seats = [ScriptedPolicy::new([7]), ScriptedPolicy::new([7])];
        let err = round.run(&mut seats).unwrap_err();
        assert!(err.is_illegal_action());
    }

    #[test]
    fn test_interactive_illegal_action_is_retried() {
        let mut round = Round::new(&config(), 0, GameRng::new(5));
        let mut seats = [
            ScriptedPolicy::new([7, 9]).interactive(),
            ScriptedPolicy::new([7, 9]).interactive(),
        ];
        let scores = round.run(&mut seats).unwrap();
        assert_eq!(scores.seat_count(), 2);
    }

    #[test]
    fn test_exhausted_supply_is_fatal() {
        let supply = CardSupply::from_piles(vec![1; 10], Vec::new(), None, GameRng::new(1));
        let mut round = Round::with_supply(&config(), 0, supply);
        assert_eq!(round.start(), Err(GameError::SupplyExhausted));
    }

    #[test]
    fn test_hard_turn_cap_concludes_round() {
        let config = config().with_turn_cap_per_player(1);
        let mut round = Round::new(&config, 0, GameRng::new(2));
        let scores = round.run(&mut [FirstHiddenPolicy, FirstHiddenPolicy]).unwrap();

        assert_eq!(round.turn(), 2);
        assert_eq!(round.finisher(), None);
        let sums = round.boards().map(|_, b| b.sum());
        assert_eq!(scores, sums);
    }
}
