//! The memory game state machine.
//!
//! `MemoryGame` owns the grid and sequences turns: two selections reveal a
//! pair, a resolution step compares it, and the board shrinks until every
//! pair is matched.
//!
//! ## Turn Sequence
//!
//! A turn is two accepted selections followed by one resolution:
//!
//! 1. `select_card` reveals the first card (`Idle` -> `OneRevealed`).
//! 2. `select_card` reveals the second card (`OneRevealed` -> `Resolving`)
//!    and returns `PairRevealed` with the pause to wait before resolving.
//! 3. `resolve` compares the pair, retires or conceals it, and returns to
//!    `Idle` (or ends the game at `Won`).
//!
//! ## Delayed Resolution
//!
//! The engine never sleeps. When a pair is revealed it stays face-up so the
//! player can memorize it; the adapter schedules a timer for the returned
//! `resolve_after` duration and calls `resolve` when it fires. A zero pause
//! means resolve immediately. Selections arriving before `resolve` are
//! ignored, so a player cannot reveal a third card by clicking fast.
//!
//! ## Misuse
//!
//! Selections that cannot be honored (out of bounds, already face-up,
//! retired card, game over, resolution pending) are silently ignored:
//! the state does not change and no event is emitted. The returned
//! `SelectOutcome` names the reason for callers that want it.
//!
//! ## Usage
//!
//! ```
//! use rust_pairs::core::{CardIndex, GameConfig};
//! use rust_pairs::engine::{MemoryGame, ResolveOutcome, SelectOutcome};
//!
//! let config = GameConfig::new(2, 2).unwrap();
//! let mut game = MemoryGame::new(config, 42);
//!
//! // Reveal the first card, then find and reveal its partner.
//! let first = CardIndex::new(0);
//! let key = game.grid().card(first).unwrap().pair_key;
//! let partner = game
//!     .grid()
//!     .cards()
//!     .find(|(index, card)| *index != first && card.pair_key == key)
//!     .map(|(index, _)| index)
//!     .unwrap();
//!
//! let _ = game.select_card(first);
//! let outcome = game.select_card(partner);
//! assert!(matches!(outcome, SelectOutcome::PairRevealed { .. }));
//!
//! // The adapter waits out the pause, then resolves.
//! let outcome = game.resolve();
//! assert!(matches!(outcome, ResolveOutcome::Matched { .. }));
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::time::Duration;
use tracing::{debug, instrument, trace};

use crate::board::Grid;
use crate::core::{CardIndex, GameConfig, GameRng, PairKey};

use super::event::GameEvent;
use super::phase::Phase;

/// Result of a selection attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The first card of a turn was revealed.
    Revealed(CardIndex),

    /// The second card was revealed and the turn is ready to resolve.
    ///
    /// The adapter should call `resolve` after `resolve_after` elapses.
    PairRevealed {
        /// First card of the turn.
        first: CardIndex,
        /// Second card of the turn.
        second: CardIndex,
        /// How long to leave the pair visible before resolving.
        resolve_after: Duration,
    },

    /// The selection was ignored; nothing changed and no event was emitted.
    Ignored(IgnoredReason),
}

/// Why a selection was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoredReason {
    /// The game is already won.
    GameOver,

    /// Two cards are face-up awaiting resolution.
    ResolutionPending,

    /// The index does not name a card on this board.
    OutOfBounds,

    /// The card was matched earlier and is out of play.
    CardRetired,

    /// The card is already face-up this turn.
    AlreadyRevealed,
}

/// Result of a resolution step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// The pair matched and was retired from play.
    Matched {
        /// The two matched cards.
        cards: [CardIndex; 2],
        /// Did this match win the game?
        won: bool,
    },

    /// The pair did not match and was concealed again.
    Mismatched {
        /// The two concealed cards.
        cards: [CardIndex; 2],
    },

    /// No pair was awaiting resolution; nothing changed.
    NothingToResolve,
}

/// One completed turn, kept in the game's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn number.
    pub turn: u32,

    /// The two cards revealed this turn, in selection order.
    pub cards: [CardIndex; 2],

    /// The pair keys of those cards, in selection order.
    pub keys: [PairKey; 2],

    /// Did the cards match?
    pub matched: bool,
}

/// A single game of memory.
///
/// Construction deals the board from a seed; after that the game is fully
/// deterministic. The struct owns no timers and holds no references to any
/// presentation layer. Adapters drive it through `select_card`/`resolve`
/// and observe it through the returned outcomes and `take_events`.
#[derive(Clone, Debug)]
pub struct MemoryGame {
    config: GameConfig,
    grid: Grid,
    phase: Phase,
    /// Cards revealed this turn, in selection order. Never holds more
    /// than two.
    pending: SmallVec<[CardIndex; 2]>,
    /// Events since the last `take_events` call.
    events: Vec<GameEvent>,
    /// Completed turns, oldest first.
    history: Vector<TurnRecord>,
    turns: u32,
    seed: u64,
}

impl MemoryGame {
    /// Deal a new game from a configuration and a seed.
    ///
    /// The same config and seed always produce the same board.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let grid = Grid::deal(&config, &mut rng);

        debug!(
            seed,
            rows = config.rows(),
            columns = config.columns(),
            pairs = config.pair_count(),
            "dealt new game"
        );

        Self {
            config,
            grid,
            phase: Phase::Idle,
            pending: SmallVec::new(),
            events: Vec::new(),
            history: Vector::new(),
            turns: 0,
            seed,
        }
    }

    /// The board.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The configuration this game was dealt with.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current phase of the turn state machine.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The seed the board was dealt from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Cards revealed in the current turn, in selection order.
    #[must_use]
    pub fn pending(&self) -> &[CardIndex] {
        &self.pending
    }

    /// Has every pair been matched?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Number of turns resolved so far.
    #[must_use]
    pub const fn turns_taken(&self) -> u32 {
        self.turns
    }

    /// Number of pairs still in play.
    #[must_use]
    pub fn remaining_pairs(&self) -> usize {
        self.grid.remaining_pairs()
    }

    /// Completed turns, oldest first.
    #[must_use]
    pub const fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Drain the queued events for rendering.
    ///
    /// Events are returned in emission order. Calling twice in a row
    /// yields an empty vector the second time.
    #[must_use]
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Attempt to reveal a card.
    ///
    /// Accepted selections flip the card face-up, emit a `CardChanged`
    /// event, and advance the turn. Rejected selections change nothing;
    /// the reason comes back as `SelectOutcome::Ignored`.
    #[must_use]
    #[instrument(skip(self), fields(card = ?index, phase = ?self.phase))]
    pub fn select_card(&mut self, index: CardIndex) -> SelectOutcome {
        if self.phase.is_terminal() {
            trace!("selection ignored, game over");
            return SelectOutcome::Ignored(IgnoredReason::GameOver);
        }
        if self.pending.len() >= 2 {
            trace!("selection ignored, resolution pending");
            return SelectOutcome::Ignored(IgnoredReason::ResolutionPending);
        }
        let Some(card) = self.grid.card(index) else {
            trace!("selection ignored, out of bounds");
            return SelectOutcome::Ignored(IgnoredReason::OutOfBounds);
        };
        if !card.active {
            trace!("selection ignored, card retired");
            return SelectOutcome::Ignored(IgnoredReason::CardRetired);
        }
        if card.face_up {
            trace!("selection ignored, already revealed");
            return SelectOutcome::Ignored(IgnoredReason::AlreadyRevealed);
        }

        let card = self.grid.card_mut(index);
        card.reveal();
        self.events.push(GameEvent::card_changed(index, card));
        self.pending.push(index);

        if self.pending.len() == 2 {
            self.phase = Phase::Resolving;
            let (first, second) = (self.pending[0], self.pending[1]);
            debug!(%first, %second, "pair revealed, awaiting resolution");
            SelectOutcome::PairRevealed {
                first,
                second,
                resolve_after: self.config.reveal_pause(),
            }
        } else {
            self.phase = Phase::OneRevealed;
            debug!(%index, "first card revealed");
            SelectOutcome::Revealed(index)
        }
    }

    /// Attempt to reveal the card at a `(row, column)` position.
    ///
    /// Positions outside the board are ignored like any other invalid
    /// selection.
    #[must_use]
    pub fn select_at(&mut self, row: usize, column: usize) -> SelectOutcome {
        match self.grid.index_of(row, column) {
            Some(index) => self.select_card(index),
            None => SelectOutcome::Ignored(IgnoredReason::OutOfBounds),
        }
    }

    /// Resolve the revealed pair.
    ///
    /// Matching cards retire from play and stay face-up; mismatched cards
    /// flip back down. Either way the turn is recorded, the pending set is
    /// cleared, and the win condition is checked. Calling without a full
    /// pair on the table is a no-op.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn resolve(&mut self) -> ResolveOutcome {
        if self.pending.len() < 2 {
            trace!("nothing to resolve");
            return ResolveOutcome::NothingToResolve;
        }

        let cards = [self.pending[0], self.pending[1]];
        let first_key = self.grid.card_mut(cards[0]).pair_key;
        let second_key = self.grid.card_mut(cards[1]).pair_key;
        let keys = [first_key, second_key];
        let matched = first_key == second_key;

        for index in cards {
            let card = self.grid.card_mut(index);
            if matched {
                card.retire();
            } else {
                card.conceal();
            }
            self.events.push(GameEvent::card_changed(index, card));
        }

        self.turns += 1;
        self.history.push_back(TurnRecord {
            turn: self.turns,
            cards,
            keys,
            matched,
        });
        self.pending.clear();

        debug!(
            first = %cards[0],
            second = %cards[1],
            matched,
            turn = self.turns,
            "turn resolved"
        );

        // The win condition is evaluated on every resolution, not just
        // matches.
        if self.grid.all_matched() {
            self.phase = Phase::Won;
            self.events.push(GameEvent::GameWon);
            debug!(turns = self.turns, "all pairs matched, game won");
            return ResolveOutcome::Matched { cards, won: true };
        }

        self.phase = Phase::Idle;
        if matched {
            ResolveOutcome::Matched { cards, won: false }
        } else {
            ResolveOutcome::Mismatched { cards }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_2x2(seed: u64) -> MemoryGame {
        MemoryGame::new(GameConfig::new(2, 2).unwrap(), seed)
    }

    /// Find the other card carrying the same key as `index`.
    fn partner_of(game: &MemoryGame, index: CardIndex) -> CardIndex {
        let key = game.grid().card(index).unwrap().pair_key;
        game.grid()
            .cards()
            .find(|(other, card)| *other != index && card.pair_key == key)
            .map(|(other, _)| other)
            .unwrap()
    }

    /// Find two active face-down cards with different keys.
    fn mismatched_pair(game: &MemoryGame) -> (CardIndex, CardIndex) {
        let first = game
            .grid()
            .cards()
            .find(|(_, card)| card.active && !card.face_up)
            .map(|(index, _)| index)
            .unwrap();
        let first_key = game.grid().card(first).unwrap().pair_key;
        let second = game
            .grid()
            .cards()
            .find(|(_, card)| card.active && !card.face_up && card.pair_key != first_key)
            .map(|(index, _)| index)
            .unwrap();
        (first, second)
    }

    #[test]
    fn test_new_game_state() {
        let game = game_2x2(42);

        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.seed(), 42);
        assert_eq!(game.turns_taken(), 0);
        assert_eq!(game.remaining_pairs(), 2);
        assert!(game.pending().is_empty());
        assert!(game.history().is_empty());
        assert!(!game.is_won());
    }

    #[test]
    fn test_first_selection_reveals() {
        let mut game = game_2x2(42);
        let index = CardIndex::new(0);

        let outcome = game.select_card(index);

        assert_eq!(outcome, SelectOutcome::Revealed(index));
        assert_eq!(game.phase(), Phase::OneRevealed);
        assert_eq!(game.pending(), &[index]);
        assert!(game.grid().card(index).unwrap().face_up);

        assert_eq!(
            game.take_events(),
            vec![GameEvent::CardChanged {
                index,
                face_up: true,
                active: true,
            }]
        );
    }

    #[test]
    fn test_second_selection_schedules_resolution() {
        let mut game = game_2x2(42);
        let (first, second) = mismatched_pair(&game);

        let _ = game.select_card(first);
        let outcome = game.select_card(second);

        assert_eq!(
            outcome,
            SelectOutcome::PairRevealed {
                first,
                second,
                resolve_after: Duration::from_millis(1000),
            }
        );
        assert_eq!(game.phase(), Phase::Resolving);
        assert_eq!(game.pending(), &[first, second]);
    }

    #[test]
    fn test_reveal_pause_is_configurable() {
        let config = GameConfig::new(2, 2)
            .unwrap()
            .with_reveal_pause(Duration::ZERO);
        let mut game = MemoryGame::new(config, 42);
        let (first, second) = mismatched_pair(&game);

        let _ = game.select_card(first);
        let outcome = game.select_card(second);

        assert_eq!(
            outcome,
            SelectOutcome::PairRevealed {
                first,
                second,
                resolve_after: Duration::ZERO,
            }
        );
    }

    #[test]
    fn test_selecting_same_card_twice_is_ignored() {
        let mut game = game_2x2(42);
        let index = CardIndex::new(0);

        let _ = game.select_card(index);
        let _ = game.take_events();

        let outcome = game.select_card(index);

        assert_eq!(
            outcome,
            SelectOutcome::Ignored(IgnoredReason::AlreadyRevealed)
        );
        assert_eq!(game.phase(), Phase::OneRevealed);
        assert_eq!(game.pending(), &[index]);
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn test_out_of_bounds_selection_is_ignored() {
        let mut game = game_2x2(42);

        let outcome = game.select_card(CardIndex::new(99));

        assert_eq!(outcome, SelectOutcome::Ignored(IgnoredReason::OutOfBounds));
        assert_eq!(game.phase(), Phase::Idle);
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn test_third_selection_during_resolution_is_ignored() {
        let mut game = game_2x2(42);
        let (first, second) = mismatched_pair(&game);

        let _ = game.select_card(first);
        let _ = game.select_card(second);
        let _ = game.take_events();

        // Rapid click on the remaining face-down card.
        let third = game
            .grid()
            .cards()
            .find(|(_, card)| !card.face_up)
            .map(|(index, _)| index)
            .unwrap();
        let outcome = game.select_card(third);

        assert_eq!(
            outcome,
            SelectOutcome::Ignored(IgnoredReason::ResolutionPending)
        );
        assert!(!game.grid().card(third).unwrap().face_up);
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn test_resolve_mismatch_conceals_both() {
        let mut game = game_2x2(42);
        let (first, second) = mismatched_pair(&game);

        let _ = game.select_card(first);
        let _ = game.select_card(second);
        let _ = game.take_events();

        let outcome = game.resolve();

        assert_eq!(
            outcome,
            ResolveOutcome::Mismatched {
                cards: [first, second],
            }
        );
        assert_eq!(game.phase(), Phase::Idle);
        assert!(game.pending().is_empty());
        assert!(!game.grid().card(first).unwrap().face_up);
        assert!(!game.grid().card(second).unwrap().face_up);
        assert!(game.grid().card(first).unwrap().active);
        assert!(game.grid().card(second).unwrap().active);

        assert_eq!(
            game.take_events(),
            vec![
                GameEvent::CardChanged {
                    index: first,
                    face_up: false,
                    active: true,
                },
                GameEvent::CardChanged {
                    index: second,
                    face_up: false,
                    active: true,
                },
            ]
        );
    }

    #[test]
    fn test_resolve_match_retires_both() {
        let mut game = game_2x2(42);
        let first = CardIndex::new(0);
        let second = partner_of(&game, first);

        let _ = game.select_card(first);
        let _ = game.select_card(second);
        let _ = game.take_events();

        let outcome = game.resolve();

        assert_eq!(
            outcome,
            ResolveOutcome::Matched {
                cards: [first, second],
                won: false,
            }
        );
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.remaining_pairs(), 1);

        // Matched cards stay face-up but leave play.
        let card = game.grid().card(first).unwrap();
        assert!(card.face_up);
        assert!(!card.active);
    }

    #[test]
    fn test_selecting_retired_card_is_ignored() {
        let mut game = game_2x2(42);
        let first = CardIndex::new(0);
        let second = partner_of(&game, first);

        let _ = game.select_card(first);
        let _ = game.select_card(second);
        let _ = game.resolve();
        let _ = game.take_events();

        let outcome = game.select_card(first);

        assert_eq!(outcome, SelectOutcome::Ignored(IgnoredReason::CardRetired));
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn test_resolve_without_pair_is_noop() {
        let mut game = game_2x2(42);

        assert_eq!(game.resolve(), ResolveOutcome::NothingToResolve);
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.turns_taken(), 0);

        let _ = game.select_card(CardIndex::new(0));
        let _ = game.take_events();

        assert_eq!(game.resolve(), ResolveOutcome::NothingToResolve);
        assert_eq!(game.phase(), Phase::OneRevealed);
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn test_winning_turn() {
        let mut game = game_2x2(42);

        // Retire the first pair.
        let first = CardIndex::new(0);
        let _ = game.select_card(first);
        let _ = game.select_card(partner_of(&game, first));
        let _ = game.resolve();

        // Retire the second pair.
        let remaining = game
            .grid()
            .cards()
            .find(|(_, card)| card.active)
            .map(|(index, _)| index)
            .unwrap();
        let _ = game.select_card(remaining);
        let _ = game.select_card(partner_of(&game, remaining));
        let _ = game.take_events();

        let outcome = game.resolve();

        assert!(matches!(outcome, ResolveOutcome::Matched { won: true, .. }));
        assert_eq!(game.phase(), Phase::Won);
        assert!(game.is_won());
        assert_eq!(game.remaining_pairs(), 0);

        let events = game.take_events();
        assert_eq!(events.last(), Some(&GameEvent::GameWon));
        assert_eq!(
            events.iter().filter(|e| **e == GameEvent::GameWon).count(),
            1
        );
    }

    #[test]
    fn test_selections_after_win_are_ignored() {
        let mut game = game_2x2(42);

        let first = CardIndex::new(0);
        let _ = game.select_card(first);
        let _ = game.select_card(partner_of(&game, first));
        let _ = game.resolve();

        let remaining = game
            .grid()
            .cards()
            .find(|(_, card)| card.active)
            .map(|(index, _)| index)
            .unwrap();
        let _ = game.select_card(remaining);
        let _ = game.select_card(partner_of(&game, remaining));
        let _ = game.resolve();
        let _ = game.take_events();

        assert_eq!(
            game.select_card(first),
            SelectOutcome::Ignored(IgnoredReason::GameOver)
        );
        assert_eq!(game.resolve(), ResolveOutcome::NothingToResolve);
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn test_history_records_turns() {
        let mut game = game_2x2(42);
        let (first, second) = mismatched_pair(&game);

        let _ = game.select_card(first);
        let _ = game.select_card(second);
        let _ = game.resolve();

        assert_eq!(game.turns_taken(), 1);
        let record = game.history()[0];
        assert_eq!(record.turn, 1);
        assert_eq!(record.cards, [first, second]);
        assert!(!record.matched);
        assert_ne!(record.keys[0], record.keys[1]);
    }

    #[test]
    fn test_select_at_maps_positions() {
        let mut game = game_2x2(42);

        let outcome = game.select_at(1, 1);
        assert_eq!(outcome, SelectOutcome::Revealed(CardIndex::new(3)));

        let outcome = game.select_at(2, 0);
        assert_eq!(outcome, SelectOutcome::Ignored(IgnoredReason::OutOfBounds));
    }

    #[test]
    fn test_take_events_drains() {
        let mut game = game_2x2(42);

        let _ = game.select_card(CardIndex::new(0));
        assert_eq!(game.take_events().len(), 1);
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn test_same_seed_same_board() {
        let game1 = game_2x2(7);
        let game2 = game_2x2(7);

        assert_eq!(game1.grid(), game2.grid());
    }
}
