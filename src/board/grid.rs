//! The board: a rectangular grid of cards.
//!
//! A `Grid` is dealt once from a validated `GameConfig` and an RNG, then
//! mutated only through the engine as turns resolve. Cards are stored in
//! row-major order; `CardIndex` values index straight into that storage.
//!
//! ## Addressing
//!
//! Presentation layers usually think in `(row, column)` while the engine
//! thinks in flat indices. `index_of` and `position_of` convert between
//! the two, both returning `None` out of bounds.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Card, CardIndex, GameConfig, GameRng, PairKey};

use super::deck::shuffled_pair_keys;

/// A dealt board of cards.
///
/// The grid owns card state but no turn logic. It answers questions
/// (lookup, win condition, remaining pairs) and lets the engine flip
/// cards through `card_mut`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cards: Vec<Card>,
}

impl Grid {
    /// Deal a fresh board for the given configuration.
    ///
    /// Builds a shuffled deck of pair keys and lays it out in row-major
    /// order. Every card starts face-down and active.
    #[must_use]
    pub fn deal(config: &GameConfig, rng: &mut GameRng) -> Self {
        let keys = shuffled_pair_keys(config.pair_count(), rng);
        let cards = keys.into_iter().map(Card::new).collect();

        Self {
            rows: config.rows(),
            columns: config.columns(),
            cards,
        }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Number of pairs the board was dealt with.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Look up a card by index.
    ///
    /// Returns `None` if the index is outside the board.
    #[must_use]
    pub fn card(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index.as_usize())
    }

    /// Mutable card access for the engine.
    ///
    /// Callers have already validated the index via `card`.
    pub(crate) fn card_mut(&mut self, index: CardIndex) -> &mut Card {
        &mut self.cards[index.as_usize()]
    }

    /// Convert a `(row, column)` position to a flat card index.
    ///
    /// ```
    /// use rust_pairs::board::Grid;
    /// use rust_pairs::core::{CardIndex, GameConfig, GameRng};
    ///
    /// let config = GameConfig::new(3, 4).unwrap();
    /// let grid = Grid::deal(&config, &mut GameRng::new(0));
    ///
    /// assert_eq!(grid.index_of(0, 0), Some(CardIndex::new(0)));
    /// assert_eq!(grid.index_of(1, 2), Some(CardIndex::new(6)));
    /// assert_eq!(grid.index_of(3, 0), None);
    /// ```
    #[must_use]
    pub fn index_of(&self, row: usize, column: usize) -> Option<CardIndex> {
        if row < self.rows && column < self.columns {
            // Config validation caps the card count at u32 range.
            Some(CardIndex::new((row * self.columns + column) as u32))
        } else {
            None
        }
    }

    /// Convert a flat card index back to `(row, column)`.
    #[must_use]
    pub fn position_of(&self, index: CardIndex) -> Option<(usize, usize)> {
        let i = index.as_usize();
        if i < self.cards.len() {
            Some((i / self.columns, i % self.columns))
        } else {
            None
        }
    }

    /// Iterate over all cards with their indices, in row-major order.
    pub fn cards(&self) -> impl Iterator<Item = (CardIndex, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, card)| (CardIndex::new(i as u32), card))
    }

    /// Check the win condition: every card matched and out of play.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|card| !card.active)
    }

    /// Number of pairs still in play.
    #[must_use]
    pub fn remaining_pairs(&self) -> usize {
        self.cards.iter().filter(|card| card.active).count() / 2
    }

    /// Count how many cards carry each pair key.
    ///
    /// On a freshly dealt board every key maps to exactly 2.
    #[must_use]
    pub fn pair_key_counts(&self) -> FxHashMap<PairKey, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.pair_key).or_insert(0) += 1;
        }
        counts
    }
}
