//! Deck construction: the shuffled sequence of pair keys for a new board.
//!
//! A board of `2 * pair_count` cards starts life as a deck holding every
//! pair key exactly twice. Shuffling the deck, not the grid, keeps layout
//! generation independent of grid geometry: the same deck fills a 2x6 and
//! a 3x4 board identically card-for-card.

use crate::core::{GameRng, PairKey};

/// Build a shuffled deck of pair keys.
///
/// The deck contains keys `1..=pair_count`, each appearing exactly twice,
/// in an order drawn from `rng`. The caller assigns the keys to grid
/// positions in row-major order. Pair counts come from a validated
/// `GameConfig`, so every key fits in a `u32`.
///
/// ```
/// use rust_pairs::board::shuffled_pair_keys;
/// use rust_pairs::core::GameRng;
///
/// let mut rng = GameRng::new(7);
/// let deck = shuffled_pair_keys(6, &mut rng);
///
/// assert_eq!(deck.len(), 12);
/// ```
#[must_use]
pub fn shuffled_pair_keys(pair_count: usize, rng: &mut GameRng) -> Vec<PairKey> {
    let mut keys = Vec::with_capacity(pair_count * 2);
    for key in 1..=pair_count {
        let key = PairKey::new(key as u32);
        keys.push(key);
        keys.push(key);
    }
    rng.shuffle(&mut keys);
    keys
}
