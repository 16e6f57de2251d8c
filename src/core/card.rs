//! Card identity and per-card state.
//!
//! Every tile on the board is a `Card`. Cards carry a `PairKey` naming the
//! pair they belong to and two state flags: `face_up` (currently revealed)
//! and `active` (still in play).
//!
//! ## Lifecycle
//!
//! A card starts face-down and active. Selecting it reveals it. When two
//! revealed cards resolve, they either retire together (matched, stay
//! face-up, leave play) or conceal together (mismatched, flip back down).
//! A retired card never changes state again.
//!
//! ## Usage
//!
//! ```
//! use rust_pairs::core::{Card, PairKey};
//!
//! let mut card = Card::new(PairKey::new(3));
//! assert!(!card.face_up);
//! assert!(card.active);
//!
//! card.reveal();
//! assert!(card.face_up);
//!
//! card.retire();
//! assert!(card.is_matched());
//! assert!(card.face_up); // Matched cards stay revealed
//! ```

use serde::{Deserialize, Serialize};

/// Identifier shared by exactly two cards on a board.
///
/// Two cards match when their pair keys are equal. The key is opaque to the
/// engine; a presentation layer maps it to an image or symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairKey(pub u32);

impl PairKey {
    /// Create a pair key from a raw value.
    #[must_use]
    pub const fn new(key: u32) -> Self {
        Self(key)
    }

    /// Get the raw key value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for PairKey {
    fn from(key: u32) -> Self {
        Self(key)
    }
}

impl std::fmt::Display for PairKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// Position of a card in a grid's row-major card list.
///
/// Index 0 is the top-left card; indices increase left-to-right, then
/// top-to-bottom. Use `Grid::position_of` to recover `(row, column)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardIndex(pub u32);

impl CardIndex {
    /// Create a card index from a raw value.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the index as a usize for slice access.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for CardIndex {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A single tile on the board.
///
/// ## Invariants
///
/// - `face_up` and `active` are only changed through `reveal`, `conceal`,
///   and `retire`; the engine never writes the fields directly.
/// - A retired card (`active == false`) is always face-up. `conceal` is
///   never called on a retired card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Which pair this card belongs to.
    pub pair_key: PairKey,

    /// Is this card currently revealed?
    pub face_up: bool,

    /// Is this card still in play? Retired (matched) cards are inactive.
    pub active: bool,
}

impl Card {
    /// Create a face-down, in-play card.
    #[must_use]
    pub const fn new(pair_key: PairKey) -> Self {
        Self {
            pair_key,
            face_up: false,
            active: true,
        }
    }

    /// Turn the card face-up.
    pub fn reveal(&mut self) {
        self.face_up = true;
    }

    /// Turn the card face-down after a mismatch.
    ///
    /// Only active cards are ever concealed; retired cards stay revealed.
    pub fn conceal(&mut self) {
        debug_assert!(self.active, "concealed a retired card");
        self.face_up = false;
    }

    /// Remove the card from play after a match.
    ///
    /// The card stays face-up so the pair remains visible on the board.
    pub fn retire(&mut self) {
        debug_assert!(self.face_up, "retired a face-down card");
        self.active = false;
    }

    /// Check if this card has been matched and removed from play.
    #[must_use]
    pub const fn is_matched(self) -> bool {
        !self.active
    }
}
