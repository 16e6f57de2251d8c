//! Notifications the engine emits for presentation layers.
//!
//! The engine never calls back into a UI. Instead, every state change
//! pushes a `GameEvent` onto an internal queue that the adapter drains
//! with `MemoryGame::take_events` and renders however it likes.
//!
//! ## Delivery Contract
//!
//! - `CardChanged` is emitted once per card whose visible state changed.
//! - `GameWon` is emitted exactly once per game, after the final
//!   `CardChanged` pair of the winning turn.
//! - Ignored selections emit nothing.

use serde::{Deserialize, Serialize};

use crate::core::{Card, CardIndex};

/// A state change a presentation layer must render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A card's visible state changed.
    ///
    /// Carries the full new state so adapters can render it without
    /// consulting the grid.
    CardChanged {
        /// Which card changed.
        index: CardIndex,
        /// Is the card now face-up?
        face_up: bool,
        /// Is the card still in play?
        active: bool,
    },

    /// Every pair has been matched.
    GameWon,
}

impl GameEvent {
    /// Build a `CardChanged` event from a card's current state.
    #[must_use]
    pub fn card_changed(index: CardIndex, card: &Card) -> Self {
        Self::CardChanged {
            index,
            face_up: card.face_up,
            active: card.active,
        }
    }
}
