//! Core engine types: cards, RNG, configuration.
//!
//! This module contains the fundamental building blocks shared by the board
//! and engine layers. Nothing here knows about turns or phases; it is plain
//! data plus the validated entry points for constructing it.

pub mod card;
pub mod config;
pub mod rng;

pub use card::{Card, CardIndex, PairKey};
pub use config::{
    GameConfig, InvalidGridError, DEFAULT_REVEAL_PAUSE, MAX_CARD_COUNT, MIN_DIMENSION,
};
pub use rng::GameRng;
