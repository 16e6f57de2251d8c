//! # rust-pairs
//!
//! A memory (pairs) game engine with a deterministic, headless core.
//!
//! ## Design Principles
//!
//! 1. **Headless**: The engine owns no timers, threads, or widgets. It is
//!    a synchronous state machine driven from the outside; any UI toolkit
//!    or test harness can sit on top.
//!
//! 2. **Deterministic**: A config and a seed fully determine the board.
//!    Replaying the same selections reproduces the same game.
//!
//! 3. **Forgiving Input**: Selections that cannot be honored are ignored
//!    without changing state. Adapters forward raw clicks; the engine
//!    sorts them out.
//!
//! ## Driving a Game
//!
//! An adapter owns the loop: forward selections with `select_card` (or
//! `select_at` for `(row, column)` input), and when a selection returns
//! `PairRevealed`, schedule a one-shot timer for its `resolve_after`
//! duration and call `resolve` when it fires. After every call, drain
//! `take_events` and render the changes.
//!
//! ## Modules
//!
//! - `core`: Cards, pair keys, RNG, validated configuration
//! - `board`: Deck shuffling and the card grid
//! - `engine`: The turn state machine, outcomes, and events

pub mod board;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Card, CardIndex, PairKey,
    GameConfig, InvalidGridError,
    GameRng,
    DEFAULT_REVEAL_PAUSE, MAX_CARD_COUNT, MIN_DIMENSION,
};

pub use crate::board::{shuffled_pair_keys, Grid};

pub use crate::engine::{
    GameEvent, IgnoredReason, MemoryGame, Phase,
    ResolveOutcome, SelectOutcome, TurnRecord,
};
