//! Turn phases.
//!
//! The engine is a small state machine. Each selection or resolution moves
//! it between four phases:
//!
//! ```text
//! Idle --select--> OneRevealed --select--> Resolving --resolve--> Idle
//!                                                    \--resolve--> Won
//! ```
//!
//! `Won` is terminal; every other phase accepts input.

use serde::{Deserialize, Serialize};

/// Where the engine is in the current turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No cards revealed; waiting for the first selection of a turn.
    #[default]
    Idle,

    /// One card revealed; waiting for the second selection.
    OneRevealed,

    /// Two cards revealed; selections are ignored until `resolve` runs.
    Resolving,

    /// Every pair matched. The game is over and all input is ignored.
    Won,
}

impl Phase {
    /// Check if the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::Won)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Idle => "Idle",
            Phase::OneRevealed => "OneRevealed",
            Phase::Resolving => "Resolving",
            Phase::Won => "Won",
        };
        write!(f, "{name}")
    }
}
