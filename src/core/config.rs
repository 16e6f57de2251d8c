//! Game configuration and validation.
//!
//! A game is configured at startup with the grid dimensions and the pause
//! inserted between revealing a second card and resolving the pair.
//! `GameConfig::new` is the only way to obtain a config, so every config
//! in circulation describes a playable board.
//!
//! ## Usage
//!
//! ```
//! use rust_pairs::core::GameConfig;
//! use std::time::Duration;
//!
//! let config = GameConfig::new(4, 4)
//!     .unwrap()
//!     .with_reveal_pause(Duration::from_millis(500));
//!
//! assert_eq!(config.card_count(), 16);
//! assert_eq!(config.pair_count(), 8);
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Smallest allowed value for either grid dimension.
pub const MIN_DIMENSION: usize = 2;

/// Largest number of cards a board may hold.
///
/// Card indices are 32-bit, so every cell of a valid board must be
/// addressable as a `u32`.
pub const MAX_CARD_COUNT: usize = u32::MAX as usize;

/// Pause between revealing the second card of a turn and resolving it.
///
/// Long enough for a player to memorize both cards. Presentation layers
/// can override it, including down to zero for headless play.
pub const DEFAULT_REVEAL_PAUSE: Duration = Duration::from_millis(1000);

/// Rejected grid dimensions.
///
/// Produced by `GameConfig::new` when the requested grid cannot hold a
/// game: dimensions below the minimum, more cells than a card index can
/// address, or an odd number of cells (every card needs a partner).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidGridError {
    /// Fewer than the minimum number of rows.
    #[error("grid needs at least 2 rows, got {0}")]
    TooFewRows(usize),

    /// Fewer than the minimum number of columns.
    #[error("grid needs at least 2 columns, got {0}")]
    TooFewColumns(usize),

    /// The grid holds more cells than `MAX_CARD_COUNT`.
    #[error("a {rows}x{columns} grid exceeds the supported card count")]
    GridTooLarge {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        columns: usize,
    },

    /// The grid holds an odd number of cells, which cannot be paired up.
    #[error("a {rows}x{columns} grid holds an odd number of cards")]
    OddCardCount {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        columns: usize,
    },
}

/// Validated configuration for a single game.
///
/// Fields are private so a config can only be built through `new`, which
/// enforces the grid invariants. Typical UIs collect dimensions in the
/// 2..=10 range; the engine accepts anything up to `MAX_CARD_COUNT` cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    rows: usize,
    columns: usize,
    reveal_pause: Duration,
}

impl GameConfig {
    /// Create a configuration for a `rows` x `columns` board.
    ///
    /// Both dimensions must be at least `MIN_DIMENSION`, the product must
    /// fit in `MAX_CARD_COUNT`, and it must be even, otherwise the board
    /// cannot be tiled with pairs.
    ///
    /// ```
    /// use rust_pairs::core::{GameConfig, InvalidGridError};
    ///
    /// assert!(GameConfig::new(2, 2).is_ok());
    /// assert!(GameConfig::new(10, 10).is_ok());
    ///
    /// assert_eq!(GameConfig::new(1, 4), Err(InvalidGridError::TooFewRows(1)));
    /// assert_eq!(
    ///     GameConfig::new(3, 3),
    ///     Err(InvalidGridError::OddCardCount { rows: 3, columns: 3 })
    /// );
    /// ```
    pub fn new(rows: usize, columns: usize) -> Result<Self, InvalidGridError> {
        if rows < MIN_DIMENSION {
            return Err(InvalidGridError::TooFewRows(rows));
        }
        if columns < MIN_DIMENSION {
            return Err(InvalidGridError::TooFewColumns(columns));
        }
        let card_count = rows
            .checked_mul(columns)
            .filter(|&count| count <= MAX_CARD_COUNT)
            .ok_or(InvalidGridError::GridTooLarge { rows, columns })?;
        if card_count % 2 != 0 {
            return Err(InvalidGridError::OddCardCount { rows, columns });
        }

        Ok(Self {
            rows,
            columns,
            reveal_pause: DEFAULT_REVEAL_PAUSE,
        })
    }

    /// Set the pause between revealing a pair and resolving it.
    ///
    /// `Duration::ZERO` is valid and means the adapter should resolve
    /// immediately. Tests and headless drivers use this.
    #[must_use]
    pub fn with_reveal_pause(mut self, pause: Duration) -> Self {
        self.reveal_pause = pause;
        self
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Pause a presentation adapter should wait before calling `resolve`.
    #[must_use]
    pub const fn reveal_pause(&self) -> Duration {
        self.reveal_pause
    }

    /// Total number of cards on the board.
    #[must_use]
    pub const fn card_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Number of distinct pairs on the board.
    #[must_use]
    pub const fn pair_count(&self) -> usize {
        self.card_count() / 2
    }
}
