//! Board construction: deck shuffling and the card grid.
//!
//! The board layer is pure data. It deals a grid from a config and an RNG
//! and answers queries about it; all turn sequencing lives in `engine`.

pub mod deck;
pub mod grid;

pub use deck::shuffled_pair_keys;
pub use grid::Grid;
