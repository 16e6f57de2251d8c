//! Deterministic random number generation for board shuffling.
//!
//! Same seed, same board layout. Determinism is what makes games
//! replayable: a recorded seed plus the sequence of selections
//! reproduces an entire game.
//!
//! ## Usage
//!
//! ```
//! use rust_pairs::core::GameRng;
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! let mut a = vec![1, 2, 3, 4, 5, 6];
//! let mut b = vec![1, 2, 3, 4, 5, 6];
//! rng1.shuffle(&mut a);
//! rng2.shuffle(&mut b);
//!
//! assert_eq!(a, b);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used to lay out the board.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
/// The original seed is kept alongside the stream so it can be reported
/// and replayed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the seed this RNG was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
