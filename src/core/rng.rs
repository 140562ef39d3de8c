//! Deterministic random number generation for dice and agents.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//!
//! ```
//! use royal_ur::core::GameRng;
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//! assert_eq!(rng1.flip(), rng2.flip());
//! assert_eq!(rng1.choose(&[1, 2, 3]), rng2.choose(&[1, 2, 3]));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Flip a fair coin.
    pub fn flip(&mut self) -> bool {
        self.inner.gen_bool(0.5)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}
