//! Deterministic random number generation for board shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces an identical board sequence
//! - **Injectable**: The shuffler only depends on [`RandomSource`], so tests
//!   can substitute a scripted source
//!
//! ```
//! use element_match::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! assert_eq!(a.index_inclusive(9), b.index_inclusive(9));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniformly distributed indices.
///
/// This is the only randomness the engine consumes. Implementations must
/// return every value in `0..=upper` with equal probability for the shuffle
/// to stay unbiased.
pub trait RandomSource {
    /// Return an index in `0..=upper`.
    fn index_inclusive(&mut self, upper: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn index_inclusive(&mut self, upper: usize) -> usize {
        (**self).index_inclusive(upper)
    }
}

/// Seeded RNG backing the production shuffler.
///
/// Uses ChaCha8 for speed while keeping high quality output.
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

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn index_inclusive(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..=upper)
    }
}
