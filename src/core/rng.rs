//! Deterministic random number generation with forking.
//!
//! The computer opponent's fallback move is the only randomness in Kalah.
//! Seeding it makes whole single-player games reproducible.
//!
//! ```
//! use kalah::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // A fork gets its own stream
//! let game_rng = rng.fork();
//! assert_ne!(rng.seed(), game_rng.seed());
//!
//! // Forks are deterministic: the same seed forks to the same stream
//! let pits = [7, 8, 9, 10, 11, 12];
//! let mut again = GameRng::new(42).fork();
//! let mut first = GameRng::new(42).fork();
//! assert_eq!(again.choose(&pits), first.choose(&pits));
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
