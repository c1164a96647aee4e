//! Deterministic random number generation with forking.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deals and reshuffles
//! - **Forkable**: Each round's card supply gets its own independent stream
//! - **Independent games**: Games seeded differently share no state, so
//!   they can be simulated side by side without coordination
//!
//! ```
//! use skyjo_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut round_rng = rng.fork();
//!
//! // Forks are deterministic - same seed, same fork counter, same stream
//! let mut rng2 = GameRng::new(42);
//! let mut round_rng2 = rng2.fork();
//! assert_eq!(round_rng.gen_unit(), round_rng2.gen_unit());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used for shuffling and random seats.
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

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
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

    /// Generate a float in `[0, 1)`.
    pub fn gen_unit(&mut self) -> f32 {
        self.inner.gen::<f32>()
    }

    /// Shuffle a slice uniformly in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
