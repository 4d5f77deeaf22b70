//! Deterministic random number generation for scrambles.
//!
//! The generator is explicitly constructed and passed into
//! [`Cube::scramble`](crate::cube::Cube::scramble) rather than living in
//! process-wide state, so the same seed always reproduces the same scramble
//! string and the same resulting cube.
//!
//! ```
//! use cube_twist::core::ScrambleRng;
//!
//! let mut a = ScrambleRng::new(42);
//! let mut b = ScrambleRng::new(42);
//! assert_eq!(a.gen_range(0..6), b.gen_range(0..6));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seedable deterministic RNG driving move selection.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness. The
/// state can be captured and restored in O(1), so a scramble can be replayed
/// exactly from a checkpoint.
#[derive(Clone, Debug)]
pub struct ScrambleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ScrambleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The seed remains observable through [`state`](Self::state) so even an
    /// entropy-seeded scramble can be reproduced afterwards.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> ScrambleRngState {
        ScrambleRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &ScrambleRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self { inner, seed: state.seed }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position for O(1) capture regardless of how many
/// draws have happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambleRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}
