//! Injectable randomness for shuffles and draws.
//!
//! ## Key Features
//!
//! - **Injectable**: every engine operation takes `&mut impl DrawSource`,
//!   there is no global generator
//! - **Deterministic**: same seed produces identical decks and draws
//! - **Forkable**: independent streams for concurrent games
//! - **Serializable**: O(1) state capture and restore, so a caller can
//!   round-trip the stream next to its session payload
//!
//! ## Usage
//!
//! ```
//! use circle_of_life::core::{DrawSource, GameRng};
//!
//! let mut rng = GameRng::new(42);
//!
//! // One stream per concurrent game
//! let mut game_one = rng.fork();
//! let mut game_two = rng.fork();
//!
//! let a = game_one.pick_index(1000);
//! let b = game_two.pick_index(1000);
//! assert!(a < 1000 && b < 1000);
//! ```

use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of the two random decisions the engine makes: which index to
/// draw from a deck and how to order a freshly built deck.
pub trait DrawSource {
    /// Pick an index uniformly from `0..len`.
    ///
    /// Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Shuffle a slice in place.
    ///
    /// The default is a Fisher-Yates pass driven by `pick_index`, which is
    /// uniform whenever `pick_index` is.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.pick_index(i + 1);
            items.swap(i, j);
        }
    }
}

/// Deterministic RNG with forking for independent game streams.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
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

    /// Create an RNG seeded from the operating system.
    ///
    /// The chosen seed is still recorded, see [`GameRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    /// Use one fork per concurrently running game.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// Separates randomness domains (e.g. deck shuffling vs draws).
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl DrawSource for GameRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range_usize(0..len)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        use rand::seq::SliceRandom;
        items.shuffle(&mut self.inner);
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// A `DrawSource` that replays a fixed list of indices.
///
/// Shuffles are the identity, so built decks keep configuration order.
/// Each `pick_index(len)` consumes the next scripted value modulo `len`;
/// once the script runs out every draw picks index 0.
///
/// ```
/// use circle_of_life::core::{DrawSource, ScriptedDraws};
///
/// let mut draws = ScriptedDraws::new([2, 7]);
/// assert_eq!(draws.pick_index(5), 2);
/// assert_eq!(draws.pick_index(5), 2); // 7 % 5
/// assert_eq!(draws.pick_index(5), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedDraws {
    indices: VecDeque<usize>,
}

impl ScriptedDraws {
    /// Create a script from the indices to return, in order.
    #[must_use]
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
        }
    }

    /// Number of scripted indices not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.indices.len()
    }
}

impl DrawSource for ScriptedDraws {
    fn pick_index(&mut self, len: usize) -> usize {
        self.indices.pop_front().map_or(0, |i| i % len)
    }

    fn shuffle<T>(&mut self, _items: &mut [T]) {}
}
