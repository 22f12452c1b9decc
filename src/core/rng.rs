//! Deterministic weight streams for seeded simulations.
//!
//! Same seed, same weights, on every platform:
//!
//! ```
//! use box_duel::core::WeightRng;
//!
//! let mut rng = WeightRng::new(42);
//! let inputs = rng.weights(8, 100);
//!
//! let mut again = WeightRng::new(42);
//! assert_eq!(inputs, again.weights(8, 100));
//! assert!(inputs.iter().all(|&w| w <= 100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::score::Weight;

/// Seeded ChaCha8 stream of input weights.
#[derive(Clone, Debug)]
pub struct WeightRng {
    inner: ChaCha8Rng,
}

impl WeightRng {
    /// Create a new stream from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate a weight in `0..=max`.
    pub fn gen_weight(&mut self, max: Weight) -> Weight {
        self.inner.gen_range(0..=max)
    }

    /// Generate `len` weights in `0..=max`.
    pub fn weights(&mut self, len: usize, max: Weight) -> Vec<Weight> {
        (0..len).map(|_| self.gen_weight(max)).collect()
    }
}
