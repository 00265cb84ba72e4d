use crate::RandSource;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// A `RandSource` backed by a seedable PRNG (`rand::rngs::StdRng`).
///
/// Two sources built from the same seed produce identical draw sequences,
/// which makes sampling reproducible across runs: record the seed, replay the
/// sample.
///
/// Not a cryptographic source in this crate's usage; see the crate docs for
/// the randomness non-goals.
///
/// # Example
/// ```
/// use sortilege::{RandSource, SeededRandom};
///
/// let mut a = SeededRandom::from_seed(42);
/// let mut b = SeededRandom::from_seed(42);
/// assert_eq!(a.next_unit(), b.next_unit());
/// ```
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Creates a new `SeededRandom` from a 64-bit seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random()
    }
}
