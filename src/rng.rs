//! Explicit randomness plumbing for the randomized operations (prime
//! search, generator search, ephemeral encryption exponents).
//!
//! The original design used a single process-global random state. Here every
//! randomized function takes a [`RandomContext`] instead, so each process,
//! thread, or test owns exactly one independently seeded instance with a
//! well-defined scope.

use num_bigint::{BigUint, RandBigInt};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// A scoped source of randomness backing all probabilistic draws.
///
/// Created once per process run in the binaries (from OS entropy) and once
/// per test (from a fixed seed, for reproducibility).
pub struct RandomContext {
    rng: ChaCha20Rng,
}

impl RandomContext {
    /// Creates a context seeded from OS entropy.
    pub fn from_entropy() -> Self {
        RandomContext {
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Creates a deterministic context for reproducible runs.
    pub fn from_seed(seed: u64) -> Self {
        RandomContext {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Creates a context from an optional seed, deterministic when the seed
    /// is present.
    pub fn from_config(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::from_seed(s),
            None => Self::from_entropy(),
        }
    }

    /// Draws a uniformly random integer with at most `bits` bits.
    pub fn gen_biguint(&mut self, bits: u64) -> BigUint {
        self.rng.gen_biguint(bits)
    }

    /// Draws a uniformly random integer in `[0, bound)`.
    pub fn gen_below(&mut self, bound: &BigUint) -> BigUint {
        self.rng.gen_biguint_below(bound)
    }
}

/// Repeatedly draws candidates until one satisfies `accept`, returning the
/// first accepted candidate.
///
/// This is the shape of every search loop in the crate: termination is
/// probabilistic, with no iteration cap. The expected number of draws is
/// bounded by the acceptance probability of the predicate (e.g. prime
/// density for the safe-prime search).
pub fn sample_until<T>(
    ctx: &mut RandomContext,
    mut draw: impl FnMut(&mut RandomContext) -> T,
    mut accept: impl FnMut(&T) -> bool,
) -> T {
    loop {
        let candidate = draw(ctx);
        if accept(&candidate) {
            return candidate;
        }
    }
}
