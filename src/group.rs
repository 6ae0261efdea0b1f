//! Safe-prime group generation for the ElGamal half.
//!
//! Produces a safe prime `p = 2q + 1` together with a generator `g` of the
//! order-`(p-1)/2` quadratic-residue subgroup of `Z_p*`.
//!
//! *This is for demonstration only. DO NOT use in real systems.*

use log::debug;
use num_bigint::BigUint;
use num_prime::nt_funcs::{is_prime, next_prime};
use num_prime::PrimalityTestConfig;
use num_traits::One;

use crate::rng::{sample_until, RandomContext};

/// Bit length of the random candidate for the Sophie Germain prime `q`.
pub const DEFAULT_PRIME_BITS: u64 = 2048;

/// Configuration for group generation.
pub struct GroupConfig {
    /// The bit length of the random candidate for `q` (where `p = 2q + 1`).
    pub prime_bits: u64,
    /// Optional RNG seed for reproducibility in toy examples.
    pub seed: Option<u64>,
}

impl Default for GroupConfig {
    fn default() -> Self {
        GroupConfig {
            prime_bits: DEFAULT_PRIME_BITS,
            seed: None,
        }
    }
}

/// ElGamal group parameters: a safe prime `p` and a generator `g` of the
/// quadratic-residue subgroup of order `(p-1)/2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupParams {
    /// A safe prime modulus, `p = 2q + 1` with `q` prime.
    pub p: BigUint,
    /// A generator of (or element in) the subgroup of order `(p-1)/2`.
    pub g: BigUint,
}

impl GroupParams {
    /// Generates group parameters with a context created from the config.
    pub fn generate(config: &GroupConfig) -> Self {
        let mut ctx = RandomContext::from_config(config.seed);
        Self::generate_with(config.prime_bits, &mut ctx)
    }

    /// Generates group parameters, drawing all randomness from `ctx`.
    ///
    /// Both searches run until they succeed; there is no iteration cap.
    /// Expected work is bounded by prime density, so in practice the
    /// safe-prime loop dominates the run time.
    pub fn generate_with(prime_bits: u64, ctx: &mut RandomContext) -> Self {
        let p = sample_until(
            ctx,
            |ctx| {
                // q starts from a uniform draw and is advanced to the next
                // prime; p = 2q + 1 is then tested for primality.
                let q0 = ctx.gen_biguint(prime_bits);
                let q: BigUint = next_prime(&q0, None).unwrap();
                (q << 1usize) + 1u32
            },
            |p| is_prime(p, Some(PrimalityTestConfig::default())).probably(),
        );
        debug!("safe prime found ({} bits)", p.bits());

        let half: BigUint = (&p - BigUint::one()) >> 1usize;

        // The guard below replicates the original selection: a candidate is
        // only rejected when it is exactly 1 (and so is its power). The
        // squaring afterwards is what actually forces g into the
        // quadratic-residue subgroup of order (p-1)/2.
        let g_candidate = sample_until(
            ctx,
            |ctx| ctx.gen_below(&p),
            |cand| {
                let t = cand.modpow(&half, &p);
                !(t.is_one() && cand.is_one())
            },
        );
        let g = g_candidate.modpow(&BigUint::from(2u32), &p);
        debug!("generator selected");

        GroupParams { p, g }
    }
}
