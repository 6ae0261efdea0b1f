//! DISCLAIMER: This is a toy example of ElGamal encryption in pure Rust.
//! It is *EXCLUSIVELY* for demonstration and educational purposes.
//! Absolutely DO NOT use it for real cryptographic or security-sensitive
//! operations.
//!
//! Raw ElGamal over the safe-prime group from [`crate::group`]: no padding,
//! no encoding, plaintexts are plain integers in `[0, p)`.

use num_bigint::BigUint;
use num_traits::One;

use crate::group::GroupParams;
use crate::rng::RandomContext;

/// The ElGamal public key: the group parameters plus `h = g^x mod p`.
///
/// *This is for demonstration only. DO NOT use in real systems.*
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElGamalPublicKey {
    pub p: BigUint,
    pub g: BigUint,
    pub h: BigUint,
}

/// The ElGamal private key: the group parameters plus the secret exponent
/// `x`, with `1 <= x < p - 1`.
///
/// *This is for demonstration only. DO NOT use in real systems.*
#[derive(Debug, Clone)]
pub struct ElGamalPrivateKey {
    pub p: BigUint,
    pub g: BigUint,
    pub x: BigUint,
}

impl ElGamalPrivateKey {
    /// Binds an externally configured secret exponent to a group.
    pub fn new(params: &GroupParams, x: BigUint) -> Self {
        ElGamalPrivateKey {
            p: params.p.clone(),
            g: params.g.clone(),
            x,
        }
    }
}

/// A ciphertext pair `(c1, c2)` produced by one encryption trial.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElGamalCiphertext {
    pub c1: BigUint,
    pub c2: BigUint,
}

/// Derives the public key `h = g^x mod p` for a secret exponent `x`.
///
/// Pure and deterministic: the same `(p, g, x)` always yield the same `h`.
/// Undefined for degenerate moduli (`p <= 1`).
pub fn derive_public_key(params: &GroupParams, x: &BigUint) -> ElGamalPublicKey {
    ElGamalPublicKey {
        p: params.p.clone(),
        g: params.g.clone(),
        h: params.g.modpow(x, &params.p),
    }
}

/// Encrypts `message` under `public_key`, drawing a fresh ephemeral
/// exponent `r` in `[0, p)` from `ctx`.
///
/// Returns `(c1, c2)` with `c1 = g^r mod p` and `c2 = m * h^r mod p`. Each
/// call is an independent probabilistic trial: encrypting the same message
/// twice yields different pairs with overwhelming probability.
///
/// The caller must ensure `message < p`; larger messages are silently
/// reduced and will not survive a round-trip.
pub fn elgamal_encrypt(
    public_key: &ElGamalPublicKey,
    message: &BigUint,
    ctx: &mut RandomContext,
) -> ElGamalCiphertext {
    let r = ctx.gen_below(&public_key.p);

    let c1 = public_key.g.modpow(&r, &public_key.p);
    let hr = public_key.h.modpow(&r, &public_key.p);
    let c2 = (message * &hr) % &public_key.p;

    ElGamalCiphertext { c1, c2 }
}

/// Decrypts a ciphertext pair with the private exponent `x`.
///
/// Computes `s = c1^x mod p` and recovers `m = c2 * s^(-1) mod p`, taking
/// the inverse as `s^(p-2) mod p` by Fermat's little theorem (valid since
/// `p` is prime). Exact inverse of [`elgamal_encrypt`] for all `m < p`.
pub fn elgamal_decrypt(
    private_key: &ElGamalPrivateKey,
    ciphertext: &ElGamalCiphertext,
) -> BigUint {
    let s = ciphertext.c1.modpow(&private_key.x, &private_key.p);
    let s_inv = s.modpow(
        &(&private_key.p - BigUint::one() - BigUint::one()),
        &private_key.p,
    );

    (&ciphertext.c2 * &s_inv) % &private_key.p
}
