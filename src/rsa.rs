//! DISCLAIMER: This is a toy example of RSA implemented in pure Rust.
//! It is *EXCLUSIVELY* for demonstration and educational purposes.
//! Absolutely DO NOT use it for real cryptographic or security-sensitive
//! operations.
//!
//! Raw RSA (no padding) over externally supplied parameters. Nothing is
//! derived here: the prime factors and the private exponent are trusted
//! inputs, and the public exponent is fixed at 65537.

use num_bigint::BigUint;

/// The fixed public exponent `e`.
pub const RSA_PUBLIC_EXPONENT: u64 = 65537;

/// The five externally supplied RSA integers, in input order.
///
/// These are *trusted*: the engine does not verify that `p` and `q` are
/// prime, that `gcd(e, (p-1)(q-1)) = 1`, or that `d` inverts `e`. Violating
/// those preconditions produces mathematically wrong output, not an error.
#[derive(Debug, Clone)]
pub struct TrustedRsaInput {
    /// Plaintext to encrypt under `(e, n)`.
    pub m: BigUint,
    /// Ciphertext to decrypt under `(d, n)`; unrelated to `m`.
    pub c: BigUint,
    /// Private exponent, used as given (never derived from `e`).
    pub d: BigUint,
    /// First prime factor of the modulus.
    pub p: BigUint,
    /// Second prime factor of the modulus.
    pub q: BigUint,
}

/// The output row of the RSA pipeline: `c, e, d, n, m'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaRecord {
    pub c: BigUint,
    pub e: BigUint,
    pub d: BigUint,
    pub n: BigUint,
    pub m_recovered: BigUint,
}

/// Builds the modulus `n = p * q`.
pub fn compose_modulus(p: &BigUint, q: &BigUint) -> BigUint {
    p * q
}

/// RSA encryption: `c = m^e mod n`.
pub fn rsa_encrypt(m: &BigUint, e: &BigUint, n: &BigUint) -> BigUint {
    m.modpow(e, n)
}

/// RSA decryption: `m = c^d mod n`.
pub fn rsa_decrypt(c: &BigUint, d: &BigUint, n: &BigUint) -> BigUint {
    c.modpow(d, n)
}

impl TrustedRsaInput {
    /// Runs the two round-trip halves: encrypts `m` under `(e, n)` and,
    /// independently, decrypts the supplied `c` under `(d, n)`. The two
    /// operations share only the modulus.
    pub fn run(&self) -> RsaRecord {
        let n = compose_modulus(&self.p, &self.q);
        let e = BigUint::from(RSA_PUBLIC_EXPONENT);

        let c = rsa_encrypt(&self.m, &e, &n);
        let m_recovered = rsa_decrypt(&self.c, &self.d, &n);

        RsaRecord {
            c,
            e,
            d: self.d.clone(),
            n,
            m_recovered,
        }
    }
}
