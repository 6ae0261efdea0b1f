//! DISCLAIMER: This library is a toy implementation of ElGamal and RSA
//! encryption in pure Rust. It is *EXCLUSIVELY* for demonstration and
//! educational purposes. Absolutely DO NOT use it for real cryptographic or
//! security-sensitive operations. It is not audited, not vetted, and very
//! likely insecure in practice.
//!
//! If you need ElGamal, RSA, or any cryptographic operations in production,
//! please use a vetted, well-reviewed cryptography library.
//!
//! The crate has two independent halves that share only the big-integer
//! modular-exponentiation building block:
//!
//! - the ElGamal half: safe-prime group generation ([`group`]), key
//!   derivation and randomized encryption ([`elgamal`]);
//! - the RSA half: raw modular-exponentiation encryption and decryption over
//!   externally supplied parameters ([`rsa`]).
//!
//! The [`io`] module implements the flat numeric-text file formats consumed
//! and produced by the `elgamal` and `rsa` binaries.

pub mod elgamal;
pub mod error;
pub mod group;
pub mod io;
pub mod rng;
pub mod rsa;

pub use error::{Error, Result};

// Re-export group generation
pub use group::{GroupConfig, GroupParams};

// Re-export ElGamal functionality
pub use elgamal::{
    derive_public_key, elgamal_decrypt, elgamal_encrypt, ElGamalCiphertext, ElGamalPrivateKey,
    ElGamalPublicKey,
};

// Re-export RSA functionality
pub use rsa::{compose_modulus, rsa_decrypt, rsa_encrypt, RsaRecord, TrustedRsaInput};

// Re-export randomness plumbing
pub use rng::{sample_until, RandomContext};
