//! File-driven ElGamal encryption pipeline.
//!
//! Generates a fresh safe-prime group, derives the public key for the fixed
//! demo exponent, reads the plaintext from `./input`, and writes three
//! independent encryption trials to `./output` as `c1,c2,p` lines.

use std::process;

use num_bigint::BigUint;
use toycrypt::group::{GroupParams, DEFAULT_PRIME_BITS};
use toycrypt::io::run_elgamal_pipeline;
use toycrypt::{derive_public_key, RandomContext, Result};

const INPUT_PATH: &str = "./input";
const OUTPUT_PATH: &str = "./output";

/// Externally configured demo secret exponent.
const PRIVATE_EXPONENT: &str = "1234567890123456789012345678901234567890";

fn main() {
    if let Err(err) = run() {
        eprintln!("elgamal: {err}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut ctx = RandomContext::from_entropy();

    let params = GroupParams::generate_with(DEFAULT_PRIME_BITS, &mut ctx);
    let x: BigUint = PRIVATE_EXPONENT.parse()?;
    let public_key = derive_public_key(&params, &x);

    let message = run_elgamal_pipeline(INPUT_PATH, OUTPUT_PATH, &public_key, &mut ctx)?;
    println!("Message m read from file: {message}");
    Ok(())
}
