//! File-driven RSA pipeline.
//!
//! Reads `m,c',d',p',q'` from `./input`, composes `n = p'q'`, fixes
//! `e = 65537`, encrypts `m` and decrypts `c'`, then writes the
//! `c,e,d,n,m'` record to `./output`.

use std::process;

use toycrypt::io::run_rsa_pipeline;
use toycrypt::Result;

const INPUT_PATH: &str = "./input";
const OUTPUT_PATH: &str = "./output";

fn main() {
    if let Err(err) = run() {
        eprintln!("rsa: {err}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    run_rsa_pipeline(INPUT_PATH, OUTPUT_PATH)
}
