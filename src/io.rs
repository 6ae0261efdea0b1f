//! Flat numeric-text input/output for the two pipelines.
//!
//! Both pipelines are file-driven with fixed formats: the ElGamal side reads
//! a single base-10 plaintext and writes one `c1,c2,p` line per encryption
//! trial; the RSA side reads one `m,c,d,p,q` line and writes one
//! `c,e,d,n,m'` line. Any missing file or malformed value is fatal.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use num_bigint::BigUint;

use crate::elgamal::{elgamal_encrypt, ElGamalCiphertext, ElGamalPublicKey};
use crate::error::{Error, Result};
use crate::rng::RandomContext;
use crate::rsa::{RsaRecord, TrustedRsaInput};

/// Number of fields in the RSA input line (`m, c', d', p', q'`).
pub const RSA_INPUT_FIELDS: usize = 5;

/// Number of independent encryption trials in the ElGamal output.
pub const ELGAMAL_TRIALS: usize = 3;

/// Reads a single base-10 integer (the ElGamal plaintext) from `path`.
///
/// Only the first whitespace-delimited token is consumed; an empty file is
/// an error.
pub fn read_plaintext(path: impl AsRef<Path>) -> Result<BigUint> {
    let text = fs::read_to_string(path)?;
    let token = text.split_whitespace().next().ok_or(Error::EmptyInput)?;
    Ok(token.parse()?)
}

/// Reads the RSA input line: exactly five comma-separated base-10 integers
/// in the order `m, c', d', p', q'`.
pub fn read_rsa_input(path: impl AsRef<Path>) -> Result<TrustedRsaInput> {
    let text = fs::read_to_string(path)?;
    let line = text.lines().next().unwrap_or("").trim();
    if line.is_empty() {
        return Err(Error::FieldCount {
            expected: RSA_INPUT_FIELDS,
            actual: 0,
        });
    }

    let values = line
        .split(',')
        .map(|field| field.trim().parse::<BigUint>())
        .collect::<std::result::Result<Vec<_>, _>>()?;
    if values.len() != RSA_INPUT_FIELDS {
        return Err(Error::FieldCount {
            expected: RSA_INPUT_FIELDS,
            actual: values.len(),
        });
    }

    let mut values = values.into_iter();
    Ok(TrustedRsaInput {
        m: values.next().unwrap(),
        c: values.next().unwrap(),
        d: values.next().unwrap(),
        p: values.next().unwrap(),
        q: values.next().unwrap(),
    })
}

/// Writes one `c1,c2,p` line per ciphertext. The modulus is re-emitted on
/// every line so each ciphertext record describes its own field.
pub fn write_elgamal_output(
    path: impl AsRef<Path>,
    ciphertexts: &[ElGamalCiphertext],
    p: &BigUint,
) -> Result<()> {
    let mut file = File::create(path)?;
    for ciphertext in ciphertexts {
        writeln!(file, "{},{},{}", ciphertext.c1, ciphertext.c2, p)?;
    }
    Ok(())
}

/// Writes the RSA record as a single `c,e,d,n,m'` line, without a trailing
/// newline.
pub fn write_rsa_output(path: impl AsRef<Path>, record: &RsaRecord) -> Result<()> {
    let mut file = File::create(path)?;
    write!(
        file,
        "{},{},{},{},{}",
        record.c, record.e, record.d, record.n, record.m_recovered
    )?;
    Ok(())
}

/// Runs the whole ElGamal pipeline over the given paths: reads the
/// plaintext, encrypts it [`ELGAMAL_TRIALS`] times under `public_key`, and
/// writes one `c1,c2,p` line per trial. Returns the plaintext that was
/// read. The output file is only created once the input has parsed.
pub fn run_elgamal_pipeline(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    public_key: &ElGamalPublicKey,
    ctx: &mut RandomContext,
) -> Result<BigUint> {
    let message = read_plaintext(input)?;
    let ciphertexts: Vec<_> = (0..ELGAMAL_TRIALS)
        .map(|_| elgamal_encrypt(public_key, &message, ctx))
        .collect();
    write_elgamal_output(output, &ciphertexts, &public_key.p)?;
    Ok(message)
}

/// Runs the whole RSA pipeline over the given paths: reads the five-field
/// input line, runs the engine, writes the `c,e,d,n,m'` record. The output
/// file is only created once the input has parsed.
pub fn run_rsa_pipeline(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    let record = read_rsa_input(input)?.run();
    write_rsa_output(output, &record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elgamal::derive_public_key;
    use crate::group::{GroupConfig, GroupParams};
    use std::collections::HashSet;

    #[test]
    fn test_read_plaintext() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input");
        fs::write(&path, "42\n").unwrap();

        assert_eq!(read_plaintext(&path).unwrap(), BigUint::from(42u32));
    }

    #[test]
    fn test_read_plaintext_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_plaintext(dir.path().join("absent")),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_read_plaintext_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input");
        fs::write(&path, "forty-two\n").unwrap();

        assert!(matches!(read_plaintext(&path), Err(Error::Parse(_))));
    }

    #[test]
    fn test_read_rsa_input_five_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input");
        fs::write(&path, "10,7,3,11,13").unwrap();

        let input = read_rsa_input(&path).unwrap();
        assert_eq!(input.m, BigUint::from(10u32));
        assert_eq!(input.c, BigUint::from(7u32));
        assert_eq!(input.d, BigUint::from(3u32));
        assert_eq!(input.p, BigUint::from(11u32));
        assert_eq!(input.q, BigUint::from(13u32));
    }

    #[test]
    fn test_read_rsa_input_wrong_field_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input");
        fs::write(&path, "10,7,3,11").unwrap();

        assert!(matches!(
            read_rsa_input(&path),
            Err(Error::FieldCount {
                expected: 5,
                actual: 4
            })
        ));
    }

    #[test]
    fn test_read_rsa_input_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input");
        fs::write(&path, "").unwrap();

        assert!(matches!(
            read_rsa_input(&path),
            Err(Error::FieldCount {
                expected: 5,
                actual: 0
            })
        ));
    }

    /// Scenario: plaintext 42 encrypted three times over a fixed group
    /// yields three parseable lines with a common modulus field and
    /// distinct ciphertext pairs.
    #[test]
    fn test_elgamal_pipeline_three_trials() {
        let params = GroupParams::generate(&GroupConfig {
            prime_bits: 48,
            seed: Some(21),
        });
        let mut ctx = RandomContext::from_seed(22);
        let x = BigUint::from(0xbeef_u32);
        let public_key = derive_public_key(&params, &x);

        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("input");
        let output_path = dir.path().join("output");
        fs::write(&input_path, "42\n").unwrap();

        let message =
            run_elgamal_pipeline(&input_path, &output_path, &public_key, &mut ctx).unwrap();
        assert_eq!(message, BigUint::from(42u32));

        let text = fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ELGAMAL_TRIALS);

        let mut pairs = HashSet::new();
        for line in lines {
            let fields: Vec<BigUint> = line
                .split(',')
                .map(|f| f.parse().unwrap())
                .collect();
            assert_eq!(fields.len(), 3);
            assert_eq!(fields[2], params.p);
            let pair = ElGamalCiphertext {
                c1: fields[0].clone(),
                c2: fields[1].clone(),
            };
            assert!(pairs.insert(pair), "ciphertext pair repeated across trials");
        }
    }

    /// The pipeline must not create an output file when the input is
    /// missing.
    #[test]
    fn test_elgamal_pipeline_missing_input_writes_nothing() {
        let params = GroupParams::generate(&GroupConfig {
            prime_bits: 48,
            seed: Some(23),
        });
        let mut ctx = RandomContext::from_seed(24);
        let public_key = derive_public_key(&params, &BigUint::from(0xbeef_u32));

        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("output");

        let result = run_elgamal_pipeline(
            dir.path().join("absent"),
            &output_path,
            &public_key,
            &mut ctx,
        );
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(!output_path.exists());
    }

    /// Scenario: input line `10,7,3,11,13` produces an output whose fourth
    /// field is the composed modulus 143 and whose second field is 65537.
    #[test]
    fn test_rsa_pipeline_record_fields() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("input");
        let output_path = dir.path().join("output");
        fs::write(&input_path, "10,7,3,11,13\n").unwrap();

        run_rsa_pipeline(&input_path, &output_path).unwrap();

        let text = fs::read_to_string(&output_path).unwrap();
        assert!(!text.ends_with('\n'));

        let fields: Vec<&str> = text.split(',').collect();
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[1], "65537");
        assert_eq!(fields[3], "143");
        assert_eq!(fields[4], "57");
    }

    /// Scenario: a 4-field input line fails the pipeline without creating
    /// the output file.
    #[test]
    fn test_rsa_pipeline_malformed_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("input");
        let output_path = dir.path().join("output");
        fs::write(&input_path, "10,7,3,11\n").unwrap();

        let result = run_rsa_pipeline(&input_path, &output_path);
        assert!(matches!(
            result,
            Err(Error::FieldCount {
                expected: 5,
                actual: 4
            })
        ));
        assert!(!output_path.exists());
    }
}
