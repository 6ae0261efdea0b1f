use num_bigint::ParseBigIntError;

/// Errors surfaced by the file-driven pipelines. All of them are fatal to
/// the calling binary: there is no retry or partial-success path.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid base-10 integer: {0}")]
    Parse(#[from] ParseBigIntError),

    #[error("expected {expected} comma-separated integers, found {actual}")]
    FieldCount { expected: usize, actual: usize },

    #[error("input contains no integer")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, Error>;
