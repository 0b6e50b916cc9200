use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HelixError {
    #[error("{field}={value} out of bounds [{min}, {max}]")]
    ParamOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("invalid nucleotide symbol: {0:?}")]
    InvalidSymbol(char),

    #[error("sequence length {0} is not a multiple of 4 symbols")]
    MalformedSequence(usize),

    #[error("sequence length {got} does not match permutation length {expected}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("permutation index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("ciphertext too short: {0} bytes, need at least one cipher block")]
    TruncatedCiphertext(usize),

    #[error("padding check failed: wrong key or parameters")]
    PadFailure,
}

pub type Result<T> = std::result::Result<T, HelixError>;
