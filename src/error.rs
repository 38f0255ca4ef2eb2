use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised by the pack codec. None of them are recoverable by retrying:
/// the same input always fails the same way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("number exceeds the capacity of a 52-card pack")]
    OutOfRange,
    #[error("invalid pack: {0}")]
    InvalidPermutation(Defect),
    #[error("unsupported character: '{0}' (U+{1:04X})")]
    InvalidCharacter(char, u32),
    #[error("unrecognized card token '{0}'")]
    UnrecognizedToken(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),
}

/// First problem found while checking a candidate permutation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Defect {
    #[error("incorrect number of cards ({0}), must be 52")]
    Length(usize),
    #[error("saw card #{card} {count} times, should be once only")]
    Multiplicity { card: u8, count: usize },
}

impl From<Defect> for Error {
    fn from(defect: Defect) -> Self {
        Error::InvalidPermutation(defect)
    }
}
