use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MatrixError {
    #[error("dimension mismatch: {left}x{left} vs {right}x{right}")]
    DimensionMismatch { left: usize, right: usize },
    #[error("buffer of dimension {dimension} needs {expected} entries, got {got}")]
    LengthMismatch {
        dimension: usize,
        expected: usize,
        got: usize,
    },
    #[error("dimension {dimension} is too large: {dimension}x{dimension} cells overflow usize")]
    TooLarge { dimension: usize },
    #[error("verification failed at ({row}, {col}): expected {expected}, got {got}")]
    VerificationFailed {
        row: usize,
        col: usize,
        expected: i64,
        got: i64,
    },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
