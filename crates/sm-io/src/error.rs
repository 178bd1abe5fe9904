use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected an integer, got {content:?}")]
    Parse { line: usize, content: String },
    #[error("expected {expected} matrix entries, got {got}")]
    EntryCount { expected: usize, got: usize },
    #[error("matrix error: {0}")]
    Matrix(#[from] sm_matrix::MatrixError),
}

pub type Result<T> = std::result::Result<T, IoError>;
