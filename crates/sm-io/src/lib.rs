pub mod error;
pub mod random;
pub mod reader;
pub mod writer;

pub use error::{IoError, Result};
pub use random::random_pair;
pub use reader::{parse_matrix_pair, read_matrix_pair};
pub use writer::{write_diagonal, write_labeled, write_matrix};
