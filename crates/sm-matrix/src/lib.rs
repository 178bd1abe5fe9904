//! `sm-matrix` - Square integer matrices and Strassen multiplication for strassen-mul.
//!
//! This crate provides:
//! - A flat `Buffer` type holding one N×N matrix
//! - An `Arena` owning every Buffer used by one multiplication
//! - Zero-copy `View` windows with implicit zero padding
//! - Elementwise sum/sub, the naive O(d³) multiply, and the Strassen engine
//! - A verifier comparing two views cell by cell
//! - A `Multiplier` trait for buffer-level use of either algorithm

pub mod arena;
pub mod buffer;
pub mod error;
pub mod multiplier;
pub mod naive;
pub mod ops;
pub mod sizing;
pub mod stats;
pub mod strassen;
pub mod verify;
pub mod view;

// Re-export primary types at the crate root for convenience.
pub use arena::{Arena, BufferId};
pub use buffer::{Buffer, Element};
pub use error::{MatrixError, Result};
pub use multiplier::{Multiplier, NaiveMultiplier, StrassenMultiplier};
pub use naive::linear_multiply;
pub use ops::{sub, sum};
pub use sizing::{ceil_divide, padded_dimension};
pub use stats::OpStats;
pub use strassen::{multiply, multiply_with_stats};
pub use verify::{first_mismatch, verify_views, views_equal};
pub use view::View;
