use std::fmt::Debug;

use crate::arena::Arena;
use crate::buffer::Buffer;
use crate::error::{MatrixError, Result};
use crate::naive::linear_multiply;
use crate::stats::OpStats;
use crate::strassen::multiply_with_stats;
use crate::view::View;

/// A square matrix multiplication algorithm over whole buffers.
///
/// Implementations own their scratch space for the duration of one call, so
/// a single multiplier may be shared freely between threads.
pub trait Multiplier: Send + Sync + Debug {
    /// Returns the name of this algorithm (e.g., "strassen", "linear").
    fn name(&self) -> &str;

    /// C = A * B, with operation counts added to `stats`.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if `a` and `b` differ in dimension.
    fn multiply_counted(&self, a: &Buffer, b: &Buffer, stats: &mut OpStats) -> Result<Buffer>;

    /// C = A * B.
    fn multiply(&self, a: &Buffer, b: &Buffer) -> Result<Buffer> {
        self.multiply_counted(a, b, &mut OpStats::new())
    }
}

fn check_square_pair(a: &Buffer, b: &Buffer) -> Result<()> {
    if a.dimension() != b.dimension() {
        return Err(MatrixError::DimensionMismatch {
            left: a.dimension(),
            right: b.dimension(),
        });
    }
    Ok(())
}

/// The O(d³) triple loop.
#[derive(Debug, Clone)]
pub struct NaiveMultiplier;

impl NaiveMultiplier {
    pub fn new() -> Self {
        NaiveMultiplier
    }
}

impl Default for NaiveMultiplier {
    fn default() -> Self {
        Self::new()
    }
}

impl Multiplier for NaiveMultiplier {
    fn name(&self) -> &str {
        "linear"
    }

    fn multiply_counted(&self, a: &Buffer, b: &Buffer, stats: &mut OpStats) -> Result<Buffer> {
        check_square_pair(a, b)?;

        let dimension = a.dimension();
        let mut arena = Arena::new();
        let a = arena.insert(a.clone());
        let b = arena.insert(b.clone());
        let c = arena.alloc(dimension);
        stats.record_allocation(dimension);

        let (a, b, c) = (View::of(&arena, a), View::of(&arena, b), View::of(&arena, c));
        linear_multiply(&mut arena, a, b, c);
        stats.record_naive(dimension);

        Ok(c.to_buffer(&arena))
    }
}

/// Strassen's seven-product recursion above a block-size cutoff.
#[derive(Debug, Clone)]
pub struct StrassenMultiplier {
    cutoff: usize,
}

impl StrassenMultiplier {
    /// Block size at or below which the naive multiply is used.
    pub const DEFAULT_CUTOFF: usize = 32;

    /// A `cutoff` of 0 is treated as 1.
    pub fn new(cutoff: usize) -> Self {
        StrassenMultiplier {
            cutoff: cutoff.max(1),
        }
    }

    pub fn cutoff(&self) -> usize {
        self.cutoff
    }
}

impl Default for StrassenMultiplier {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CUTOFF)
    }
}

impl Multiplier for StrassenMultiplier {
    fn name(&self) -> &str {
        "strassen"
    }

    fn multiply_counted(&self, a: &Buffer, b: &Buffer, stats: &mut OpStats) -> Result<Buffer> {
        check_square_pair(a, b)?;

        let mut arena = Arena::new();
        let a = arena.insert(a.clone());
        let b = arena.insert(b.clone());
        let c = multiply_with_stats(&mut arena, a, b, self.cutoff, stats);
        Ok(c.to_buffer(&arena))
    }
}
