use std::fmt;
use std::ops::AddAssign;

/// Operation counts gathered during one or more multiplications.
///
/// Passed explicitly through the engine; merge results from several runs
/// with `+=`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpStats {
    /// Scalar additions and subtractions.
    pub additions: u64,
    /// Scalar multiplications.
    pub multiplications: u64,
    /// Cells allocated for output and scratch buffers.
    pub scratch_cells: u64,
    /// Base-case naive multiplies performed.
    pub naive_blocks: u64,
    /// Deepest recursion level reached (0 for a direct naive multiply).
    pub max_depth: u32,
}

impl OpStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one elementwise pass over a `dimension`-sized view.
    pub fn record_elementwise(&mut self, dimension: usize) {
        self.additions += (dimension * dimension) as u64;
    }

    /// Count one naive multiply of `dimension`-sized views.
    pub fn record_naive(&mut self, dimension: usize) {
        let cubed = (dimension * dimension * dimension) as u64;
        self.additions += cubed;
        self.multiplications += cubed;
        self.naive_blocks += 1;
    }

    /// Count a freshly allocated `dimension`×`dimension` buffer.
    pub fn record_allocation(&mut self, dimension: usize) {
        self.scratch_cells += (dimension * dimension) as u64;
    }

    pub fn record_depth(&mut self, depth: u32) {
        self.max_depth = self.max_depth.max(depth);
    }
}

impl AddAssign for OpStats {
    fn add_assign(&mut self, other: OpStats) {
        self.additions += other.additions;
        self.multiplications += other.multiplications;
        self.scratch_cells += other.scratch_cells;
        self.naive_blocks += other.naive_blocks;
        self.max_depth = self.max_depth.max(other.max_depth);
    }
}

impl fmt::Display for OpStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "additions: {}", self.additions)?;
        writeln!(f, "multiplications: {}", self.multiplications)?;
        writeln!(f, "scratch_cells: {}", self.scratch_cells)?;
        writeln!(f, "naive_blocks: {}", self.naive_blocks)?;
        writeln!(f, "max_depth: {}", self.max_depth)
    }
}
