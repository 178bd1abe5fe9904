use std::fmt;
use std::ops::BitOr;

/// Bitmask selecting what the driver does besides multiplying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DebugFlags(u32);

impl DebugFlags {
    /// Generate random 0/1 matrices instead of reading a file.
    pub const RANDOM: DebugFlags = DebugFlags(0x01);
    /// Print A, B and C (and the check matrix when verifying).
    pub const PRINT: DebugFlags = DebugFlags(0x02);
    /// Recompute with the naive multiply and fail on any difference.
    pub const VERIFY: DebugFlags = DebugFlags(0x04);
    /// Report wall-clock time of each multiply.
    pub const TIME: DebugFlags = DebugFlags(0x08);
    /// Report operation counts.
    pub const STATS: DebugFlags = DebugFlags(0x10);

    const NAMED: [(&'static str, DebugFlags); 5] = [
        ("RANDOM", Self::RANDOM),
        ("PRINT", Self::PRINT),
        ("VERIFY", Self::VERIFY),
        ("TIME", Self::TIME),
        ("STATS", Self::STATS),
    ];

    /// Unknown bits are kept but have no effect.
    pub fn from_bits(bits: u32) -> Self {
        DebugFlags(bits)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, other: DebugFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// One `NAME : value` line per flag, for the usage text.
    pub fn legend() -> String {
        Self::NAMED
            .iter()
            .map(|(name, flag)| format!("    {:<8}: {}\n", name, flag.0))
            .collect()
    }
}

impl BitOr for DebugFlags {
    type Output = DebugFlags;

    fn bitor(self, rhs: DebugFlags) -> DebugFlags {
        DebugFlags(self.0 | rhs.0)
    }
}

impl fmt::Display for DebugFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Self::NAMED
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect();
        if names.is_empty() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", names.join("|"))
        }
    }
}
