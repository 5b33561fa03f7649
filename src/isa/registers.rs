//! Register-name tables.
//!
//! Decoding never makes up register names. Callers pick one of these fixed
//! tables and every index is resolved through it.

/// A total mapping from 5-bit register index to a symbolic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterTable {
    names: [&'static str; 32],
}

impl RegisterTable {
    /// Numeric names, `x0` through `x31`.
    pub const NUMERIC: RegisterTable = RegisterTable {
        names: [
            "x0", "x1", "x2", "x3", "x4", "x5", "x6", "x7", "x8", "x9", "x10", "x11", "x12", "x13",
            "x14", "x15", "x16", "x17", "x18", "x19", "x20", "x21", "x22", "x23", "x24", "x25",
            "x26", "x27", "x28", "x29", "x30", "x31",
        ],
    };

    /// Standard calling-convention (ABI) names.
    pub const ABI: RegisterTable = RegisterTable {
        names: [
            "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3",
            "a4", "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11",
            "t3", "t4", "t5", "t6",
        ],
    };

    /// Build a table from caller-supplied names.
    #[must_use]
    pub const fn new(names: [&'static str; 32]) -> Self {
        Self { names }
    }

    /// Name of register `index`. Only the low 5 bits of `index` are used.
    #[inline]
    #[must_use]
    pub const fn name(&self, index: u8) -> &'static str {
        self.names[(index & 0x1F) as usize]
    }

    /// Index of the register called `name`, if this table has one.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<u8> {
        self.names
            .iter()
            .position(|n| *n == name)
            .and_then(|i| u8::try_from(i).ok())
    }
}

impl Default for RegisterTable {
    fn default() -> Self {
        Self::NUMERIC
    }
}
