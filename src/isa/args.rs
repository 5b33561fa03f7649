//! Decoded operand values.

use std::fmt;
use std::ops::Deref;

use serde::{Serialize, Serializer};

/// One operand of a decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Arg {
    /// A register, by name.
    Reg(&'static str),
    /// A sign-extended immediate.
    Imm(i32),
}

impl Arg {
    /// The register name, if this operand is a register.
    #[must_use]
    pub fn as_reg(&self) -> Option<&'static str> {
        match self {
            Arg::Reg(name) => Some(*name),
            Arg::Imm(_) => None,
        }
    }

    /// The immediate value, if this operand is an immediate.
    #[must_use]
    pub fn as_imm(&self) -> Option<i32> {
        match self {
            Arg::Imm(value) => Some(*value),
            Arg::Reg(_) => None,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Reg(name) => f.write_str(name),
            Arg::Imm(value) => write!(f, "{value}"),
        }
    }
}

/// Maximum operands any format produces.
pub const MAX_ARGS: usize = 3;

/// The ordered operand list of one instruction.
///
/// Stored inline; order and length are fixed by the instruction format.
/// Dereferences to `[Arg]`.
#[derive(Debug, Clone, Copy, Eq)]
pub struct ArgList {
    items: [Arg; MAX_ARGS],
    len: usize,
}

impl ArgList {
    /// Two operands.
    #[must_use]
    pub const fn two(a: Arg, b: Arg) -> Self {
        Self {
            items: [a, b, Arg::Imm(0)],
            len: 2,
        }
    }

    /// Three operands.
    #[must_use]
    pub const fn three(a: Arg, b: Arg, c: Arg) -> Self {
        Self {
            items: [a, b, c],
            len: 3,
        }
    }

    /// The operands as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Arg] {
        &self.items[..self.len]
    }
}

impl Deref for ArgList {
    type Target = [Arg];

    fn deref(&self) -> &[Arg] {
        self.as_slice()
    }
}

impl PartialEq for ArgList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl fmt::Display for ArgList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        Ok(())
    }
}

impl Serialize for ArgList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
