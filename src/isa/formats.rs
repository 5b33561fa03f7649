//! Per-format operand decoders.
//!
//! Each decoder is total over all `u32` inputs and returns operands in the
//! fixed order of its format. Register indices are resolved through the
//! caller's [`RegisterTable`].

use super::args::{Arg, ArgList};
use super::fields::{funct3, rd, rs1, rs2};
use super::imm::{imm_b, imm_i, imm_j, imm_s, imm_u};
use super::registers::RegisterTable;
use serde::Serialize;

/// funct3 values of the shift-immediate family (SLLI, SRLI/SRAI).
const SHIFT_FUNCT3: [u8; 2] = [0b001, 0b101];

/// RISC-V encoding formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Format {
    /// Register-register.
    R,
    /// Register-immediate.
    I,
    /// Register-immediate, with a shift amount for SLLI/SRLI/SRAI.
    IShamt,
    /// Store.
    S,
    /// Branch.
    B,
    /// Upper immediate.
    U,
    /// Jump.
    J,
}

impl Format {
    /// Decode `word`'s operands in this format.
    #[inline]
    #[must_use]
    pub fn decode(self, word: u32, regs: &RegisterTable) -> ArgList {
        match self {
            Format::R => decode_r(word, regs),
            Format::I => decode_i(word, regs),
            Format::IShamt => decode_i_shamt(word, regs),
            Format::S => decode_s(word, regs),
            Format::B => decode_b(word, regs),
            Format::U => decode_u(word, regs),
            Format::J => decode_j(word, regs),
        }
    }

    /// Number of operands this format produces.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Format::U | Format::J => 2,
            Format::R | Format::I | Format::IShamt | Format::S | Format::B => 3,
        }
    }

    /// Short name, e.g. `"R"` or `"I-shamt"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Format::R => "R",
            Format::I => "I",
            Format::IShamt => "I-shamt",
            Format::S => "S",
            Format::B => "B",
            Format::U => "U",
            Format::J => "J",
        }
    }
}

/// R-type: `[rd, rs1, rs2]`.
#[must_use]
pub fn decode_r(word: u32, regs: &RegisterTable) -> ArgList {
    ArgList::three(
        Arg::Reg(regs.name(rd(word))),
        Arg::Reg(regs.name(rs1(word))),
        Arg::Reg(regs.name(rs2(word))),
    )
}

/// I-type: `[rd, rs1, imm]`.
#[must_use]
pub fn decode_i(word: u32, regs: &RegisterTable) -> ArgList {
    ArgList::three(
        Arg::Reg(regs.name(rd(word))),
        Arg::Reg(regs.name(rs1(word))),
        Arg::Imm(imm_i(word)),
    )
}

/// I-type with shift amount.
///
/// For funct3 1 and 5 the low five immediate bits (the rs2 position) are the
/// shift amount: `[rd, rs1, shamt]`. Any other funct3 is an ordinary
/// I-type immediate.
#[must_use]
pub fn decode_i_shamt(word: u32, regs: &RegisterTable) -> ArgList {
    if SHIFT_FUNCT3.contains(&funct3(word)) {
        ArgList::three(
            Arg::Reg(regs.name(rd(word))),
            Arg::Reg(regs.name(rs1(word))),
            Arg::Imm(i32::from(rs2(word))),
        )
    } else {
        decode_i(word, regs)
    }
}

/// S-type: `[rs1, rs2, imm]`.
#[must_use]
pub fn decode_s(word: u32, regs: &RegisterTable) -> ArgList {
    ArgList::three(
        Arg::Reg(regs.name(rs1(word))),
        Arg::Reg(regs.name(rs2(word))),
        Arg::Imm(imm_s(word)),
    )
}

/// B-type: `[rs1, rs2, offset]`.
#[must_use]
pub fn decode_b(word: u32, regs: &RegisterTable) -> ArgList {
    ArgList::three(
        Arg::Reg(regs.name(rs1(word))),
        Arg::Reg(regs.name(rs2(word))),
        Arg::Imm(imm_b(word)),
    )
}

/// U-type: `[rd, imm]`, immediate not shifted.
#[must_use]
pub fn decode_u(word: u32, regs: &RegisterTable) -> ArgList {
    ArgList::two(Arg::Reg(regs.name(rd(word))), Arg::Imm(imm_u(word)))
}

/// J-type: `[rd, offset]`.
#[must_use]
pub fn decode_j(word: u32, regs: &RegisterTable) -> ArgList {
    ArgList::two(Arg::Reg(regs.name(rd(word))), Arg::Imm(imm_j(word)))
}
