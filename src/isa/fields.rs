//! Fixed-position field accessors for 32-bit instruction words.
//!
//! Every accessor is total: any `u32` yields a defined value, whether or
//! not the word belongs to a known instruction.
//!
//! ```text
//!  31        25 24   20 19   15 14  12 11    7 6      2 1 0
//! ┌────────────┬───────┬───────┬──────┬───────┬────────┬───┐
//! │   funct7   │  rs2  │  rs1  │funct3│  rd   │ opcode │11 │
//! └────────────┴───────┴───────┴──────┴───────┴────────┴───┘
//! ```

#![allow(clippy::cast_possible_truncation)] // every field is masked to fit u8

/// Opcode field, bits [6:2].
#[inline]
#[must_use]
pub const fn opcode(word: u32) -> u8 {
    ((word >> 2) & 0x1F) as u8
}

/// Destination register index, bits [11:7].
#[inline]
#[must_use]
pub const fn rd(word: u32) -> u8 {
    ((word >> 7) & 0x1F) as u8
}

/// Minor opcode, bits [14:12].
#[inline]
#[must_use]
pub const fn funct3(word: u32) -> u8 {
    ((word >> 12) & 0x07) as u8
}

/// First source register index, bits [19:15].
#[inline]
#[must_use]
pub const fn rs1(word: u32) -> u8 {
    ((word >> 15) & 0x1F) as u8
}

/// Second source register index, bits [24:20].
#[inline]
#[must_use]
pub const fn rs2(word: u32) -> u8 {
    ((word >> 20) & 0x1F) as u8
}

/// Upper minor opcode, bits [31:25].
#[inline]
#[must_use]
pub const fn funct7(word: u32) -> u8 {
    (word >> 25) as u8
}

/// Raw I-type immediate bits [31:20], unsigned.
#[inline]
#[must_use]
pub const fn imm110(word: u32) -> u32 {
    word >> 20
}

/// Raw U-type immediate bits [31:12], unsigned.
#[inline]
#[must_use]
pub const fn imm3112(word: u32) -> u32 {
    word >> 12
}

/// Reduce a wider integer to an instruction word.
///
/// Only the low 32 bits of an instruction carry meaning. Anything above is
/// discarded here, explicitly, instead of by an implicit cast at a call site.
#[inline]
#[must_use]
pub fn mask_word(raw: u64) -> u32 {
    let word = (raw & 0xFFFF_FFFF) as u32;
    if raw >> 32 != 0 {
        tracing::debug!(raw, word, "discarding bits above bit 31");
    }
    word
}
