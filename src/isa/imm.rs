//! Immediate reassembly and sign extension.
//!
//! RISC-V places immediate bits where they overlap best with the other
//! formats in hardware, so B and J immediates are scattered across the
//! word. Their layouts are kept as ordered [`BitField`] tables and gathered
//! by a single routine, which keeps each mapping readable against the ISA
//! encoding diagrams.

#![allow(clippy::cast_possible_truncation)] // i64 -> i32 after range is proven

use super::fields;

/// One contiguous run of bits copied from an instruction word into an
/// immediate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    /// Lowest bit position in the instruction word.
    pub src: u32,
    /// Lowest bit position in the assembled immediate.
    pub dst: u32,
    /// Number of bits in the run.
    pub width: u32,
}

impl BitField {
    const fn new(src: u32, dst: u32, width: u32) -> Self {
        Self { src, dst, width }
    }

    /// Copy this run out of `word` into its immediate position.
    #[inline]
    #[must_use]
    pub const fn extract(self, word: u32) -> u32 {
        let mask = (1u32 << self.width) - 1;
        ((word >> self.src) & mask) << self.dst
    }
}

/// B-type immediate layout: `imm[12|10:5|4:1|11] = inst[31|30:25|11:8|7]`.
pub const B_LAYOUT: [BitField; 4] = [
    BitField::new(8, 1, 4),
    BitField::new(25, 5, 6),
    BitField::new(7, 11, 1),
    BitField::new(31, 12, 1),
];

/// J-type immediate layout: `imm[20|10:1|11|19:12] = inst[31|30:21|20|19:12]`.
pub const J_LAYOUT: [BitField; 4] = [
    BitField::new(21, 1, 10),
    BitField::new(20, 11, 1),
    BitField::new(12, 12, 8),
    BitField::new(31, 20, 1),
];

/// Assemble an unsigned immediate from a bit layout table.
#[inline]
#[must_use]
pub fn gather(word: u32, layout: &[BitField]) -> u32 {
    layout.iter().fold(0, |imm, field| imm | field.extract(word))
}

/// Interpret the low `bits` bits of `value` as a two's-complement number.
///
/// Bits above `bits` are ignored. `bits` must be in `1..=32`.
#[inline]
#[must_use]
pub fn sign_extend(value: u32, bits: u32) -> i32 {
    debug_assert!((1..=32).contains(&bits), "sign_extend width {bits}");
    let sign_bit = 1u32 << (bits - 1);
    (i64::from(value & (sign_bit - 1)) - i64::from(value & sign_bit)) as i32
}

/// I-type immediate, 12 bits: `inst[31:20]`.
#[inline]
#[must_use]
pub fn imm_i(word: u32) -> i32 {
    sign_extend(fields::imm110(word), 12)
}

/// S-type immediate, 12 bits: `imm[11:5|4:0] = inst[31:25|11:7]`.
#[inline]
#[must_use]
pub fn imm_s(word: u32) -> i32 {
    let raw = (u32::from(fields::funct7(word)) << 5) | u32::from(fields::rd(word));
    sign_extend(raw, 12)
}

/// B-type immediate, 13 bits, an even byte offset.
#[inline]
#[must_use]
pub fn imm_b(word: u32) -> i32 {
    sign_extend(gather(word, &B_LAYOUT), 13)
}

/// U-type immediate, 20 bits: `inst[31:12]`, not shifted into place.
#[inline]
#[must_use]
pub fn imm_u(word: u32) -> i32 {
    sign_extend(fields::imm3112(word), 20)
}

/// J-type immediate, 21 bits, an even byte offset.
#[inline]
#[must_use]
pub fn imm_j(word: u32) -> i32 {
    sign_extend(gather(word, &J_LAYOUT), 21)
}


/// Kani formal verification proofs.
///
/// Run with: `cargo kani`
#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Prove that the sign extender agrees with an arithmetic shift pair.
    #[kani::proof]
    fn prove_sign_extend_matches_shift() {
        let value: u32 = kani::any();
        let bits: u32 = kani::any();
        kani::assume(bits >= 1 && bits <= 32);

        let shift = 32 - bits;
        let expected = ((value << shift) as i32) >> shift;
        assert_eq!(sign_extend(value, bits), expected);
    }

    /// Prove that branch and jump offsets are always even.
    #[kani::proof]
    fn prove_offsets_even() {
        let word: u32 = kani::any();
        assert_eq!(imm_b(word) & 1, 0);
        assert_eq!(imm_j(word) & 1, 0);
    }
}
