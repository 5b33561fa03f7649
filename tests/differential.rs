//! Differential testing against the rrs-lib reference decoder.
//!
//! rrs-lib's `instruction_formats` decode register fields and immediates for
//! every RV32I format. Our operand lists must agree with them bit for bit on
//! arbitrary words.

#![allow(missing_docs)]
#![allow(clippy::unreadable_literal)] // Instruction encodings are standard hex
#![allow(clippy::unwrap_used)] // Test code can use unwrap
#![allow(clippy::cast_lossless)] // Test code casts are intentional
#![allow(clippy::cast_sign_loss)] // Test code casts are intentional
#![allow(clippy::cast_possible_truncation)] // Test code casts are intentional
#![allow(clippy::cast_possible_wrap)] // Test code casts are intentional

use proptest::prelude::*;
use rrs_lib::instruction_formats::{BType, IType, ITypeShamt, JType, RType, SType, UType};

use rvdec::isa::formats::{decode_b, decode_i, decode_i_shamt, decode_j, decode_r, decode_s, decode_u};
use rvdec::isa::imm::{imm_b, imm_i, imm_j, imm_s, imm_u};
use rvdec::{Arg, RegisterTable};

const X: RegisterTable = RegisterTable::NUMERIC;

/// Register operand as rrs-lib reports it, resolved through our table.
fn reg(index: usize) -> Arg {
    Arg::Reg(X.name(index as u8))
}

/// Generate a word with the given major opcode (7-bit, low bits `11`).
fn with_opcode(opcode: u32) -> impl Strategy<Value = u32> {
    any::<u32>().prop_map(move |w| (w & !0x7F) | opcode)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10000))]

    /// I-type immediates match for every word.
    #[test]
    fn differential_imm_i(word in any::<u32>()) {
        prop_assert_eq!(imm_i(word) as i64, IType::new(word).imm as i64);
    }

    /// S-type immediates match for every word.
    #[test]
    fn differential_imm_s(word in any::<u32>()) {
        prop_assert_eq!(imm_s(word) as i64, SType::new(word).imm as i64);
    }

    /// B-type offsets match for every word.
    #[test]
    fn differential_imm_b(word in any::<u32>()) {
        prop_assert_eq!(imm_b(word) as i64, BType::new(word).imm as i64);
    }

    /// J-type offsets match for every word.
    #[test]
    fn differential_imm_j(word in any::<u32>()) {
        prop_assert_eq!(imm_j(word) as i64, JType::new(word).imm as i64);
    }

    /// U-type: rrs-lib keeps the immediate shifted into place, we do not.
    #[test]
    fn differential_imm_u(word in any::<u32>()) {
        prop_assert_eq!((imm_u(word) << 12) as i64, UType::new(word).imm as i64);
    }

    /// R-type operand lists.
    #[test]
    fn differential_decode_r(word in with_opcode(0b011_0011)) {
        let reference = RType::new(word);
        let args = decode_r(word, &X);
        prop_assert_eq!(
            args.as_slice(),
            &[reg(reference.rd as usize), reg(reference.rs1 as usize), reg(reference.rs2 as usize)]
        );
    }

    /// I-type operand lists (loads).
    #[test]
    fn differential_decode_i(word in with_opcode(0b000_0011)) {
        let reference = IType::new(word);
        let args = decode_i(word, &X);
        prop_assert_eq!(
            args.as_slice(),
            &[
                reg(reference.rd as usize),
                reg(reference.rs1 as usize),
                Arg::Imm(reference.imm as i32),
            ]
        );
    }

    /// Shift-immediate operand lists use the 5-bit shift amount.
    #[test]
    fn differential_decode_i_shamt(
        word in with_opcode(0b001_0011),
        shift in prop::sample::select(vec![0b001u32, 0b101]),
    ) {
        let word = (word & !(0b111 << 12)) | (shift << 12);
        let reference = ITypeShamt::new(word);
        let args = decode_i_shamt(word, &X);
        prop_assert_eq!(
            args.as_slice(),
            &[
                reg(reference.rd as usize),
                reg(reference.rs1 as usize),
                Arg::Imm(reference.shamt as i32),
            ]
        );
    }

    /// S-type operand lists.
    #[test]
    fn differential_decode_s(word in with_opcode(0b010_0011)) {
        let reference = SType::new(word);
        let args = decode_s(word, &X);
        prop_assert_eq!(
            args.as_slice(),
            &[
                reg(reference.rs1 as usize),
                reg(reference.rs2 as usize),
                Arg::Imm(reference.imm as i32),
            ]
        );
    }

    /// B-type operand lists.
    #[test]
    fn differential_decode_b(word in with_opcode(0b110_0011)) {
        let reference = BType::new(word);
        let args = decode_b(word, &X);
        prop_assert_eq!(
            args.as_slice(),
            &[
                reg(reference.rs1 as usize),
                reg(reference.rs2 as usize),
                Arg::Imm(reference.imm as i32),
            ]
        );
    }

    /// U-type operand lists.
    #[test]
    fn differential_decode_u(word in with_opcode(0b011_0111)) {
        let reference = UType::new(word);
        let args = decode_u(word, &X);
        prop_assert_eq!(
            args.as_slice(),
            &[reg(reference.rd as usize), Arg::Imm((reference.imm as i32) >> 12)]
        );
    }

    /// J-type operand lists.
    #[test]
    fn differential_decode_j(word in with_opcode(0b110_1111)) {
        let reference = JType::new(word);
        let args = decode_j(word, &X);
        prop_assert_eq!(
            args.as_slice(),
            &[reg(reference.rd as usize), Arg::Imm(reference.imm as i32)]
        );
    }
}

#[cfg(test)]
mod manual_tests {
    use super::*;

    #[test]
    fn test_beq_plus_eight() {
        // beq x1, x2, 8
        let word = 0x00208463u32;
        assert_eq!(imm_b(word), 8);
        assert_eq!(BType::new(word).imm, 8);
    }

    #[test]
    fn test_jal_reference_pattern() {
        // jal x0, -4: the all-ones offset field except imm[1]
        let word = 0xFFDFF06Fu32;
        assert_eq!(imm_j(word), -4);
        assert_eq!(JType::new(word).imm, -4);

        // jal x1, 0x7FE: imm[10:1] all ones, nothing else
        let word = 0x7FE000EFu32;
        assert_eq!(imm_j(word), 0x7FE);
        assert_eq!(JType::new(word).imm, 0x7FE);
    }
}
