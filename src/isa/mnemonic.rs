//! RV32I/M mnemonic lookup.
//!
//! Names the instruction a word encodes, for listings. Operand decoding
//! does not depend on anything here.

use super::fields::{funct3, funct7, imm110, opcode};
use super::opcode::Opcode;

/// Mnemonic of the RV32I or M-extension instruction encoded by `word`.
///
/// Returns `None` for opcodes outside the dispatch table and for funct3 /
/// funct7 combinations RV32IM does not define.
#[must_use]
pub fn mnemonic(word: u32) -> Option<&'static str> {
    let f3 = funct3(word);
    match Opcode::from_bits(opcode(word))? {
        Opcode::Op => op_mnemonic(funct7(word), f3),
        Opcode::OpImm => op_imm_mnemonic(funct7(word), f3),
        Opcode::Load => match f3 {
            0b000 => Some("lb"),
            0b001 => Some("lh"),
            0b010 => Some("lw"),
            0b100 => Some("lbu"),
            0b101 => Some("lhu"),
            _ => None,
        },
        Opcode::Store => match f3 {
            0b000 => Some("sb"),
            0b001 => Some("sh"),
            0b010 => Some("sw"),
            _ => None,
        },
        Opcode::Branch => match f3 {
            0b000 => Some("beq"),
            0b001 => Some("bne"),
            0b100 => Some("blt"),
            0b101 => Some("bge"),
            0b110 => Some("bltu"),
            0b111 => Some("bgeu"),
            _ => None,
        },
        Opcode::Lui => Some("lui"),
        Opcode::Auipc => Some("auipc"),
        Opcode::Jal => Some("jal"),
        Opcode::Jalr => (f3 == 0).then_some("jalr"),
        Opcode::MiscMem => (f3 == 0).then_some("fence"),
        Opcode::System => match (f3, imm110(word)) {
            (0, 0) => Some("ecall"),
            (0, 1) => Some("ebreak"),
            _ => None,
        },
    }
}

fn op_mnemonic(funct7: u8, funct3: u8) -> Option<&'static str> {
    match (funct7, funct3) {
        (0b000_0000, 0b000) => Some("add"),
        (0b010_0000, 0b000) => Some("sub"),
        (0b000_0000, 0b001) => Some("sll"),
        (0b000_0000, 0b010) => Some("slt"),
        (0b000_0000, 0b011) => Some("sltu"),
        (0b000_0000, 0b100) => Some("xor"),
        (0b000_0000, 0b101) => Some("srl"),
        (0b010_0000, 0b101) => Some("sra"),
        (0b000_0000, 0b110) => Some("or"),
        (0b000_0000, 0b111) => Some("and"),

        // M extension
        (0b000_0001, 0b000) => Some("mul"),
        (0b000_0001, 0b001) => Some("mulh"),
        (0b000_0001, 0b010) => Some("mulhsu"),
        (0b000_0001, 0b011) => Some("mulhu"),
        (0b000_0001, 0b100) => Some("div"),
        (0b000_0001, 0b101) => Some("divu"),
        (0b000_0001, 0b110) => Some("rem"),
        (0b000_0001, 0b111) => Some("remu"),

        _ => None,
    }
}

fn op_imm_mnemonic(funct7: u8, funct3: u8) -> Option<&'static str> {
    match funct3 {
        0b000 => Some("addi"),
        0b010 => Some("slti"),
        0b011 => Some("sltiu"),
        0b100 => Some("xori"),
        0b110 => Some("ori"),
        0b111 => Some("andi"),
        0b001 => (funct7 == 0).then_some("slli"),
        0b101 => match funct7 {
            0b000_0000 => Some("srli"),
            0b010_0000 => Some("srai"),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_mnemonics() {
        assert_eq!(mnemonic(0x00A0_0093), Some("addi"));
        assert_eq!(mnemonic(0x0020_81B3), Some("add"));
        assert_eq!(mnemonic(0x4020_81B3), Some("sub"));
        assert_eq!(mnemonic(0x0020_A423), Some("sw"));
        assert_eq!(mnemonic(0x0020_8463), Some("beq"));
        assert_eq!(mnemonic(0x1234_50B7), Some("lui"));
        assert_eq!(mnemonic(0x0000_00EF), Some("jal"));
        assert_eq!(mnemonic(0x0000_8067), Some("jalr"));
        assert_eq!(mnemonic(0x0FF0_000F), Some("fence"));
    }

    #[test]
    fn test_shift_mnemonics() {
        assert_eq!(mnemonic(0x0033_1293), Some("slli"));
        assert_eq!(mnemonic(0x0033_5293), Some("srli"));
        assert_eq!(mnemonic(0x41F0_D093), Some("srai"));
        // slli with a non-zero funct7 is not RV32I
        assert_eq!(mnemonic(0x4033_1293), None);
    }

    #[test]
    fn test_system_mnemonics() {
        assert_eq!(mnemonic(0x0000_0073), Some("ecall"));
        assert_eq!(mnemonic(0x0010_0073), Some("ebreak"));
        // csrrw is outside RV32I
        assert_eq!(mnemonic(0x3400_1073), None);
    }

    #[test]
    fn test_m_extension() {
        assert_eq!(mnemonic(0x0220_81B3), Some("mul"));
        assert_eq!(mnemonic(0x0220_C1B3), Some("div"));
        assert_eq!(mnemonic(0x0220_F1B3), Some("remu"));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(mnemonic(0x0000_007F), None);
        // load with funct3 = 3 (ld) is RV64 only
        assert_eq!(mnemonic(0x0000_3003), None);
    }
}
