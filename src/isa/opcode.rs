//! Opcode dispatch table.
//!
//! Keys are bits [6:2] of the instruction word. The low two bits are `11`
//! for every 32-bit instruction and take no part in dispatch.

use super::formats::Format;
use serde::Serialize;

/// Major opcode families of RV32I, keyed by bits [6:2].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Opcode {
    /// LB, LH, LW, LBU, LHU.
    Load = 0x00,
    /// FENCE.
    MiscMem = 0x03,
    /// Register-immediate arithmetic and shifts.
    OpImm = 0x04,
    /// AUIPC.
    Auipc = 0x05,
    /// SB, SH, SW.
    Store = 0x08,
    /// Register-register arithmetic (RV32I and M).
    Op = 0x0C,
    /// LUI.
    Lui = 0x0D,
    /// BEQ, BNE, BLT, BGE, BLTU, BGEU.
    Branch = 0x18,
    /// JALR.
    Jalr = 0x19,
    /// JAL.
    Jal = 0x1B,
    /// ECALL, EBREAK.
    System = 0x1C,
}

impl Opcode {
    /// Every dispatchable opcode.
    pub const ALL: [Opcode; 11] = [
        Opcode::Load,
        Opcode::MiscMem,
        Opcode::OpImm,
        Opcode::Auipc,
        Opcode::Store,
        Opcode::Op,
        Opcode::Lui,
        Opcode::Branch,
        Opcode::Jalr,
        Opcode::Jal,
        Opcode::System,
    ];

    /// Look up a 5-bit opcode field. `None` means the word is not a
    /// supported instruction.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Opcode> {
        match bits {
            0x00 => Some(Opcode::Load),
            0x03 => Some(Opcode::MiscMem),
            0x04 => Some(Opcode::OpImm),
            0x05 => Some(Opcode::Auipc),
            0x08 => Some(Opcode::Store),
            0x0C => Some(Opcode::Op),
            0x0D => Some(Opcode::Lui),
            0x18 => Some(Opcode::Branch),
            0x19 => Some(Opcode::Jalr),
            0x1B => Some(Opcode::Jal),
            0x1C => Some(Opcode::System),
            _ => None,
        }
    }

    /// The 5-bit field value for this opcode.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// The operand format instructions of this family use.
    #[must_use]
    pub const fn format(self) -> Format {
        match self {
            Opcode::Load | Opcode::MiscMem | Opcode::Jalr | Opcode::System => Format::I,
            Opcode::OpImm => Format::IShamt,
            Opcode::Auipc | Opcode::Lui => Format::U,
            Opcode::Store => Format::S,
            Opcode::Op => Format::R,
            Opcode::Branch => Format::B,
            Opcode::Jal => Format::J,
        }
    }
}
