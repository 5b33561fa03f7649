//! RISC-V instruction decoding.
//!
//! The pipeline is: [`fields::opcode`] → [`Opcode::from_bits`] →
//! [`Opcode::format`] → [`Format::decode`], which returns the operand list.

pub mod args;
pub mod fields;
pub mod formats;
pub mod imm;
pub mod mnemonic;
pub mod opcode;
pub mod registers;

pub use args::{Arg, ArgList};
pub use formats::Format;
pub use mnemonic::mnemonic;
pub use opcode::Opcode;
pub use registers::RegisterTable;

use crate::error::{DecodeError, DecodeResult};
use serde::Serialize;

/// A successfully decoded instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decoded {
    /// The instruction word.
    pub word: u32,
    /// Its opcode family.
    pub opcode: Opcode,
    /// The format its operands were read in.
    pub format: Format,
    /// The operands, in format order.
    pub args: ArgList,
}

/// Decode the operand list of a 32-bit instruction word.
///
/// # Errors
///
/// Returns [`DecodeError::UnknownOpcode`] if bits [6:2] are not in the
/// dispatch table.
pub fn decode_args(word: u32, regs: &RegisterTable) -> DecodeResult<ArgList> {
    decode(word, regs).map(|decoded| decoded.args)
}

/// Decode a 32-bit instruction word.
///
/// # Errors
///
/// Returns [`DecodeError::UnknownOpcode`] if bits [6:2] are not in the
/// dispatch table.
pub fn decode(word: u32, regs: &RegisterTable) -> DecodeResult<Decoded> {
    let bits = fields::opcode(word);
    let Some(opcode) = Opcode::from_bits(bits) else {
        tracing::debug!(word, opcode = bits, "unknown opcode");
        return Err(DecodeError::UnknownOpcode { word, opcode: bits });
    };
    let format = opcode.format();
    Ok(Decoded {
        word,
        opcode,
        format,
        args: format.decode(word, regs),
    })
}

/// Decode an instruction held in a wider integer.
///
/// Bits above bit 31 are masked off first (see [`fields::mask_word`]).
///
/// # Errors
///
/// Returns [`DecodeError::UnknownOpcode`] if bits [6:2] are not in the
/// dispatch table.
pub fn decode_wide(raw: u64, regs: &RegisterTable) -> DecodeResult<Decoded> {
    decode(fields::mask_word(raw), regs)
}
