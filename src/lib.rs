// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
#![cfg_attr(test, allow(clippy::cast_possible_truncation))]
//! rvdec: RV32I instruction-word decoding.
//!
//! Turns a raw 32-bit RISC-V instruction into the ordered operand list an
//! execution stage consumes: register names and sign-extended immediates,
//! in the fixed order of the instruction's format.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Listings (disasm) / Loader        │
//! ├─────────────────────────────────────┤
//! │   Opcode dispatch → Format decoders │
//! ├─────────────────────────────────────┤
//! │   Fields / Immediates / Sign ext.   │
//! └─────────────────────────────────────┘
//! ```
//!
//! ```
//! use rvdec::{Arg, RegisterTable, decode_args};
//!
//! let args = decode_args(0xFF01_0113, &RegisterTable::NUMERIC).unwrap();
//! assert_eq!(args.as_slice(), &[Arg::Reg("x2"), Arg::Reg("x2"), Arg::Imm(-16)]);
//! ```

pub mod disasm;
pub mod error;
pub mod isa;
pub mod program;

pub use error::{DecodeError, DecodeResult};
pub use isa::{Arg, ArgList, Decoded, Format, Opcode, RegisterTable, decode, decode_args, decode_wide};
pub use program::{LoadError, Program};
