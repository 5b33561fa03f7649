#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rvdec::isa::{fields, mnemonic};
use rvdec::{Opcode, RegisterTable, decode, decode_wide};

/// Structured input for decoder fuzzing.
#[derive(Arbitrary, Debug)]
struct DecodeInput {
    /// Raw value, possibly wider than an instruction.
    raw: u64,
    /// Use ABI register names.
    abi: bool,
}

fuzz_target!(|input: DecodeInput| {
    let regs = if input.abi {
        RegisterTable::ABI
    } else {
        RegisterTable::NUMERIC
    };
    let word = fields::mask_word(input.raw);

    let result = decode(word, &regs);
    assert_eq!(result, decode_wide(input.raw, &regs));

    match result {
        Ok(decoded) => {
            assert_eq!(decoded.args.len(), decoded.format.arity());
            assert_eq!(decoded.format, decoded.opcode.format());
        }
        Err(_) => {
            assert!(Opcode::from_bits(fields::opcode(word)).is_none());
            assert!(mnemonic(word).is_none());
        }
    }
});
