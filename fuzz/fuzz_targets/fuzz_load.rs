#![no_main]

use libfuzzer_sys::fuzz_target;
use rvdec::disasm::{Summary, disassemble};
use rvdec::{Program, RegisterTable};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic the loader, ELF or raw.
    if let Ok(program) = Program::load(data, 0) {
        let lines = disassemble(&program, &RegisterTable::NUMERIC);
        assert_eq!(Summary::of(&lines).total(), program.len());
    }
});
