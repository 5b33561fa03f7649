//! Disassembly listings.
//!
//! Decoding is pure, so whole programs are decoded in parallel with rayon;
//! the listing keeps address order.

use std::collections::BTreeMap;
use std::fmt;

use rayon::prelude::*;

use crate::error::DecodeResult;
use crate::isa::{self, Decoded, RegisterTable};
use crate::program::Program;

/// One line of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// Address of the word.
    pub addr: u32,
    /// The raw word.
    pub word: u32,
    /// RV32IM mnemonic, if the word names a known instruction.
    pub mnemonic: Option<&'static str>,
    /// Operand decoding result.
    pub decoded: DecodeResult<Decoded>,
}

impl Line {
    /// Decode one word at `addr`.
    #[must_use]
    pub fn new(addr: u32, word: u32, regs: &RegisterTable) -> Self {
        Self {
            addr,
            word,
            mnemonic: isa::mnemonic(word),
            decoded: isa::decode(word, regs),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}:  {:08x}  ", self.addr, self.word)?;
        match (&self.decoded, self.mnemonic) {
            (Ok(decoded), Some(name)) => write!(f, "{name} {}", decoded.args),
            (Ok(decoded), None) => {
                write!(f, "<{}?> {}", decoded.format.name(), decoded.args)
            }
            (Err(e), _) => write!(f, ".word {:#010x}  ; {e}", self.word),
        }
    }
}

/// Decode every word of `program`.
#[must_use]
pub fn disassemble(program: &Program, regs: &RegisterTable) -> Vec<Line> {
    program
        .words
        .par_iter()
        .enumerate()
        .map(|(i, &word)| Line::new(program.address_of(i), word, regs))
        .collect()
}

/// Counts over a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Words that decoded.
    pub decoded: usize,
    /// Words with an unknown opcode.
    pub unknown: usize,
    /// Decoded words per format name.
    pub by_format: BTreeMap<&'static str, usize>,
}

impl Summary {
    /// Tally `lines`.
    #[must_use]
    pub fn of(lines: &[Line]) -> Self {
        let mut summary = Self::default();
        for line in lines {
            match &line.decoded {
                Ok(decoded) => {
                    summary.decoded += 1;
                    *summary.by_format.entry(decoded.format.name()).or_default() += 1;
                }
                Err(_) => summary.unknown += 1,
            }
        }
        summary
    }

    /// Total words tallied.
    #[must_use]
    pub fn total(&self) -> usize {
        self.decoded + self.unknown
    }
}
