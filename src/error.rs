//! Error types for instruction decoding.

use std::fmt;

/// Reasons a word cannot be turned into an argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Bits [6:2] of the word name no known instruction family.
    UnknownOpcode {
        /// The full instruction word.
        word: u32,
        /// The 5-bit opcode field that failed dispatch.
        opcode: u8,
    },
}

impl DecodeError {
    /// The instruction word that failed to decode.
    #[must_use]
    pub fn word(&self) -> u32 {
        match self {
            DecodeError::UnknownOpcode { word, .. } => *word,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnknownOpcode { word, opcode } => {
                write!(f, "illegal instruction {word:#010x}: unknown opcode {opcode:#04x}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Result type for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
