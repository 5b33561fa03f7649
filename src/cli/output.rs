//! Output formatting utilities for CLI.

use rvdec::disasm::{Line, Summary};
use rvdec::{Arg, Format, Opcode};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// JSON-serializable listing line.
#[derive(Debug, Serialize)]
pub(super) struct JsonLine {
    /// Address of the word.
    pub(super) addr: u32,
    /// Word as `0x`-prefixed hex.
    pub(super) word: String,
    /// Mnemonic (null if unknown).
    pub(super) mnemonic: Option<&'static str>,
    /// Opcode family (null if unknown).
    pub(super) opcode: Option<Opcode>,
    /// Operand format (null if unknown).
    pub(super) format: Option<Format>,
    /// Operands in format order (empty if not decoded).
    pub(super) args: Vec<Arg>,
    /// Decode error message (null on success).
    pub(super) error: Option<String>,
}

impl JsonLine {
    /// Create from a listing line.
    pub(super) fn from_line(line: &Line) -> Self {
        let (opcode, format, args, error) = match &line.decoded {
            Ok(decoded) => (
                Some(decoded.opcode),
                Some(decoded.format),
                decoded.args.to_vec(),
                None,
            ),
            Err(e) => (None, None, Vec::new(), Some(e.to_string())),
        };
        Self {
            addr: line.addr,
            word: format!("{:#010x}", line.word),
            mnemonic: line.mnemonic,
            opcode,
            format,
            args,
            error,
        }
    }
}

/// JSON-serializable listing summary.
#[derive(Debug, Serialize)]
pub(super) struct JsonSummary {
    /// Words that decoded.
    decoded: usize,
    /// Words with an unknown opcode.
    unknown: usize,
    /// Decoded words per format.
    by_format: BTreeMap<&'static str, usize>,
}

impl JsonSummary {
    /// Create from a summary.
    pub(super) fn from_summary(summary: &Summary) -> Self {
        Self {
            decoded: summary.decoded,
            unknown: summary.unknown,
            by_format: summary.by_format.clone(),
        }
    }
}

/// JSON-serializable dump output.
#[derive(Debug, Serialize)]
pub(super) struct JsonDump {
    /// Address of the first word.
    pub(super) base: u32,
    /// One entry per word.
    pub(super) lines: Vec<JsonLine>,
    /// Counts (present with `--summary`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) summary: Option<JsonSummary>,
}

/// Format a listing as text, one line per word.
pub(super) fn format_listing(lines: &[Line]) -> String {
    let mut output = String::new();
    for line in lines {
        let _ = writeln!(output, "{line}");
    }
    output
}

/// Format a summary as text.
pub(super) fn format_summary(summary: &Summary) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "{} words: {} decoded, {} unknown",
        summary.total(),
        summary.decoded,
        summary.unknown
    );
    for (format, count) in &summary.by_format {
        let _ = writeln!(output, "  {format:<8} {count}");
    }
    output
}
