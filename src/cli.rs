//! CLI command implementations for rvdec.

pub(crate) mod decode;
pub(crate) mod dump;

mod output;

use clap::ValueEnum;
use rvdec::RegisterTable;
use std::error::Error;
use std::fmt;
use tracing_subscriber::EnvFilter;

/// Output format for `decode` and `dump`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise each `-v` raises the level one
/// step above `warn`.
pub(crate) fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // A second init (tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Register table selected by the `--abi` flag.
pub(crate) fn register_table(abi: bool) -> RegisterTable {
    if abi {
        RegisterTable::ABI
    } else {
        RegisterTable::NUMERIC
    }
}

/// Parse a hexadecimal `u32`, with or without `0x`, allowing `_` separators.
pub(crate) fn parse_hex(s: &str) -> Result<u32, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
        .replace('_', "");
    if digits.is_empty() {
        return Err(format!("'{s}' is not a hex number"));
    }
    u32::from_str_radix(&digits, 16).map_err(|e| format!("'{s}' is not a 32-bit hex number: {e}"))
}
