//! Dump command implementation.

use super::output::{JsonDump, JsonLine, JsonSummary, format_listing, format_summary};
use super::{CliError, OutputFormat, register_table};
use rvdec::Program;
use rvdec::disasm::{Summary, disassemble};
use std::fs;
use std::path::Path;

/// Execute the dump command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or loaded, or if JSON
/// serialization fails.
pub(crate) fn execute(
    file: &Path,
    base: u32,
    abi: bool,
    format: OutputFormat,
    summary: bool,
) -> Result<(), CliError> {
    let bytes = fs::read(file)
        .map_err(|e| CliError::new(format!("Failed to read {}: {e}", file.display())))?;

    let program = Program::load(&bytes, base)
        .map_err(|e| CliError::new(format!("{}: {e}", file.display())))?;
    tracing::info!(file = %file.display(), words = program.len(), base = program.base, "dumping");

    let regs = register_table(abi);
    let lines = disassemble(&program, &regs);
    let counts = summary.then(|| Summary::of(&lines));

    match format {
        OutputFormat::Text => {
            print!("{}", format_listing(&lines));
            if let Some(counts) = &counts {
                println!();
                print!("{}", format_summary(counts));
            }
        }
        OutputFormat::Json => {
            let dump = JsonDump {
                base: program.base,
                lines: lines.iter().map(JsonLine::from_line).collect(),
                summary: counts.as_ref().map(JsonSummary::from_summary),
            };
            let text = serde_json::to_string_pretty(&dump)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{text}");
        }
    }

    Ok(())
}
