//! Decode command implementation.

use super::output::{JsonLine, format_listing};
use super::{CliError, OutputFormat, register_table};
use rvdec::Program;
use rvdec::disasm::disassemble;

/// Execute the decode command.
///
/// Words are listed from address 0 in the order given.
///
/// # Errors
///
/// Returns an error if JSON serialization fails. Unknown opcodes are
/// reported per word, not as a command failure.
pub(crate) fn execute(words: &[u32], abi: bool, format: OutputFormat) -> Result<(), CliError> {
    let regs = register_table(abi);
    let program = Program::new(0, words.to_vec());
    let lines = disassemble(&program, &regs);

    match format {
        OutputFormat::Text => print!("{}", format_listing(&lines)),
        OutputFormat::Json => {
            let json: Vec<JsonLine> = lines.iter().map(JsonLine::from_line).collect();
            let text = serde_json::to_string_pretty(&json)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{text}");
        }
    }

    Ok(())
}
