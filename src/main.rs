//! rvdec CLI - decode RISC-V instruction words and dump programs.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;

/// rvdec - RV32I instruction decoder
#[derive(Parser, Debug)]
#[command(name = "rvdec")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode instruction words given on the command line
    Decode {
        /// Hex instruction words (e.g. 0x00a00093)
        #[arg(required = true, value_parser = cli::parse_hex)]
        words: Vec<u32>,

        /// Use ABI register names (zero, ra, sp, ...)
        #[arg(long)]
        abi: bool,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Disassemble a flat binary or RV32 ELF file
    Dump {
        /// Input file (.bin or ELF)
        #[arg(required = true)]
        file: std::path::PathBuf,

        /// Load address for flat binaries (hex)
        #[arg(short, long, default_value = "0", value_parser = cli::parse_hex)]
        base: u32,

        /// Use ABI register names (zero, ra, sp, ...)
        #[arg(long)]
        abi: bool,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Print per-format counts after the listing
        #[arg(short, long)]
        summary: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_logging(args.verbose);

    let result = match args.command {
        Commands::Decode { words, abi, format } => cli::decode::execute(&words, abi, format),

        Commands::Dump {
            file,
            base,
            abi,
            format,
            summary,
        } => cli::dump::execute(&file, base, abi, format, summary),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
