//! wave2c - convert 8 kHz mono 8-bit PCM WAV files into C byte arrays
//!
//! This binary validates the input file and writes a header declaring the
//! sample count and the raw sample bytes, ready for firmware builds.

use clap::{ArgAction, Parser};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use wave2c_cli::commands::convert::{self, ConvertArgs};
use wave2c_cli::logging;
use wave2c_core::emit::{DEFAULT_ARRAY_NAME, DEFAULT_BYTES_PER_LINE, DEFAULT_LENGTH_NAME};
use wave2c_core::CArrayOptions;

/// wave2c - WAV to C array converter
#[derive(Parser)]
#[command(name = "wave2c")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input WAV file (PCM, mono, 8000 Hz, 8-bit)
    input: PathBuf,

    /// Output header path (default: input path with a .h extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Name of the generated sample array
    #[arg(long, default_value = DEFAULT_ARRAY_NAME)]
    array_name: String,

    /// Name of the generated length constant
    #[arg(long, default_value = DEFAULT_LENGTH_NAME)]
    length_name: String,

    /// Omit the PROGMEM attribute from the array declaration
    #[arg(long)]
    no_progmem: bool,

    /// Number of array elements per line
    #[arg(long, default_value_t = DEFAULT_BYTES_PER_LINE)]
    bytes_per_line: usize,

    /// Only validate the header and format chunk; write nothing
    #[arg(long)]
    check: bool,

    /// Output machine-readable JSON (no colored output)
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let args = ConvertArgs {
        input: cli.input,
        output: cli.output,
        options: CArrayOptions {
            length_name: cli.length_name,
            array_name: cli.array_name,
            progmem: !cli.no_progmem,
            bytes_per_line: cli.bytes_per_line,
        },
        check_only: cli.check,
    };

    match convert::run(&args, cli.json) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red(), e);
            ExitCode::from(1)
        }
    }
}
