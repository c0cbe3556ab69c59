//! Convert command implementation
//!
//! Validates a WAV file and writes its samples as a C header.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use wave2c_core::{
    parse_wave, validate_wave, write_c_array, CArrayOptions, FormatDescriptor, SampleBuffer,
    WaveError,
};

use super::json_output::{error_codes, ConvertOutput, ConvertResult, JsonError};

/// Arguments of a single conversion.
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    /// Input WAV file
    pub input: PathBuf,
    /// Output header path (default: input with `.h` extension)
    pub output: Option<PathBuf>,
    /// C array options
    pub options: CArrayOptions,
    /// Only validate the header and format chunk
    pub check_only: bool,
}

/// Outcome of reading the input.
#[derive(Debug)]
enum Inspection {
    /// The parser rejected the content.
    Rejected(WaveError),
    /// The input was accepted; samples are absent in check mode.
    Accepted {
        format: FormatDescriptor,
        samples: Option<SampleBuffer>,
    },
}

/// Run the convert command
///
/// # Arguments
/// * `args` - Conversion arguments
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if the file was accepted, 1 if it was rejected
pub fn run(args: &ConvertArgs, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(args)
    } else {
        run_human(args)
    }
}

/// Run convert with human-readable (colored) output
fn run_human(args: &ConvertArgs) -> Result<ExitCode> {
    args.options
        .validate()
        .context("Invalid C array options")?;
    let output = if args.check_only {
        None
    } else {
        Some(resolve_output_path(args)?)
    };

    println!("{} {}", "Reading:".cyan().bold(), args.input.display());

    match inspect(&args.input, args.check_only)? {
        Inspection::Rejected(err) => {
            println!("file format is {}", "not ok.".red().bold());
            println!("  {} {} [{}]", "cause:".dimmed(), err, err.code());
            Ok(ExitCode::from(1))
        }
        Inspection::Accepted { format, samples } => {
            println!("file format is {}", "ok.".green().bold());
            if let (Some(samples), Some(output)) = (samples, output) {
                write_header(&output, samples.as_bytes(), &args.options, &args.input)?;
                println!(
                    "{} {} samples ({:.3}s) to {}",
                    "Wrote".green(),
                    samples.len(),
                    format.duration_seconds(samples.len()),
                    output.display()
                );
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Run convert with JSON output
fn run_json(args: &ConvertArgs) -> Result<ExitCode> {
    let input = args.input.display().to_string();

    if let Err(e) = args.options.validate() {
        return emit_failure(JsonError::new(error_codes::INVALID_OPTIONS, e.to_string()));
    }

    let output = if args.check_only {
        None
    } else {
        match resolve_output_path(args) {
            Ok(path) => Some(path),
            Err(e) => {
                return emit_failure(
                    JsonError::new(error_codes::OUTPUT_IS_INPUT, format!("{e:#}"))
                        .with_file(&input),
                )
            }
        }
    };

    let inspection = match inspect(&args.input, args.check_only) {
        Ok(inspection) => inspection,
        Err(e) => {
            return emit_failure(
                JsonError::new(error_codes::FILE_READ, format!("{e:#}")).with_file(&input),
            )
        }
    };

    let (format, samples) = match inspection {
        Inspection::Rejected(err) => {
            return emit_failure(JsonError::from(&err).with_file(&input));
        }
        Inspection::Accepted { format, samples } => (format, samples),
    };

    let mut result = ConvertResult {
        input: input.clone(),
        output: None,
        format,
        sample_count: None,
        duration_seconds: None,
    };

    if let (Some(samples), Some(output)) = (samples, output) {
        if let Err(e) = write_header(&output, samples.as_bytes(), &args.options, &args.input) {
            return emit_failure(
                JsonError::new(error_codes::FILE_WRITE, format!("{e:#}"))
                    .with_file(output.display().to_string()),
            );
        }
        result.output = Some(output.display().to_string());
        result.sample_count = Some(samples.len());
        result.duration_seconds = Some(format.duration_seconds(samples.len()));
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&ConvertOutput::success(result))?
    );
    Ok(ExitCode::SUCCESS)
}

fn emit_failure(error: JsonError) -> Result<ExitCode> {
    let output = ConvertOutput::failure(vec![error]);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(ExitCode::from(1))
}

/// Opens and parses the input, separating content rejections from I/O
/// failures.
fn inspect(input: &Path, check_only: bool) -> Result<Inspection> {
    let file = File::open(input)
        .with_context(|| format!("Failed to open input file: {}", input.display()))?;
    let mut reader = BufReader::new(file);

    let parsed = if check_only {
        validate_wave(&mut reader).map(|format| (format, None))
    } else {
        parse_wave(&mut reader).map(|parsed| (parsed.format, Some(parsed.samples)))
    };

    match parsed {
        Ok((format, samples)) => Ok(Inspection::Accepted { format, samples }),
        Err(err) if err.is_content_error() => Ok(Inspection::Rejected(err)),
        Err(err) => {
            Err(err).with_context(|| format!("Failed to read input file: {}", input.display()))
        }
    }
}

/// Default output path: the input path with a `.h` extension.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("h")
}

fn resolve_output_path(args: &ConvertArgs) -> Result<PathBuf> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    if refers_to_same_file(&output, &args.input) {
        anyhow::bail!(
            "Output path would overwrite the input file: {}",
            output.display()
        );
    }
    Ok(output)
}

/// Whether `a` and `b` name the same file, either as written or after
/// resolving `.`/`..` components and symlinks. Paths that do not exist yet
/// only compare as written.
fn refers_to_same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn write_header(
    output: &Path,
    samples: &[u8],
    options: &CArrayOptions,
    input: &Path,
) -> Result<()> {
    let source_name = input.file_name().map(|n| n.to_string_lossy());
    let file = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    write_c_array(&mut writer, samples, options, source_name.as_deref())
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;
    log::info!("wrote {} sample bytes to {}", samples.len(), output.display());
    Ok(())
}
