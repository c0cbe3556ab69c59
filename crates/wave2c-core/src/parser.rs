//! Header → format → data pipeline over a single forward-only reader.
//!
//! Each stage assumes the previous one left the reader positioned at its
//! first byte, so a failing stage ends the pipeline.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::data::{read_data_chunk, SampleBuffer};
use crate::error::WaveResult;
use crate::format::{validate_format_chunk, FormatDescriptor};
use crate::riff::{validate_riff_header, RiffHeader};

/// A fully parsed WAVE stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedWave {
    /// RIFF container header.
    pub riff: RiffHeader,
    /// Validated format.
    pub format: FormatDescriptor,
    /// Sample bytes from the `data` chunk.
    pub samples: SampleBuffer,
}

/// Validates the RIFF header and the `fmt ` chunk without reading samples.
pub fn validate_wave<R: Read>(reader: &mut R) -> WaveResult<FormatDescriptor> {
    validate_riff_header(reader)?;
    validate_format_chunk(reader)
}

/// Parses a complete WAVE stream and extracts its samples.
pub fn parse_wave<R: Read>(reader: &mut R) -> WaveResult<ParsedWave> {
    let riff = validate_riff_header(reader)?;
    let format = validate_format_chunk(reader)?;
    let samples = read_data_chunk(reader)?;
    Ok(ParsedWave {
        riff,
        format,
        samples,
    })
}

/// Opens `path` and parses it. The file is closed on every return path.
pub fn parse_wave_file(path: impl AsRef<Path>) -> WaveResult<ParsedWave> {
    let path = path.as_ref();
    log::debug!("parsing {}", path.display());
    let mut reader = BufReader::new(File::open(path)?);
    parse_wave(&mut reader)
}
