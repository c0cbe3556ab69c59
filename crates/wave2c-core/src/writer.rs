//! Canonical WAV writer.
//!
//! Produces the exact 44-byte header layout the parser accepts, followed by
//! the sample bytes. Used to build fixtures and fuzz seeds.

use std::io::{self, Write};

use byteorder::{LittleEndian, WriteBytesExt};

use crate::chunk::FourCc;
use crate::format::{FormatDescriptor, PCM_FORMAT_CHUNK_SIZE};

/// Length of the canonical header (RIFF + `fmt ` + `data` chunk header).
pub const CANONICAL_HEADER_LEN: usize = 44;

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - Format fields written verbatim into the `fmt ` chunk
/// * `samples` - Raw sample bytes for the `data` chunk
pub fn write_wav<W: Write>(
    writer: &mut W,
    format: &FormatDescriptor,
    samples: &[u8],
) -> io::Result<()> {
    let data_size = u32::try_from(samples.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "sample data exceeds 4 GiB"))?;
    // Total file size minus the 8-byte RIFF chunk header
    let riff_size = data_size.saturating_add(36);

    // RIFF header
    writer.write_all(&FourCc::RIFF.0)?;
    writer.write_u32::<LittleEndian>(riff_size)?;
    writer.write_all(&FourCc::WAVE.0)?;

    // fmt chunk
    writer.write_all(&FourCc::FMT.0)?;
    writer.write_u32::<LittleEndian>(PCM_FORMAT_CHUNK_SIZE)?;
    writer.write_u16::<LittleEndian>(format.format_tag)?;
    writer.write_u16::<LittleEndian>(format.channels)?;
    writer.write_u32::<LittleEndian>(format.sample_rate)?;
    writer.write_u32::<LittleEndian>(format.byte_rate)?;
    writer.write_u16::<LittleEndian>(format.block_align)?;
    writer.write_u16::<LittleEndian>(format.bits_per_sample)?;

    // data chunk
    writer.write_all(&FourCc::DATA.0)?;
    writer.write_u32::<LittleEndian>(data_size)?;
    writer.write_all(samples)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &FormatDescriptor, samples: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(CANONICAL_HEADER_LEN + samples.len());
    write_wav(&mut buffer, format, samples).expect("writing to Vec should not fail");
    buffer
}
