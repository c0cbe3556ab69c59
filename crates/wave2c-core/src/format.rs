//! `fmt ` sub-chunk validation.
//!
//! Only one layout is accepted: a canonical 16-byte PCM chunk describing
//! mono audio at 8000 Hz with 8 bits per sample. Fields are read in file
//! order and the first mismatch ends validation.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::chunk::{read_field, ChunkHeader, FourCc};
use crate::decode::{decode_u16_le, decode_u32_le};
use crate::error::{Field, WaveError, WaveResult};

/// Size of the canonical PCM `fmt ` chunk payload.
pub const PCM_FORMAT_CHUNK_SIZE: u32 = 16;

/// Bytes consumed by a fully validated `fmt ` chunk, header included.
pub const FORMAT_CHUNK_LEN: u64 = 8 + PCM_FORMAT_CHUNK_SIZE as u64;

/// wFormatTag value for PCM.
pub const FORMAT_TAG_PCM: u16 = 0x0001;

/// Only accepted channel count.
pub const REQUIRED_CHANNELS: u16 = 1;

/// Only accepted sample rate in Hz.
pub const REQUIRED_SAMPLE_RATE: u32 = 8000;

/// Only accepted sample depth.
pub const REQUIRED_BITS_PER_SAMPLE: u16 = 8;

/// Decoded `fmt ` chunk fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatDescriptor {
    /// Encoding tag (1 = PCM).
    pub format_tag: u16,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Average bytes per second. Informational only.
    pub byte_rate: u32,
    /// Bytes per sample frame. Informational only.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
}

impl FormatDescriptor {
    /// The one format this crate accepts, with consistent derived fields.
    pub fn canonical() -> Self {
        let block_align = REQUIRED_CHANNELS * (REQUIRED_BITS_PER_SAMPLE / 8);
        Self {
            format_tag: FORMAT_TAG_PCM,
            channels: REQUIRED_CHANNELS,
            sample_rate: REQUIRED_SAMPLE_RATE,
            byte_rate: REQUIRED_SAMPLE_RATE * block_align as u32,
            block_align,
            bits_per_sample: REQUIRED_BITS_PER_SAMPLE,
        }
    }

    /// Duration of `data_len` bytes of audio in seconds.
    ///
    /// The frame size comes from `channels` and `bits_per_sample`; the
    /// declared `block_align` is never validated and is not used.
    pub fn duration_seconds(&self, data_len: usize) -> f64 {
        let frame_len = usize::from(self.channels) * usize::from(self.bits_per_sample).div_ceil(8);
        if frame_len == 0 || self.sample_rate == 0 {
            return 0.0;
        }
        (data_len / frame_len) as f64 / f64::from(self.sample_rate)
    }
}

/// Validates the `fmt ` sub-chunk directly following the RIFF header.
///
/// On success exactly [`FORMAT_CHUNK_LEN`] bytes have been consumed.
pub fn validate_format_chunk<R: Read>(reader: &mut R) -> WaveResult<FormatDescriptor> {
    let result = read_format_chunk(reader);
    if let Err(e) = &result {
        log::warn!("fmt chunk rejected: {e}");
    }
    result
}

fn read_format_chunk<R: Read>(reader: &mut R) -> WaveResult<FormatDescriptor> {
    let header = ChunkHeader::read_expecting(
        reader,
        FourCc::FMT,
        Field::FormatChunkId,
        Field::FormatChunkSize,
    )?;
    if header.size != PCM_FORMAT_CHUNK_SIZE {
        return Err(WaveError::UnsupportedFormatChunkSize { size: header.size });
    }

    let format_tag = read_u16(reader, Field::FormatTag)?;
    if format_tag != FORMAT_TAG_PCM {
        return Err(WaveError::UnsupportedEncoding { tag: format_tag });
    }

    let channels = read_u16(reader, Field::Channels)?;
    if channels != REQUIRED_CHANNELS {
        return Err(WaveError::UnsupportedChannelLayout { channels });
    }

    let sample_rate = read_u32(reader, Field::SampleRate)?;
    if sample_rate != REQUIRED_SAMPLE_RATE {
        return Err(WaveError::UnsupportedSampleRate { rate: sample_rate });
    }

    let byte_rate = read_u32(reader, Field::ByteRate)?;
    let block_align = read_u16(reader, Field::BlockAlign)?;

    let bits_per_sample = read_u16(reader, Field::BitsPerSample)?;
    if bits_per_sample != REQUIRED_BITS_PER_SAMPLE {
        return Err(WaveError::UnsupportedBitDepth {
            bits: bits_per_sample,
        });
    }

    log::debug!("fmt chunk ok: PCM mono {sample_rate} Hz {bits_per_sample}-bit");
    Ok(FormatDescriptor {
        format_tag,
        channels,
        sample_rate,
        byte_rate,
        block_align,
        bits_per_sample,
    })
}

fn read_u16<R: Read>(reader: &mut R, field: Field) -> WaveResult<u16> {
    Ok(decode_u16_le(&read_field::<_, 2>(reader, field)?))
}

fn read_u32<R: Read>(reader: &mut R, field: Field) -> WaveResult<u32> {
    Ok(decode_u32_le(&read_field::<_, 4>(reader, field)?))
}
