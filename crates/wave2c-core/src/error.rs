//! Error types for WAVE parsing.

use thiserror::Error;

use crate::chunk::FourCc;

/// Result type for WAVE parsing operations.
pub type WaveResult<T> = Result<T, WaveError>;

/// A fixed-size field of the RIFF/WAVE layout.
///
/// Used to report exactly which field could not be read in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// `"RIFF"` container tag.
    RiffId,
    /// RIFF chunk size.
    RiffSize,
    /// `"WAVE"` form type.
    WaveId,
    /// `"fmt "` sub-chunk tag.
    FormatChunkId,
    /// `fmt ` sub-chunk size.
    FormatChunkSize,
    /// wFormatTag.
    FormatTag,
    /// nChannels.
    Channels,
    /// nSamplesPerSec.
    SampleRate,
    /// nAvgBytesPerSec.
    ByteRate,
    /// nBlockAlign.
    BlockAlign,
    /// wBitsPerSample.
    BitsPerSample,
    /// `"data"` sub-chunk tag.
    DataChunkId,
    /// `data` sub-chunk size.
    DataChunkSize,
}

impl Field {
    /// Returns the human-readable field name.
    pub fn name(&self) -> &'static str {
        match self {
            Field::RiffId => "RIFF chunk ID",
            Field::RiffSize => "RIFF chunk size",
            Field::WaveId => "WAVE format ID",
            Field::FormatChunkId => "fmt chunk ID",
            Field::FormatChunkSize => "fmt chunk size",
            Field::FormatTag => "wFormatTag",
            Field::Channels => "wChannels",
            Field::SampleRate => "dwSamplesPerSec",
            Field::ByteRate => "dwAvgBytesPerSec",
            Field::BlockAlign => "wBlockAlign",
            Field::BitsPerSample => "wBitsPerSample",
            Field::DataChunkId => "data chunk ID",
            Field::DataChunkSize => "data chunk size",
        }
    }

    /// Returns the width of the field in bytes.
    pub fn width(&self) -> usize {
        match self {
            Field::FormatTag | Field::Channels | Field::BlockAlign | Field::BitsPerSample => 2,
            _ => 4,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur while validating or parsing a WAVE stream.
#[derive(Debug, Error)]
pub enum WaveError {
    /// The stream does not start with a RIFF/WAVE header.
    #[error("invalid RIFF/WAVE header: {reason}")]
    HeaderInvalid {
        /// What was wrong with the header.
        reason: String,
    },

    /// A sub-chunk tag did not match the expected one.
    #[error("wrong chunk ID: expected {expected}, found {found}")]
    WrongChunkId {
        /// Expected tag.
        expected: FourCc,
        /// Tag read from the stream.
        found: FourCc,
    },

    /// The `fmt ` chunk is not the canonical 16-byte PCM layout.
    #[error("unsupported fmt chunk size: {size} (expected 16)")]
    UnsupportedFormatChunkSize {
        /// Declared chunk size.
        size: u32,
    },

    /// The format tag is not PCM.
    #[error("unsupported encoding: format tag {tag:#06x} (expected PCM)")]
    UnsupportedEncoding {
        /// Format tag read from the stream.
        tag: u16,
    },

    /// The file is not mono.
    #[error("unsupported channel layout: {channels} channels (expected mono)")]
    UnsupportedChannelLayout {
        /// Channel count read from the stream.
        channels: u16,
    },

    /// The sample rate is not 8 kHz.
    #[error("unsupported sample rate: {rate} Hz (expected 8000 Hz)")]
    UnsupportedSampleRate {
        /// Sample rate read from the stream.
        rate: u32,
    },

    /// The sample depth is not 8 bits.
    #[error("unsupported bit depth: {bits} bits (expected 8)")]
    UnsupportedBitDepth {
        /// Bits per sample read from the stream.
        bits: u16,
    },

    /// A fixed-size field could not be read in full.
    #[error("not enough bytes to read {field}: got {got} of {}", .field.width())]
    ShortRead {
        /// The field being read.
        field: Field,
        /// Bytes actually available.
        got: usize,
    },

    /// The `data` chunk holds fewer bytes than it declares.
    #[error("truncated data chunk: declared {declared} bytes, found {available}")]
    TruncatedData {
        /// Size declared by the chunk header.
        declared: u32,
        /// Bytes available before end of stream.
        available: u64,
    },

    /// Underlying I/O failure other than end of stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WaveError {
    /// Creates a header error.
    pub fn header(reason: impl Into<String>) -> Self {
        Self::HeaderInvalid {
            reason: reason.into(),
        }
    }

    /// Returns a stable code for programmatic error handling.
    pub fn code(&self) -> &'static str {
        match self {
            WaveError::HeaderInvalid { .. } => "WAV_001",
            WaveError::WrongChunkId { .. } => "WAV_002",
            WaveError::UnsupportedFormatChunkSize { .. } => "WAV_003",
            WaveError::UnsupportedEncoding { .. } => "WAV_004",
            WaveError::UnsupportedChannelLayout { .. } => "WAV_005",
            WaveError::UnsupportedSampleRate { .. } => "WAV_006",
            WaveError::UnsupportedBitDepth { .. } => "WAV_007",
            WaveError::ShortRead { .. } => "WAV_008",
            WaveError::TruncatedData { .. } => "WAV_009",
            WaveError::Io(_) => "WAV_010",
        }
    }

    /// Returns the error category.
    pub fn category(&self) -> &'static str {
        "wave"
    }

    /// Whether the error describes the content of the stream rather than
    /// a failure of the stream itself.
    pub fn is_content_error(&self) -> bool {
        !matches!(self, WaveError::Io(_))
    }
}

/// A decoder was handed a slice of the wrong width.
///
/// This is a contract violation by the calling code, not malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("InvalidLength: expected {expected} bytes, got {actual}")]
pub struct InvalidLength {
    /// Width the decoder requires.
    pub expected: usize,
    /// Width it was given.
    pub actual: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_helper() {
        let err = WaveError::header("missing RIFF tag");
        assert!(err.to_string().contains("missing RIFF tag"));
        assert_eq!(err.code(), "WAV_001");
    }

    #[test]
    fn test_short_read_names_field() {
        let err = WaveError::ShortRead {
            field: Field::SampleRate,
            got: 1,
        };
        assert_eq!(
            err.to_string(),
            "not enough bytes to read dwSamplesPerSec: got 1 of 4"
        );
    }

    #[test]
    fn test_codes_are_unique() {
        let errors = [
            WaveError::header("x"),
            WaveError::WrongChunkId {
                expected: FourCc::DATA,
                found: FourCc(*b"LIST"),
            },
            WaveError::UnsupportedFormatChunkSize { size: 18 },
            WaveError::UnsupportedEncoding { tag: 3 },
            WaveError::UnsupportedChannelLayout { channels: 2 },
            WaveError::UnsupportedSampleRate { rate: 44100 },
            WaveError::UnsupportedBitDepth { bits: 16 },
            WaveError::ShortRead {
                field: Field::FormatTag,
                got: 0,
            },
            WaveError::TruncatedData {
                declared: 4,
                available: 2,
            },
            WaveError::Io(std::io::Error::other("boom")),
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert!(errors.iter().all(|e| e.category() == "wave"));
    }

    #[test]
    fn test_io_is_not_content_error() {
        assert!(!WaveError::Io(std::io::Error::other("disk")).is_content_error());
        assert!(WaveError::UnsupportedBitDepth { bits: 16 }.is_content_error());
    }

    #[test]
    fn test_field_widths() {
        assert_eq!(Field::BlockAlign.width(), 2);
        assert_eq!(Field::DataChunkSize.width(), 4);
    }
}
