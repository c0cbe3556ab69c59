//! RIFF/WAVE container header validation.

use std::io::Read;

use crate::chunk::{read_field, FourCc};
use crate::decode::decode_u32_le;
use crate::error::{Field, WaveError, WaveResult};

/// Length of the RIFF header in bytes.
pub const RIFF_HEADER_LEN: u64 = 12;

/// The validated RIFF header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiffHeader {
    /// Declared RIFF chunk size (file size minus 8). Not checked against the
    /// actual stream length.
    pub declared_size: u32,
}

/// Validates the 12-byte RIFF/WAVE header at the start of `reader`.
///
/// Every failure, including a stream shorter than 12 bytes, is reported as
/// [`WaveError::HeaderInvalid`]. On success exactly 12 bytes have been
/// consumed.
pub fn validate_riff_header<R: Read>(reader: &mut R) -> WaveResult<RiffHeader> {
    let result = read_riff_header(reader);
    if let Err(e) = &result {
        log::warn!("RIFF header rejected: {e}");
    }
    result
}

fn read_riff_header<R: Read>(reader: &mut R) -> WaveResult<RiffHeader> {
    let riff = FourCc(read_header_field(reader, Field::RiffId)?);
    if !riff.matches(&FourCc::RIFF) {
        return Err(WaveError::header(format!(
            "expected {} tag, found {riff}",
            FourCc::RIFF
        )));
    }

    let declared_size = decode_u32_le(&read_header_field(reader, Field::RiffSize)?);

    let wave = FourCc(read_header_field(reader, Field::WaveId)?);
    if !wave.matches(&FourCc::WAVE) {
        return Err(WaveError::header(format!(
            "expected {} form type, found {wave}",
            FourCc::WAVE
        )));
    }

    log::debug!("RIFF header ok, declared size {declared_size}");
    Ok(RiffHeader { declared_size })
}

fn read_header_field<R: Read>(reader: &mut R, field: Field) -> WaveResult<[u8; 4]> {
    read_field(reader, field).map_err(|e| match e {
        WaveError::ShortRead { field, got } => {
            WaveError::header(format!("not enough bytes for {field} ({got} of 4)"))
        }
        other => other,
    })
}
