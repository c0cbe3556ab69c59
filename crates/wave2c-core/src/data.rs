//! `data` sub-chunk extraction.

use std::io::Read;

use crate::chunk::{ChunkHeader, FourCc};
use crate::error::{Field, WaveError, WaveResult};

/// Upper bound for the up-front allocation; the declared size comes from
/// untrusted input.
const MAX_PREALLOC: usize = 64 * 1024;

/// Raw sample bytes extracted from a `data` chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    bytes: Vec<u8>,
}

impl SampleBuffer {
    /// Number of sample bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the chunk held no samples.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Sample bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Takes ownership of the sample bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

/// Reads the `data` sub-chunk and exactly the number of bytes it declares.
pub fn read_data_chunk<R: Read>(reader: &mut R) -> WaveResult<SampleBuffer> {
    let result = read_samples(reader);
    if let Err(e) = &result {
        log::warn!("data chunk rejected: {e}");
    }
    result
}

fn read_samples<R: Read>(reader: &mut R) -> WaveResult<SampleBuffer> {
    let header = ChunkHeader::read_expecting(
        reader,
        FourCc::DATA,
        Field::DataChunkId,
        Field::DataChunkSize,
    )?;
    let declared = header.size;

    let mut bytes = Vec::with_capacity((declared as usize).min(MAX_PREALLOC));
    let available = reader
        .by_ref()
        .take(u64::from(declared))
        .read_to_end(&mut bytes)? as u64;

    if available < u64::from(declared) {
        return Err(WaveError::TruncatedData {
            declared,
            available,
        });
    }

    log::debug!("data chunk ok: {declared} bytes");
    Ok(SampleBuffer { bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn data_chunk(declared: u32, payload: &[u8]) -> Vec<u8> {
        let mut bytes = b"data".to_vec();
        bytes.extend_from_slice(&declared.to_le_bytes());
        bytes.extend_from_slice(payload);
        bytes
    }

    #[test]
    fn test_reads_declared_bytes() {
        let mut cursor = Cursor::new(data_chunk(4, &[0x80, 0x7F, 0x00, 0xFF]));
        let samples = read_data_chunk(&mut cursor).unwrap();
        assert_eq!(samples.as_bytes(), &[0x80, 0x7F, 0x00, 0xFF]);
        assert_eq!(samples.len(), 4);
    }

    #[test]
    fn test_trailing_bytes_left_unread() {
        let mut cursor = Cursor::new(data_chunk(2, &[0x01, 0x02, 0x03, 0x04]));
        let samples = read_data_chunk(&mut cursor).unwrap();
        assert_eq!(samples.into_vec(), vec![0x01, 0x02]);
        assert_eq!(cursor.position(), 10);
    }

    #[test]
    fn test_empty_chunk() {
        let samples = read_data_chunk(&mut Cursor::new(data_chunk(0, &[]))).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn test_truncated() {
        let err = read_data_chunk(&mut Cursor::new(data_chunk(10, &[1, 2, 3]))).unwrap_err();
        assert!(matches!(
            err,
            WaveError::TruncatedData {
                declared: 10,
                available: 3
            }
        ));
    }

    #[test]
    fn test_huge_declared_size_does_not_allocate_up_front() {
        let err = read_data_chunk(&mut Cursor::new(data_chunk(u32::MAX, &[0; 8]))).unwrap_err();
        assert!(matches!(err, WaveError::TruncatedData { available: 8, .. }));
    }

    #[test]
    fn test_wrong_id() {
        let mut bytes = data_chunk(1, &[0]);
        bytes[0..4].copy_from_slice(b"LIST");
        assert!(matches!(
            read_data_chunk(&mut Cursor::new(bytes)),
            Err(WaveError::WrongChunkId { .. })
        ));
    }

    #[test]
    fn test_short_size_field() {
        let err = read_data_chunk(&mut Cursor::new(b"data\x01\x00".to_vec())).unwrap_err();
        assert!(matches!(
            err,
            WaveError::ShortRead {
                field: Field::DataChunkSize,
                got: 2
            }
        ));
    }
}
