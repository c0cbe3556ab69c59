//! Chunk tags, chunk headers and fixed-width field reads.

use std::fmt;
use std::io::{ErrorKind, Read};

use crate::compare::bytes_equal;
use crate::decode::decode_u32_le;
use crate::error::{Field, WaveError, WaveResult};

/// A four-character chunk tag.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCc(pub [u8; 4]);

impl FourCc {
    /// `"RIFF"` container tag.
    pub const RIFF: FourCc = FourCc(*b"RIFF");
    /// `"WAVE"` form type.
    pub const WAVE: FourCc = FourCc(*b"WAVE");
    /// `"fmt "` sub-chunk tag (trailing space).
    pub const FMT: FourCc = FourCc(*b"fmt ");
    /// `"data"` sub-chunk tag.
    pub const DATA: FourCc = FourCc(*b"data");

    /// Returns true if this tag is byte-for-byte equal to `other`.
    pub fn matches(&self, other: &FourCc) -> bool {
        bytes_equal(&self.0, &other.0)
    }
}

impl fmt::Display for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
            write!(f, "\"{}\"", String::from_utf8_lossy(&self.0))
        } else {
            write!(
                f,
                "[{:02x} {:02x} {:02x} {:02x}]",
                self.0[0], self.0[1], self.0[2], self.0[3]
            )
        }
    }
}

impl fmt::Debug for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FourCc({self})")
    }
}

/// Sub-chunk header: tag plus declared little-endian length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    /// Chunk tag.
    pub id: FourCc,
    /// Declared payload length in bytes.
    pub size: u32,
}

impl ChunkHeader {
    /// Reads a chunk header whose tag must equal `expected`.
    ///
    /// The size is only read once the tag has matched.
    pub fn read_expecting<R: Read>(
        reader: &mut R,
        expected: FourCc,
        id_field: Field,
        size_field: Field,
    ) -> WaveResult<Self> {
        let id = FourCc(read_field::<_, 4>(reader, id_field)?);
        if !id.matches(&expected) {
            return Err(WaveError::WrongChunkId {
                expected,
                found: id,
            });
        }
        let size = decode_u32_le(&read_field::<_, 4>(reader, size_field)?);
        Ok(Self { id, size })
    }
}

/// Reads exactly `N` bytes for `field`.
///
/// End of stream before `N` bytes is reported as [`WaveError::ShortRead`]
/// with the number of bytes that were available; a partial read is never
/// accepted.
pub fn read_field<R: Read, const N: usize>(reader: &mut R, field: Field) -> WaveResult<[u8; N]> {
    let mut buf = [0u8; N];
    let mut got = 0;
    while got < N {
        match reader.read(&mut buf[got..]) {
            Ok(0) => return Err(WaveError::ShortRead { field, got }),
            Ok(n) => got += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(WaveError::Io(e)),
        }
    }
    Ok(buf)
}
