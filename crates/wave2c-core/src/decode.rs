//! Little-endian field decoding.
//!
//! The `decode_*` functions treat a wrong-width slice as a bug in the caller
//! and panic. The `try_decode_*` variants report it as [`InvalidLength`].

use byteorder::{ByteOrder, LittleEndian};

use crate::error::InvalidLength;

fn check_width(bytes: &[u8], expected: usize) -> Result<(), InvalidLength> {
    if bytes.len() != expected {
        return Err(InvalidLength {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}

/// Decodes a single byte.
pub fn try_decode_u8(bytes: &[u8]) -> Result<u8, InvalidLength> {
    check_width(bytes, 1)?;
    Ok(bytes[0])
}

/// Decodes a 2-byte little-endian unsigned integer.
pub fn try_decode_u16_le(bytes: &[u8]) -> Result<u16, InvalidLength> {
    check_width(bytes, 2)?;
    Ok(LittleEndian::read_u16(bytes))
}

/// Decodes a 4-byte little-endian unsigned integer.
pub fn try_decode_u32_le(bytes: &[u8]) -> Result<u32, InvalidLength> {
    check_width(bytes, 4)?;
    Ok(LittleEndian::read_u32(bytes))
}

/// Decodes a single byte.
///
/// # Panics
/// Panics with `InvalidLength` if `bytes` is not exactly 1 byte long.
pub fn decode_u8(bytes: &[u8]) -> u8 {
    try_decode_u8(bytes).unwrap_or_else(|e| panic!("{e}"))
}

/// Decodes a 2-byte little-endian unsigned integer.
///
/// # Panics
/// Panics with `InvalidLength` if `bytes` is not exactly 2 bytes long.
pub fn decode_u16_le(bytes: &[u8]) -> u16 {
    try_decode_u16_le(bytes).unwrap_or_else(|e| panic!("{e}"))
}

/// Decodes a 4-byte little-endian unsigned integer (byte 0 least significant).
///
/// # Panics
/// Panics with `InvalidLength` if `bytes` is not exactly 4 bytes long.
pub fn decode_u32_le(bytes: &[u8]) -> u32 {
    try_decode_u32_le(bytes).unwrap_or_else(|e| panic!("{e}"))
}
