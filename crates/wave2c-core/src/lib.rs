//! wave2c core
//!
//! Strict parser for one narrow flavour of RIFF/WAVE file, and an emitter
//! that turns its samples into a C byte array for firmware builds.
//!
//! # Accepted input
//!
//! Exactly the canonical 44-byte header layout:
//!
//! | offset | field | required value |
//! |---|---|---|
//! | 0 | ChunkID | `"RIFF"` |
//! | 4 | ChunkSize | any |
//! | 8 | Format | `"WAVE"` |
//! | 12 | Subchunk1ID | `"fmt "` |
//! | 16 | Subchunk1Size | 16 |
//! | 20 | AudioFormat | 1 (PCM) |
//! | 22 | NumChannels | 1 |
//! | 24 | SampleRate | 8000 |
//! | 28 | ByteRate | any |
//! | 32 | BlockAlign | any |
//! | 34 | BitsPerSample | 8 |
//! | 36 | Subchunk2ID | `"data"` |
//! | 40 | Subchunk2Size | `N` |
//! | 44 | samples | `N` bytes |
//!
//! Anything else is rejected with a specific [`WaveError`].
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use wave2c_core::{parse_wave, render_c_array, write_wav_to_vec, CArrayOptions, FormatDescriptor};
//!
//! let wav = write_wav_to_vec(&FormatDescriptor::canonical(), &[0x80, 0x90]);
//! let parsed = parse_wave(&mut Cursor::new(wav))?;
//! let text = render_c_array(parsed.samples.as_bytes(), &CArrayOptions::default(), None);
//! assert!(text.contains("const long pcm_length = 2;"));
//! # Ok::<(), wave2c_core::WaveError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`compare`] - exact byte-sequence equality
//! - [`decode`] - little-endian field decoding
//! - [`riff`] - RIFF/WAVE header validation
//! - [`format`] - `fmt ` chunk validation
//! - [`data`] - `data` chunk extraction
//! - [`parser`] - the three stages chained over one reader
//! - [`emit`] - C array generation
//! - [`writer`] - canonical WAV writer

pub mod chunk;
pub mod compare;
pub mod data;
pub mod decode;
pub mod emit;
pub mod error;
pub mod format;
pub mod parser;
pub mod riff;
pub mod writer;

pub use chunk::{ChunkHeader, FourCc};
pub use compare::bytes_equal;
pub use data::{read_data_chunk, SampleBuffer};
pub use decode::{
    decode_u16_le, decode_u32_le, decode_u8, try_decode_u16_le, try_decode_u32_le, try_decode_u8,
};
pub use emit::{render_c_array, write_c_array, CArrayOptions, EmitError};
pub use error::{Field, InvalidLength, WaveError, WaveResult};
pub use format::{validate_format_chunk, FormatDescriptor};
pub use parser::{parse_wave, parse_wave_file, validate_wave, ParsedWave};
pub use riff::{validate_riff_header, RiffHeader};
pub use writer::{write_wav, write_wav_to_vec};
