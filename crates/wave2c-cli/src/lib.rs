//! wave2c CLI library.
//!
//! Provides the command implementations behind the `wave2c` binary: reading
//! an input WAV file, reporting whether its format is accepted, and writing
//! the extracted samples as a C header.

pub mod commands;
pub mod logging;
