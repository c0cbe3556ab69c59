//! JSON output types for machine-readable CLI output.
//!
//! Emitted on stdout when `--json` is passed.

use serde::{Deserialize, Serialize};
use wave2c_core::{FormatDescriptor, WaveError};

/// Error codes for CLI operations.
///
/// These codes are stable. Parser errors pass through their own `WAV_XXX`
/// codes.
pub mod error_codes {
    /// Input file could not be opened or read
    pub const FILE_READ: &str = "CLI_001";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_002";
    /// Invalid C array options
    pub const INVALID_OPTIONS: &str = "CLI_003";
    /// Output path would overwrite the input
    pub const OUTPUT_IS_INPUT: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "WAV_004")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// File the error refers to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new JSON error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Attaches the file path.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&WaveError> for JsonError {
    fn from(err: &WaveError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

/// Top-level JSON document for a conversion or check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertOutput {
    /// Whether the input was accepted (and, unless checking, converted)
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Result details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ConvertResult>,
}

/// Details of an accepted input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResult {
    /// Input file path
    pub input: String,
    /// Generated header path (absent in check mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Decoded format fields
    pub format: FormatDescriptor,
    /// Number of sample bytes (absent in check mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_count: Option<usize>,
    /// Audio duration in seconds (absent in check mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
}

impl ConvertOutput {
    /// Creates a successful output.
    pub fn success(result: ConvertResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}
