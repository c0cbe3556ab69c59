//! CLI command implementations

pub mod convert;
pub mod json_output;
