//! C source emission for extracted sample data.
//!
//! The generated text declares a length constant and a byte array suitable
//! for inclusion in firmware, e.g.
//!
//! ```text
//! // Generated by wave2c from beep.wav
//! const long pcm_length = 3;
//! const unsigned char pcm_samples[] PROGMEM = {
//!     0x01, 0x02, 0x03
//! };
//! ```

use std::io::{self, Write};

use thiserror::Error;

/// Default name of the length constant.
pub const DEFAULT_LENGTH_NAME: &str = "pcm_length";

/// Default name of the sample array.
pub const DEFAULT_ARRAY_NAME: &str = "pcm_samples";

/// Default number of array elements per line.
pub const DEFAULT_BYTES_PER_LINE: usize = 12;

/// Errors raised by invalid emitter options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    /// A name is not a valid C identifier.
    #[error("invalid C identifier: '{0}'")]
    InvalidIdentifier(String),

    /// Length constant and array share a name.
    #[error("length constant and array must have different names, both are '{0}'")]
    DuplicateIdentifier(String),

    /// Zero elements per line.
    #[error("bytes per line must be at least 1")]
    InvalidLineWidth,
}

/// Options controlling the generated C text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CArrayOptions {
    /// Name of the `const long` length constant.
    pub length_name: String,
    /// Name of the `const unsigned char[]` array.
    pub array_name: String,
    /// Place the array in flash with the AVR `PROGMEM` attribute.
    pub progmem: bool,
    /// Array elements per line.
    pub bytes_per_line: usize,
}

impl Default for CArrayOptions {
    fn default() -> Self {
        Self {
            length_name: DEFAULT_LENGTH_NAME.to_string(),
            array_name: DEFAULT_ARRAY_NAME.to_string(),
            progmem: true,
            bytes_per_line: DEFAULT_BYTES_PER_LINE,
        }
    }
}

impl CArrayOptions {
    /// Checks identifiers and line width.
    pub fn validate(&self) -> Result<(), EmitError> {
        for name in [&self.length_name, &self.array_name] {
            if !is_c_identifier(name) {
                return Err(EmitError::InvalidIdentifier(name.clone()));
            }
        }
        if self.length_name == self.array_name {
            return Err(EmitError::DuplicateIdentifier(self.array_name.clone()));
        }
        if self.bytes_per_line == 0 {
            return Err(EmitError::InvalidLineWidth);
        }
        Ok(())
    }
}

/// Words that cannot name a declaration in the generated header: the C
/// keywords, the C++ keywords (Arduino sketches compile as C++), and the
/// `PROGMEM` attribute macro.
const RESERVED_WORDS: &[&str] = &[
    // C89
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return",
    "short", "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned",
    "void", "volatile", "while",
    // C99 / C11
    "inline", "restrict", "_Alignas", "_Alignof", "_Atomic", "_Bool", "_Complex", "_Generic",
    "_Imaginary", "_Noreturn", "_Static_assert", "_Thread_local",
    // C++
    "alignas", "alignof", "and", "and_eq", "asm", "bitand", "bitor", "bool", "catch",
    "char16_t", "char32_t", "class", "compl", "constexpr", "const_cast", "decltype", "delete",
    "dynamic_cast", "explicit", "export", "false", "friend", "mutable", "namespace", "new",
    "noexcept", "not", "not_eq", "nullptr", "operator", "or", "or_eq", "private", "protected",
    "public", "reinterpret_cast", "static_assert", "static_cast", "template", "this",
    "thread_local", "throw", "true", "try", "typeid", "typename", "using", "virtual",
    "wchar_t", "xor", "xor_eq",
    // AVR
    "PROGMEM",
];

/// Returns true if `name` is a valid C identifier that is not a reserved
/// word.
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_') && !RESERVED_WORDS.contains(&name)
}

/// Writes the C declarations for `samples`.
///
/// `source_name`, when given, is recorded in a leading comment. Options must
/// have passed [`CArrayOptions::validate`].
pub fn write_c_array<W: Write>(
    writer: &mut W,
    samples: &[u8],
    options: &CArrayOptions,
    source_name: Option<&str>,
) -> io::Result<()> {
    if let Some(name) = source_name {
        let name: String = name.chars().filter(|c| !c.is_control()).collect();
        writeln!(writer, "// Generated by wave2c from {name}")?;
    }
    writeln!(
        writer,
        "const long {} = {};",
        options.length_name,
        samples.len()
    )?;
    let attribute = if options.progmem { " PROGMEM" } else { "" };
    writeln!(
        writer,
        "const unsigned char {}[]{attribute} = {{",
        options.array_name
    )?;

    if samples.is_empty() {
        // C89 forbids an empty initializer list
        writeln!(writer, "    0x00")?;
    } else {
        let width = options.bytes_per_line.max(1);
        let lines = samples.len().div_ceil(width);
        for (i, line) in samples.chunks(width).enumerate() {
            let body = line
                .iter()
                .map(|b| format!("0x{b:02x}"))
                .collect::<Vec<_>>()
                .join(", ");
            let sep = if i + 1 < lines { "," } else { "" };
            writeln!(writer, "    {body}{sep}")?;
        }
    }

    writeln!(writer, "}};")?;
    Ok(())
}

/// Renders the C declarations for `samples` to a string.
pub fn render_c_array(samples: &[u8], options: &CArrayOptions, source_name: Option<&str>) -> String {
    let mut out = Vec::with_capacity(128 + samples.len() * 6);
    write_c_array(&mut out, samples, options, source_name)
        .expect("writing to Vec should not fail");
    String::from_utf8(out).expect("generated C text is ASCII")
}
