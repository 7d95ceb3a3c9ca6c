//! Unwraps the code section from raw file content.
//!
//! A `.nlogo` save file holds several sections (code, interface, info,
//! version, ...) separated by marker lines; the code is always the first
//! section. Bare code files pass through unchanged.

use crate::error::ParseError;
use crate::parser::SourceFormat;

/// Marker line separating the sections of a `.nlogo` save file.
pub const SECTION_SEPARATOR: &str = "@#$#@#$#@";

/// Return the code-text segment of `input` according to the format hint.
pub fn unwrap(input: &str, format: SourceFormat) -> Result<&str, ParseError> {
    match format {
        SourceFormat::Bare => Ok(input),
        SourceFormat::Nlogo => {
            let mut offset = 0;
            for line in input.split_inclusive('\n') {
                if line.trim_end().starts_with(SECTION_SEPARATOR) {
                    return Ok(&input[..offset]);
                }
                offset += line.len();
            }
            Err(ParseError::MissingSeparator)
        }
    }
}
