//! Parsing pipeline: container unwrapping, line classification, procedure
//! boundary tracking, and metadata field extraction.

pub mod container;
pub mod fields;
pub mod lines;
pub mod scan;

use crate::error::{ParseError, Warning};
use crate::model::ModuleDoc;

/// Input format hint supplied by the file-reading collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Bare code text (`.nls`, stdin).
    Bare,
    /// Multi-section `.nlogo` save format; the code is the first section.
    Nlogo,
}

/// Result of a successful run: the model plus any non-fatal warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    pub module: ModuleDoc,
    pub warnings: Vec<Warning>,
}

/// Parse source text into a documentation model.
///
/// Single pass, deterministic, no state kept between runs.
pub fn parse(input: &str, format: SourceFormat) -> Result<ParseOutcome, ParseError> {
    let code = container::unwrap(input, format)?;
    scan::scan(code)
}
