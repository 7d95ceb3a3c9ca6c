//! Fatal errors and non-fatal warnings produced by the parsing pipeline.
//!
//! Fatal conditions stop the run at the offending line. Warnings are
//! collected in encounter order and never change the produced model beyond
//! the documented overwrite rule for single-valued tags.

use std::fmt;
use thiserror::Error;

/// A fatal condition. The parser never guesses past one of these; it stops
/// and reports the offending line and construct.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Multi-section input with no section separator anywhere.
    #[error("malformed container: no `@#$#@#$#@` section separator found")]
    MissingSeparator,

    /// A `to`/`to-report` opened while another procedure is still open.
    #[error("line {line}: `{name}` opened while `{open}` (line {open_line}) has no `end` yet")]
    NestedProcedure {
        line: usize,
        name: String,
        open: String,
        open_line: usize,
    },

    /// An `end` with no open procedure.
    #[error("line {line}: `end` without a matching `to` or `to-report`")]
    UnmatchedEnd { line: usize },

    /// End of input reached inside a procedure.
    #[error("`{name}` (line {start_line}) has no matching `end`")]
    UnterminatedProcedure { name: String, start_line: usize },
}

/// A non-fatal diagnostic attached to a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// 1-indexed source line the diagnostic refers to.
    pub line: usize,
    pub kind: WarningKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// A single-valued tag occurred again; the later value wins.
    DuplicateMetadata { tag: String },
    /// `@param` names a parameter the declaration does not have.
    UnknownParameter { procedure: String, parameter: String },
    /// `@report` on a command procedure; the value is kept anyway.
    MisplacedTag { procedure: String, tag: String },
    /// An `@`-leading token outside the scope's recognized set.
    UnrecognizedTag { tag: String },
    /// Two procedures share a name within the module.
    DuplicateProcedureName { name: String, first_line: usize },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::DuplicateMetadata { tag } => {
                write!(f, "duplicate {tag} overwrites an earlier value")
            }
            WarningKind::UnknownParameter {
                procedure,
                parameter,
            } => write!(
                f,
                "@param {parameter} does not match any parameter of `{procedure}`"
            ),
            WarningKind::MisplacedTag { procedure, tag } => {
                write!(f, "{tag} on command procedure `{procedure}`")
            }
            WarningKind::UnrecognizedTag { tag } => {
                write!(f, "unrecognized tag {tag} treated as description text")
            }
            WarningKind::DuplicateProcedureName { name, first_line } => {
                write!(f, "procedure `{name}` already declared on line {first_line}")
            }
        }
    }
}
