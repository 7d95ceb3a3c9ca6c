//! Line classifier — purely lexical, line-local.
//!
//! Each line of code text falls into one of four categories, checked in
//! priority order: procedure-open, procedure-close, doc-comment, plain.
//! No understanding of NetLogo expressions is needed (or attempted).

use crate::model::ProcedureKind;
use regex::Regex;
use std::sync::LazyLock;

// `to`/`to-report`, an identifier, an optional bracket parameter list, and
// optionally a trailing `;` comment. NetLogo identifiers allow most symbol
// characters (`?`, `!`, `=`, `<`, `>`, ...), so the class is wide.
static RE_PROC_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(to|to-report)\s+([A-Za-z_][A-Za-z0-9_.?=*!<>:#+/%$^'&-]*)(?:\s+\[([^\]]*)\])?\s*(?:;.*)?$",
    )
    .unwrap()
});

/// Prefix marking a doc-comment line: three semicolons and one space.
const DOC_PREFIX: &str = ";;; ";

/// One classified line of code text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    ProcedureOpen {
        name: String,
        kind: ProcedureKind,
        parameters: Vec<String>,
    },
    ProcedureClose,
    DocComment { content: String },
    Plain,
}

/// Classify a single raw source line. Indentation and trailing whitespace
/// are ignored; everything else is significant.
pub fn classify(line: &str) -> LineClass {
    let line = line.trim();

    if let Some(caps) = RE_PROC_OPEN.captures(line) {
        let kind = if &caps[1] == "to-report" {
            ProcedureKind::Reporter
        } else {
            ProcedureKind::Command
        };
        let parameters = caps
            .get(3)
            .map(|m| m.as_str().split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();
        return LineClass::ProcedureOpen {
            name: caps[2].to_string(),
            kind,
            parameters,
        };
    }

    if line == "end" {
        return LineClass::ProcedureClose;
    }

    if let Some(content) = line.strip_prefix(DOC_PREFIX) {
        return LineClass::DocComment {
            content: content.trim().to_string(),
        };
    }

    LineClass::Plain
}
