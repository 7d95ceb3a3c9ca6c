//! Documentation model built by the parser — format-agnostic.

use serde::Serialize;

/// How a procedure was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcedureKind {
    /// `to` — produces no value.
    Command,
    /// `to-report` — produces a value documented via `@report`.
    Reporter,
}

/// A procedure's declaration as found in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcedureDeclaration {
    pub name: String,
    pub kind: ProcedureKind,
    /// Bracket-list parameters, declaration order.
    pub parameters: Vec<String>,
    /// 1-indexed line of the `to`/`to-report` line.
    pub start_line: usize,
    /// 1-indexed line of the matching `end`.
    pub end_line: usize,
}

impl ProcedureDeclaration {
    /// Source-style signature: `to-report sum-numbers [number1 number2]`.
    pub fn signature(&self) -> String {
        let keyword = match self.kind {
            ProcedureKind::Command => "to",
            ProcedureKind::Reporter => "to-report",
        };
        if self.parameters.is_empty() {
            format!("{} {}", keyword, self.name)
        } else {
            format!("{} {} [{}]", keyword, self.name, self.parameters.join(" "))
        }
    }
}

/// Module-level metadata from the header tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleFields {
    pub author: Option<String>,
    pub email: Option<String>,
    pub date: Option<String>,
    pub version: Option<String>,
}

/// One documented (or undocumented) parameter of a procedure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamDoc {
    pub name: String,
    /// Absent when the parameter has no `@param` tag.
    pub description: Option<String>,
}

/// Documentation for a single procedure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcedureDoc {
    pub declaration: ProcedureDeclaration,
    /// Untagged doc-comment lines, encounter order.
    pub free_text: Vec<String>,
    /// Declared parameters first (declaration order), then any `@param`
    /// entries naming parameters the declaration does not have.
    pub param_docs: Vec<ParamDoc>,
    /// `@report` value, last occurrence.
    pub report_doc: Option<String>,
}

/// The complete documentation for one module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleDoc {
    pub fields: ModuleFields,
    pub free_text: Vec<String>,
    pub procedures: Vec<ProcedureDoc>,
}
