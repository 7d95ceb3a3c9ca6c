//! GitHub-flavored markdown renderer.

use crate::model::{ModuleDoc, ModuleFields, ParamDoc, ProcedureDoc};
use crate::render::Renderer;
use crate::toc;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, module: &str, doc: &ModuleDoc) -> String {
        let mut output = String::new();
        output.push_str(&format!("# {}\n\n", module));

        let meta = render_metadata(&doc.fields);
        if !meta.is_empty() {
            output.push_str(&meta);
            output.push('\n');
        }

        if !doc.free_text.is_empty() {
            output.push_str(&doc.free_text.join("\n"));
            output.push_str("\n\n");
        }

        if !doc.procedures.is_empty() {
            output.push_str("## Index\n\n");
            for procedure in &doc.procedures {
                output.push_str(&toc::index_item(&procedure.declaration.name));
                output.push('\n');
            }
            output.push('\n');
        }

        for procedure in &doc.procedures {
            output.push_str(&procedure_lines(procedure, "###").join("\n"));
            output.push('\n');
        }

        output
    }

    fn render_procedure(&self, _module: &str, procedure: &ProcedureDoc) -> String {
        let mut output = procedure_lines(procedure, "#").join("\n");
        output.push('\n');
        output
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Module metadata as a bullet list, one line per present field.
fn render_metadata(fields: &ModuleFields) -> String {
    let mut out = String::new();
    let entries = [
        ("Author", &fields.author),
        ("E-mail", &fields.email),
        ("Version", &fields.version),
        ("Date", &fields.date),
    ];
    for (label, value) in entries {
        if let Some(v) = value {
            out.push_str(&format!("* **{}:** {}\n", label, v));
        }
    }
    out
}

/// One procedure's documentation block as a list of lines.
fn procedure_lines(procedure: &ProcedureDoc, heading: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("{} {}\n", heading, procedure.declaration.name));
    lines.push(format!("`{}`", procedure.declaration.signature()));
    lines.push(String::new());

    if !procedure.free_text.is_empty() {
        lines.push(procedure.free_text.join("\n"));
        lines.push(String::new());
    }

    if !procedure.param_docs.is_empty() {
        lines.push(format!("{}# Parameters\n", heading));
        for param in &procedure.param_docs {
            lines.push(format!("* {}", render_param(param)));
        }
        lines.push(String::new());
    }

    if let Some(ref report) = procedure.report_doc {
        lines.push(format!("{}# Reports\n", heading));
        lines.push(report.clone());
        lines.push(String::new());
    }

    lines
}

fn render_param(param: &ParamDoc) -> String {
    match param.description {
        Some(ref description) => format!("**{}**: {}", param.name, description),
        None => format!("**{}**", param.name),
    }
}
