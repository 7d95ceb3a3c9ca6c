//! HTML renderer — standalone page with inline styling.

use crate::model::{ModuleDoc, ModuleFields, ProcedureDoc};
use crate::render::Renderer;
use crate::toc;

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, module: &str, doc: &ModuleDoc) -> String {
        let mut out = String::new();
        out.push_str(&page_head(module));

        out.push_str(&format!("<h1>{}</h1>\n", html_escape(module)));
        out.push_str(&render_metadata(&doc.fields));

        if !doc.free_text.is_empty() {
            out.push_str(&render_paragraph(&doc.free_text));
        }

        if !doc.procedures.is_empty() {
            out.push_str("<h2>Index</h2>\n<ul>\n");
            for procedure in &doc.procedures {
                let name = &procedure.declaration.name;
                out.push_str(&format!(
                    "  <li><a href=\"#{}\">{}</a></li>\n",
                    html_escape(&toc::slug(name)),
                    html_escape(name)
                ));
            }
            out.push_str("</ul>\n");
        }

        for procedure in &doc.procedures {
            out.push_str(&render_procedure_html(procedure));
        }

        out.push_str("</body>\n</html>\n");
        out
    }

    fn render_procedure(&self, _module: &str, procedure: &ProcedureDoc) -> String {
        let mut out = page_head(&procedure.declaration.name);
        out.push_str(&render_procedure_html(procedure));
        out.push_str("</body>\n</html>\n");
        out
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn page_head(title: &str) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", html_escape(title)));
    out.push_str("<style>\n");
    out.push_str("body { font-family: system-ui, sans-serif; max-width: 48em; margin: 2em auto; padding: 0 1em; }\n");
    out.push_str("code { background: #f4f4f4; padding: 0.15em 0.3em; border-radius: 3px; }\n");
    out.push_str("table { border-collapse: collapse; }\n");
    out.push_str("th, td { border: 1px solid #ccc; padding: 0.3em 0.6em; text-align: left; }\n");
    out.push_str("dt { font-weight: bold; margin-top: 0.5em; }\n");
    out.push_str("dd { margin-left: 1.5em; }\n");
    out.push_str("</style>\n");
    out.push_str("</head>\n<body>\n");
    out
}

/// Module metadata as a definition list, one entry per present field.
fn render_metadata(fields: &ModuleFields) -> String {
    let entries = [
        ("Author", &fields.author),
        ("E-mail", &fields.email),
        ("Version", &fields.version),
        ("Date", &fields.date),
    ];
    let mut out = String::new();
    for (label, value) in entries {
        if let Some(v) = value {
            out.push_str(&format!(
                "  <dt>{}</dt><dd>{}</dd>\n",
                label,
                html_escape(v)
            ));
        }
    }
    if out.is_empty() {
        return out;
    }
    format!("<dl>\n{}</dl>\n", out)
}

/// Free-text lines as one paragraph with explicit breaks.
fn render_paragraph(lines: &[String]) -> String {
    let body = lines
        .iter()
        .map(|l| html_escape(l))
        .collect::<Vec<_>>()
        .join("<br/>\n");
    format!("<p>{}</p>\n", body)
}

fn render_procedure_html(procedure: &ProcedureDoc) -> String {
    let mut out = String::new();
    let decl = &procedure.declaration;

    out.push_str(&format!(
        "<h3 id=\"{}\">{}</h3>\n",
        html_escape(&toc::slug(&decl.name)),
        html_escape(&decl.name)
    ));
    out.push_str(&format!(
        "<p><code>{}</code></p>\n",
        html_escape(&decl.signature())
    ));

    if !procedure.free_text.is_empty() {
        out.push_str(&render_paragraph(&procedure.free_text));
    }

    if !procedure.param_docs.is_empty() {
        out.push_str("<h4>Parameters</h4>\n");
        out.push_str("<table>\n  <tr><th>Parameter</th><th>Contents</th></tr>\n");
        for param in &procedure.param_docs {
            out.push_str(&format!(
                "  <tr><td><code>{}</code></td><td>{}</td></tr>\n",
                html_escape(&param.name),
                html_escape(param.description.as_deref().unwrap_or(""))
            ));
        }
        out.push_str("</table>\n");
    }

    if let Some(ref report) = procedure.report_doc {
        out.push_str("<h4>Return value</h4>\n");
        out.push_str(&format!("<p>{}</p>\n", html_escape(report)));
    }

    out
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
