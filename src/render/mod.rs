//! Renderer module — trait-based format dispatch.

pub mod html;
pub mod json;
pub mod markdown;

use crate::model::{ModuleDoc, ProcedureDoc};
use anyhow::{anyhow, Result};

/// Trait for rendering a documentation model into a specific output format.
pub trait Renderer {
    /// Render a complete module document.
    fn render(&self, module: &str, doc: &ModuleDoc) -> String;
    /// Render a single procedure as a standalone document.
    fn render_procedure(&self, module: &str, procedure: &ProcedureDoc) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "html" => Ok(Box::new(html::HtmlRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use markdown, html, or json",
            format
        )),
    }
}
