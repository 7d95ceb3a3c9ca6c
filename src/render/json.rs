//! JSON renderer — serializes the documentation model for tooling.

use crate::model::{ModuleDoc, ProcedureDoc};
use crate::render::Renderer;
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct ModulePayload<'a> {
    name: &'a str,
    #[serde(flatten)]
    module: &'a ModuleDoc,
}

impl Renderer for JsonRenderer {
    fn render(&self, module: &str, doc: &ModuleDoc) -> String {
        let payload = ModulePayload {
            name: module,
            module: doc,
        };
        let mut out = serde_json::to_string_pretty(&payload)
            .expect("documentation model serializes to JSON");
        out.push('\n');
        out
    }

    fn render_procedure(&self, _module: &str, procedure: &ProcedureDoc) -> String {
        let mut out = serde_json::to_string_pretty(procedure)
            .expect("documentation model serializes to JSON");
        out.push('\n');
        out
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
