//! Procedure boundary tracking and model building.
//!
//! A two-state machine drives the scan: module scope, or exactly one open
//! procedure. Doc-comment lines feed the field accumulator of whichever
//! scope is active; the scan only succeeds if every `to`/`to-report` saw
//! its `end` by the end of input.

use crate::error::{ParseError, Warning, WarningKind};
use crate::model::{ModuleDoc, ModuleFields, ParamDoc, ProcedureDeclaration, ProcedureDoc, ProcedureKind};
use crate::parser::fields::{FieldAccumulator, MODULE_TAGS, PROCEDURE_TAGS};
use crate::parser::lines::{self, LineClass};
use crate::parser::ParseOutcome;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// The currently open procedure and its buffered doc comments.
struct OpenProcedure {
    name: String,
    kind: ProcedureKind,
    parameters: Vec<String>,
    start_line: usize,
    acc: FieldAccumulator,
}

/// Scan code text line by line into a documentation model.
pub fn scan(code: &str) -> Result<ParseOutcome, ParseError> {
    let mut open: Option<OpenProcedure> = None;
    let mut module_acc = FieldAccumulator::new(MODULE_TAGS);
    let mut warnings: Vec<Warning> = Vec::new();
    let mut procedures: Vec<ProcedureDoc> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (idx, raw) in code.lines().enumerate() {
        let line = idx + 1;
        match lines::classify(raw) {
            LineClass::ProcedureOpen {
                name,
                kind,
                parameters,
            } => {
                if let Some(ref current) = open {
                    return Err(ParseError::NestedProcedure {
                        line,
                        name,
                        open: current.name.clone(),
                        open_line: current.start_line,
                    });
                }
                open = Some(OpenProcedure {
                    name,
                    kind,
                    parameters,
                    start_line: line,
                    acc: FieldAccumulator::new(PROCEDURE_TAGS),
                });
            }
            LineClass::ProcedureClose => match open.take() {
                Some(current) => {
                    let doc = close_procedure(current, line, &mut warnings);
                    match seen.entry(doc.declaration.name.clone()) {
                        Entry::Occupied(entry) => warnings.push(Warning {
                            line: doc.declaration.start_line,
                            kind: WarningKind::DuplicateProcedureName {
                                name: doc.declaration.name.clone(),
                                first_line: *entry.get(),
                            },
                        }),
                        Entry::Vacant(entry) => {
                            entry.insert(doc.declaration.start_line);
                        }
                    }
                    procedures.push(doc);
                }
                None => return Err(ParseError::UnmatchedEnd { line }),
            },
            LineClass::DocComment { content } => {
                let acc = match open.as_mut() {
                    Some(current) => &mut current.acc,
                    None => &mut module_acc,
                };
                acc.accumulate(&content, line, &mut warnings);
            }
            LineClass::Plain => {}
        }
    }

    if let Some(current) = open {
        return Err(ParseError::UnterminatedProcedure {
            name: current.name,
            start_line: current.start_line,
        });
    }

    // Declaration-aware warnings are pushed at procedure close; restore
    // source-line order before handing them out.
    warnings.sort_by_key(|w| w.line);

    let module = ModuleDoc {
        fields: ModuleFields {
            author: module_acc.single("@author"),
            email: module_acc.single("@email"),
            date: module_acc.single("@date"),
            version: module_acc.single("@version"),
        },
        free_text: module_acc.free_text,
        procedures,
    };

    Ok(ParseOutcome { module, warnings })
}

/// Build a ProcedureDoc from a closing procedure, reconciling `@param`
/// fields against the declared parameter list.
fn close_procedure(
    open: OpenProcedure,
    end_line: usize,
    warnings: &mut Vec<Warning>,
) -> ProcedureDoc {
    let OpenProcedure {
        name,
        kind,
        parameters,
        start_line,
        acc,
    } = open;

    // Last @param wins per name; unknown names are kept, after the declared
    // parameters, and warned about.
    let mut described: HashMap<String, Option<String>> = HashMap::new();
    let mut extras: Vec<ParamDoc> = Vec::new();
    for field in acc.all("@param") {
        let (param, description) = split_param(&field.value);
        if parameters.iter().any(|p| p == param) {
            described.insert(param.to_string(), description);
        } else {
            warnings.push(Warning {
                line: field.line,
                kind: WarningKind::UnknownParameter {
                    procedure: name.clone(),
                    parameter: param.to_string(),
                },
            });
            extras.push(ParamDoc {
                name: param.to_string(),
                description,
            });
        }
    }

    let mut param_docs: Vec<ParamDoc> = parameters
        .iter()
        .map(|p| ParamDoc {
            name: p.clone(),
            description: described.get(p.as_str()).cloned().flatten(),
        })
        .collect();
    param_docs.extend(extras);

    let report_doc = acc.single("@report");
    if report_doc.is_some() && kind == ProcedureKind::Command {
        if let Some(field) = acc.all("@report").last() {
            warnings.push(Warning {
                line: field.line,
                kind: WarningKind::MisplacedTag {
                    procedure: name.clone(),
                    tag: "@report".to_string(),
                },
            });
        }
    }

    ProcedureDoc {
        declaration: ProcedureDeclaration {
            name,
            kind,
            parameters,
            start_line,
            end_line,
        },
        free_text: acc.free_text,
        param_docs,
        report_doc,
    }
}

/// Split an `@param` value into the parameter name and its description.
fn split_param(value: &str) -> (&str, Option<String>) {
    match value.split_once(char::is_whitespace) {
        Some((name, rest)) => {
            let rest = rest.trim();
            (name, (!rest.is_empty()).then(|| rest.to_string()))
        }
        None => (value, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_with_free_text_only() {
        let outcome = scan("to setup\n  ;;; Sets up the simulation\nend\n").unwrap();
        assert!(outcome.warnings.is_empty());

        let procs = &outcome.module.procedures;
        assert_eq!(procs.len(), 1);
        assert_eq!(procs[0].declaration.name, "setup");
        assert_eq!(procs[0].declaration.kind, ProcedureKind::Command);
        assert_eq!(procs[0].declaration.start_line, 1);
        assert_eq!(procs[0].declaration.end_line, 3);
        assert!(procs[0].param_docs.is_empty());
        assert!(procs[0].report_doc.is_none());
        assert_eq!(procs[0].free_text, vec!["Sets up the simulation"]);
    }

    #[test]
    fn param_tag_matches_declaration() {
        let src = "to setup-turtles [num-turtles]\n\
                   \x20 ;;; @param num-turtles Number of turtles to create initially\n\
                   \x20 create-turtles num-turtles\n\
                   end\n";
        let outcome = scan(src).unwrap();
        assert!(outcome.warnings.is_empty());

        let doc = &outcome.module.procedures[0];
        assert_eq!(
            doc.param_docs,
            vec![ParamDoc {
                name: "num-turtles".to_string(),
                description: Some("Number of turtles to create initially".to_string()),
            }]
        );
    }

    #[test]
    fn reporter_with_params_and_report() {
        let src = "to-report sum-numbers [number1 number2]\n\
                   \x20 ;;; @param number1 The first number\n\
                   \x20 ;;; @param number2 The second number\n\
                   \x20 ;;; @report A sum of the first two numbers\n\
                   \x20 report number1 + number2\n\
                   end\n";
        let outcome = scan(src).unwrap();
        assert!(outcome.warnings.is_empty());

        let doc = &outcome.module.procedures[0];
        assert_eq!(doc.declaration.kind, ProcedureKind::Reporter);
        assert_eq!(doc.param_docs.len(), 2);
        assert_eq!(doc.param_docs[0].name, "number1");
        assert_eq!(doc.param_docs[1].name, "number2");
        assert_eq!(
            doc.report_doc.as_deref(),
            Some("A sum of the first two numbers")
        );
    }

    #[test]
    fn module_header_fields() {
        let src = ";;; @author Jane Modeler\n\
                   ;;; @email jane@example.org\n\
                   ;;; @version 1.2\n\
                   ;;; @date 2024-05-01\n";
        let outcome = scan(src).unwrap();
        assert!(outcome.warnings.is_empty());

        let fields = &outcome.module.fields;
        assert_eq!(fields.author.as_deref(), Some("Jane Modeler"));
        assert_eq!(fields.email.as_deref(), Some("jane@example.org"));
        assert_eq!(fields.version.as_deref(), Some("1.2"));
        assert_eq!(fields.date.as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn undocumented_params_keep_declaration_order() {
        let src = "to shuffle [deck seed]\n\
                   \x20 ;;; @param seed Random seed\n\
                   end\n";
        let outcome = scan(src).unwrap();

        let docs = &outcome.module.procedures[0].param_docs;
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].name, "deck");
        assert!(docs[0].description.is_none());
        assert_eq!(docs[1].name, "seed");
        assert_eq!(docs[1].description.as_deref(), Some("Random seed"));
    }

    #[test]
    fn unknown_param_recorded_and_warned() {
        let src = "to go\n  ;;; @param speed How fast\nend\n";
        let outcome = scan(src).unwrap();

        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(
            outcome.warnings[0].kind,
            WarningKind::UnknownParameter {
                procedure: "go".to_string(),
                parameter: "speed".to_string(),
            }
        );
        // The field is still recorded, after the declared parameters.
        let docs = &outcome.module.procedures[0].param_docs;
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].name, "speed");
        assert_eq!(docs[0].description.as_deref(), Some("How fast"));
    }

    #[test]
    fn report_on_command_warns_but_keeps_value() {
        let src = "to go\n  ;;; @report Nothing really\nend\n";
        let outcome = scan(src).unwrap();

        assert_eq!(outcome.warnings.len(), 1);
        assert!(matches!(
            outcome.warnings[0].kind,
            WarningKind::MisplacedTag { .. }
        ));
        assert_eq!(
            outcome.module.procedures[0].report_doc.as_deref(),
            Some("Nothing really")
        );
    }

    #[test]
    fn duplicate_param_last_wins() {
        let src = "to go [speed]\n\
                   \x20 ;;; @param speed Old description\n\
                   \x20 ;;; @param speed New description\n\
                   end\n";
        let outcome = scan(src).unwrap();
        assert_eq!(
            outcome.module.procedures[0].param_docs[0]
                .description
                .as_deref(),
            Some("New description")
        );
    }

    #[test]
    fn duplicate_author_overwrites_and_warns() {
        let src = ";;; @author First\n;;; @author Second\n";
        let outcome = scan(src).unwrap();
        assert_eq!(outcome.module.fields.author.as_deref(), Some("Second"));
        assert_eq!(
            outcome.warnings[0].kind,
            WarningKind::DuplicateMetadata {
                tag: "@author".to_string(),
            }
        );
    }

    #[test]
    fn duplicate_procedure_name_notice() {
        let src = "to go\nend\nto go\nend\n";
        let outcome = scan(src).unwrap();
        assert_eq!(outcome.module.procedures.len(), 2);
        assert_eq!(
            outcome.warnings[0].kind,
            WarningKind::DuplicateProcedureName {
                name: "go".to_string(),
                first_line: 1,
            }
        );
        assert_eq!(outcome.warnings[0].line, 3);
    }

    #[test]
    fn end_in_module_scope_fails() {
        assert_eq!(
            scan("end\n"),
            Err(ParseError::UnmatchedEnd { line: 1 })
        );
    }

    #[test]
    fn nested_open_names_earlier_procedure() {
        assert_eq!(
            scan("to setup\nto go\nend\n"),
            Err(ParseError::NestedProcedure {
                line: 2,
                name: "go".to_string(),
                open: "setup".to_string(),
                open_line: 1,
            })
        );
    }

    #[test]
    fn unterminated_procedure_fails() {
        assert_eq!(
            scan("to setup\n  clear-all\n"),
            Err(ParseError::UnterminatedProcedure {
                name: "setup".to_string(),
                start_line: 1,
            })
        );
    }

    #[test]
    fn procedure_count_matches_open_close_pairs() {
        let src = "to a\nend\nto b\nend\nto-report c\nend\n";
        let outcome = scan(src).unwrap();
        assert_eq!(outcome.module.procedures.len(), 3);
    }

    #[test]
    fn doc_comments_between_procedures_stay_in_module_scope() {
        let src = "to a\nend\n;;; between procedures\nto b\nend\n";
        let outcome = scan(src).unwrap();
        assert_eq!(outcome.module.free_text, vec!["between procedures"]);
        assert!(outcome.module.procedures[1].free_text.is_empty());
    }

    #[test]
    fn plain_lines_only_consume_line_numbers() {
        let src = "\n\nglobals [ grass ]\n\nto setup\nend\n";
        let outcome = scan(src).unwrap();
        let decl = &outcome.module.procedures[0].declaration;
        assert_eq!(decl.start_line, 5);
        assert_eq!(decl.end_line, 6);
    }

    #[test]
    fn warnings_come_out_in_source_line_order() {
        let src = "to go\n\
                   \x20 ;;; @param speed How fast\n\
                   \x20 ;;; @bogus leftover\n\
                   end\n";
        let outcome = scan(src).unwrap();

        assert_eq!(outcome.warnings.len(), 2);
        assert_eq!(outcome.warnings[0].line, 2);
        assert!(matches!(
            outcome.warnings[0].kind,
            WarningKind::UnknownParameter { .. }
        ));
        assert_eq!(outcome.warnings[1].line, 3);
        assert!(matches!(
            outcome.warnings[1].kind,
            WarningKind::UnrecognizedTag { .. }
        ));
    }

    #[test]
    fn scanning_twice_is_idempotent() {
        let src = ";;; @author Jane\n\
                   ;;; @author Twice\n\
                   ;;; header text\n\
                   to go [speed]\n\
                   \x20 ;;; Moves everyone\n\
                   \x20 ;;; @param speed Step size\n\
                   \x20 ;;; @unknown tag\n\
                   end\n";
        let first = scan(src).unwrap();
        let second = scan(src).unwrap();
        assert_eq!(first, second);
    }
}
