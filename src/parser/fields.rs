//! Metadata field parsing for doc-comment content.
//!
//! Tag recognition and free-text accumulation behave the same way in module
//! and procedure scope; a scope differs only in which tags it accepts, so
//! one accumulator is parameterized by a tag set.

use crate::error::{Warning, WarningKind};

/// Whether a later occurrence of a tag overwrites or accumulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Single,
    Multi,
}

/// A tag recognized within one scope.
pub struct TagSpec {
    pub name: &'static str,
    pub arity: Arity,
}

/// Tags recognized outside any procedure.
pub const MODULE_TAGS: &[TagSpec] = &[
    TagSpec { name: "@author", arity: Arity::Single },
    TagSpec { name: "@email", arity: Arity::Single },
    TagSpec { name: "@date", arity: Arity::Single },
    TagSpec { name: "@version", arity: Arity::Single },
];

/// Tags recognized between a procedure's `to`/`to-report` and its `end`.
pub const PROCEDURE_TAGS: &[TagSpec] = &[
    TagSpec { name: "@param", arity: Arity::Multi },
    TagSpec { name: "@report", arity: Arity::Single },
];

/// One recognized tag occurrence.
#[derive(Debug)]
pub struct MetadataField {
    pub tag: &'static str,
    pub value: String,
    /// 1-indexed source line the tag appeared on.
    pub line: usize,
}

/// Collects fields and free text for one scope.
pub struct FieldAccumulator {
    tags: &'static [TagSpec],
    /// All recognized occurrences, encounter order. Consumers take the last
    /// occurrence for single-valued tags.
    pub fields: Vec<MetadataField>,
    /// Untagged content lines, encounter order.
    pub free_text: Vec<String>,
}

impl FieldAccumulator {
    pub fn new(tags: &'static [TagSpec]) -> Self {
        FieldAccumulator {
            tags,
            fields: Vec::new(),
            free_text: Vec::new(),
        }
    }

    /// Feed one doc-comment content line.
    ///
    /// A recognized leading tag token becomes a field; a repeat of a
    /// single-valued tag warns. An unrecognized `@` token warns and the
    /// whole line falls back to free text, as does anything else.
    pub fn accumulate(&mut self, content: &str, line: usize, warnings: &mut Vec<Warning>) {
        let (token, rest) = match content.split_once(char::is_whitespace) {
            Some((token, rest)) => (token, rest.trim()),
            None => (content, ""),
        };

        if token.starts_with('@') {
            if let Some(known) = self.tags.iter().find(|t| t.name == token) {
                if known.arity == Arity::Single && self.fields.iter().any(|f| f.tag == known.name) {
                    warnings.push(Warning {
                        line,
                        kind: WarningKind::DuplicateMetadata {
                            tag: known.name.to_string(),
                        },
                    });
                }
                self.fields.push(MetadataField {
                    tag: known.name,
                    value: rest.to_string(),
                    line,
                });
                return;
            }
            warnings.push(Warning {
                line,
                kind: WarningKind::UnrecognizedTag {
                    tag: token.to_string(),
                },
            });
        }

        self.free_text.push(content.to_string());
    }

    /// Last value recorded for a single-valued tag.
    pub fn single(&self, tag: &str) -> Option<String> {
        self.fields
            .iter()
            .rev()
            .find(|f| f.tag == tag)
            .map(|f| f.value.clone())
    }

    /// All occurrences of a tag, in encounter order.
    pub fn all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a MetadataField> + 'a {
        self.fields.iter().filter(move |f| f.tag == tag)
    }
}
