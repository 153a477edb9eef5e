//! Per-file annotation results.

use crate::model::{TextToInsert, VisitedFunction};
use retype_common::Position;
use retype_syntax::SyntaxKind;
use serde::Serialize;

/// A function whose return type could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFunction {
    pub kind: SyntaxKind,
    /// Start of the function in the source.
    pub position: Position,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationReport {
    pub file_name: String,
    /// One record per resolved signature, in walk order then signature order.
    pub functions: Vec<VisitedFunction>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedFunction>,
}

impl AnnotationReport {
    pub fn new(file_name: impl Into<String>) -> Self {
        AnnotationReport {
            file_name: file_name.into(),
            functions: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Planned insertions, in report order.
    pub fn insertions(&self) -> impl Iterator<Item = &TextToInsert> {
        self.functions
            .iter()
            .filter_map(|visited| visited.text_to_insert.as_ref())
    }

    pub fn insertion_count(&self) -> usize {
        self.insertions().count()
    }

    pub fn has_failures(&self) -> bool {
        !self.skipped.is_empty()
    }
}
