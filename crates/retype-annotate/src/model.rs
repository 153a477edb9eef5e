//! Output records.
//!
//! Field names serialize in camelCase so the JSON matches what editor-side
//! tooling already consumes: `{ name?, inferredReturnType, textToInsert? }`.

use retype_common::Position;
use serde::{Deserialize, Serialize};

/// A single point insertion: put `text` at `position` in the original file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextToInsert {
    pub position: Position,
    /// Separator followed by the rendered type, e.g. `": number"`.
    pub text: String,
}

/// One resolved call signature of one function-like node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitedFunction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub inferred_return_type: String,
    /// Present only when an annotation is missing and can be placed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_to_insert: Option<TextToInsert>,
}
