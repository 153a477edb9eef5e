//! Where (and whether) a return-type annotation goes.
//!
//! The planner looks only at the *direct* children of a function-like node.
//! Its own parameter list closes with a `)` child, and its own return-type
//! annotation, if any, starts with a `:` child after that. Colons from
//! parameter annotations or nested function types sit deeper in the tree and
//! are never seen here.

use crate::model::TextToInsert;
use retype_syntax::{NodeIndex, SourceFile, SyntaxKind};
use tracing::debug;

/// Placed between the closing parenthesis and the rendered type.
pub const RETURN_TYPE_SEPARATOR: &str = ": ";

/// Outcome of planning one function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertionPlan {
    Insert(TextToInsert),
    /// A `:` follows the parameter list; nothing to do.
    AlreadyAnnotated,
    /// No `)` among the direct children, e.g. `x => x * 2`.
    MissingCloseParen,
}

impl InsertionPlan {
    pub fn into_insertion(self) -> Option<TextToInsert> {
        match self {
            InsertionPlan::Insert(insertion) => Some(insertion),
            InsertionPlan::AlreadyAnnotated | InsertionPlan::MissingCloseParen => None,
        }
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, InsertionPlan::Insert(_))
    }
}

#[derive(Clone, Copy, Debug)]
enum ScanState {
    SeekingParen,
    SeekingColon { paren_end: u32 },
    Annotated,
}

/// Plan the annotation for `node`, given its rendered return type.
pub fn plan(file: &SourceFile, node: NodeIndex, inferred_type: &str) -> InsertionPlan {
    let arena = file.arena();
    let mut state = ScanState::SeekingParen;

    for &child in arena.children(node) {
        let Some(token) = arena.get(child) else {
            continue;
        };
        match (state, token.kind) {
            // The last `)` wins.
            (_, SyntaxKind::CloseParenToken) => {
                state = ScanState::SeekingColon {
                    paren_end: token.end,
                };
            }
            (ScanState::SeekingColon { .. }, SyntaxKind::ColonToken) => {
                state = ScanState::Annotated;
                break;
            }
            _ => {}
        }
    }

    match state {
        ScanState::SeekingColon { paren_end } => InsertionPlan::Insert(TextToInsert {
            position: file.position_of(paren_end),
            text: format!("{RETURN_TYPE_SEPARATOR}{inferred_type}"),
        }),
        ScanState::Annotated => {
            debug!(?node, "return type already annotated");
            InsertionPlan::AlreadyAnnotated
        }
        ScanState::SeekingParen => {
            debug!(
                ?node,
                kind = ?arena.kind(node),
                "no closing parenthesis among direct children, skipping insertion"
            );
            InsertionPlan::MissingCloseParen
        }
    }
}

/// Just the insertion, if one is needed and placeable.
pub fn plan_insertion(file: &SourceFile, node: NodeIndex, inferred_type: &str) -> Option<TextToInsert> {
    plan(file, node, inferred_type).into_insertion()
}

#[cfg(test)]
#[path = "../tests/planner_tests.rs"]
mod tests;
