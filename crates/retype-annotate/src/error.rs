//! Error types for return-type resolution.

use retype_common::Position;
use retype_syntax::{NodeIndex, SyntaxKind};

/// The oracle could not produce a type, a return type, or a rendering.
///
/// Oracle implementations construct these; the annotator passes them through
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeResolutionError {
    #[error("no type is available for {node:?}")]
    UnresolvedType { node: NodeIndex },
    #[error("signature return type could not be resolved: {0}")]
    UnresolvedReturnType(String),
    #[error("type could not be rendered: {0}")]
    Render(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AnnotateError {
    /// Resolution failed for one function; `source` is the oracle's error.
    #[error("cannot infer the return type of {kind} at {position}")]
    Resolution {
        function: NodeIndex,
        kind: SyntaxKind,
        position: Position,
        #[source]
        source: TypeResolutionError,
    },
    #[error("invalid annotate options: {0}")]
    Options(#[from] serde_json::Error),
}
