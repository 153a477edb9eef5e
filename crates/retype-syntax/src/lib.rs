//! Syntax tree storage for the retype annotator.
//!
//! Parsing is the host's job. A host parser (or a test) describes the tree it
//! produced through [`TreeBuilder`], which yields an immutable [`SourceFile`]:
//! the text, its [`LineMap`](retype_common::LineMap), and a [`NodeArena`] whose
//! nodes are addressed by [`NodeIndex`].

pub mod builder;
pub use builder::{TreeBuildError, TreeBuilder};

pub mod node;
pub use node::{Node, NodeArena, NodeIndex};

pub mod source_file;
pub use source_file::SourceFile;

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;
