//! Incremental construction of a [`SourceFile`] tree.
//!
//! The builder keeps a stack of open nodes. Tokens and nodes are attached to
//! whichever node is currently open, in call order, so the resulting child
//! lists are already in source order. A node's span is derived from its first
//! and last child when it is finished; a node with no children is an empty
//! span at the cursor.
//!
//! Tokens can be placed two ways:
//! - [`TreeBuilder::token`] takes an explicit byte span (what a host parser has);
//! - [`TreeBuilder::token_text`] finds the lexeme in the text at or after the
//!   cursor, which keeps hand-written trees honest about their offsets.

use crate::node::{Node, NodeArena, NodeIndex};
use crate::source_file::SourceFile;
use crate::syntax_kind::SyntaxKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeBuildError {
    #[error("lexeme `{text}` not found at or after offset {offset}")]
    LexemeNotFound { text: String, offset: u32 },
    #[error("span {pos}..{end} does not fit the source text ({len} bytes)")]
    SpanOutOfBounds { pos: u32, end: u32, len: u32 },
    #[error("no open node to {0}")]
    NoOpenNode(&'static str),
    #[error("{0} node(s) still open")]
    UnclosedNodes(usize),
    #[error("tree has no root node")]
    EmptyTree,
    #[error("a second top-level node was started after the root")]
    MultipleRoots,
}

pub struct TreeBuilder {
    file_name: String,
    source: String,
    arena: NodeArena,
    open: Vec<NodeIndex>,
    root: NodeIndex,
    cursor: u32,
}

impl TreeBuilder {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        TreeBuilder {
            file_name: file_name.into(),
            source: source.into(),
            arena: NodeArena::new(),
            open: Vec::new(),
            root: NodeIndex::NONE,
            cursor: 0,
        }
    }

    /// Byte offset just past the last placed token.
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    /// Open a new node as the last child of the current node.
    pub fn start_node(&mut self, kind: SyntaxKind) -> Result<NodeIndex, TreeBuildError> {
        let index = self.arena.add(Node::new(kind, self.cursor, self.cursor));
        self.link(index)?;
        self.open.push(index);
        Ok(index)
    }

    /// Close the current node, fixing its span from its children.
    pub fn finish_node(&mut self) -> Result<NodeIndex, TreeBuildError> {
        let index = self
            .open
            .pop()
            .ok_or(TreeBuildError::NoOpenNode("finish"))?;

        let span = {
            let children = self.arena.children(index);
            match (children.first(), children.last()) {
                (Some(&first), Some(&last)) => {
                    let pos = self.arena.get(first).map(|n| n.pos);
                    let end = self.arena.get(last).map(|n| n.end);
                    pos.zip(end)
                }
                _ => None,
            }
        };
        if let (Some((pos, end)), Some(node)) = (span, self.arena.get_mut(index)) {
            node.pos = pos;
            node.end = end;
        }

        Ok(index)
    }

    /// Place a leaf token with an explicit byte span.
    pub fn token(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
    ) -> Result<NodeIndex, TreeBuildError> {
        let len = self.source.len() as u32;
        if pos > end || end > len {
            return Err(TreeBuildError::SpanOutOfBounds { pos, end, len });
        }
        let index = self.arena.add(Node::new(kind, pos, end));
        self.link(index)?;
        self.cursor = end;
        Ok(index)
    }

    /// Place a leaf token by locating `text` at or after the cursor.
    pub fn token_text(&mut self, kind: SyntaxKind, text: &str) -> Result<NodeIndex, TreeBuildError> {
        let not_found = || TreeBuildError::LexemeNotFound {
            text: text.to_string(),
            offset: self.cursor,
        };
        let rest = self.source.get(self.cursor as usize..).ok_or_else(not_found)?;
        let found = rest.find(text).ok_or_else(not_found)?;

        let pos = self.cursor + found as u32;
        self.token(kind, pos, pos + text.len() as u32)
    }

    /// Place an identifier and record it as the current node's name.
    pub fn name_token(&mut self, text: &str) -> Result<NodeIndex, TreeBuildError> {
        if self.open.is_empty() {
            return Err(TreeBuildError::NoOpenNode("name"));
        }
        let name = self.token_text(SyntaxKind::Identifier, text)?;
        self.set_name(name)?;
        Ok(name)
    }

    /// Record an already placed node as the current node's name.
    pub fn set_name(&mut self, name: NodeIndex) -> Result<(), TreeBuildError> {
        let current = *self.open.last().ok_or(TreeBuildError::NoOpenNode("name"))?;
        if let Some(node) = self.arena.get_mut(current) {
            node.name = name;
        }
        Ok(())
    }

    pub fn finish(self) -> Result<SourceFile, TreeBuildError> {
        if !self.open.is_empty() {
            return Err(TreeBuildError::UnclosedNodes(self.open.len()));
        }
        if self.root.is_none() {
            return Err(TreeBuildError::EmptyTree);
        }
        Ok(SourceFile::new(
            self.file_name,
            self.source,
            self.arena,
            self.root,
        ))
    }

    fn link(&mut self, index: NodeIndex) -> Result<(), TreeBuildError> {
        match self.open.last() {
            Some(&parent) => {
                self.arena.attach(parent, index);
            }
            None if self.root.is_none() => self.root = index,
            None => return Err(TreeBuildError::MultipleRoots),
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/builder_tests.rs"]
mod tests;
