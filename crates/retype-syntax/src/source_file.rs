//! A parsed source file: text, line map and syntax tree together.

use crate::node::{NodeArena, NodeIndex};
use retype_common::{LineMap, Position};

/// Immutable view over one file's text and tree.
///
/// This is the tree-provider side of the annotator contract: it hands out the
/// root node and converts flat offsets into `(line, character)` coordinates
/// using the file's own line breaks.
#[derive(Debug, Clone)]
pub struct SourceFile {
    file_name: String,
    text: String,
    arena: NodeArena,
    root: NodeIndex,
    line_map: LineMap,
}

impl SourceFile {
    pub fn new(
        file_name: impl Into<String>,
        text: impl Into<String>,
        arena: NodeArena,
        root: NodeIndex,
    ) -> Self {
        let text = text.into();
        let line_map = LineMap::build(&text);
        SourceFile {
            file_name: file_name.into(),
            text,
            arena,
            root,
            line_map,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn line_map(&self) -> &LineMap {
        &self.line_map
    }

    /// Zero-based `(line, character)` of a byte offset into this file.
    pub fn position_of(&self, offset: u32) -> Position {
        self.line_map.offset_to_position(offset, &self.text)
    }

    /// Source text covered by a node.
    pub fn text_of(&self, index: NodeIndex) -> Option<&str> {
        let node = self.arena.get(index)?;
        self.text.get(node.pos as usize..node.end as usize)
    }
}
