//! Arena storage for syntax nodes.
//!
//! Nodes live contiguously in a [`NodeArena`] and refer to each other through
//! [`NodeIndex`] handles. Every accessor takes an index and degrades to "no
//! node" for out-of-range or [`NodeIndex::NONE`] handles instead of panicking.

use crate::syntax_kind::SyntaxKind;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Handle to a node in a [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    /// Sentinel for "no node" (missing name, no parent).
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    #[inline]
    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// Most nodes have a handful of children; tokens have none.
pub type ChildList = SmallVec<[NodeIndex; 4]>;

/// A syntax node: its kind, byte span, and tree links.
#[derive(Clone, Debug)]
pub struct Node {
    pub kind: SyntaxKind,
    /// Start offset (bytes) in the source text
    pub pos: u32,
    /// End offset (bytes, exclusive) in the source text
    pub end: u32,
    /// Name sub-node for named declarations, `NONE` otherwise
    pub name: NodeIndex,
    pub parent: NodeIndex,
    children: ChildList,
}

impl Node {
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> Node {
        Node {
            kind,
            pos,
            end,
            name: NodeIndex::NONE,
            parent: NodeIndex::NONE,
            children: ChildList::new(),
        }
    }

    /// Ordered direct children (tokens included).
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }
}

#[derive(Debug, Default, Clone)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Add a node and return its index. The node is not linked to a parent.
    pub fn add(&mut self, node: Node) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(node);
        NodeIndex(index)
    }

    /// Append `child` to `parent`'s child list and record the back-link.
    ///
    /// Returns `false` (and changes nothing) when either handle does not name
    /// a node, when `child` already has a parent, or when `child` is an
    /// ancestor of `parent`. The arena therefore always stays a forest.
    pub fn attach(&mut self, parent: NodeIndex, child: NodeIndex) -> bool {
        if self.get(parent).is_none() || self.get(child).is_none() {
            return false;
        }
        if self.parent_of(child).is_some() {
            return false;
        }
        let mut ancestor = Some(parent);
        while let Some(current) = ancestor {
            if current == child {
                return false;
            }
            ancestor = self.parent_of(current);
        }
        self.nodes[child.0 as usize].parent = parent;
        self.nodes[parent.0 as usize].children.push(child);
        true
    }

    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    pub(crate) fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    pub fn kind(&self, index: NodeIndex) -> Option<SyntaxKind> {
        self.get(index).map(|n| n.kind)
    }

    /// Direct children of `index`, or an empty slice for a missing node.
    pub fn children(&self, index: NodeIndex) -> &[NodeIndex] {
        match self.get(index) {
            Some(node) => node.children(),
            None => &[],
        }
    }

    /// The declared name sub-node, if the node has one.
    pub fn name_of(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.get(index)
            .map(|n| n.name)
            .filter(|name| name.is_some())
    }

    pub fn parent_of(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.get(index)
            .map(|n| n.parent)
            .filter(|parent| parent.is_some())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
