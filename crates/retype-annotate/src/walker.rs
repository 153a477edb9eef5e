//! Discovery of function-like nodes.
//!
//! A depth-first, pre-order walk over the whole tree. Function-like nodes are
//! yielded before their descendants, and the walk still descends into them,
//! because a function body can hold further functions (callbacks, returned
//! closures, object-literal methods). Siblings come out left to right.
//!
//! The walk keeps an explicit stack instead of recursing, so deeply nested
//! trees cannot exhaust the call stack.

use retype_syntax::{NodeArena, NodeIndex};
use std::iter::FusedIterator;
use tracing::trace;

/// Lazy iterator over the function-like descendants of a root.
///
/// Cloning the iterator (or calling [`function_nodes`] again) restarts the
/// walk; every run yields the same sequence.
#[derive(Clone, Debug)]
pub struct FunctionNodes<'a> {
    arena: &'a NodeArena,
    /// Pending nodes, next-to-visit on top.
    stack: Vec<NodeIndex>,
}

impl<'a> FunctionNodes<'a> {
    /// Walk the descendants of `root`. The root itself is not a candidate.
    pub fn new(arena: &'a NodeArena, root: NodeIndex) -> Self {
        let stack = arena.children(root).iter().rev().copied().collect();
        FunctionNodes { arena, stack }
    }
}

impl Iterator for FunctionNodes<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        while let Some(index) = self.stack.pop() {
            let Some(node) = self.arena.get(index) else {
                continue;
            };
            // Reverse so the leftmost child is popped first.
            self.stack.extend(node.children().iter().rev().copied());

            if node.kind.is_function_like() {
                trace!(?index, kind = %node.kind, pos = node.pos, "found function-like node");
                return Some(index);
            }
        }
        None
    }
}

impl FusedIterator for FunctionNodes<'_> {}

pub fn function_nodes(arena: &NodeArena, root: NodeIndex) -> FunctionNodes<'_> {
    FunctionNodes::new(arena, root)
}

/// All function-like descendants of `root`, in walk order.
pub fn discover_function_nodes(arena: &NodeArena, root: NodeIndex) -> Vec<NodeIndex> {
    function_nodes(arena, root).collect()
}

#[cfg(test)]
#[path = "../tests/walker_tests.rs"]
mod tests;
