/*!
 * List Iterators
 * Forward-only traversal from head to tail
 */

use super::arena::NodeArena;
use super::node::NodeHandle;
use crate::memory::types::MemoryBlock;
use std::iter::FusedIterator;

/// Iterator over the blocks of a list, head to tail
///
/// Borrows the list, so the chain cannot change while it is alive.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    handles: Handles<'a>,
}

impl<'a> Iter<'a> {
    pub(super) fn new(nodes: &'a NodeArena, head: Option<NodeHandle>, len: usize) -> Self {
        Self {
            handles: Handles::new(nodes, head, len),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a MemoryBlock;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.handles.next()?;
        let nodes: &'a NodeArena = self.handles.nodes;
        nodes.get(handle).map(|node| node.block())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.handles.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Iterator over node handles, head to tail
#[derive(Debug, Clone)]
pub struct Handles<'a> {
    nodes: &'a NodeArena,
    cursor: Option<NodeHandle>,
    remaining: usize,
}

impl<'a> Handles<'a> {
    pub(super) fn new(nodes: &'a NodeArena, head: Option<NodeHandle>, len: usize) -> Self {
        Self {
            nodes,
            cursor: head,
            remaining: len,
        }
    }
}

impl Iterator for Handles<'_> {
    type Item = NodeHandle;

    fn next(&mut self) -> Option<Self::Item> {
        // remaining bounds the walk even if the links were corrupted into a cycle
        if self.remaining == 0 {
            return None;
        }

        let handle = self.cursor?;
        self.cursor = self.nodes.get(handle).and_then(|node| node.next());
        self.remaining -= 1;
        Some(handle)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Handles<'_> {}

impl FusedIterator for Handles<'_> {}
