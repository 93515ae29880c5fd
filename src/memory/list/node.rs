/*!
 * List Nodes
 * Chain elements and the handles that address them
 */

use crate::memory::types::MemoryBlock;
use std::fmt;

/// Stable handle to a node owned by an [`OrderedBlockList`](super::OrderedBlockList)
///
/// A handle resolves only in the list that issued it. Once the node is
/// removed its slot generation advances, so an old handle never resolves
/// to a node inserted later into the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    pub(super) owner: u32,
    pub(super) slot: usize,
    pub(super) generation: u32,
}

/// A chain element: one memory block plus the link to its successor
#[derive(Debug, Clone)]
pub struct Node {
    pub(super) block: MemoryBlock,
    pub(super) next: Option<NodeHandle>,
}

impl Node {
    #[inline]
    pub(super) fn new(block: MemoryBlock, next: Option<NodeHandle>) -> Self {
        Self { block, next }
    }

    /// The memory block held by this node
    #[inline]
    pub fn block(&self) -> &MemoryBlock {
        &self.block
    }

    /// Handle of the successor, or `None` for the tail
    #[inline]
    pub fn next(&self) -> Option<NodeHandle> {
        self.next
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.block)
    }
}
