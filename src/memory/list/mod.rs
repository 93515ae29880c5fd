/*!
 * Ordered Block List
 * Singly linked sequence of memory block records
 *
 * Used by allocators to keep free-list and allocated-list entries in order.
 * Endpoint insertion is O(1); positional and value-based operations walk
 * the chain from the head and are O(n).
 *
 * Nodes live in a slot arena owned by the list. Head, tail and successor
 * links are generation-checked handles rather than pointers, so removal by
 * identity is a handle comparison. A stale handle, or one issued by another
 * list, never reaches a node of this list.
 */

mod arena;
mod errors;
mod invariants;
mod iter;
mod node;

pub use errors::{ListError, ListResult};
pub use iter::{Handles, Iter};
pub use node::{Node, NodeHandle};

use crate::core::config::ListConfig;
use crate::memory::types::MemoryBlock;
use arena::NodeArena;
use std::fmt;
use tracing::{debug, error, instrument, trace, warn};

/// Ordered, singly linked list of memory blocks
///
/// # Example
///
/// ```
/// use blocklist::{MemoryBlock, OrderedBlockList};
///
/// let mut list = OrderedBlockList::new();
/// list.insert_back(MemoryBlock::new(0, 64));
/// list.insert_back(MemoryBlock::new(128, 32));
/// list.insert_front(MemoryBlock::new(512, 16));
///
/// assert_eq!(list.size(), 3);
/// assert_eq!(list.block_at(0).unwrap().address, 512);
/// assert_eq!(list.index_of(&MemoryBlock::new(128, 32)), Some(2));
/// ```
pub struct OrderedBlockList {
    nodes: NodeArena,
    head: Option<NodeHandle>,
    tail: Option<NodeHandle>,
    size: usize,
    verify_invariants: bool,
}

impl Default for OrderedBlockList {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderedBlockList {
    /// Create an empty list with the default configuration
    pub fn new() -> Self {
        Self::with_config(&ListConfig::default())
    }

    /// Create an empty list with room for `capacity` nodes before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(&ListConfig::default().with_initial_capacity(capacity))
    }

    pub fn with_config(config: &ListConfig) -> Self {
        Self {
            nodes: NodeArena::with_capacity(config.initial_capacity),
            head: None,
            tail: None,
            size: 0,
            verify_invariants: config.verify_invariants,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Handle of the head node, or `None` if the list is empty
    #[inline]
    pub fn first(&self) -> Option<NodeHandle> {
        self.head
    }

    /// Handle of the tail node, or `None` if the list is empty
    #[inline]
    pub fn last(&self) -> Option<NodeHandle> {
        self.tail
    }

    /// Number of blocks in the list
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Resolve a handle to its node; `None` if the node is no longer in the list
    #[inline]
    pub fn node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    #[inline]
    pub fn block_of(&self, handle: NodeHandle) -> Option<&MemoryBlock> {
        self.node(handle).map(Node::block)
    }

    #[inline]
    pub fn next_of(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.node(handle).and_then(Node::next)
    }

    /// Get the node at `index`
    ///
    /// Accepts `0..=size`. For `index == size` there is no node and the
    /// result is `Ok(None)`; anything larger is `OutOfRange`.
    pub fn node_at(&self, index: usize) -> ListResult<Option<NodeHandle>> {
        self.check_position(index, "node_at")?;
        Ok(self.handles().nth(index))
    }

    /// Get the block stored at `index`, which must be in `0..size`
    pub fn block_at(&self, index: usize) -> ListResult<&MemoryBlock> {
        if index >= self.size {
            warn!(index, size = self.size, "block_at index out of range");
            return Err(ListError::out_of_range(index, self.size));
        }

        self.iter()
            .nth(index)
            .ok_or_else(|| ListError::corrupted(format!("no node reachable at index {}", index)))
    }

    /// Position of the first block equal to `block`, or `None`
    pub fn index_of(&self, block: &MemoryBlock) -> Option<usize> {
        self.iter().position(|candidate| candidate == block)
    }

    pub fn contains(&self, block: &MemoryBlock) -> bool {
        self.index_of(block).is_some()
    }

    /// Blocks from head to tail
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.nodes, self.head, self.size)
    }

    /// Node handles from head to tail
    pub fn handles(&self) -> Handles<'_> {
        Handles::new(&self.nodes, self.head, self.size)
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Insert `block` so that it ends up at `index`
    ///
    /// Accepts `0..=size`: index 0 prepends and index `size` appends, both
    /// in O(1). Other positions walk to the predecessor.
    pub fn insert_at(&mut self, index: usize, block: MemoryBlock) -> ListResult<NodeHandle> {
        self.check_position(index, "insert_at")?;

        if index == 0 {
            return Ok(self.push_front(block));
        }
        if index == self.size {
            return Ok(self.push_back(block));
        }

        let prev = self.handles().nth(index - 1).ok_or_else(|| {
            ListError::corrupted(format!("no predecessor reachable for index {}", index))
        })?;
        let next = self.next_of(prev);

        let handle = self.nodes.insert(Node::new(block, next));
        if let Some(prev_node) = self.nodes.get_mut(prev) {
            prev_node.next = Some(handle);
        }
        self.size += 1;

        trace!(
            index,
            address = block.address,
            block_size = block.size,
            "Inserted block"
        );
        self.after_mutation("insert_at");
        Ok(handle)
    }

    /// Append a block as the new tail
    ///
    /// Passing `None` does nothing and returns `None`.
    pub fn insert_back(&mut self, block: impl Into<Option<MemoryBlock>>) -> Option<NodeHandle> {
        match block.into() {
            Some(block) => Some(self.push_back(block)),
            None => {
                trace!("insert_back called without a block, ignoring");
                None
            }
        }
    }

    /// Prepend a block as the new head
    ///
    /// Passing `None` does nothing and returns `None`.
    pub fn insert_front(&mut self, block: impl Into<Option<MemoryBlock>>) -> Option<NodeHandle> {
        match block.into() {
            Some(block) => Some(self.push_front(block)),
            None => {
                trace!("insert_front called without a block, ignoring");
                None
            }
        }
    }

    fn push_back(&mut self, block: MemoryBlock) -> NodeHandle {
        let handle = self.nodes.insert(Node::new(block, None));

        match self.tail.and_then(|tail| self.nodes.get_mut(tail)) {
            Some(tail_node) => tail_node.next = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
        self.size += 1;

        trace!(
            address = block.address,
            block_size = block.size,
            size = self.size,
            "Appended block"
        );
        self.after_mutation("insert_back");
        handle
    }

    fn push_front(&mut self, block: MemoryBlock) -> NodeHandle {
        let handle = self.nodes.insert(Node::new(block, self.head));

        if self.tail.is_none() {
            self.tail = Some(handle);
        }
        self.head = Some(handle);
        self.size += 1;

        trace!(
            address = block.address,
            block_size = block.size,
            size = self.size,
            "Prepended block"
        );
        self.after_mutation("insert_front");
        handle
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Remove the node behind `handle`
    ///
    /// The chain is scanned for the handle. A handle that is not in the list
    /// (already removed, or never issued by it) leaves the list untouched
    /// and returns `None`.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_node(&mut self, handle: NodeHandle) -> Option<MemoryBlock> {
        match self.find(|candidate, _| candidate == handle) {
            Some((prev, target)) => {
                let block = self.unlink(prev, target);
                self.after_mutation("remove_node");
                block
            }
            None => {
                trace!(?handle, "remove_node: handle not in list, ignoring");
                None
            }
        }
    }

    /// Remove the node at `index`
    ///
    /// Accepts `0..=size`. For `index == size` there is no node to remove:
    /// the list is left unchanged and the result is `Ok(None)`.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_at(&mut self, index: usize) -> ListResult<Option<MemoryBlock>> {
        self.check_position(index, "remove_at")?;

        if index == self.size {
            trace!(index, "remove_at: index is one past the tail, nothing removed");
            return Ok(None);
        }

        let prev = match index {
            0 => None,
            _ => Some(self.handles().nth(index - 1).ok_or_else(|| {
                ListError::corrupted(format!("no predecessor reachable for index {}", index))
            })?),
        };
        let target = match prev {
            None => self.head,
            Some(prev) => self.next_of(prev),
        }
        .ok_or_else(|| ListError::corrupted(format!("no node reachable at index {}", index)))?;

        let block = self.unlink(prev, target);
        self.after_mutation("remove_at");
        Ok(block)
    }

    /// Remove the first node holding the same block as `block`
    ///
    /// Matching is by block identity (base address, see
    /// [`MemoryBlock::same_block`]), unlike [`index_of`](Self::index_of),
    /// which uses full value equality.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_value(&mut self, block: Option<&MemoryBlock>) -> ListResult<MemoryBlock> {
        let block = match block {
            Some(block) => block,
            None => {
                warn!("remove_value called without a block");
                return Err(ListError::invalid_argument("no block given"));
            }
        };

        if self.is_empty() {
            warn!(address = block.address, "remove_value on an empty list");
            return Err(ListError::invalid_argument("list is empty"));
        }

        let (prev, target) = match self.find(|_, node| node.block().same_block(block)) {
            Some(found) => found,
            None => {
                warn!(address = block.address, "remove_value: block not in list");
                return Err(ListError::invalid_argument(format!(
                    "block at address {} is not in the list",
                    block.address
                )));
            }
        };

        let removed = self.unlink(prev, target).ok_or_else(|| {
            ListError::corrupted(format!("node for address {} vanished", block.address))
        })?;
        self.after_mutation("remove_value");
        Ok(removed)
    }

    /// Remove every block
    pub fn clear(&mut self) {
        let released = self.size;
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.size = 0;
        debug!(released, "Cleared block list");
        self.after_mutation("clear");
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn check_position(&self, index: usize, operation: &'static str) -> ListResult<()> {
        if index > self.size {
            warn!(operation, index, size = self.size, "Index out of range");
            return Err(ListError::out_of_range(index, self.size));
        }
        Ok(())
    }

    /// Find the first node matching `pred`, returning it with its predecessor
    fn find<F>(&self, mut pred: F) -> Option<(Option<NodeHandle>, NodeHandle)>
    where
        F: FnMut(NodeHandle, &Node) -> bool,
    {
        let mut prev = None;
        for handle in self.handles() {
            let node = self.nodes.get(handle)?;
            if pred(handle, node) {
                return Some((prev, handle));
            }
            prev = Some(handle);
        }
        None
    }

    /// Detach `target`, whose predecessor is `prev` (`None` when it is the head)
    fn unlink(&mut self, prev: Option<NodeHandle>, target: NodeHandle) -> Option<MemoryBlock> {
        let node = self.nodes.remove(target)?;

        match prev.and_then(|prev| self.nodes.get_mut(prev)) {
            Some(prev_node) => prev_node.next = node.next,
            None => self.head = node.next,
        }
        if self.tail == Some(target) {
            self.tail = prev;
        }
        self.size -= 1;

        trace!(
            address = node.block.address,
            block_size = node.block.size,
            size = self.size,
            "Removed block"
        );
        Some(node.block)
    }

    fn after_mutation(&self, operation: &'static str) {
        if !self.verify_invariants {
            return;
        }
        if let Err(e) = self.check_invariants() {
            error!(operation, error = %e, "Block list invariant violated");
        }
    }
}

impl<'a> IntoIterator for &'a OrderedBlockList {
    type Item = &'a MemoryBlock;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<MemoryBlock> for OrderedBlockList {
    fn from_iter<I: IntoIterator<Item = MemoryBlock>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl Extend<MemoryBlock> for OrderedBlockList {
    fn extend<I: IntoIterator<Item = MemoryBlock>>(&mut self, iter: I) {
        for block in iter {
            self.push_back(block);
        }
    }
}

impl PartialEq for OrderedBlockList {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl Eq for OrderedBlockList {}

impl fmt::Debug for OrderedBlockList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Diagnostic rendering: each node's rendering, head to tail
impl fmt::Display for OrderedBlockList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for handle in self.handles() {
            if let Some(node) = self.nodes.get(handle) {
                write!(f, "{}", node)?;
            }
        }
        Ok(())
    }
}
