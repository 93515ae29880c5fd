/*!
 * Node Arena
 * Slot storage for list nodes with generation-checked handles
 */

use super::node::{Node, NodeHandle};
use std::sync::atomic::{AtomicU32, Ordering};

/// Source of arena owner ids; every arena gets its own
static NEXT_OWNER: AtomicU32 = AtomicU32::new(1);

#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Growable slot arena owning every node of one list
///
/// Vacated slots go onto a free stack and are reused LIFO. Reuse bumps the
/// slot generation, which invalidates handles to the previous occupant.
/// Handles also carry the arena's owner id, so a handle issued by another
/// arena never resolves here even when its slot and generation coincide.
#[derive(Debug)]
pub(super) struct NodeArena {
    owner: u32,
    slots: Vec<Slot>,
    free: Vec<usize>,
    len: usize,
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl NodeArena {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            owner: NEXT_OWNER.fetch_add(1, Ordering::Relaxed),
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of occupied slots
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn insert(&mut self, node: Node) -> NodeHandle {
        self.len += 1;

        if let Some(slot) = self.free.pop() {
            let entry = &mut self.slots[slot];
            entry.node = Some(node);
            return NodeHandle {
                owner: self.owner,
                slot,
                generation: entry.generation,
            };
        }

        let slot = self.slots.len();
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        NodeHandle {
            owner: self.owner,
            slot,
            generation: 0,
        }
    }

    #[inline]
    pub fn get(&self, handle: NodeHandle) -> Option<&Node> {
        if handle.owner != self.owner {
            return None;
        }
        self.slots
            .get(handle.slot)
            .filter(|entry| entry.generation == handle.generation)
            .and_then(|entry| entry.node.as_ref())
    }

    #[inline]
    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        if handle.owner != self.owner {
            return None;
        }
        self.slots
            .get_mut(handle.slot)
            .filter(|entry| entry.generation == handle.generation)
            .and_then(|entry| entry.node.as_mut())
    }

    /// Release the node behind `handle`, returning it if the handle was live
    pub fn remove(&mut self, handle: NodeHandle) -> Option<Node> {
        if handle.owner != self.owner {
            return None;
        }
        let entry = self.slots.get_mut(handle.slot)?;
        if entry.generation != handle.generation {
            return None;
        }

        let node = entry.node.take()?;
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(handle.slot);
        self.len -= 1;
        Some(node)
    }

    /// Release every node, keeping the allocation
    pub fn clear(&mut self) {
        self.free.clear();
        for (slot, entry) in self.slots.iter_mut().enumerate() {
            if entry.node.take().is_some() {
                entry.generation = entry.generation.wrapping_add(1);
            }
            self.free.push(slot);
        }
        // Lowest slots are handed out first after a clear
        self.free.reverse();
        self.len = 0;
    }
}
