/*!
 * Memory Types
 * Memory block records tracked by allocator lists
 */

use crate::core::types::{Address, Size};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record of a contiguous memory region
///
/// Two notions of sameness apply to blocks held in a list:
/// - value equality (`==`): same base address and same size
/// - identity ([`MemoryBlock::same_block`]): same base address, since an
///   allocator never tracks two live regions starting at one address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemoryBlock {
    pub address: Address,
    pub size: Size,
}

impl MemoryBlock {
    pub const fn new(address: Address, size: Size) -> Self {
        Self { address, size }
    }

    /// Exclusive end address of the region
    #[inline]
    pub fn end(&self) -> Address {
        self.address.saturating_add(self.size)
    }

    /// Check whether `address` falls inside this region
    #[inline]
    pub fn contains(&self, address: Address) -> bool {
        address >= self.address && address < self.end()
    }

    /// Check whether `other` starts exactly where this block ends, or vice versa
    #[inline]
    pub fn is_adjacent_to(&self, other: &MemoryBlock) -> bool {
        self.end() == other.address || other.end() == self.address
    }

    /// Identity comparison: both records describe the region at the same base address
    #[inline]
    pub fn same_block(&self, other: &MemoryBlock) -> bool {
        self.address == other.address
    }
}

impl fmt::Display for MemoryBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} , {})", self.address, self.size)
    }
}
