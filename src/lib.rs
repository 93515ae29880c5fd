/*!
 * Block List Library
 * Ordered memory block tracking for allocators and simulators
 */

pub mod core;
pub mod memory;
pub mod monitoring;

// Re-exports
pub use crate::core::{Address, ListConfig, Size};
pub use memory::{
    Handles, Iter, ListError, ListResult, MemoryBlock, Node, NodeHandle, OrderedBlockList,
};
pub use monitoring::init_tracing;
