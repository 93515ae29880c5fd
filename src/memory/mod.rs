/*!
 * Memory Module
 * Memory block records and the ordered lists that track them
 */

pub mod list;
pub mod types;

// Re-export for convenience
pub use list::{Handles, Iter, ListError, ListResult, Node, NodeHandle, OrderedBlockList};
pub use types::*;
