/*!
 * Core Types
 * Common types used across the block list
 */

/// Address type for memory operations
pub type Address = usize;

/// Size type for memory operations
pub type Size = usize;
