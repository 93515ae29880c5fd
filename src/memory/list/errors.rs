/*!
 * Block List Error Types
 * Errors raised by ordered block list operations
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Block list operation result
pub type ListResult<T> = Result<T, ListError>;

/// Block list errors
///
/// Every error is raised before the chain is touched, so a failed call leaves
/// the list exactly as it was.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ListError {
    #[error("Index {index} out of range for list of size {size}")]
    #[diagnostic(
        code(blocklist::out_of_range),
        help("Positional operations accept indices up to the documented bound for the current size.")
    )]
    OutOfRange { index: usize, size: usize },

    #[error("Invalid argument: {0}")]
    #[diagnostic(
        code(blocklist::invalid_argument),
        help("Value-based removal needs a non-empty list and a block that is present in it.")
    )]
    InvalidArgument(String),

    #[error("Corrupted chain: {0}")]
    #[diagnostic(
        code(blocklist::corrupted_chain),
        help("The head/tail/size bookkeeping disagrees with the node chain.")
    )]
    CorruptedChain(String),
}

impl ListError {
    /// Create an out of range error
    #[inline]
    pub fn out_of_range(index: usize, size: usize) -> Self {
        Self::OutOfRange { index, size }
    }

    /// Create an invalid argument error
    #[inline]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a corrupted chain error
    #[inline]
    pub fn corrupted(msg: impl Into<String>) -> Self {
        Self::CorruptedChain(msg.into())
    }
}
