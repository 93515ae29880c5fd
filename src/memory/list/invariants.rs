/*!
 * Chain Invariants
 * Consistency check between list bookkeeping and the node chain
 */

use super::{ListError, ListResult, OrderedBlockList};

impl OrderedBlockList {
    /// Walk the chain and verify the list bookkeeping
    ///
    /// Checks that:
    /// - an empty list has neither head nor tail
    /// - a non-empty list has both
    /// - following links from the head visits exactly `size` live nodes,
    ///   without a cycle, and stops at the tail
    /// - the arena holds no nodes outside the chain
    pub fn check_invariants(&self) -> ListResult<()> {
        match (self.size, self.head, self.tail) {
            (0, None, None) => {
                return if self.nodes.is_empty() {
                    Ok(())
                } else {
                    Err(ListError::corrupted(format!(
                        "empty list still owns {} nodes",
                        self.nodes.len()
                    )))
                };
            }
            (0, _, _) => {
                return Err(ListError::corrupted("size is 0 but an endpoint is set"));
            }
            (_, None, _) | (_, _, None) => {
                return Err(ListError::corrupted(format!(
                    "size is {} but an endpoint is missing",
                    self.size
                )));
            }
            _ => {}
        }

        let mut visited = 0usize;
        let mut last = None;
        let mut cursor = self.head;
        while let Some(handle) = cursor {
            visited += 1;
            if visited > self.size {
                return Err(ListError::corrupted(format!(
                    "chain is longer than size {} or cyclic",
                    self.size
                )));
            }
            let node = self.nodes.get(handle).ok_or_else(|| {
                ListError::corrupted(format!("dangling link at position {}", visited - 1))
            })?;
            last = Some(handle);
            cursor = node.next();
        }

        if visited != self.size {
            return Err(ListError::corrupted(format!(
                "chain has {} nodes but size is {}",
                visited, self.size
            )));
        }
        if last != self.tail {
            return Err(ListError::corrupted("chain does not end at the tail"));
        }
        if self.nodes.len() != self.size {
            return Err(ListError::corrupted(format!(
                "arena owns {} nodes but only {} are linked",
                self.nodes.len(),
                self.size
            )));
        }

        Ok(())
    }
}
