/*!
 * Block List Tests
 * Positional, value-based and handle-based operations
 */

use blocklist::{ListError, MemoryBlock, OrderedBlockList};
use pretty_assertions::assert_eq;

fn block(address: usize, size: usize) -> MemoryBlock {
    MemoryBlock::new(address, size)
}

fn list_of(addresses: &[usize]) -> OrderedBlockList {
    addresses.iter().map(|&a| block(a, 16)).collect()
}

fn addresses(list: &OrderedBlockList) -> Vec<usize> {
    list.iter().map(|b| b.address).collect()
}

#[test]
fn test_insert_front_then_block_at_zero() {
    let mut list = list_of(&[10, 20]);
    list.insert_front(block(5, 1));
    assert_eq!(list.block_at(0), Ok(&block(5, 1)));
    assert_eq!(list.size(), 3);
}

#[test]
fn test_insert_back_then_block_at_last() {
    let mut list = list_of(&[10, 20]);
    list.insert_back(block(99, 1));
    assert_eq!(list.block_at(list.size() - 1), Ok(&block(99, 1)));
}

#[test]
fn test_insert_none_is_noop() {
    let mut list = list_of(&[1]);
    assert!(list.insert_back(None).is_none());
    assert!(list.insert_front(None).is_none());
    assert_eq!(list.size(), 1);
    assert_eq!(list.first(), list.last());
}

#[test]
fn test_insert_at_endpoints() {
    let mut list = OrderedBlockList::new();
    let only = list.insert_at(0, block(1, 1)).unwrap();
    assert_eq!(list.first(), Some(only));
    assert_eq!(list.last(), Some(only));

    let back = list.insert_at(1, block(2, 1)).unwrap();
    assert_eq!(list.last(), Some(back));

    let front = list.insert_at(0, block(0, 1)).unwrap();
    assert_eq!(list.first(), Some(front));
    assert_eq!(addresses(&list), vec![0, 1, 2]);
}

#[test]
fn test_insert_at_out_of_range_leaves_list_unchanged() {
    let mut list = list_of(&[1, 2]);
    let result = list.insert_at(3, block(3, 1));
    assert_eq!(result, Err(ListError::OutOfRange { index: 3, size: 2 }));
    assert_eq!(addresses(&list), vec![1, 2]);
}

#[test]
fn test_node_at_matches_block_at() {
    let list = list_of(&[3, 1, 4, 1, 5]);
    for i in 0..list.size() {
        let handle = list.node_at(i).unwrap().unwrap();
        assert_eq!(list.block_of(handle), list.block_at(i).ok());
    }
}

#[test]
fn test_node_at_size_is_sentinel_but_block_at_size_fails() {
    let list = list_of(&[1, 2, 3]);
    assert_eq!(list.node_at(3), Ok(None));
    assert_eq!(
        list.block_at(3),
        Err(ListError::OutOfRange { index: 3, size: 3 })
    );
    assert_eq!(
        list.node_at(4),
        Err(ListError::OutOfRange { index: 4, size: 3 })
    );
}

#[test]
fn test_block_at_on_empty_list() {
    let list = OrderedBlockList::new();
    assert!(matches!(
        list.block_at(0),
        Err(ListError::OutOfRange { index: 0, size: 0 })
    ));
}

#[test]
fn test_index_of() {
    let list = list_of(&[8, 16, 24, 16]);
    assert_eq!(list.index_of(&block(16, 16)), Some(1));
    assert_eq!(list.index_of(&block(24, 16)), Some(2));
    // Same address, different size is not equal
    assert_eq!(list.index_of(&block(16, 32)), None);
    assert_eq!(OrderedBlockList::new().index_of(&block(0, 0)), None);
}

#[test]
fn test_remove_at_middle() {
    let mut list = list_of(&[1, 2, 3]);
    let tail = list.last();
    assert_eq!(list.remove_at(1), Ok(Some(block(2, 16))));
    assert_eq!(addresses(&list), vec![1, 3]);
    assert_eq!(list.last(), tail);
}

#[test]
fn test_remove_at_size_is_noop() {
    let mut list = list_of(&[1, 2]);
    assert_eq!(list.remove_at(2), Ok(None));
    assert_eq!(list.size(), 2);

    let mut empty = OrderedBlockList::new();
    assert_eq!(empty.remove_at(0), Ok(None));
}

#[test]
fn test_remove_at_out_of_range() {
    let mut list = list_of(&[1]);
    assert!(matches!(
        list.remove_at(2),
        Err(ListError::OutOfRange { index: 2, size: 1 })
    ));
    assert_eq!(list.size(), 1);
}

#[test]
fn test_remove_at_tail_moves_tail_back() {
    let mut list = list_of(&[1, 2, 3]);
    assert_eq!(list.remove_at(2), Ok(Some(block(3, 16))));
    let tail = list.last().unwrap();
    assert_eq!(list.block_of(tail), Some(&block(2, 16)));
    assert!(list.next_of(tail).is_none());
    assert!(list.check_invariants().is_ok());
}

#[test]
fn test_remove_node_from_middle_and_head() {
    let mut list = list_of(&[1, 2, 3]);
    let middle = list.node_at(1).unwrap().unwrap();
    assert_eq!(list.remove_node(middle), Some(block(2, 16)));

    let head = list.first().unwrap();
    assert_eq!(list.remove_node(head), Some(block(1, 16)));
    assert_eq!(addresses(&list), vec![3]);
    assert_eq!(list.first(), list.last());
}

#[test]
fn test_remove_node_twice_is_noop() {
    let mut list = list_of(&[1, 2]);
    let handle = list.first().unwrap();
    assert!(list.remove_node(handle).is_some());
    assert!(list.remove_node(handle).is_none());
    assert_eq!(list.size(), 1);
}

#[test]
fn test_remove_node_from_other_list_is_noop() {
    let mut small = list_of(&[1]);
    let big = list_of(&[7, 8, 9]);
    // Same slot and generation as small's head, but issued by big
    let foreign = big.first().unwrap();

    assert_eq!(small.remove_node(foreign), None);
    assert_eq!(small.size(), 1);
    assert_eq!(addresses(&small), vec![1]);
    assert!(small.block_of(foreign).is_none());
    assert_eq!(big.block_of(foreign), Some(&block(7, 16)));
}

#[test]
fn test_allocated_handle_does_not_touch_free_list() {
    let mut free = OrderedBlockList::new();
    let mut allocated = OrderedBlockList::new();
    free.insert_back(block(0, 100));
    let handle = allocated.insert_back(block(500, 10)).unwrap();

    assert_eq!(free.remove_node(handle), None);
    assert_eq!(free.size(), 1);
    assert_eq!(allocated.remove_node(handle), Some(block(500, 10)));
    assert!(allocated.is_empty());
}

#[test]
fn test_remove_value_by_identity() {
    let mut list: OrderedBlockList = vec![block(0, 64), block(64, 32), block(96, 8)]
        .into_iter()
        .collect();

    // Identity is the base address, so a record with a stale size still matches
    let removed = list.remove_value(Some(&block(64, 1))).unwrap();
    assert_eq!(removed, block(64, 32));
    assert_eq!(addresses(&list), vec![0, 96]);
}

#[test]
fn test_remove_value_tail_and_head() {
    let mut list = list_of(&[1, 2, 3]);
    list.remove_value(Some(&block(3, 16))).unwrap();
    assert_eq!(list.block_of(list.last().unwrap()), Some(&block(2, 16)));

    list.remove_value(Some(&block(1, 16))).unwrap();
    list.remove_value(Some(&block(2, 16))).unwrap();
    assert!(list.first().is_none());
    assert!(list.last().is_none());
}

#[test]
fn test_remove_value_errors() {
    let mut empty = OrderedBlockList::new();
    assert!(matches!(
        empty.remove_value(Some(&block(0, 1))),
        Err(ListError::InvalidArgument(_))
    ));

    let mut list = list_of(&[1, 2]);
    assert!(matches!(
        list.remove_value(None),
        Err(ListError::InvalidArgument(_))
    ));
    assert!(matches!(
        list.remove_value(Some(&block(42, 16))),
        Err(ListError::InvalidArgument(_))
    ));
    assert_eq!(list.size(), 2);
}

#[test]
fn test_iteration_order_and_length() {
    let list = list_of(&[5, 4, 3]);
    let iter = list.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.map(|b| b.address).collect::<Vec<_>>(), vec![5, 4, 3]);

    let mut total = 0;
    for b in &list {
        total += b.size;
    }
    assert_eq!(total, 48);
}

#[test]
fn test_handles_walk_matches_next_links() {
    let list = list_of(&[1, 2, 3, 4]);
    let handles: Vec<_> = list.handles().collect();
    assert_eq!(handles.first().copied(), list.first());
    assert_eq!(handles.last().copied(), list.last());
    for pair in handles.windows(2) {
        assert_eq!(list.next_of(pair[0]), Some(pair[1]));
    }
}

#[test]
fn test_display_concatenates_nodes() {
    let list: OrderedBlockList = vec![block(0, 10), block(10, 5)].into_iter().collect();
    assert_eq!(list.to_string(), "(0 , 10) (10 , 5) ");
    assert_eq!(OrderedBlockList::new().to_string(), "");
}

#[test]
fn test_debug_lists_blocks() {
    let list: OrderedBlockList = vec![block(1, 2)].into_iter().collect();
    assert_eq!(
        format!("{:?}", list),
        "[MemoryBlock { address: 1, size: 2 }]"
    );
}

#[test]
fn test_extend_and_equality() {
    let mut a = list_of(&[1]);
    a.extend(vec![block(2, 16), block(3, 16)]);
    assert_eq!(a, list_of(&[1, 2, 3]));
    assert_ne!(a, list_of(&[1, 2]));
}

#[test]
fn test_contains() {
    let list = list_of(&[1, 2]);
    assert!(list.contains(&block(2, 16)));
    assert!(!list.contains(&block(2, 8)));
}

#[test]
fn test_error_serialization() {
    let err = ListError::out_of_range(4, 2);
    let json = serde_json::to_string(&err).unwrap();
    assert_eq!(
        json,
        r#"{"error_type":"out_of_range","details":{"index":4,"size":2}}"#
    );
    let back: ListError = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);
}
