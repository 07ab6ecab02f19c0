//! Unit tests for UnrolledDeque.
//!
//! These tests exercise the public surface of the deque: construction,
//! insertion and removal at both ends, peeking, iteration, containment and
//! the operations that are rejected explicitly.

use rstest::rstest;
use unrolled_deque::{DEFAULT_BLOCK_SIZE, DequeConfig, DequeError, UnrolledDeque};

fn deque_with_block_size(block_size: usize) -> UnrolledDeque<i32> {
    UnrolledDeque::with_block_size(block_size).unwrap()
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_deque() {
    let deque: UnrolledDeque<i32> = UnrolledDeque::new();
    assert!(deque.is_empty());
    assert_eq!(deque.len(), 0);
    assert_eq!(deque.block_size(), DEFAULT_BLOCK_SIZE);
    assert_eq!(deque.block_count(), 1);
}

#[rstest]
fn test_default_matches_new() {
    let deque: UnrolledDeque<i32> = UnrolledDeque::default();
    assert!(deque.is_empty());
    assert_eq!(deque.block_size(), DEFAULT_BLOCK_SIZE);
}

#[rstest]
#[case(0, "block size must be positive")]
#[case(1, "block size must be even")]
#[case(5, "block size must be even")]
fn test_with_block_size_rejects_invalid(#[case] block_size: usize, #[case] reason: &'static str) {
    let result = UnrolledDeque::<i32>::with_block_size(block_size);
    assert_eq!(
        result.err(),
        Some(DequeError::InvalidConfiguration { block_size, reason })
    );
}

#[rstest]
fn test_with_config_uses_block_size() {
    let config = DequeConfig::new().block_size(10);
    let deque: UnrolledDeque<i32> = UnrolledDeque::with_config(&config).unwrap();
    assert_eq!(deque.block_size(), 10);
}

#[rstest]
fn test_empty_deque_reads() {
    let mut deque = deque_with_block_size(4);
    assert_eq!(deque.pop_front(), None);
    assert_eq!(deque.pop_back(), None);
    assert_eq!(deque.poll(), None);
    assert_eq!(deque.front(), None);
    assert_eq!(deque.back(), None);
    assert_eq!(deque.peek(), None);
    assert_eq!(deque.first(), Err(DequeError::EmptyContainer { operation: "first" }));
    assert_eq!(deque.last(), Err(DequeError::EmptyContainer { operation: "last" }));
    assert_eq!(
        deque.element(),
        Err(DequeError::EmptyContainer { operation: "element" })
    );
    assert_eq!(
        deque.remove_back(),
        Err(DequeError::EmptyContainer { operation: "remove_back" })
    );
    assert_eq!(deque.pop(), Err(DequeError::EmptyContainer { operation: "pop" }));
    assert_eq!(
        deque.remove(),
        Err(DequeError::EmptyContainer { operation: "remove" })
    );
    assert!(deque.is_empty());
}

// =============================================================================
// Insertion
// =============================================================================

#[rstest]
fn test_push_back_within_and_beyond_block() {
    let mut deque = deque_with_block_size(6);
    for element in 1..=5 {
        deque.push_back(element);
        assert_eq!(deque.len(), element as usize);
        assert_eq!(deque.back(), Some(&element));
        assert_eq!(deque.front(), Some(&1));
    }
}

#[rstest]
fn test_push_front_within_and_beyond_block() {
    let mut deque = deque_with_block_size(4);
    for element in 1..=6 {
        deque.push_front(element);
        assert_eq!(deque.len(), element as usize);
        assert_eq!(deque.front(), Some(&element));
        assert_eq!(deque.back(), Some(&1));
    }
}

#[rstest]
fn test_fifth_push_back_allocates_exactly_one_block() {
    let mut deque = deque_with_block_size(4);
    for element in 1..=4 {
        deque.push_back(element);
    }
    assert_eq!(deque.block_count(), 2);

    deque.push_back(5);
    assert_eq!(deque.block_count(), 2);
    assert_eq!(deque.back(), Some(&5));
    assert_eq!(deque.last(), Ok(&5));
}

#[rstest]
fn test_offer_variants_always_succeed() {
    let mut deque = deque_with_block_size(2);
    assert!(deque.offer_back(2));
    assert!(deque.offer_front(1));
    assert!(deque.offer(3));
    assert_eq!(deque.to_vec(), vec![1, 2, 3]);
}

#[rstest]
fn test_push_is_front_insertion() {
    let mut deque = deque_with_block_size(4);
    deque.push(1);
    deque.push(2);
    assert_eq!(deque.pop(), Ok(2));
    assert_eq!(deque.pop(), Ok(1));
}

#[rstest]
fn test_extend_back_reports_whether_anything_was_added() {
    let mut deque = deque_with_block_size(4);
    assert!(!deque.extend_back(Vec::new()));
    assert_eq!(deque.len(), 0);

    assert!(deque.extend_back(vec![1, 2]));
    assert_eq!(deque.len(), 2);

    assert!(deque.extend_back(vec![3, 4, 5, 6, 7]));
    assert_eq!(deque.len(), 7);
    assert_eq!(deque.to_vec(), (1..=7).collect::<Vec<_>>());
}

#[rstest]
fn test_extend_trait_and_from_iterator() {
    let mut deque: UnrolledDeque<i32> = (1..=3).collect();
    deque.extend(4..=5);
    assert_eq!(deque.to_vec(), vec![1, 2, 3, 4, 5]);
}

// =============================================================================
// Removal
// =============================================================================

#[rstest]
fn test_mixed_push_then_pop_front_in_order() {
    let mut deque = deque_with_block_size(6);
    deque.push_front(1);
    deque.push_back(2);
    deque.push_back(3);
    deque.push_back(4);
    deque.push_back(5);

    for (expected, remaining) in (1..=5).zip((0..5).rev()) {
        assert_eq!(deque.remove_front(), Ok(expected));
        assert_eq!(deque.len(), remaining);
    }

    assert_eq!(
        deque.remove_front(),
        Err(DequeError::EmptyContainer { operation: "remove_front" })
    );
    assert_eq!(deque.pop_front(), None);
}

#[rstest]
fn test_clear_then_reuse() {
    let mut deque = deque_with_block_size(4);
    for element in [1, 2, 4, 5, 6] {
        deque.push_back(element);
    }
    deque.pop_back();
    deque.pop_back();

    deque.clear();
    assert_eq!(deque.len(), 0);
    assert!(deque.is_empty());
    assert_eq!(deque.pop_front(), None);
    assert_eq!(deque.pop_back(), None);

    for element in 1..=6 {
        deque.push_back(element);
    }
    assert_eq!(deque.pop_back(), Some(6));
    assert_eq!(deque.pop_back(), Some(5));
}

#[rstest]
#[case(2)]
#[case(4)]
#[case(6)]
#[case(8)]
fn test_symmetric_drain(#[case] block_size: usize) {
    let mut deque = deque_with_block_size(block_size);
    for index in 1..=50 {
        deque.push_front(-index);
        deque.push_back(index);
    }

    while !deque.is_empty() {
        let front = deque.remove_front().unwrap();
        let back = deque.remove_back().unwrap();
        assert_eq!(front, -back);
    }
    assert_eq!(deque.block_count(), 1);
}

#[rstest]
fn test_pop_back_across_front_allocated_blocks() {
    let mut deque = deque_with_block_size(4);
    for element in 1..=9 {
        deque.push_front(element);
    }
    let drained: Vec<i32> = std::iter::from_fn(|| deque.pop_back()).collect();
    assert_eq!(drained, (1..=9).collect::<Vec<_>>());
}

#[rstest]
fn test_pop_front_across_back_allocated_blocks() {
    let mut deque = deque_with_block_size(2);
    deque.extend_back(1..=9);
    let drained: Vec<i32> = std::iter::from_fn(|| deque.pop_front()).collect();
    assert_eq!(drained, (1..=9).collect::<Vec<_>>());
}

#[rstest]
fn test_reuse_after_drain_matches_fresh_deque() {
    let mut reused = deque_with_block_size(4);
    reused.extend_back(1..=11);
    while reused.pop_back().is_some() {}

    let mut fresh = deque_with_block_size(4);
    for deque in [&mut reused, &mut fresh] {
        deque.push_front(0);
        deque.push_front(-1);
        deque.push_back(1);
        deque.push_back(2);
    }
    assert_eq!(reused.block_count(), fresh.block_count());
    assert_eq!(reused.block_count(), 1);
    assert_eq!(reused.to_vec(), fresh.to_vec());
}

// =============================================================================
// Peek
// =============================================================================

#[rstest]
fn test_peek_back_does_not_mutate() {
    let mut deque = deque_with_block_size(6);
    deque.extend_back([1, 2, 3]);
    assert_eq!(deque.last(), Ok(&3));
    assert_eq!(deque.back(), Some(&3));

    deque.push_back(4);
    assert_eq!(deque.last(), Ok(&4));
    assert_eq!(deque.back(), Some(&4));
    assert_eq!(deque.last(), Ok(&4));
    assert_eq!(deque.back(), Some(&4));

    deque.push_back(55);
    deque.push_back(66);
    assert_eq!(deque.len(), 6);
    assert_eq!(deque.back(), Some(&66));
    assert_eq!(deque.first(), Ok(&1));
    assert_eq!(deque.element(), Ok(&1));
}

// =============================================================================
// Iteration
// =============================================================================

#[rstest]
fn test_forward_and_descending_are_reverses() {
    let mut deque = deque_with_block_size(4);
    for index in 1..=10 {
        deque.push_front(-index);
        deque.push_back(index);
    }

    let forward: Vec<i32> = deque.iter().copied().collect();
    let mut descending: Vec<i32> = deque.descending_iter().copied().collect();
    assert_eq!(forward.len(), deque.len());
    descending.reverse();
    assert_eq!(forward, descending);
    assert_eq!(deque.len(), 20);
}

#[rstest]
fn test_for_loop_over_reference() {
    let deque: UnrolledDeque<i32> = (1..=4).collect();
    let mut sum = 0;
    for element in &deque {
        sum += element;
    }
    assert_eq!(sum, 10);
}

#[rstest]
fn test_to_vec_in_forward_order() {
    let mut deque: UnrolledDeque<&str> = UnrolledDeque::with_block_size(2).unwrap();
    deque.push_back("b");
    deque.push_front("a");
    deque.push_back("c");
    assert_eq!(deque.to_vec(), vec!["a", "b", "c"]);
}

// =============================================================================
// Containment
// =============================================================================

#[rstest]
fn test_contains() {
    let deque: UnrolledDeque<i32> = (1..=300).collect();
    assert!(deque.contains(&1));
    assert!(deque.contains(&129));
    assert!(deque.contains(&300));
    assert!(!deque.contains(&0));
    assert!(!deque.contains(&301));
}

#[rstest]
fn test_contains_all() {
    let deque: UnrolledDeque<i32> = (1..=10).collect();
    assert!(deque.contains_all(&[]));
    assert!(deque.contains_all(&[5]));
    assert!(!deque.contains_all(&[11]));
    assert!(deque.contains_all(&[1, 10, 5]));
    assert!(!deque.contains_all(&[1, 10, 11]));
}

#[rstest]
fn test_contains_all_collapses_duplicates() {
    let deque: UnrolledDeque<i32> = [7].into_iter().collect();
    assert!(deque.contains_all(&[7, 7, 7]));
}

#[rstest]
fn test_contains_all_on_empty_deque() {
    let deque: UnrolledDeque<i32> = UnrolledDeque::new();
    assert!(deque.contains_all(&[]));
    assert!(!deque.contains_all(&[1]));
    assert!(!deque.contains_all(&[1, 2]));
}

// =============================================================================
// Unsupported Operations
// =============================================================================

#[rstest]
fn test_unsupported_operations_are_rejected_without_mutation() {
    let mut deque: UnrolledDeque<i32> = (1..=5).collect();

    let unsupported = |operation| Err(DequeError::UnsupportedOperation { operation });
    assert_eq!(
        deque.remove_first_occurrence(&1),
        unsupported("remove_first_occurrence")
    );
    assert_eq!(
        deque.remove_last_occurrence(&1),
        unsupported("remove_last_occurrence")
    );
    assert_eq!(deque.remove_element(&3), unsupported("remove_element"));
    assert_eq!(deque.remove_all(&[1, 2]), unsupported("remove_all"));
    assert_eq!(deque.retain_all(&[1, 2]), unsupported("retain_all"));
    assert_eq!(
        deque.remove_if(|element| element % 2 == 0),
        unsupported("remove_if")
    );

    assert_eq!(deque.to_vec(), vec![1, 2, 3, 4, 5]);
}
