use super::*;

// ============================================================================
// Allocation
// ============================================================================

#[test]
fn test_sequential_alloc() {
    let mut ids = IdAllocator::new();
    assert_eq!(ids.alloc(), ItemId(0));
    assert_eq!(ids.alloc(), ItemId(1));
    assert_eq!(ids.alloc(), ItemId(2));
    assert_eq!(ids.allocated(), 3);
}

#[test]
fn test_default_starts_at_zero() {
    let ids = IdAllocator::default();
    assert_eq!(ids.peek(), ItemId(0));
    assert_eq!(ids.allocated(), 0);
}

#[test]
fn test_starting_at_continues_sequence() {
    let mut ids = IdAllocator::starting_at(40);
    assert_eq!(ids.peek(), ItemId(40));
    assert_eq!(ids.alloc(), ItemId(40));
    assert_eq!(ids.alloc(), ItemId(41));
}

#[test]
fn test_independent_allocators_do_not_share_state() {
    let mut a = IdAllocator::new();
    let mut b = IdAllocator::new();
    a.alloc();
    a.alloc();
    assert_eq!(b.alloc(), ItemId(0));
}

#[test]
#[should_panic(expected = "exhausted")]
fn test_exhaustion_panics() {
    let mut ids = IdAllocator::starting_at(u32::MAX);
    ids.alloc();
}

#[test]
fn test_item_id_display() {
    assert_eq!(ItemId(7).to_string(), "item#7");
}
