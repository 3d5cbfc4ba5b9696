use sandbox_phys::core::HandlePool;
use sandbox_phys::error::PoolError;

#[test]
fn test_add_get_round_trip() {
    let mut pool = HandlePool::new();

    let a = pool.add("alpha").unwrap();
    let b = pool.add("beta").unwrap();

    assert_eq!(*pool.get(a).unwrap(), "alpha");
    assert_eq!(*pool.get(b).unwrap(), "beta");
    assert_eq!(pool.len(), 2);
}

#[test]
fn test_get_mut_updates_value() {
    let mut pool = HandlePool::new();
    let h = pool.add(1u32).unwrap();

    *pool.get_mut(h).unwrap() = 42;

    assert_eq!(*pool.get(h).unwrap(), 42);
}

#[test]
fn test_removal_invalidates_handle() {
    let mut pool = HandlePool::new();
    let h = pool.add("value").unwrap();

    let removed = pool.remove(h).unwrap();
    assert_eq!(removed, "value");

    assert!(!pool.has(h));
    assert_eq!(pool.get(h), Err(PoolError::NotFound(h)));
    assert_eq!(pool.remove(h), Err(PoolError::NotFound(h)));
    assert!(pool.is_empty());
}

#[test]
fn test_has_is_total() {
    let mut pool = HandlePool::new();
    let h = pool.add(0u8).unwrap();

    assert!(pool.has(h));
    assert!(!pool.has(999));
    // Way past the sparse table: false, not a panic
    assert!(!pool.has(u32::MAX));
}

#[test]
fn test_recycled_handle_returns_new_value() {
    let mut pool = HandlePool::new();

    let old = pool.add("old").unwrap();
    pool.remove(old).unwrap();
    let new = pool.add("new").unwrap();

    // The retired handle is recycled before the counter is bumped
    assert_eq!(new, old);
    assert_eq!(*pool.get(new).unwrap(), "new");
}

#[test]
fn test_swap_removal_keeps_dense_sparse_consistent() {
    let mut pool = HandlePool::new();

    let handles: Vec<_> = (0..8).map(|v| pool.add(v).unwrap()).collect();

    // Remove from the middle, the front, and the back
    pool.remove(handles[3]).unwrap();
    pool.remove(handles[0]).unwrap();
    pool.remove(handles[7]).unwrap();

    assert_eq!(pool.len(), 5);
    for i in 0..pool.len() {
        let handle = pool.get_associated_handle(i).unwrap();
        assert!(pool.has(handle));
        // The value at dense index i must be the one its handle was bound to
        assert_eq!(*pool.get(handle).unwrap(), pool.dense()[i]);
    }

    // Survivors still resolve to their original values
    for &i in &[1usize, 2, 4, 5, 6] {
        assert_eq!(*pool.get(handles[i]).unwrap(), i as i32);
    }
}

#[test]
fn test_consistency_through_add_remove_churn() {
    let mut pool = HandlePool::with_capacity(64);
    let mut live = Vec::new();

    for round in 0..10 {
        for v in 0..6 {
            live.push((pool.add(round * 10 + v).unwrap(), round * 10 + v));
        }
        // Drop every other live handle
        let mut keep = Vec::new();
        for (idx, (handle, value)) in live.drain(..).enumerate() {
            if idx % 2 == 0 {
                pool.remove(handle).unwrap();
            } else {
                keep.push((handle, value));
            }
        }
        live = keep;

        for &(handle, value) in &live {
            assert_eq!(*pool.get(handle).unwrap(), value);
        }
        for i in 0..pool.len() {
            let handle = pool.get_associated_handle(i).unwrap();
            assert_eq!(*pool.get(handle).unwrap(), pool.dense()[i]);
        }
    }
}

#[test]
fn test_associated_handle_out_of_range() {
    let mut pool = HandlePool::new();
    pool.add('a').unwrap();

    assert_eq!(
        pool.get_associated_handle(1),
        Err(PoolError::IndexOutOfRange { index: 1, len: 1 })
    );
}

#[test]
fn test_capacity_is_a_hard_limit() {
    let mut pool = HandlePool::with_capacity(2);

    pool.add(0).unwrap();
    pool.add(1).unwrap();
    assert_eq!(pool.add(2), Err(PoolError::CapacityExceeded(2)));

    // A failed add leaves the pool untouched
    assert_eq!(pool.len(), 2);

    // Retiring a handle frees room again
    pool.remove(0).unwrap();
    assert!(pool.add(2).is_ok());
}

#[test]
fn test_iter_pairs_handles_with_values() {
    let mut pool = HandlePool::new();
    let a = pool.add("a").unwrap();
    let b = pool.add("b").unwrap();

    let pairs: Vec<_> = pool.iter().map(|(h, v)| (h, *v)).collect();
    assert_eq!(pairs.len(), 2);
    assert!(pairs.contains(&(a, "a")));
    assert!(pairs.contains(&(b, "b")));
}

#[test]
fn test_clear_retires_all_handles() {
    let mut pool = HandlePool::new();
    let a = pool.add(1).unwrap();
    let b = pool.add(2).unwrap();

    pool.clear();

    assert!(pool.is_empty());
    assert!(!pool.has(a));
    assert!(!pool.has(b));
    assert!(pool.add(3).is_ok());
}
