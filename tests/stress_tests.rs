//! Stress tests: large loads, sustained churn, and a full shortest-path
//! computation exercising the two-phase node lifecycle.

use linkstate_heap::{HeapError, LinkedBinaryHandle, LinkedBinaryHeap};

fn lcg(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state >> 33
}

#[test]
fn massive_ordered_loads_drain_sorted() {
    let mut heap: LinkedBinaryHeap<u32, u32> = LinkedBinaryHeap::new();

    for key in 0..10_000 {
        heap.push_with_handle(key, key);
        if key % 1000 == 0 {
            assert!(heap.verify_internal_structure());
        }
    }
    for key in 0..10_000 {
        assert_eq!(heap.pop(), Some((key, key)));
    }
    assert!(heap.is_empty());

    // worst case for sift-up: every insert climbs to the root
    for key in (0..10_000).rev() {
        heap.push_with_handle(key, key);
        if key % 1000 == 0 {
            assert!(heap.verify_internal_structure());
        }
    }
    for key in 0..10_000 {
        assert_eq!(heap.pop(), Some((key, key)));
    }
    assert!(heap.is_empty());
    assert_eq!(heap.allocated(), 0);
}

#[test]
fn scrambled_load_drains_sorted() {
    let mut heap: LinkedBinaryHeap<u32, u32> = LinkedBinaryHeap::new();
    for i in 0..10_000u32 {
        let key = i.wrapping_mul(2_654_435_761) % 100_000;
        heap.push_with_handle(key, i);
    }
    assert!(heap.verify_internal_structure());

    let mut previous = 0;
    let mut count = 0;
    while let Some((key, _)) = heap.pop() {
        assert!(key >= previous, "out of order after {} pops", count);
        previous = key;
        count += 1;
    }
    assert_eq!(count, 10_000);
}

#[test]
fn decrease_key_storm_promotes_every_node() {
    let mut heap: LinkedBinaryHeap<u32, u32> = LinkedBinaryHeap::new();
    let mut handles = Vec::with_capacity(500);
    for i in 0..500 {
        handles.push(heap.push_with_handle(10_000 + i, i));
    }

    // walk the handles backwards so every decrease climbs through nodes
    // that were themselves just reprioritized
    for (i, handle) in handles.iter().enumerate().rev() {
        heap.decrease_key(handle, i as u32).unwrap();
    }
    assert!(heap.verify_internal_structure());

    for i in 0..500 {
        assert_eq!(heap.pop(), Some((i, i)));
    }
}

#[test]
fn sawtooth_churn_keeps_shape_and_order() {
    let mut heap: LinkedBinaryHeap<u64, u64> = LinkedBinaryHeap::new();
    let mut shadow: Vec<u64> = Vec::new();
    let mut state = 0x5eed_u64;

    for round in 0..20 {
        for _ in 0..100 {
            let key = lcg(&mut state) % 10_000;
            heap.push_with_handle(key, key);
            shadow.push(key);
        }
        for _ in 0..50 {
            let (key, _) = heap.pop().unwrap();
            let min_index = shadow
                .iter()
                .enumerate()
                .min_by_key(|&(_, k)| *k)
                .map(|(index, _)| index)
                .unwrap();
            assert_eq!(key, shadow[min_index], "round {}", round);
            shadow.swap_remove(min_index);
        }
        assert_eq!(heap.len(), shadow.len());
        assert!(heap.verify_internal_structure(), "round {}", round);
    }

    shadow.sort_unstable();
    let mut drained = Vec::with_capacity(shadow.len());
    while let Some((key, _)) = heap.pop() {
        drained.push(key);
    }
    assert_eq!(drained, shadow);
}

#[test]
fn node_pool_recycles_without_reallocating() {
    let mut heap: LinkedBinaryHeap<usize, u64> = LinkedBinaryHeap::with_capacity(64);
    let mut state = 42u64;
    let handles: Vec<LinkedBinaryHandle> = (0..64)
        .map(|i| heap.push_with_handle(lcg(&mut state) % 1000, i))
        .collect();
    assert_eq!(heap.allocated(), 64);

    for round in 0..50 {
        // drain half the queue into the parked pool
        let mut parked = Vec::with_capacity(32);
        for _ in 0..32 {
            parked.push(heap.extract_min().unwrap());
        }
        assert_eq!(heap.len(), 32);
        assert_eq!(heap.allocated(), 64);

        // rekey the parked nodes while detached, then requeue them
        for handle in parked {
            heap.update_key(&handle, lcg(&mut state) % 1000).unwrap();
            heap.insert(&handle).unwrap();
        }
        assert_eq!(heap.len(), 64);
        assert!(heap.verify_internal_structure(), "round {}", round);
    }

    // all 64 starting handles are still alive and queued
    for handle in &handles {
        assert!(heap.contains(handle));
    }
}

#[test]
fn mixed_operation_gauntlet() {
    let mut state = 0xdead_beef_u64;
    let mut heap: LinkedBinaryHeap<u64, u64> = LinkedBinaryHeap::new();
    let mut queued: Vec<(LinkedBinaryHandle, u64)> = Vec::new();

    for step in 0..2000 {
        match lcg(&mut state) % 8 {
            0..=2 => {
                let key = lcg(&mut state) % 100_000;
                queued.push((heap.push_with_handle(key, step), key));
            }
            3 | 4 => {
                if let Some((key, _)) = heap.pop() {
                    let expected = queued.iter().map(|&(_, k)| k).min().unwrap();
                    assert_eq!(key, expected, "step {}", step);
                    let position = queued.iter().position(|&(_, k)| k == key).unwrap();
                    queued.swap_remove(position);
                }
            }
            5 => {
                if !queued.is_empty() {
                    let pick = lcg(&mut state) as usize % queued.len();
                    let (handle, key) = queued[pick];
                    let lowered = key / 2;
                    heap.decrease_key(&handle, lowered).unwrap();
                    queued[pick].1 = lowered;
                }
            }
            6 => {
                if !queued.is_empty() {
                    let pick = lcg(&mut state) as usize % queued.len();
                    let (handle, _) = queued[pick];
                    let rekeyed = lcg(&mut state) % 100_000;
                    heap.update_key(&handle, rekeyed).unwrap();
                    queued[pick].1 = rekeyed;
                }
            }
            _ => {
                if let Some(handle) = heap.extract_min() {
                    let position = queued.iter().position(|&(h, _)| h == handle).unwrap();
                    let (_, key) = queued.swap_remove(position);
                    assert_eq!(heap.priority(&handle), Some(&key));
                    assert_eq!(heap.release(handle).map(|(k, _)| k), Ok(key));
                }
            }
        }
        assert_eq!(heap.len(), queued.len(), "step {}", step);
        if step % 32 == 0 {
            assert!(heap.verify_internal_structure(), "step {}", step);
        }
    }

    assert!(heap.verify_internal_structure());
    let mut previous = 0;
    while let Some((key, _)) = heap.pop() {
        assert!(key >= previous);
        previous = key;
    }
    assert_eq!(heap.allocated(), 0);
}

/// Dijkstra over a small fixed topology with hand-checked distances.
///
/// Every vertex gets an arena node up front; reachable vertices queue on
/// first relaxation and lower their keys in place afterwards, which is
/// the access pattern this heap exists for.
#[test]
fn edge_relaxation_settles_shortest_paths() {
    let adjacency: &[&[(usize, u32)]] = &[
        &[(1, 7), (2, 9), (5, 14)],
        &[(0, 7), (2, 10), (3, 15)],
        &[(0, 9), (1, 10), (3, 11), (5, 2)],
        &[(1, 15), (2, 11), (4, 6)],
        &[(3, 6), (5, 9)],
        &[(0, 14), (2, 2), (4, 9)],
    ];

    let mut heap: LinkedBinaryHeap<usize, u32> = LinkedBinaryHeap::new();
    let mut dist = [u32::MAX; 6];
    let handles: Vec<LinkedBinaryHandle> = (0..6)
        .map(|vertex| heap.alloc(u32::MAX, vertex))
        .collect();

    dist[0] = 0;
    heap.decrease_key(&handles[0], 0).unwrap();
    heap.insert(&handles[0]).unwrap();

    let mut settled = Vec::new();
    while let Some(min) = heap.extract_min() {
        let vertex = *heap.item(&min).unwrap();
        let cost = *heap.priority(&min).unwrap();
        // with decrease-key the queued priority always equals the
        // tentative distance, so it is final at extraction time
        assert_eq!(cost, dist[vertex]);
        settled.push(vertex);

        for &(next, weight) in adjacency[vertex] {
            let relaxed = cost + weight;
            if relaxed < dist[next] {
                let first_visit = dist[next] == u32::MAX;
                dist[next] = relaxed;
                heap.decrease_key(&handles[next], relaxed).unwrap();
                if first_visit {
                    heap.insert(&handles[next]).unwrap();
                }
            }
        }
        assert!(heap.verify_internal_structure());
    }

    assert_eq!(dist, [0, 7, 9, 20, 20, 11]);
    let mut order = settled.clone();
    order.sort_unstable();
    assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(&settled[..4], &[0, 1, 2, 5]);

    // all nodes are parked now; release reclaims storage and leaves the
    // handles stale
    let source = handles[0];
    assert_eq!(heap.release(source), Ok((0, 0)));
    for handle in handles.into_iter().skip(1) {
        assert!(heap.release(handle).is_ok());
    }
    assert_eq!(heap.allocated(), 0);
    assert_eq!(heap.release(source), Err(HeapError::InvalidHandle));
}
