//! Microbenchmarks for the core heap operations under scrambled keys.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use linkstate_heap::LinkedBinaryHeap;
use std::hint::black_box;

/// Knuth-style multiplicative scramble; cheap and reproducible.
fn scrambled_keys(n: u32) -> Vec<u32> {
    (0..n).map(|i| i.wrapping_mul(2_654_435_761)).collect()
}

fn loaded_heap(keys: &[u32]) -> LinkedBinaryHeap<u32, u32> {
    let mut heap = LinkedBinaryHeap::new();
    for &key in keys {
        heap.push_with_handle(key, key);
    }
    heap
}

fn bench_push(c: &mut Criterion) {
    let keys = scrambled_keys(1000);
    c.bench_function("push_1000_scrambled", |b| {
        b.iter_batched(
            LinkedBinaryHeap::<u32, u32>::new,
            |mut heap| {
                for &key in &keys {
                    heap.push_with_handle(key, key);
                }
                black_box(heap)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_pop(c: &mut Criterion) {
    let keys = scrambled_keys(1000);
    c.bench_function("pop_1000_scrambled", |b| {
        b.iter_batched(
            || loaded_heap(&keys),
            |mut heap| {
                while let Some(entry) = heap.pop() {
                    black_box(entry);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_decrease_key(c: &mut Criterion) {
    let keys = scrambled_keys(1000);
    c.bench_function("decrease_key_1000", |b| {
        b.iter_batched(
            || {
                let mut heap = LinkedBinaryHeap::new();
                let handles: Vec<_> = keys
                    .iter()
                    .enumerate()
                    .map(|(i, &key)| {
                        heap.push_with_handle(100_000 + key % 50_000, i as u32)
                    })
                    .collect();
                (heap, handles)
            },
            |(mut heap, handles)| {
                // every decrease lands below the whole initial range and
                // climbs toward the root
                for (i, handle) in handles.iter().enumerate() {
                    heap.decrease_key(handle, i as u32).unwrap();
                }
                black_box(heap)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_mixed_churn(c: &mut Criterion) {
    let keys = scrambled_keys(512);
    let traffic = scrambled_keys(1000);
    c.bench_function("mixed_churn_1000", |b| {
        b.iter_batched(
            || loaded_heap(&keys),
            |mut heap| {
                for (i, &key) in traffic.iter().enumerate() {
                    if i % 2 == 0 {
                        heap.push_with_handle(key, key);
                    } else {
                        black_box(heap.pop());
                    }
                }
                black_box(heap)
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_push,
    bench_pop,
    bench_decrease_key,
    bench_mixed_churn
);
criterion_main!(benches);
