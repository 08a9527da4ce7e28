use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use heapgraph::IndexedBinaryHeap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

fn keys(n: usize) -> Vec<u64> {
    // Deterministic scatter so no run starts from sorted input.
    (0..n as u64).map(|i| (i * 2_654_435_761) % 1_000_003).collect()
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_heap_push_pop");

    for &n in &[1_000usize, 10_000] {
        let input = keys(n);

        group.bench_with_input(BenchmarkId::new("std_binary_heap", n), &input, |b, input| {
            b.iter(|| {
                let mut heap = BinaryHeap::with_capacity(input.len());
                for (i, &k) in input.iter().enumerate() {
                    heap.push(Reverse((k, i)));
                }
                while let Some(x) = heap.pop() {
                    black_box(x);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("indexed_binary_heap", n), &input, |b, input| {
            b.iter(|| {
                let mut heap = IndexedBinaryHeap::with_capacity(input.len());
                for (i, &k) in input.iter().enumerate() {
                    heap.push(i, k).unwrap();
                }
                while let Ok(x) = heap.pop() {
                    black_box(x);
                }
            });
        });
    }

    group.finish();
}

fn bench_decrease_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_heap_decrease_key");
    let n = 10_000usize;
    let input = keys(n);

    // Lazy deletion: stale entries stay queued and are skipped on pop.
    group.bench_function("std_binary_heap_lazy", |b| {
        b.iter(|| {
            let mut best = input.clone();
            let mut heap: BinaryHeap<Reverse<(u64, usize)>> =
                input.iter().enumerate().map(|(i, &k)| Reverse((k, i))).collect();
            for i in (0..n).step_by(3) {
                best[i] /= 2;
                heap.push(Reverse((best[i], i)));
            }
            while let Some(Reverse((k, i))) = heap.pop() {
                if k == best[i] {
                    black_box(i);
                }
            }
        });
    });

    group.bench_function("indexed_binary_heap", |b| {
        b.iter(|| {
            let items = input.iter().copied().enumerate().collect();
            let mut heap = IndexedBinaryHeap::from_vec(items).unwrap();
            for i in (0..n).step_by(3) {
                heap.decrease_key(&i, input[i] / 2).unwrap();
            }
            while let Ok((i, _)) = heap.pop() {
                black_box(i);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_decrease_key);
criterion_main!(benches);
