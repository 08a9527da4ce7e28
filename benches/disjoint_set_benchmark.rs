use criterion::{black_box, criterion_group, criterion_main, Criterion};
use heapgraph::DisjointSet;
use std::cell::RefCell;

// Index-only union-find using RefCell, as a lower bound for the hashed version.
struct IndexDisjointSet {
    parent: Vec<RefCell<usize>>,
    rank: Vec<u8>,
}

impl IndexDisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).map(RefCell::new).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&self, id: usize) -> usize {
        let mut root = id;
        loop {
            let parent = *self.parent[root].borrow();
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut curr = id;
        while curr != root {
            let mut parent_ref = self.parent[curr].borrow_mut();
            let parent = *parent_ref;
            *parent_ref = root;
            curr = parent;
        }

        root
    }

    fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => *self.parent[root_a].borrow_mut() = root_b,
            std::cmp::Ordering::Greater => *self.parent[root_b].borrow_mut() = root_a,
            std::cmp::Ordering::Equal => {
                *self.parent[root_b].borrow_mut() = root_a;
                self.rank[root_a] += 1;
            }
        }
        true
    }
}

fn bench_disjoint_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("Disjoint Set");

    const N: usize = 10_000;
    const OPS: usize = 100_000;

    group.bench_function("DisjointSet", |b| {
        b.iter(|| {
            let mut ds: DisjointSet<usize> = (0..N).collect();
            for i in 0..OPS {
                let a = (i * 3) % N;
                let b = (i * 7) % N;
                black_box(ds.union(&a, &b).unwrap());
                black_box(ds.find(&a).unwrap());
            }
        })
    });

    group.bench_function("Index RefCell", |b| {
        b.iter(|| {
            let mut ds = IndexDisjointSet::new(N);
            for i in 0..OPS {
                let a = (i * 3) % N;
                let b = (i * 7) % N;
                black_box(ds.union(a, b));
                black_box(ds.find(a));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_disjoint_set);
criterion_main!(benches);
