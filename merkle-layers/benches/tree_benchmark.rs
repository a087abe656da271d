#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion};
use merkle_layers::{Blake3Hasher, HashAlgorithm, Hasher, MerkleTree};

fn leaves(count: u32) -> Vec<String> {
    (0..count)
        .map(|i| Blake3Hasher.hash_leaf(&i.to_le_bytes()))
        .collect()
}

fn bench(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("tree build");
        for size in [1_000u32, 10_000, 100_000] {
            let input = leaves(size);
            group.bench_with_input(BenchmarkId::new("blake3", size), &input, |b, input| {
                b.iter(|| MerkleTree::build(Blake3Hasher, input.iter().cloned()));
            });
            group.bench_with_input(BenchmarkId::new("keccak256", size), &input, |b, input| {
                b.iter(|| MerkleTree::build(HashAlgorithm::Keccak256, input.iter().cloned()));
            });
        }
    }

    c.bench_function("tree proof leaf layer", |b| {
        let input = leaves(10_000);
        let tree = MerkleTree::build(Blake3Hasher, input.clone());
        let mut i = 0usize;
        b.iter(|| {
            i = (i + 7919) % input.len();
            assert!(tree.proof(&input[i], 0));
        });
    });

    c.bench_function("tree proof missing digest", |b| {
        let tree = MerkleTree::build(Blake3Hasher, leaves(10_000));
        let stranger = Blake3Hasher.hash_leaf(b"stranger");
        b.iter(|| tree.proof(&stranger, 0));
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench
);
criterion_main!(benches);
