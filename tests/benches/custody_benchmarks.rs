//! # Custody Benchmarks
//!
//! | Operation | Expectation |
//! |-----------|-------------|
//! | `custody_columns` | One SHA-256 per candidate subnet, well under 10µs for full custody |
//! | Key pair node ID | Dominated by scalar multiplication |
//! | Search, 1 subnet | ~32 candidates |
//! | Search, 2 subnets | ~992 candidates |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use das_custody::{
    custody_columns, find_equivalent_node_id, par_find_equivalent_node_id, CustodyConfig, NodeId,
    RandomNodeIdSource, SearchControl, Secp256k1NodeIdSource,
};
use rand::RngCore;
use shared_crypto::Secp256k1KeyPair;
use std::time::Duration;

fn random_node_id() -> NodeId {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    NodeId::new(bytes)
}

fn bench_custody_columns(c: &mut Criterion) {
    let mut group = c.benchmark_group("custody-columns");
    let config = CustodyConfig::default();
    let node_id = random_node_id();

    for custody in [1u64, 4, 8, 16, 32] {
        group.throughput(Throughput::Elements(custody));
        group.bench_with_input(BenchmarkId::new("assign", custody), &custody, |b, &custody| {
            b.iter(|| black_box(custody_columns(&config, black_box(&node_id), custody)))
        });
    }

    group.finish();
}

fn bench_node_id_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("node-id");

    group.bench_function("keypair_generate", |b| {
        b.iter(|| black_box(Secp256k1KeyPair::generate().node_id()))
    });

    let pair = Secp256k1KeyPair::generate();
    group.bench_function("keccak_public_key", |b| {
        b.iter(|| black_box(pair.public_key().to_node_id()))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("preimage-search");
    group.measurement_time(Duration::from_secs(10));
    let config = CustodyConfig::default();

    for custody in [1u64, 2] {
        group.bench_with_input(BenchmarkId::new("seeded", custody), &custody, |b, &custody| {
            let mut seed = 0u64;
            b.iter(|| {
                seed += 1;
                let mut candidates = RandomNodeIdSource::seeded(seed);
                black_box(find_equivalent_node_id(
                    &config,
                    &NodeId::ZERO,
                    custody,
                    &mut candidates,
                    &SearchControl::unbounded(),
                ))
            })
        });
    }

    group.bench_function("keypair/1", |b| {
        let source = random_node_id();
        b.iter(|| {
            let mut candidates = Secp256k1NodeIdSource::new();
            black_box(find_equivalent_node_id(
                &config,
                &source,
                1,
                &mut candidates,
                &SearchControl::unbounded(),
            ))
        })
    });

    for workers in [2usize, 4] {
        group.bench_with_input(BenchmarkId::new("parallel/2", workers), &workers, |b, &workers| {
            let mut seed = 0u64;
            b.iter(|| {
                seed += 1;
                let candidates = RandomNodeIdSource::seeded(seed);
                black_box(par_find_equivalent_node_id(
                    &config,
                    &NodeId::ZERO,
                    2,
                    &candidates,
                    workers,
                    &SearchControl::unbounded(),
                ))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_custody_columns, bench_node_id_derivation, bench_search);

criterion_main!(benches);
