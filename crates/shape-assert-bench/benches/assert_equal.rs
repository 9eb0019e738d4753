//! Comparison throughput over wide, deep and cyclic graphs.
#![allow(clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use shape_assert::assert_equal_as;
use shape_assert_bench::{
    RingNode, SizeTier, Supplier, generate_deep, generate_ring, generate_wide, suppliers_to_json,
};

const TIERS: [(&str, SizeTier); 3] = [
    ("S", SizeTier::Small),
    ("M", SizeTier::Medium),
    ("L", SizeTier::Large),
];

fn bench_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide");

    for (name, tier) in TIERS {
        let config = tier.config(42);
        let actual = generate_wide(&config);
        let expected = generate_wide(&config);
        let json = suppliers_to_json(&expected);

        group.throughput(Throughput::Elements(actual.len() as u64));

        group.bench_function(BenchmarkId::new("records", name), |b| {
            b.iter(|| {
                assert_equal_as::<Vec<Supplier>>(&actual, &expected).expect("equal fixtures");
            });
        });

        group.bench_function(BenchmarkId::new("record_vs_json", name), |b| {
            b.iter(|| {
                assert_equal_as::<Vec<Supplier>>(&actual, &json).expect("equal fixtures");
            });
        });
    }

    group.finish();
}

fn bench_deep(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep");

    for (name, tier) in TIERS {
        let config = tier.config(7);
        let actual = generate_deep(&config);
        let expected = generate_deep(&config);

        group.throughput(Throughput::Elements(config.depth as u64));

        group.bench_function(BenchmarkId::new("chain", name), |b| {
            b.iter(|| {
                assert_equal_as::<Supplier>(&actual, &expected).expect("equal fixtures");
            });
        });
    }

    group.finish();
}

fn bench_cyclic(c: &mut Criterion) {
    let mut group = c.benchmark_group("cyclic");

    for (name, tier) in TIERS {
        let config = tier.config(3);
        let actual = generate_ring(&config);
        let expected = generate_ring(&config);

        group.throughput(Throughput::Elements(config.ring_len as u64));

        group.bench_function(BenchmarkId::new("ring", name), |b| {
            b.iter(|| {
                assert_equal_as::<RingNode>(&actual, &expected).expect("equal fixtures");
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_wide, bench_deep, bench_cyclic);
criterion_main!(benches);
