use alloy_primitives::{Address, B256, U256};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use whitelist_registry::AccessRegistry;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const ADMIN: Address = Address::repeat_byte(0xAA);

fn make_address(i: u64) -> Address {
    Address::from_word(B256::from(U256::from(i + 1)))
}

fn make_batch(offset: u64, count: u64) -> Vec<Address> {
    (offset..offset + count).map(make_address).collect()
}

// ---------------------------------------------------------------------------
// Benchmark: batch whitelisting
// ---------------------------------------------------------------------------

fn bench_add_dexs(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_dexs");
    for count in [10u64, 100, 1_000] {
        let batch = make_batch(0, count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &batch, |b, batch| {
            b.iter(|| {
                let mut r = AccessRegistry::new(&[], ADMIN).unwrap();
                r.add_dexs(&ADMIN, black_box(batch)).unwrap();
                r
            });
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: blacklist with eviction
// ---------------------------------------------------------------------------

fn bench_blacklist_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_to_blacklist");
    for count in [10u64, 100, 1_000] {
        let batch = make_batch(0, count);
        let mut seeded = AccessRegistry::new(&[], ADMIN).unwrap();
        seeded.add_dexs(&ADMIN, &batch).unwrap();
        seeded.add_cross_chains(&ADMIN, &batch).unwrap();
        seeded.add_any_routers(&ADMIN, &batch).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(count), &batch, |b, batch| {
            b.iter(|| {
                let mut r = seeded.clone();
                r.add_to_blacklist(&ADMIN, black_box(batch)).unwrap();
                r
            });
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: membership lookups
// ---------------------------------------------------------------------------

fn bench_membership(c: &mut Criterion) {
    let mut r = AccessRegistry::new(&[], ADMIN).unwrap();
    r.add_dexs(&ADMIN, &make_batch(0, 10_000)).unwrap();
    let hit = make_address(5_000);
    let miss = make_address(50_000);

    c.bench_function("is_whitelisted_dex/hit", |b| {
        b.iter(|| r.is_whitelisted_dex(black_box(&hit)))
    });
    c.bench_function("is_whitelisted_dex/miss", |b| {
        b.iter(|| r.is_whitelisted_dex(black_box(&miss)))
    });
}

criterion_group!(benches, bench_add_dexs, bench_blacklist_eviction, bench_membership);
criterion_main!(benches);
