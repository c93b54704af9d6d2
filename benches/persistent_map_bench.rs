//! PersistentMap against `BTreeMap` for building, lookup and re-keying.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use effectual::persistent::PersistentMap;
use std::collections::BTreeMap;
use std::hint::black_box;

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in [100_u32, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("PersistentMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = PersistentMap::new();
                for key in 0..size {
                    map = map.insert(black_box(key), key);
                }
                black_box(map)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = BTreeMap::new();
                for key in 0..size {
                    map.insert(black_box(key), key);
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [1_000_u32, 10_000] {
        let map: PersistentMap<u32, u32> = (0..size).map(|key| (key, key)).collect();
        group.bench_with_input(BenchmarkId::new("PersistentMap", size), &map, |bencher, map| {
            bencher.iter(|| {
                for key in (0..size).step_by(7) {
                    black_box(map.get(&key));
                }
            });
        });
    }

    group.finish();
}

fn benchmark_map_keys(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_keys");
    let map: PersistentMap<u32, u32> = (0..5_000).map(|key| (key, key)).collect();

    group.bench_function("last_wins", |bencher| {
        bencher.iter(|| black_box(map.map_keys(|key| key / 3)));
    });
    group.bench_function("collect", |bencher| {
        bencher.iter(|| black_box(map.map_keys_collect(|key| key / 3)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_insert, benchmark_get, benchmark_map_keys);

criterion_main!(benches);
