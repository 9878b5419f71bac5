use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lfucache::LfuCache;

fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_hit", |b| {
        let cache = LfuCache::new();
        let keys: Vec<String> = (0..1_000).map(|i| format!("key_{}", i)).collect();
        for key in &keys {
            cache.set(key.clone(), vec![b'x'; 64]);
        }

        let mut counter = 0;
        b.iter(|| {
            black_box(cache.get(&keys[counter % keys.len()]));
            counter += 1;
        });
    });

    group.bench_function("get_miss", |b| {
        let cache: LfuCache<Vec<u8>> = LfuCache::new();
        b.iter(|| black_box(cache.get("missing")));
    });

    group.finish();
}

fn bench_bounded_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded_set");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    for &(upper, lower) in &[(1_000usize, 900usize), (1_000, 500), (10_000, 5_000)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_{}", upper, lower)),
            &(upper, lower),
            |b, &(upper, lower)| {
                let cache = LfuCache::with_watermarks(upper, lower);
                let mut counter = 0u64;
                b.iter(|| {
                    cache.set(format!("key_{}", counter), counter);
                    if counter.is_multiple_of(4) {
                        black_box(cache.get(&format!("key_{}", counter / 2)));
                    }
                    counter += 1;
                });
            },
        );
    }

    group.finish();
}

fn bench_evict(c: &mut Criterion) {
    let mut group = c.benchmark_group("evict");
    group.sample_size(20);

    for &population in &[1_000usize, 10_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(population),
            &population,
            |b, &population| {
                b.iter_batched(
                    || {
                        let cache = LfuCache::new();
                        for i in 0..population {
                            cache.set(format!("key_{}", i), i);
                            if i % 3 == 0 {
                                cache.get(&format!("key_{}", i));
                            }
                        }
                        cache
                    },
                    |cache| black_box(cache.evict(population / 2)),
                    criterion::BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_get_hit, bench_bounded_set, bench_evict);
criterion_main!(benches);
